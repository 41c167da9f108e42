use std::sync::Once;

use chat_core::{
    update, AnswerOutcome, AppState, Effect, MessageView, Msg, RequestId, Role, SourceLink,
    FALLBACK_ANSWER,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(chat_logging::initialize_for_tests);
}

fn submit(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    update(state, Msg::QuestionSubmitted(input.to_string()))
}

fn asked_request_id(effects: &[Effect]) -> RequestId {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::AskQuestion { request_id, .. } => Some(*request_id),
            _ => None,
        })
        .expect("ask effect")
}

fn answered(answer: &str, sources: &[&str]) -> AnswerOutcome {
    AnswerOutcome::Answered {
        answer: answer.to_string(),
        sources: sources.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn blank_questions_are_ignored() {
    init_logging();
    for input in ["", "   ", "\n\t  \n"] {
        let state = AppState::new(true);
        let (next, effects) = submit(state.clone(), input);
        assert_eq!(next, state);
        assert!(effects.is_empty());
    }
}

#[test]
fn submission_trims_and_dispatches_in_order() {
    init_logging();
    let (state, effects) = submit(AppState::new(true), "  What is X?  ");

    assert_eq!(
        effects,
        vec![
            Effect::RenderMessage(MessageView {
                role: Role::User,
                text: "What is X?".to_string(),
                source_links: Vec::new(),
            }),
            Effect::ClearInput,
            Effect::SetProcessing(true),
            Effect::AskQuestion {
                request_id: 1,
                question: "What is X?".to_string(),
            },
        ]
    );
    assert!(state.session().is_processing);
    assert_eq!(state.transcript().len(), 1);
    assert_eq!(state.transcript()[0].text(), "What is X?");
}

#[test]
fn submissions_while_processing_are_ignored() {
    init_logging();
    let (state, _effects) = submit(AppState::new(true), "first");
    let (next, effects) = submit(state.clone(), "second");

    assert_eq!(next, state);
    assert!(effects.is_empty());
    assert_eq!(next.transcript().len(), 1);
}

#[test]
fn answer_appends_bot_message_and_releases_session() {
    init_logging();
    let (state, effects) = submit(AppState::new(true), "Q");
    let request_id = asked_request_id(&effects);

    let (state, effects) = update(
        state,
        Msg::AnswerReceived {
            request_id,
            outcome: answered("X", &["https://site/a-b.html", "N/A"]),
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::RenderMessage(MessageView {
                role: Role::Bot,
                text: "X".to_string(),
                source_links: vec![SourceLink {
                    number: 1,
                    url: "https://site/a-b.html".to_string(),
                    title: "a b".to_string(),
                }],
            }),
            Effect::SetProcessing(false),
        ]
    );
    assert!(!state.session().is_processing);
    let roles: Vec<_> = state.transcript().iter().map(|m| m.role()).collect();
    assert_eq!(roles, vec![Role::User, Role::Bot]);
    // Raw sources are kept as received; filtering is a display concern.
    assert_eq!(state.transcript()[1].sources().len(), 2);
}

#[test]
fn failure_appends_fallback_message() {
    init_logging();
    let (state, effects) = submit(AppState::new(true), "Q");
    let request_id = asked_request_id(&effects);

    let (state, effects) = update(
        state,
        Msg::AnswerReceived {
            request_id,
            outcome: AnswerOutcome::Failed,
        },
    );

    assert_eq!(
        effects,
        vec![
            Effect::RenderMessage(MessageView {
                role: Role::Bot,
                text: FALLBACK_ANSWER.to_string(),
                source_links: Vec::new(),
            }),
            Effect::SetProcessing(false),
        ]
    );
    assert!(!state.session().is_processing);

    // The session stays usable after a failure.
    let (state, effects) = submit(state, "again");
    assert_eq!(asked_request_id(&effects), request_id + 1);
    assert_eq!(state.transcript().len(), 3);
}

#[test]
fn stale_answers_are_ignored() {
    init_logging();
    let state = AppState::new(true);
    let (next, effects) = update(
        state.clone(),
        Msg::AnswerReceived {
            request_id: 42,
            outcome: answered("late", &[]),
        },
    );
    assert_eq!(next, state);
    assert!(effects.is_empty());

    let (state, effects) = submit(state, "Q");
    let request_id = asked_request_id(&effects);
    let (next, effects) = update(
        state.clone(),
        Msg::AnswerReceived {
            request_id: request_id + 1,
            outcome: answered("wrong", &[]),
        },
    );
    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn view_reflects_session_and_transcript() {
    init_logging();
    let (state, effects) = submit(AppState::new(false), "Q");
    let request_id = asked_request_id(&effects);
    let (state, _effects) = update(
        state,
        Msg::AnswerReceived {
            request_id,
            outcome: answered("A", &[]),
        },
    );

    let view = state.view();
    assert!(!view.session.is_open);
    assert!(!view.session.is_processing);
    let texts: Vec<_> = view.messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["Q", "A"]);
}
