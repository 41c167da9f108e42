use crate::{AnswerOutcome, AppState, Effect, Message, Msg, FALLBACK_ANSWER};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::WidgetLoaded => {
            let open = state.is_open();
            let mut effects = vec![Effect::SetPanelVisible(open)];
            if open {
                effects.push(Effect::FocusInput);
            }
            effects
        }
        Msg::QuestionSubmitted(raw) => {
            let question = raw.trim();
            // At most one request may be outstanding.
            if question.is_empty() || state.in_flight().is_some() {
                return (state, Vec::new());
            }

            let question = question.to_owned();
            let user_view = state.push_message(Message::user(question.clone()));
            let request_id = state.begin_request();
            vec![
                Effect::RenderMessage(user_view),
                Effect::ClearInput,
                Effect::SetProcessing(true),
                Effect::AskQuestion {
                    request_id,
                    question,
                },
            ]
        }
        Msg::AnswerReceived {
            request_id,
            outcome,
        } => {
            if state.in_flight() != Some(request_id) {
                return (state, Vec::new());
            }

            let reply = match outcome {
                AnswerOutcome::Answered { answer, sources } => Message::bot(answer, sources),
                AnswerOutcome::Failed => Message::bot(FALLBACK_ANSWER, Vec::new()),
            };
            let bot_view = state.push_message(reply);
            state.finish_request();
            vec![Effect::RenderMessage(bot_view), Effect::SetProcessing(false)]
        }
        Msg::VisibilityToggled(open) => {
            let changed = state.is_open() != open;
            state.set_open(open);
            let mut effects = Vec::with_capacity(2);
            if changed {
                effects.push(Effect::SetPanelVisible(open));
            }
            if open {
                effects.push(Effect::FocusInput);
            }
            effects
        }
    };

    (state, effects)
}
