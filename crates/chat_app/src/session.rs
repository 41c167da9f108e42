use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chat_core::{update, AnswerOutcome, AppState, AppViewModel, Effect, Msg, RequestId};
use chat_engine::{AnswerClient, AskError, ReqwestAnswerClient};
use chat_logging::{chat_debug, chat_info, chat_warn};

use crate::config::WidgetConfig;
use crate::render;
use crate::RenderSink;

/// One widget instance: visibility, in-flight flag and transcript.
///
/// Methods take `&self` so the host can call them from overlapping event
/// handlers; the state lock is never held across the network await.
pub struct ChatSession {
    state: Mutex<AppState>,
    client: Box<dyn AnswerClient>,
    sink: Box<dyn RenderSink>,
}

impl ChatSession {
    /// Builds a session talking to the configured answer service.
    pub fn new(config: &WidgetConfig, sink: impl RenderSink + 'static) -> Result<Self, AskError> {
        let client = ReqwestAnswerClient::new(config.client_settings())?;
        chat_info!("Chat session using endpoint {}", client.endpoint());
        Ok(Self::with_client(config.start_open, client, sink))
    }

    /// Builds a session over any answer client; applies the initial visibility immediately.
    pub fn with_client(
        start_open: bool,
        client: impl AnswerClient + 'static,
        sink: impl RenderSink + 'static,
    ) -> Self {
        let session = Self {
            state: Mutex::new(AppState::new(start_open)),
            client: Box::new(client),
            sink: Box::new(sink),
        };
        let effects = session.dispatch(Msg::WidgetLoaded);
        session.apply_presentation(&effects);
        session
    }

    pub fn view(&self) -> AppViewModel {
        self.lock_state().view()
    }

    pub fn toggle_visibility(&self, open: bool) {
        let effects = self.dispatch(Msg::VisibilityToggled(open));
        self.apply_presentation(&effects);
    }

    /// Submits one question and waits for its answer or fallback.
    ///
    /// Blank input, or input arriving while another question is in flight,
    /// is ignored. Dropping the returned future before the answer arrives
    /// settles the request with the fallback message.
    pub async fn submit_question(&self, raw_input: &str) {
        let mut pending: VecDeque<Effect> = self
            .dispatch(Msg::QuestionSubmitted(raw_input.to_string()))
            .into();
        if pending.is_empty() {
            chat_debug!("Submission ignored (blank input or request in flight)");
        }

        while let Some(effect) = pending.pop_front() {
            match effect {
                Effect::AskQuestion {
                    request_id,
                    question,
                } => {
                    let mut in_flight = InFlightGuard::new(self, request_id);
                    let outcome = self.ask(request_id, &question).await;
                    in_flight.settle();
                    pending.extend(self.dispatch(Msg::AnswerReceived {
                        request_id,
                        outcome,
                    }));
                }
                other => render::apply(self.sink.as_ref(), &other),
            }
        }
    }

    async fn ask(&self, request_id: RequestId, question: &str) -> AnswerOutcome {
        chat_info!("Request {} dispatched", request_id);
        match self.client.ask(question).await {
            Ok(payload) => {
                chat_info!("Request {} answered", request_id);
                AnswerOutcome::Answered {
                    answer: payload.answer,
                    sources: payload.sources,
                }
            }
            Err(err) => {
                chat_warn!("Request {} failed: {}", request_id, err);
                AnswerOutcome::Failed
            }
        }
    }

    fn dispatch(&self, msg: Msg) -> Vec<Effect> {
        let mut guard = self.lock_state();
        let state = std::mem::take(&mut *guard);
        let (state, effects) = update(state, msg);
        *guard = state;
        effects
    }

    fn apply_presentation(&self, effects: &[Effect]) {
        for effect in effects {
            render::apply(self.sink.as_ref(), effect);
        }
    }

    // Recover the state from a poisoned lock instead of panicking again.
    fn lock_state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Settles an in-flight request as failed if its future is dropped first.
struct InFlightGuard<'a> {
    session: &'a ChatSession,
    request_id: RequestId,
    settled: bool,
}

impl<'a> InFlightGuard<'a> {
    fn new(session: &'a ChatSession, request_id: RequestId) -> Self {
        Self {
            session,
            request_id,
            settled: false,
        }
    }

    fn settle(&mut self) {
        self.settled = true;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        chat_warn!("Request {} abandoned before completion", self.request_id);
        let effects = self.session.dispatch(Msg::AnswerReceived {
            request_id: self.request_id,
            outcome: AnswerOutcome::Failed,
        });
        self.session.apply_presentation(&effects);
    }
}
