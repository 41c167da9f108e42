//! Chat core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod sources;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{AnswerOutcome, Msg};
pub use sources::{is_valid_source, page_title, valid_sources, SOURCE_SENTINEL};
pub use state::{AppState, Message, RequestId, Role, SessionState, FALLBACK_ANSWER};
pub use update::update;
pub use view_model::{AppViewModel, MessageView, SourceLink, SOURCES_HEADING};
