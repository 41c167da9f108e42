//! Terminal front end hosting a [`chat_app::ChatSession`].
mod terminal;

pub use terminal::{run, TerminalSink};
