//! Chat widget host layer: session driver, rendering sink and configuration.
pub mod config;
pub mod logging;
mod render;
mod session;
mod sink;

pub use session::ChatSession;
pub use sink::{RenderNode, RenderSink};
