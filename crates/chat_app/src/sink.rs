use std::sync::Arc;

use chat_core::{Role, SourceLink};

/// A block appended to the visible transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Message { role: Role, text: String },
    /// Secondary block following a bot message that cites sources.
    SourceList(Vec<SourceLink>),
}

/// Presentation surface driven by a [`crate::ChatSession`].
///
/// Calls arrive in transcript order from a single task; implementations only
/// need interior mutability, not ordering guarantees of their own.
pub trait RenderSink: Send + Sync {
    fn append(&self, node: RenderNode);
    fn scroll_to_latest(&self);
    fn set_input_enabled(&self, enabled: bool);
    fn set_busy_indicator_visible(&self, visible: bool);
    fn focus_input(&self);
    fn clear_input(&self);
    /// Shows the panel (hiding its launcher) or the reverse.
    fn set_panel_visible(&self, visible: bool);
}

impl<T: RenderSink + ?Sized> RenderSink for Arc<T> {
    fn append(&self, node: RenderNode) {
        (**self).append(node);
    }

    fn scroll_to_latest(&self) {
        (**self).scroll_to_latest();
    }

    fn set_input_enabled(&self, enabled: bool) {
        (**self).set_input_enabled(enabled);
    }

    fn set_busy_indicator_visible(&self, visible: bool) {
        (**self).set_busy_indicator_visible(visible);
    }

    fn focus_input(&self) {
        (**self).focus_input();
    }

    fn clear_input(&self) {
        (**self).clear_input();
    }

    fn set_panel_visible(&self, visible: bool) {
        (**self).set_panel_visible(visible);
    }
}
