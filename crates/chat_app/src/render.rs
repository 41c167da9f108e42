use chat_core::{Effect, MessageView};

use crate::{RenderNode, RenderSink};

/// Applies a presentation effect to the sink.
///
/// `AskQuestion` is not presentation and is left to the caller.
pub(crate) fn apply(sink: &dyn RenderSink, effect: &Effect) {
    match effect {
        Effect::RenderMessage(view) => render_message(sink, view),
        Effect::ClearInput => sink.clear_input(),
        Effect::SetProcessing(processing) => {
            sink.set_input_enabled(!processing);
            sink.set_busy_indicator_visible(*processing);
            if !processing {
                sink.focus_input();
            }
        }
        Effect::SetPanelVisible(visible) => sink.set_panel_visible(*visible),
        Effect::FocusInput => sink.focus_input(),
        Effect::AskQuestion { .. } => {}
    }
}

fn render_message(sink: &dyn RenderSink, view: &MessageView) {
    sink.append(RenderNode::Message {
        role: view.role,
        text: view.text.clone(),
    });
    if !view.source_links.is_empty() {
        sink.append(RenderNode::SourceList(view.source_links.clone()));
    }
    sink.scroll_to_latest();
}
