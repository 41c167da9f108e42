use crate::{MessageView, RequestId};

/// Side effects requested by [`crate::update`], executed by the host in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a message (and its source block, if any) and scroll to it.
    RenderMessage(MessageView),
    ClearInput,
    /// Toggle input enablement and the busy indicator; leaving the busy state
    /// also returns focus to the input.
    SetProcessing(bool),
    SetPanelVisible(bool),
    FocusInput,
    AskQuestion {
        request_id: RequestId,
        question: String,
    },
}
