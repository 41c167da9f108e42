#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Host finished mounting the widget; applies the configured visibility.
    WidgetLoaded,
    /// User submitted the raw contents of the question field.
    QuestionSubmitted(String),
    /// Answer service completed the request identified by `request_id`.
    AnswerReceived {
        request_id: crate::RequestId,
        outcome: AnswerOutcome,
    },
    /// User opened (`true`) or closed (`false`) the panel.
    VisibilityToggled(bool),
}

/// Result of one request, already stripped of transport detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Answered { answer: String, sources: Vec<String> },
    Failed,
}
