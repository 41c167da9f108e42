use crate::view_model::{AppViewModel, MessageView};

pub type RequestId = u64;

/// Text shown in place of an answer whenever a request fails for any reason.
pub const FALLBACK_ANSWER: &str =
    "Désolé, je n'ai pas pu traiter votre demande. Veuillez réessayer.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Bot,
}

/// One transcript entry. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    role: Role,
    sources: Vec<String>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role: Role::User,
            sources: Vec::new(),
        }
    }

    pub fn bot(text: impl Into<String>, sources: Vec<String>) -> Self {
        Self {
            text: text.into(),
            role: Role::Bot,
            sources,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub is_open: bool,
    pub is_processing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    is_open: bool,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    transcript: Vec<Message>,
}

impl AppState {
    /// Creates an idle session with an empty transcript and the given initial visibility.
    pub fn new(start_open: bool) -> Self {
        Self {
            is_open: start_open,
            ..Self::default()
        }
    }

    pub fn session(&self) -> SessionState {
        SessionState {
            is_open: self.is_open,
            is_processing: self.in_flight.is_some(),
        }
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            session: self.session(),
            messages: self.transcript.iter().map(MessageView::from).collect(),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.is_open
    }

    pub(crate) fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub(crate) fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        request_id
    }

    pub(crate) fn finish_request(&mut self) {
        self.in_flight = None;
    }

    /// Appends to the transcript and returns the rendered form of the new entry.
    pub(crate) fn push_message(&mut self, message: Message) -> MessageView {
        let view = MessageView::from(&message);
        self.transcript.push(message);
        view
    }
}
