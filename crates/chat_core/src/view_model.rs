use crate::sources::{page_title, valid_sources};
use crate::{Message, Role, SessionState};

/// Label rendered above a bot message's source links.
pub const SOURCES_HEADING: &str = "Sources:";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub messages: Vec<MessageView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub role: Role,
    pub text: String,
    /// Empty for user messages and for bot messages without valid sources.
    pub source_links: Vec<SourceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLink {
    /// 1-based position in the source block.
    pub number: usize,
    pub url: String,
    pub title: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        let source_links = match message.role() {
            Role::User => Vec::new(),
            Role::Bot => valid_sources(message.sources())
                .enumerate()
                .map(|(index, url)| SourceLink {
                    number: index + 1,
                    url: url.to_string(),
                    title: page_title(url),
                })
                .collect(),
        };
        Self {
            role: message.role(),
            text: message.text().to_string(),
            source_links,
        }
    }
}
