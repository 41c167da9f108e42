#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use chat_app::{RenderNode, RenderSink};
use chat_core::{Role, SourceLink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Append(RenderNode),
    ScrollToLatest,
    SetInputEnabled(bool),
    SetBusyIndicatorVisible(bool),
    FocusInput,
    ClearInput,
    SetPanelVisible(bool),
}

#[derive(Clone, Default)]
pub struct RecordingSink {
    calls: Arc<Mutex<Vec<SinkCall>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<SinkCall> {
        self.calls.lock().unwrap().drain(..).collect()
    }

    fn record(&self, call: SinkCall) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RenderSink for RecordingSink {
    fn append(&self, node: RenderNode) {
        self.record(SinkCall::Append(node));
    }

    fn scroll_to_latest(&self) {
        self.record(SinkCall::ScrollToLatest);
    }

    fn set_input_enabled(&self, enabled: bool) {
        self.record(SinkCall::SetInputEnabled(enabled));
    }

    fn set_busy_indicator_visible(&self, visible: bool) {
        self.record(SinkCall::SetBusyIndicatorVisible(visible));
    }

    fn focus_input(&self) {
        self.record(SinkCall::FocusInput);
    }

    fn clear_input(&self) {
        self.record(SinkCall::ClearInput);
    }

    fn set_panel_visible(&self, visible: bool) {
        self.record(SinkCall::SetPanelVisible(visible));
    }
}

pub fn message(role: Role, text: &str) -> SinkCall {
    SinkCall::Append(RenderNode::Message {
        role,
        text: text.to_string(),
    })
}

pub fn sources(links: &[(&str, &str)]) -> SinkCall {
    SinkCall::Append(RenderNode::SourceList(
        links
            .iter()
            .enumerate()
            .map(|(index, (url, title))| SourceLink {
                number: index + 1,
                url: url.to_string(),
                title: title.to_string(),
            })
            .collect(),
    ))
}

/// Sink calls produced by one complete submit/answer cycle.
pub fn cycle(question: &str, reply: Vec<SinkCall>) -> Vec<SinkCall> {
    let mut calls = vec![
        message(Role::User, question),
        SinkCall::ScrollToLatest,
        SinkCall::ClearInput,
        SinkCall::SetInputEnabled(false),
        SinkCall::SetBusyIndicatorVisible(true),
    ];
    calls.extend(reply);
    calls.extend([
        SinkCall::ScrollToLatest,
        SinkCall::SetInputEnabled(true),
        SinkCall::SetBusyIndicatorVisible(false),
        SinkCall::FocusInput,
    ]);
    calls
}
