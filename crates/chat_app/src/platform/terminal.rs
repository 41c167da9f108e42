use std::io::{self, BufRead, Write};
use std::sync::{Mutex, PoisonError};

use chat_app::{ChatSession, RenderNode, RenderSink};
use chat_core::{Role, SOURCES_HEADING};
use chat_logging::{chat_info, chat_warn};

const PROMPT: &str = "> ";

enum Command<'a> {
    Open,
    Close,
    Quit,
    Help,
    Question(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        "/open" => Command::Open,
        "/close" => Command::Close,
        "/quit" | "/exit" => Command::Quit,
        "/help" => Command::Help,
        _ => Command::Question(line),
    }
}

/// Drives the session from line-based input until EOF or `/quit`.
pub fn run<W: Write + Send>(
    runtime: &tokio::runtime::Runtime,
    session: &ChatSession,
    input: impl BufRead,
    terminal: &TerminalSink<W>,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Open => session.toggle_visibility(true),
            Command::Close => session.toggle_visibility(false),
            Command::Quit => break,
            Command::Help => {
                terminal.notice(
                    "Commands: /open, /close, /quit. Anything else is sent as a question.",
                );
                terminal.focus_input();
            }
            Command::Question(text) => {
                let view = session.view();
                // Neither the question field nor the send action exist while
                // the panel is hidden or busy.
                if !view.session.is_open {
                    terminal.notice("Chat is closed. Type /open to show it.");
                    terminal.focus_input();
                    continue;
                }
                if view.session.is_processing {
                    continue;
                }
                runtime.block_on(session.submit_question(text));
            }
        }
    }
    chat_info!("Terminal input closed");
    Ok(())
}

/// Renders the widget as plain text on any writer.
pub struct TerminalSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn notice(&self, text: &str) {
        self.write(&format!("{text}\n"));
    }

    fn write(&self, text: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(err) = out.write_all(text.as_bytes()).and_then(|()| out.flush()) {
            chat_warn!("Terminal write failed: {}", err);
        }
    }
}

impl<W: Write + Send> RenderSink for TerminalSink<W> {
    fn append(&self, node: RenderNode) {
        let text = match node {
            RenderNode::Message { role, text } => {
                let speaker = match role {
                    Role::User => "You",
                    Role::Bot => "Bot",
                };
                format!("{speaker}: {text}\n")
            }
            RenderNode::SourceList(links) => {
                let mut block = format!("{SOURCES_HEADING}\n");
                for link in links {
                    block.push_str(&format!("  {}. {} <{}>\n", link.number, link.title, link.url));
                }
                block
            }
        };
        self.write(&text);
    }

    // Output already flows downwards.
    fn scroll_to_latest(&self) {}

    fn set_input_enabled(&self, _enabled: bool) {}

    fn set_busy_indicator_visible(&self, visible: bool) {
        if visible {
            self.write("(thinking...)\n");
        }
    }

    fn focus_input(&self) {
        self.write(PROMPT);
    }

    fn clear_input(&self) {}

    fn set_panel_visible(&self, visible: bool) {
        if visible {
            self.write("Chat opened. Type a question, /close to hide it, /quit to exit.\n");
        } else {
            self.write("Chat closed. Type /open to show it again.\n");
        }
    }
}
