//! Terminal chat client - drives the chat panel against a running site
//!
//! Usage:
//!   cargo run --bin chat
//!
//! Commands:
//!   /status   show session uptime and last latency
//!   /cv       open the CV viewer (type `esc` to close it)
//!   /quit     disconnect
//!
//! Optional environment variables:
//! - SITE_URL (defaults to http://127.0.0.1:3000)
//! - CHAT_LOCALE (fr or en, defaults to fr)

use anyhow::Result;
use chrono::Utc;
use portfolio_site::components::chat::{ChatPanel, HttpChatTransport, PanelRunner, PanelTiming, Step};
use portfolio_site::components::{CvModal, ListenerId, ModalAction, ModalGuard, ModalHost};
use portfolio_site::config::ClientConfig;
use portfolio_site::i18n::{dictionary, Locale};
use portfolio_site::init_tracing;
use std::cell::{Cell, RefCell};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use uuid::Uuid;

/// Terminal stand-in for the browser document.
///
/// "Scroll lock" holds back transcript output while the CV viewer is open.
#[derive(Default)]
struct TerminalHost {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, &'static str)>>,
    scroll_locked: Cell<bool>,
}

impl ModalHost for TerminalHost {
    fn add_key_listener(&self, key: &'static str) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, key));
        id
    }

    fn remove_key_listener(&self, id: ListenerId) {
        self.listeners.borrow_mut().retain(|(l, _)| *l != id);
    }

    fn lock_scroll(&self) {
        self.scroll_locked.set(true);
    }

    fn unlock_scroll(&self) {
        self.scroll_locked.set(false);
    }
}

/// Prints the transcript incrementally, following the typewriter reveal.
#[derive(Default)]
struct TranscriptView {
    printed: usize,
    partial: usize,
}

impl TranscriptView {
    fn render(&mut self, panel: &ChatPanel, out: &mut impl Write) -> std::io::Result<()> {
        let messages = panel.messages();
        while let Some(message) = messages.get(self.printed) {
            if self.partial == 0 {
                write!(out, "{}", message.role.prefix())?;
            }
            let rest: String = message.content.chars().skip(self.partial).collect();
            write!(out, "{}", rest)?;
            self.partial = message.content.chars().count();

            if panel.typing_message_id() == Some(message.id) {
                break;
            }
            writeln!(out)?;
            self.printed += 1;
            self.partial = 0;
        }
        out.flush()
    }
}

fn key_name(input: &str) -> &str {
    match input {
        "esc" | "escape" => "Escape",
        other => other,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing()?;

    let config = ClientConfig::from_env();
    let locale = Locale::from_code_or_default(&config.locale);
    let dict = dictionary(locale)?;

    let panel = ChatPanel::new(locale, dict, PanelTiming::default());
    let transport = Arc::new(HttpChatTransport::new(&config.site_url));
    let session_id = Uuid::new_v4().simple().to_string();
    let mut runner = PanelRunner::start(panel, transport, Some(session_id));

    let host = TerminalHost::default();
    let mut modal: Option<ModalGuard<'_, TerminalHost>> = None;
    let mut view = TranscriptView::default();
    let mut stdout = std::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    println!("{} · {}", dict.text("chat.title"), config.site_url);

    loop {
        if !stdin_open && runner.outstanding() == 0 {
            break;
        }

        tokio::select! {
            step = runner.step(), if runner.outstanding() > 0 => {
                if let Some(Step::Navigate(path)) = step {
                    view.render(runner.panel(), &mut stdout)?;
                    println!("→ {}{}", config.site_url, path);
                    break;
                }
                if !host.scroll_locked.get() {
                    view.render(runner.panel(), &mut stdout)?;
                }
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    runner.disconnect();
                    continue;
                };
                let input = line.trim();

                if let Some(guard) = modal.as_ref() {
                    if guard.on_key(key_name(input)) == ModalAction::Close {
                        modal = None;
                        view.render(runner.panel(), &mut stdout)?;
                    }
                    continue;
                }

                match input {
                    "/quit" => runner.disconnect(),
                    "/status" => println!("{}", runner.panel().status_line(dict, Utc::now())),
                    "/cv" => {
                        modal = Some(CvModal::open(&host));
                        println!(
                            "{}: {}/cv.pdf  ({}: {}/cv.pdf?download=1)  [esc]",
                            dict.text("cv.title"),
                            config.site_url,
                            dict.text("cv.download"),
                            config.site_url,
                        );
                    }
                    _ => {
                        if !runner.submit(input) && !input.is_empty() {
                            println!("…");
                        }
                    }
                }
            }
        }
    }

    Ok(())
}
