//! Chat panel state machine.
//!
//! The panel is pure: [`ChatPanel::handle`] takes an event and returns the
//! effects to perform (timers to arm, a chat request to send, a navigation).
//! Executing those effects is the job of [`super::PanelRunner`].

use crate::i18n::{Dictionary, Locale};
use chrono::{DateTime, Utc};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    System,
    Ai,
}

impl Role {
    /// Line prefix used by text renderings of the transcript.
    pub fn prefix(self) -> &'static str {
        match self {
            Role::User => "> ",
            Role::System => "# ",
            Role::Ai => "AI: ",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Role::User => "msg-user",
            Role::System => "msg-system",
            Role::Ai => "msg-ai",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn render_line(&self) -> String {
        format!("{}{}", self.role.prefix(), self.content)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Booting,
    Idle,
    AwaitingReply,
    TypingReply,
    Disconnecting,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    BootStep,
    TypeTick,
    DisconnectDone,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelEvent {
    Timer(Timer),
    Submit(String),
    Reply {
        result: Result<String, String>,
        latency: Duration,
    },
    Disconnect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Schedule { timer: Timer, after: Duration },
    SendChat { message: String },
    Navigate(String),
}

/// Fixed delays driving the panel animations.
#[derive(Debug, Clone, Copy)]
pub struct PanelTiming {
    pub boot_step: Duration,
    pub type_tick: Duration,
    pub disconnect: Duration,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            boot_step: Duration::from_millis(450),
            type_tick: Duration::from_millis(18),
            disconnect: Duration::from_millis(1200),
        }
    }
}

#[derive(Debug)]
struct Typing {
    message_id: u64,
    full: Vec<char>,
    revealed: usize,
}

#[derive(Debug)]
pub struct ChatPanel {
    locale: Locale,
    state: PanelState,
    messages: Vec<ChatMessage>,
    boot_script: Vec<String>,
    boot_index: usize,
    typing: Option<Typing>,
    disconnect_notice: String,
    next_id: u64,
    timing: PanelTiming,
    started_at: DateTime<Utc>,
    last_latency: Option<Duration>,
}

impl ChatPanel {
    /// Build a panel whose boot script and notices come from `dict`.
    pub fn new(locale: Locale, dict: &Dictionary, timing: PanelTiming) -> Self {
        let boot_script = dict.list("chat.boot").into_iter().map(String::from).collect();
        Self::with_script(locale, boot_script, dict.text("chat.disconnecting"), timing)
    }

    pub fn with_script(
        locale: Locale,
        boot_script: Vec<String>,
        disconnect_notice: &str,
        timing: PanelTiming,
    ) -> Self {
        Self {
            locale,
            state: PanelState::Booting,
            messages: Vec::new(),
            boot_script,
            boot_index: 0,
            typing: None,
            disconnect_notice: disconnect_notice.to_string(),
            next_id: 1,
            timing,
            started_at: Utc::now(),
            last_latency: None,
        }
    }

    /// Begin the boot sequence.
    pub fn start(&mut self) -> Vec<Effect> {
        if self.state != PanelState::Booting {
            return Vec::new();
        }
        if self.boot_script.is_empty() {
            self.state = PanelState::Idle;
            return Vec::new();
        }
        vec![self.schedule(Timer::BootStep)]
    }

    pub fn handle(&mut self, event: PanelEvent) -> Vec<Effect> {
        match (self.state, event) {
            (PanelState::Booting, PanelEvent::Timer(Timer::BootStep)) => self.boot_step(),
            (PanelState::Idle, PanelEvent::Submit(text)) => self.submit(&text),
            (PanelState::AwaitingReply, PanelEvent::Reply { result, latency }) => {
                self.last_latency = Some(latency);
                self.reply(result)
            }
            (PanelState::TypingReply, PanelEvent::Timer(Timer::TypeTick)) => self.type_tick(),
            (PanelState::Disconnecting | PanelState::Closed, PanelEvent::Disconnect) => Vec::new(),
            (_, PanelEvent::Disconnect) => self.disconnect(),
            (PanelState::Disconnecting, PanelEvent::Timer(Timer::DisconnectDone)) => {
                self.state = PanelState::Closed;
                vec![Effect::Navigate(format!("/{}", self.locale))]
            }
            // Stale timers, late replies and submissions while busy are dropped
            _ => Vec::new(),
        }
    }

    fn schedule(&self, timer: Timer) -> Effect {
        let after = match timer {
            Timer::BootStep => self.timing.boot_step,
            Timer::TypeTick => self.timing.type_tick,
            Timer::DisconnectDone => self.timing.disconnect,
        };
        Effect::Schedule { timer, after }
    }

    fn push(&mut self, role: Role, content: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            timestamp: Utc::now(),
        });
        id
    }

    fn boot_step(&mut self) -> Vec<Effect> {
        let Some(line) = self.boot_script.get(self.boot_index).cloned() else {
            self.state = PanelState::Idle;
            return Vec::new();
        };
        self.push(Role::System, line);
        self.boot_index += 1;

        if self.boot_index < self.boot_script.len() {
            vec![self.schedule(Timer::BootStep)]
        } else {
            self.state = PanelState::Idle;
            Vec::new()
        }
    }

    fn submit(&mut self, text: &str) -> Vec<Effect> {
        let message = text.trim();
        if message.is_empty() {
            return Vec::new();
        }
        self.push(Role::User, message.to_string());
        self.state = PanelState::AwaitingReply;
        vec![Effect::SendChat {
            message: message.to_string(),
        }]
    }

    fn reply(&mut self, result: Result<String, String>) -> Vec<Effect> {
        match result {
            Ok(text) if text.is_empty() => {
                self.state = PanelState::Idle;
                Vec::new()
            }
            Ok(text) => {
                let message_id = self.push(Role::Ai, String::new());
                self.typing = Some(Typing {
                    message_id,
                    full: text.chars().collect(),
                    revealed: 0,
                });
                self.state = PanelState::TypingReply;
                vec![self.schedule(Timer::TypeTick)]
            }
            Err(error) => {
                self.push(Role::System, format!("[ERR] {}", error));
                self.state = PanelState::Idle;
                Vec::new()
            }
        }
    }

    fn type_tick(&mut self) -> Vec<Effect> {
        let Some(typing) = self.typing.as_mut() else {
            self.state = PanelState::Idle;
            return Vec::new();
        };

        if let Some(next) = typing.full.get(typing.revealed).copied() {
            typing.revealed += 1;
            let id = typing.message_id;
            if let Some(message) = self.messages.iter_mut().rev().find(|m| m.id == id) {
                message.content.push(next);
            }
        }

        let done = typing.revealed >= typing.full.len();
        if done {
            self.typing = None;
            self.state = PanelState::Idle;
            Vec::new()
        } else {
            vec![self.schedule(Timer::TypeTick)]
        }
    }

    fn disconnect(&mut self) -> Vec<Effect> {
        self.typing = None;
        let notice = self.disconnect_notice.clone();
        self.push(Role::System, notice);
        self.state = PanelState::Disconnecting;
        vec![self.schedule(Timer::DisconnectDone)]
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the input box should be enabled.
    pub fn accepts_input(&self) -> bool {
        self.state == PanelState::Idle
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, PanelState::AwaitingReply | PanelState::TypingReply)
    }

    /// Id of the message currently being revealed, if any.
    pub fn typing_message_id(&self) -> Option<u64> {
        self.typing.as_ref().map(|t| t.message_id)
    }

    pub fn uptime(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.started_at
    }

    pub fn last_latency(&self) -> Option<Duration> {
        self.last_latency
    }

    /// Header status line, e.g. `Session 00:01:05 · Latency 42 ms`.
    pub fn status_line(&self, dict: &Dictionary, now: DateTime<Utc>) -> String {
        let secs = self.uptime(now).num_seconds().max(0);
        let uptime = format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60);
        let latency = match self.last_latency {
            Some(d) => format!("{} ms", d.as_millis()),
            None => "--".to_string(),
        };
        format!(
            "{} {} · {} {}",
            dict.text("chat.uptime"),
            uptime,
            dict.text("chat.latency"),
            latency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary;

    fn booted_panel() -> ChatPanel {
        let mut panel = ChatPanel::with_script(
            Locale::En,
            vec!["boot one".to_string(), "boot two".to_string()],
            "bye",
            PanelTiming::default(),
        );
        panel.start();
        panel.handle(PanelEvent::Timer(Timer::BootStep));
        panel.handle(PanelEvent::Timer(Timer::BootStep));
        assert_eq!(panel.state(), PanelState::Idle);
        panel
    }

    fn ok_reply(text: &str) -> PanelEvent {
        PanelEvent::Reply {
            result: Ok(text.to_string()),
            latency: Duration::from_millis(42),
        }
    }

    // ==================== Boot Tests ====================

    #[test]
    fn test_boot_plays_script_in_order() {
        let mut panel = ChatPanel::with_script(
            Locale::Fr,
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            "bye",
            PanelTiming::default(),
        );

        let effects = panel.start();
        assert!(matches!(effects[0], Effect::Schedule { timer: Timer::BootStep, .. }));

        assert_eq!(panel.handle(PanelEvent::Timer(Timer::BootStep)).len(), 1);
        assert_eq!(panel.handle(PanelEvent::Timer(Timer::BootStep)).len(), 1);
        assert!(panel.handle(PanelEvent::Timer(Timer::BootStep)).is_empty());

        let lines: Vec<_> = panel.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
        assert!(panel.messages().iter().all(|m| m.role == Role::System));
        assert_eq!(panel.state(), PanelState::Idle);
    }

    #[test]
    fn test_empty_boot_script_starts_idle() {
        let mut panel = ChatPanel::with_script(Locale::Fr, vec![], "bye", PanelTiming::default());
        assert!(panel.start().is_empty());
        assert!(panel.accepts_input());
    }

    #[test]
    fn test_boot_timer_before_start_with_empty_script() {
        let mut panel = ChatPanel::with_script(Locale::Fr, vec![], "bye", PanelTiming::default());
        assert!(panel.handle(PanelEvent::Timer(Timer::BootStep)).is_empty());
        assert_eq!(panel.state(), PanelState::Idle);
        assert!(panel.messages().is_empty());
    }

    #[test]
    fn test_boot_script_comes_from_dictionary() {
        let dict = dictionary(Locale::En).unwrap();
        let mut panel = ChatPanel::new(Locale::En, dict, PanelTiming::default());
        panel.start();
        panel.handle(PanelEvent::Timer(Timer::BootStep));
        assert_eq!(panel.messages()[0].content, dict.list("chat.boot")[0]);
    }

    #[test]
    fn test_submit_during_boot_is_ignored() {
        let mut panel = ChatPanel::with_script(
            Locale::Fr,
            vec!["a".to_string()],
            "bye",
            PanelTiming::default(),
        );
        panel.start();
        assert!(panel.handle(PanelEvent::Submit("hello".to_string())).is_empty());
        assert!(panel.messages().is_empty());
    }

    // ==================== Submit Tests ====================

    #[test]
    fn test_blank_submit_is_a_no_op() {
        let mut panel = booted_panel();
        let before = panel.messages().len();

        for input in ["", "   ", "\n\t "] {
            assert!(panel.handle(PanelEvent::Submit(input.to_string())).is_empty());
        }

        assert_eq!(panel.messages().len(), before);
        assert_eq!(panel.state(), PanelState::Idle);
    }

    #[test]
    fn test_submit_trims_and_sends() {
        let mut panel = booted_panel();
        let effects = panel.handle(PanelEvent::Submit("  hello  ".to_string()));

        assert_eq!(
            effects,
            vec![Effect::SendChat {
                message: "hello".to_string()
            }]
        );
        assert_eq!(panel.state(), PanelState::AwaitingReply);
        assert!(panel.is_processing());
        assert!(!panel.accepts_input());
        assert_eq!(panel.messages().last().unwrap().render_line(), "> hello");
    }

    #[test]
    fn test_second_submit_while_awaiting_is_ignored() {
        let mut panel = booted_panel();
        panel.handle(PanelEvent::Submit("one".to_string()));
        assert!(panel.handle(PanelEvent::Submit("two".to_string())).is_empty());
        assert_eq!(panel.messages().iter().filter(|m| m.role == Role::User).count(), 1);
    }

    // ==================== Reply Tests ====================

    #[test]
    fn test_reply_is_revealed_one_char_per_tick() {
        let mut panel = booted_panel();
        panel.handle(PanelEvent::Submit("hi".to_string()));

        let effects = panel.handle(ok_reply("abc"));
        assert!(matches!(effects[0], Effect::Schedule { timer: Timer::TypeTick, .. }));
        assert_eq!(panel.state(), PanelState::TypingReply);
        assert_eq!(panel.last_latency(), Some(Duration::from_millis(42)));

        let ai_id = panel.typing_message_id().unwrap();
        let content = |p: &ChatPanel| p.messages().iter().find(|m| m.id == ai_id).unwrap().content.clone();
        assert_eq!(content(&panel), "");

        assert_eq!(panel.handle(PanelEvent::Timer(Timer::TypeTick)).len(), 1);
        assert_eq!(content(&panel), "a");
        panel.handle(PanelEvent::Timer(Timer::TypeTick));
        assert_eq!(content(&panel), "ab");
        assert!(panel.handle(PanelEvent::Timer(Timer::TypeTick)).is_empty());
        assert_eq!(content(&panel), "abc");

        assert_eq!(panel.state(), PanelState::Idle);
        assert_eq!(panel.typing_message_id(), None);
    }

    #[test]
    fn test_reply_reveal_handles_multibyte_text() {
        let mut panel = booted_panel();
        panel.handle(PanelEvent::Submit("bonjour".to_string()));
        panel.handle(ok_reply("é→"));
        panel.handle(PanelEvent::Timer(Timer::TypeTick));
        assert_eq!(panel.messages().last().unwrap().content, "é");
        panel.handle(PanelEvent::Timer(Timer::TypeTick));
        assert_eq!(panel.messages().last().unwrap().content, "é→");
    }

    #[test]
    fn test_error_reply_renders_err_line() {
        let mut panel = booted_panel();
        panel.handle(PanelEvent::Submit("hi".to_string()));
        let effects = panel.handle(PanelEvent::Reply {
            result: Err("Backend unreachable".to_string()),
            latency: Duration::from_millis(5),
        });

        assert!(effects.is_empty());
        let last = panel.messages().last().unwrap();
        assert_eq!(last.role, Role::System);
        assert_eq!(last.content, "[ERR] Backend unreachable");
        assert_eq!(panel.state(), PanelState::Idle);
    }

    #[test]
    fn test_empty_reply_returns_to_idle() {
        let mut panel = booted_panel();
        panel.handle(PanelEvent::Submit("hi".to_string()));
        assert!(panel.handle(ok_reply("")).is_empty());
        assert_eq!(panel.state(), PanelState::Idle);
    }

    #[test]
    fn test_unsolicited_reply_is_ignored() {
        let mut panel = booted_panel();
        let before = panel.messages().len();
        assert!(panel.handle(ok_reply("ghost")).is_empty());
        assert_eq!(panel.messages().len(), before);
    }

    // ==================== Disconnect Tests ====================

    #[test]
    fn test_disconnect_navigates_after_delay() {
        let mut panel = booted_panel();
        let effects = panel.handle(PanelEvent::Disconnect);
        assert!(matches!(effects[0], Effect::Schedule { timer: Timer::DisconnectDone, .. }));
        assert_eq!(panel.state(), PanelState::Disconnecting);
        assert_eq!(panel.messages().last().unwrap().content, "bye");

        // Repeated clicks do nothing
        assert!(panel.handle(PanelEvent::Disconnect).is_empty());

        let effects = panel.handle(PanelEvent::Timer(Timer::DisconnectDone));
        assert_eq!(effects, vec![Effect::Navigate("/en".to_string())]);
        assert_eq!(panel.state(), PanelState::Closed);
    }

    #[test]
    fn test_disconnect_while_awaiting_drops_late_reply() {
        let mut panel = booted_panel();
        panel.handle(PanelEvent::Submit("hi".to_string()));
        panel.handle(PanelEvent::Disconnect);

        assert!(panel.handle(ok_reply("too late")).is_empty());
        assert!(panel.messages().iter().all(|m| m.role != Role::Ai));
    }

    #[test]
    fn test_disconnect_stops_typing() {
        let mut panel = booted_panel();
        panel.handle(PanelEvent::Submit("hi".to_string()));
        panel.handle(ok_reply("long answer"));
        panel.handle(PanelEvent::Disconnect);

        assert_eq!(panel.typing_message_id(), None);
        assert!(panel.handle(PanelEvent::Timer(Timer::TypeTick)).is_empty());
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_role_rendering_is_exhaustive() {
        assert_eq!(Role::User.css_class(), "msg-user");
        assert_eq!(Role::System.css_class(), "msg-system");
        assert_eq!(Role::Ai.css_class(), "msg-ai");
        assert_eq!(Role::Ai.prefix(), "AI: ");
    }

    #[test]
    fn test_status_line() {
        let dict = dictionary(Locale::En).unwrap();
        let mut panel = booted_panel();
        let now = panel.started_at + chrono::Duration::seconds(3725);
        assert_eq!(panel.status_line(dict, now), "Session 01:02:05 · Latency --");

        panel.handle(PanelEvent::Submit("hi".to_string()));
        panel.handle(ok_reply("x"));
        assert!(panel.status_line(dict, now).ends_with("Latency 42 ms"));
    }
}
