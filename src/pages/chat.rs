use super::html::{escape, layout, NavItem};
use crate::components::chat::{ChatMessage, ChatPanel, PanelEvent, PanelState, PanelTiming, Timer};
use crate::i18n::{Dictionary, Locale};

/// Transcript of a panel that has finished its boot script.
///
/// The page is served already booted; the animated replay is a client
/// concern.
pub fn booted_transcript(locale: Locale, dict: &Dictionary) -> Vec<ChatMessage> {
    let mut panel = ChatPanel::new(locale, dict, PanelTiming::default());
    panel.start();
    while panel.state() == PanelState::Booting {
        panel.handle(PanelEvent::Timer(Timer::BootStep));
    }
    panel.messages().to_vec()
}

fn render_message(message: &ChatMessage) -> String {
    format!(
        "        <li class=\"{}\" data-id=\"{}\"><time datetime=\"{}\"></time>{}</li>\n",
        message.role.css_class(),
        message.id,
        message.timestamp.to_rfc3339(),
        escape(&message.render_line())
    )
}

pub fn render(locale: Locale, dict: &Dictionary, pathname: &str) -> String {
    let log: String = booted_transcript(locale, dict).iter().map(render_message).collect();

    let timing = PanelTiming::default();

    let body = format!(
        r#"    <section class="chat-panel" data-endpoint="/api/chat" data-locale="{locale}" data-type-tick="{type_tick}" data-disconnect-ms="{disconnect_ms}" data-disconnecting="{disconnecting}">
      <header>
        <h1>{title}</h1>
        <p>{subtitle}</p>
        <p class="chat-status">{uptime} <span class="chat-uptime">00:00:00</span> · {latency} <span class="chat-latency">--</span></p>
        <button type="button" class="disconnect" data-navigate="/{locale}">{disconnect}</button>
      </header>
      <ol class="chat-log" aria-live="polite">
{log}      </ol>
      <form class="chat-input">
        <input name="message" autocomplete="off" placeholder="{placeholder}">
        <button type="submit">{send}</button>
      </form>
    </section>"#,
        locale = locale,
        type_tick = timing.type_tick.as_millis(),
        disconnect_ms = timing.disconnect.as_millis(),
        disconnecting = escape(dict.text("chat.disconnecting")),
        uptime = escape(dict.text("chat.uptime")),
        latency = escape(dict.text("chat.latency")),
        title = escape(dict.text("chat.title")),
        subtitle = escape(dict.text("chat.subtitle")),
        disconnect = escape(dict.text("chat.disconnect")),
        log = log,
        placeholder = escape(dict.text("chat.placeholder")),
        send = escape(dict.text("chat.send")),
    );

    let title = format!("{} · {}", dict.text("chat.title"), dict.text("meta.title"));
    layout(locale, dict, pathname, &title, NavItem::Chat, &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::chat::Role;
    use crate::i18n::dictionary;

    #[test]
    fn test_booted_transcript_is_full_boot_script() {
        let dict = dictionary(Locale::Fr).unwrap();
        let transcript = booted_transcript(Locale::Fr, dict);

        let lines: Vec<_> = transcript.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(lines, dict.list("chat.boot"));
        assert!(transcript.iter().all(|m| m.role == Role::System));
    }

    #[test]
    fn test_chat_page_renders_log_and_form() {
        let dict = dictionary(Locale::En).unwrap();
        let html = render(Locale::En, dict, "/en/chat");

        assert_eq!(html.matches("class=\"msg-system\"").count(), dict.list("chat.boot").len());
        assert!(html.contains(r#"data-endpoint="/api/chat""#));
        assert!(html.contains(r#"data-navigate="/en""#));
        assert!(html.contains("Ask about the background"));
    }

    #[test]
    fn test_chat_page_carries_client_settings() {
        let dict = dictionary(Locale::Fr).unwrap();
        let html = render(Locale::Fr, dict, "/fr/chat");

        assert!(html.contains(r#"data-type-tick="18""#));
        assert!(html.contains(r#"data-disconnect-ms="1200""#));
        assert!(html.contains(r#"data-disconnecting="Fermeture de la session…""#));
        assert!(html.contains(r#"<span class="chat-latency">--</span>"#));
        assert!(html.contains(r#"<script src="/assets/site.js" defer></script>"#));
    }
}
