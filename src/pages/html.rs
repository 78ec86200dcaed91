//! HTML helpers shared by every page.

use crate::components::render_switcher;
use crate::content::PROFILE;
use crate::i18n::{Dictionary, Locale};
use chrono::{Datelike, Utc};

/// Escape text for use in element content and quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Top navigation entry a page highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Projects,
    Chat,
    None,
}

fn nav_link(locale: Locale, dict: &Dictionary, item: NavItem, active: NavItem) -> String {
    let (href, key) = match item {
        NavItem::Home => (format!("/{}", locale), "nav.home"),
        NavItem::Projects => (format!("/{}/projets", locale), "nav.projects"),
        NavItem::Chat => (format!("/{}/chat", locale), "nav.chat"),
        NavItem::None => return String::new(),
    };
    let current = if item == active {
        r#" aria-current="page""#
    } else {
        ""
    };
    format!(
        r#"<a href="{}"{}>{}</a>"#,
        escape(&href),
        current,
        escape(dict.text(key))
    )
}

/// Wrap page content in the shared document shell.
pub fn layout(
    locale: Locale,
    dict: &Dictionary,
    pathname: &str,
    title: &str,
    active: NavItem,
    body: &str,
) -> String {
    let nav: String = [NavItem::Home, NavItem::Projects, NavItem::Chat]
        .into_iter()
        .map(|item| nav_link(locale, dict, item, active))
        .collect::<Vec<_>>()
        .join("\n      ");

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <meta name="description" content="{description}">
  <link rel="alternate" hreflang="{other}" href="{other_href}">
  <link rel="stylesheet" href="/assets/site.css">
  <script src="/assets/site.js" defer></script>
</head>
<body>
  <header class="site-header">
    <nav>
      {nav}
    </nav>
    {switcher}
  </header>
  <main>
{body}
  </main>
  <footer class="site-footer">© {year} {name}. {rights}</footer>
</body>
</html>
"#,
        lang = locale.code(),
        title = escape(title),
        description = escape(dict.text("meta.description")),
        other = locale.opposite().code(),
        other_href = escape(&crate::components::switch_locale_path(pathname, locale.opposite())),
        nav = nav,
        switcher = render_switcher(pathname, locale, dict),
        body = body,
        year = Utc::now().year(),
        name = escape(PROFILE.name),
        rights = escape(dict.text("footer.rights")),
    )
}
