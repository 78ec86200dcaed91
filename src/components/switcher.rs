use crate::i18n::{Dictionary, Locale};
use crate::pages::html::escape;

/// Rewrite a pathname so it points at the same page in `target`.
///
/// The first segment is replaced when it is a locale tag and prefixed
/// otherwise, so `/fr/projets` becomes `/en/projets` and `/fr` becomes `/en`.
pub fn switch_locale_path(pathname: &str, target: Locale) -> String {
    let trimmed = pathname.trim_start_matches('/');
    if trimmed.is_empty() {
        return format!("/{}", target);
    }

    let mut segments: Vec<&str> = trimmed.split('/').collect();
    if Locale::is_supported(segments[0]) {
        segments[0] = target.code();
    } else {
        segments.insert(0, target.code());
    }
    format!("/{}", segments.join("/"))
}

/// Navigation link to the current page in the other locale.
pub fn render_switcher(pathname: &str, current: Locale, dict: &Dictionary) -> String {
    let target = current.opposite();
    format!(
        r#"<a class="lang-switch" href="{href}" hreflang="{code}" lang="{code}" title="{label}">{name}</a>"#,
        href = escape(&switch_locale_path(pathname, target)),
        code = target.code(),
        label = escape(dict.text("nav.switch_label")),
        name = escape(target.native_name()),
    )
}
