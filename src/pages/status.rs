use super::html::{escape, layout, NavItem};
use crate::i18n::{Dictionary, Locale};

pub fn not_found(locale: Locale, dict: &Dictionary, pathname: &str) -> String {
    let body = format!(
        "    <section class=\"status\">\n      <h1>{}</h1>\n      <p>{}</p>\n      <a href=\"/{}\">{}</a>\n    </section>",
        escape(dict.text("not_found.title")),
        escape(dict.text("not_found.body")),
        locale,
        escape(dict.text("not_found.back")),
    );
    layout(locale, dict, pathname, dict.text("not_found.title"), NavItem::None, &body)
}

/// Plain error page. Does not depend on the dictionary, which may be the
/// thing that failed.
pub fn internal_error() -> String {
    "<!DOCTYPE html>\n<html lang=\"fr\">\n<head><meta charset=\"utf-8\"><title>500</title></head>\n\
<body><h1>500</h1><p>Erreur interne / Internal error</p></body>\n</html>\n"
        .to_string()
}
