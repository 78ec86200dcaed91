use super::html::{escape, layout, NavItem};
use crate::components::CvModal;
use crate::content::Profile;
use crate::i18n::{Dictionary, Locale};

pub fn render(locale: Locale, dict: &Dictionary, profile: &Profile, pathname: &str) -> String {
    let stack: String = dict
        .list("home.stack")
        .into_iter()
        .map(|item| format!("        <li>{}</li>\n", escape(item)))
        .collect();

    let body = format!(
        r#"    <section class="hero">
      <p class="greeting">{greeting}</p>
      <h1>{name}</h1>
      <p class="headline">{headline}</p>
      <p class="intro">{intro}</p>
      <div class="cta">
        <a class="button" href="/{locale}/projets">{cta_projects}</a>
        <a class="button secondary" href="/{locale}/chat">{cta_chat}</a>
      </div>
    </section>
    <section class="stack">
      <h2>{stack_title}</h2>
      <ul>
{stack}      </ul>
    </section>
    <section class="cv">
{modal}
    </section>
    <section class="contact">
      <h2>{contact_title}</h2>
      <ul>
        <li><a href="mailto:{email}">{email}</a></li>
        <li><a href="{github}" rel="me">GitHub</a></li>
        <li><a href="{linkedin}" rel="me">LinkedIn</a></li>
        <li>{location}</li>
      </ul>
    </section>"#,
        greeting = escape(dict.text("home.greeting")),
        name = escape(profile.name),
        headline = escape(dict.text("home.headline")),
        intro = escape(dict.text("home.intro")),
        locale = locale,
        cta_projects = escape(dict.text("home.cta_projects")),
        cta_chat = escape(dict.text("home.cta_chat")),
        stack_title = escape(dict.text("home.stack_title")),
        stack = stack,
        modal = CvModal::render_html(profile, dict),
        contact_title = escape(dict.text("home.contact_title")),
        email = escape(profile.email),
        github = escape(profile.github),
        linkedin = escape(profile.linkedin),
        location = escape(profile.location),
    );

    layout(locale, dict, pathname, dict.text("meta.title"), NavItem::Home, &body)
}
