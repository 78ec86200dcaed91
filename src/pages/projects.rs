use super::html::{escape, layout, NavItem};
use crate::content::Project;
use crate::i18n::{Dictionary, Locale};

fn render_project(project: &Project, dict: &Dictionary) -> String {
    let fields = [
        ("projects.context", project.context),
        ("projects.architecture", project.architecture),
        ("projects.choices", project.choices),
        ("projects.constraints", project.constraints),
        ("projects.results", project.results),
    ];

    let rows: String = fields
        .iter()
        .map(|(label, value)| {
            format!(
                "          <dt>{}</dt>\n          <dd>{}</dd>\n",
                escape(dict.text(label)),
                escape(value)
            )
        })
        .collect();

    format!(
        "      <article class=\"project\">\n        <h2>{}</h2>\n        <dl>\n{}        </dl>\n      </article>\n",
        escape(project.name),
        rows
    )
}

pub fn render(locale: Locale, dict: &Dictionary, projects: &[Project], pathname: &str) -> String {
    let articles: String = projects.iter().map(|p| render_project(p, dict)).collect();

    let body = format!(
        "    <section class=\"projects\">\n      <h1>{}</h1>\n      <p class=\"intro\">{}</p>\n{}    </section>",
        escape(dict.text("projects.title")),
        escape(dict.text("projects.intro")),
        articles
    );

    let title = format!("{} · {}", dict.text("projects.title"), dict.text("meta.title"));
    layout(locale, dict, pathname, &title, NavItem::Projects, &body)
}
