//! HTTP handlers for all web routes.

pub mod index;
pub mod kinetics;
pub mod thermo;

use axum::response::Html;
use mechdb_data::{Database, Section, SubDatabase};

use crate::error::WebError;
use crate::render::ParameterSection;

/// Navigation fragment shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Wrap a page body in the shared document shell.
pub fn layout(title: &str, body: String) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} — MechDB</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body>
{NAV_HTML}
<main class="main-content">
{body}
</main>
</body>
</html>"#
    ))
}

/// Resolve a section/subsection pair or fail the request with a 404.
pub(crate) fn lookup_subsection<'a, I, D>(
    db: &'a Database<I, D>,
    section: &str,
    subsection: &str,
) -> Result<(Section, &'a SubDatabase<I, D>), WebError> {
    let section: Section = section
        .parse()
        .map_err(|_| WebError::NotFound(format!("invalid section name '{section}'")))?;
    let sub = db.subsection(section, subsection).ok_or_else(|| {
        WebError::NotFound(format!(
            "no subsection '{subsection}' in section '{section}'"
        ))
    })?;
    Ok((section, sub))
}

/// Entry indices arrive as path segments; anything non-numeric is a 404.
pub(crate) fn parse_index(raw: &str) -> Result<i64, WebError> {
    raw.parse()
        .map_err(|_| WebError::NotFound(format!("invalid entry index '{raw}'")))
}

/// Outline of a database: its sections and their sub-databases.
pub(crate) fn outline_page<I, D>(
    title: &str,
    base: &str,
    db: &Database<I, D>,
    only: Option<Section>,
) -> Html<String> {
    let mut body = format!("<h1>{title} database</h1>\n");
    for section in Section::ALL {
        if only.is_some_and(|s| s != section) {
            continue;
        }
        let subs = db.section(section);
        body.push_str(&format!(
            "<h2><a href=\"{base}/{section}\">{}</a></h2>\n",
            section.title()
        ));
        if subs.is_empty() {
            body.push_str("<p class=\"muted\">No sub-databases loaded.</p>\n");
            continue;
        }
        body.push_str("<ul>\n");
        for (label, sub) in subs {
            body.push_str(&format!(
                "<li><a href=\"{base}/{section}/{label}\">{}</a> <span class=\"muted\">({} entries)</span></li>\n",
                sub.name,
                sub.len()
            ));
        }
        body.push_str("</ul>\n");
    }
    layout(title, body)
}

/// Render formatted parameter sections as definition tables.
pub(crate) fn parameter_tables(sections: &[ParameterSection]) -> String {
    let mut html = String::new();
    for section in sections {
        if let Some(heading) = &section.heading {
            html.push_str(&format!("<h3>{heading}</h3>\n"));
        }
        html.push_str("<table class=\"params\">\n");
        for (name, value) in &section.rows {
            html.push_str(&format!(
                "<tr><th>{name}</th><td><span class=\"math\">{value}</span></td></tr>\n"
            ));
        }
        html.push_str("</table>\n");
    }
    html
}
