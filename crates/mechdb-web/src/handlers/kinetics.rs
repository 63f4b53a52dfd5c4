//! Kinetics database pages and API.

use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use mechdb_chem::ModelData;
use mechdb_data::{KineticsEntry, Section};
use serde_json::json;

use crate::error::WebError;
use crate::handlers::{layout, lookup_subsection, outline_page, parameter_tables, parse_index};
use crate::render;
use crate::state::SharedState;

pub async fn kinetics_index(State(state): State<SharedState>) -> Html<String> {
    outline_page("Kinetics", "/kinetics", &state.data.kinetics, None)
}

pub async fn kinetics_section(
    State(state): State<SharedState>,
    Path(section): Path<String>,
) -> Result<Html<String>, WebError> {
    let section: Section = section
        .parse()
        .map_err(|_| WebError::NotFound(format!("invalid section name '{section}'")))?;
    Ok(outline_page(
        "Kinetics",
        "/kinetics",
        &state.data.kinetics,
        Some(section),
    ))
}

pub async fn kinetics_table(
    State(state): State<SharedState>,
    Path((section, subsection)): Path<(String, String)>,
) -> Result<Html<String>, WebError> {
    let (section, sub) = lookup_subsection(&state.data.kinetics, &section, &subsection)?;

    let rows: String = sub
        .entries()
        .map(|entry| {
            format!(
                "<tr><td><a href=\"/kinetics/{section}/{label}/{index}\">{index}</a></td>\
                 <td>{entry_label}</td>\
                 <td>{reactants} {arrow} {products}</td><td>{format}</td></tr>\n",
                label = sub.label,
                index = entry.index,
                entry_label = entry.label,
                reactants = render::structure_list_markup(&entry.item.reactants),
                arrow = render::reaction_arrow(&entry.item),
                products = render::structure_list_markup(&entry.item.products),
                format = entry.data.format_label(),
            )
        })
        .collect();

    let body = format!(
        r#"<h1>{name}</h1>
<p class="muted"><a href="/kinetics">Kinetics</a> / <a href="/kinetics/{section}">{title}</a> / {label}</p>
<table class="entries">
<tr><th>Index</th><th>Label</th><th>Reaction</th><th>Data format</th></tr>
{rows}
</table>"#,
        name = sub.name,
        title = section.title(),
        label = sub.label,
    );

    Ok(layout(&sub.name, body))
}

pub async fn kinetics_entry(
    State(state): State<SharedState>,
    Path((section, subsection, index)): Path<(String, String, String)>,
) -> Result<Html<String>, WebError> {
    let (section, sub) = lookup_subsection(&state.data.kinetics, &section, &subsection)?;
    let index = parse_index(&index)?;
    let entry = sub.get(index).ok_or_else(|| {
        WebError::NotFound(format!("no entry {index} in subsection '{subsection}'"))
    })?;

    let mut body = format!(
        r#"<h1>{label}</h1>
<p class="muted"><a href="/kinetics">Kinetics</a> / <a href="/kinetics/{section}">{title}</a> / <a href="/kinetics/{section}/{sub_label}">{name}</a> / entry {index}</p>
<div class="reaction">{reactants} {arrow} {products}</div>
<h2>Kinetics data: {format}</h2>
"#,
        label = entry.label,
        title = section.title(),
        sub_label = sub.label,
        name = sub.name,
        reactants = render::structure_list_markup(&entry.item.reactants),
        arrow = render::reaction_arrow(&entry.item),
        products = render::structure_list_markup(&entry.item.products),
        format = entry.data.format_label(),
    );

    if let Some(target) = entry.data.link_target() {
        // The loader guarantees the target resolves.
        if let Some(target_entry) = sub.get(target) {
            body.push_str(&format!(
                "<p>This entry links to <a href=\"/kinetics/{section}/{sub_label}/{target}\">entry {target} ({target_label})</a>.</p>\n",
                sub_label = sub.label,
                target_label = target_entry.label,
            ));
        }
    }

    body.push_str(&parameter_tables(&render::kinetics_sections(&entry.data)));

    if !entry.reference.is_empty() {
        body.push_str(&format!(
            "<h2>Reference</h2>\n<p class=\"reference\">{}</p>\n",
            render::format_reference(&entry.reference)
        ));
    }

    Ok(layout(&entry.label, body))
}

// === JSON API ===

pub async fn api_kinetics_table(
    State(state): State<SharedState>,
    Path((section, subsection)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, WebError> {
    let (section, sub) = lookup_subsection(&state.data.kinetics, &section, &subsection)?;
    let entries: Vec<_> = sub
        .entries()
        .map(|entry| {
            json!({
                "index": entry.index,
                "label": entry.label,
                "reversible": entry.item.reversible,
                "format": entry.data.format_label(),
            })
        })
        .collect();
    Ok(Json(json!({
        "section": section.as_str(),
        "subsection": sub.label,
        "name": sub.name,
        "entries": entries,
    })))
}

pub async fn api_kinetics_entry(
    State(state): State<SharedState>,
    Path((section, subsection, index)): Path<(String, String, String)>,
) -> Result<Json<KineticsEntry>, WebError> {
    let (_, sub) = lookup_subsection(&state.data.kinetics, &section, &subsection)?;
    let index = parse_index(&index)?;
    let entry = sub.get(index).ok_or_else(|| {
        WebError::NotFound(format!("no entry {index} in subsection '{subsection}'"))
    })?;
    Ok(Json(entry.clone()))
}
