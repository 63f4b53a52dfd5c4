//! Database home page.

use axum::extract::State;
use axum::response::Html;
use mechdb_data::Section;

use crate::handlers::layout;
use crate::state::SharedState;

pub async fn index(State(state): State<SharedState>) -> Html<String> {
    let thermo = &state.data.thermo;
    let kinetics = &state.data.kinetics;

    let mut rows = String::new();
    for section in Section::ALL {
        rows.push_str(&format!(
            "<tr><th>{}</th>\
             <td><a href=\"/thermo/{section}\">{} sub-databases</a></td>\
             <td><a href=\"/kinetics/{section}\">{} sub-databases</a></td></tr>\n",
            section.title(),
            thermo.section(section).len(),
            kinetics.section(section).len(),
        ));
    }

    let body = format!(
        r#"<h1>MechDB reference databases</h1>
<p>Browse the loaded thermodynamics and kinetics reference data by section
and sub-database, down to individual entries.</p>
<table class="summary">
<tr><th></th><th><a href="/thermo">Thermodynamics</a></th><th><a href="/kinetics">Kinetics</a></th></tr>
{rows}
<tr><th>Total entries</th><td>{}</td><td>{}</td></tr>
</table>"#,
        thermo.entry_count(),
        kinetics.entry_count(),
    );

    layout("Databases", body)
}
