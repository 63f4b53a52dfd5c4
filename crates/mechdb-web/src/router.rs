//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    index::index,
    kinetics::{
        api_kinetics_entry, api_kinetics_table, kinetics_entry, kinetics_index,
        kinetics_section, kinetics_table,
    },
    thermo::{
        api_thermo_entry, api_thermo_table, thermo_entry, thermo_index, thermo_section,
        thermo_table,
    },
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(index))
        .route("/thermo", get(thermo_index))
        .route("/thermo/{section}", get(thermo_section))
        .route("/thermo/{section}/{subsection}", get(thermo_table))
        .route("/thermo/{section}/{subsection}/{index}", get(thermo_entry))
        .route("/kinetics", get(kinetics_index))
        .route("/kinetics/{section}", get(kinetics_section))
        .route("/kinetics/{section}/{subsection}", get(kinetics_table))
        .route("/kinetics/{section}/{subsection}/{index}", get(kinetics_entry))

        // API endpoints
        .route("/api/thermo/{section}/{subsection}", get(api_thermo_table))
        .route("/api/thermo/{section}/{subsection}/{index}", get(api_thermo_entry))
        .route("/api/kinetics/{section}/{subsection}", get(api_kinetics_table))
        .route("/api/kinetics/{section}/{subsection}/{index}", get(api_kinetics_entry))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
