//! Shared application state for the web server.

use std::sync::Arc;

use mechdb_data::ReferenceData;

/// Shared state injected into every Axum handler.
///
/// Both databases are loaded before the server starts; requests only read.
#[derive(Clone)]
pub struct AppState {
    pub data: ReferenceData,
}

impl AppState {
    pub fn new(data: ReferenceData) -> Self {
        Self { data }
    }
}

pub type SharedState = Arc<AppState>;
