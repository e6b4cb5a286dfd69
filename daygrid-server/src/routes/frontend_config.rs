//! Rendering constants and settings a GUI frontend needs up front.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use daygrid_core::layout::{HOUR_ROW_PX, MIN_EVENT_HEIGHT_PX};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/config", get(frontend_config))
}

#[derive(Serialize)]
pub struct FrontendConfig {
    pub max_visible_per_cell: usize,
    pub hour_row_px: f64,
    pub min_event_height_px: f64,
}

/// GET /config - Settings and layout constants for renderers
async fn frontend_config(State(state): State<AppState>) -> Json<FrontendConfig> {
    Json(FrontendConfig {
        max_visible_per_cell: state.max_visible_per_cell(),
        hour_row_px: HOUR_ROW_PX,
        min_event_height_px: MIN_EVENT_HEIGHT_PX,
    })
}
