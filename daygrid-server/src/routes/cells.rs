//! Calendar cell endpoints: bucketed fragments and their layout geometry.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use daygrid_core::fragment::Fragment;
use daygrid_core::layout::EventLayout;
use daygrid_core::{fragments_for_cell, layout_of};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cells/{date}/fragments", get(cell_fragments))
        .route("/cells/{date}/layout", get(cell_layout))
}

#[derive(Deserialize)]
pub struct CellQuery {
    #[serde(default)]
    search: String,
}

/// GET /cells/:date/fragments - The fragments occupying one calendar cell
async fn cell_fragments(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
    Query(query): Query<CellQuery>,
) -> Result<Json<Vec<Fragment>>, AppError> {
    let events = state.events()?;
    let fragments = fragments_for_cell(
        &events,
        date.day(),
        date.month(),
        date.year(),
        &query.search,
    );

    Ok(Json(fragments))
}

/// A fragment paired with its computed geometry
#[derive(Serialize)]
pub struct PositionedFragment {
    pub fragment: Fragment,
    pub layout: EventLayout,
}

/// GET /cells/:date/layout - Fragments with overlap-aware geometry applied
async fn cell_layout(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
    Query(query): Query<CellQuery>,
) -> Result<Json<Vec<PositionedFragment>>, AppError> {
    let events = state.events()?;
    let fragments = fragments_for_cell(
        &events,
        date.day(),
        date.month(),
        date.year(),
        &query.search,
    );

    let positioned = fragments
        .iter()
        .map(|fragment| PositionedFragment {
            layout: layout_of(fragment, &fragments),
            fragment: fragment.clone(),
        })
        .collect();

    Ok(Json(positioned))
}
