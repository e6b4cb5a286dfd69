//! Event CRUD endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use chrono::NaiveDate;
use serde::Deserialize;

use daygrid_core::event::Event;
use daygrid_core::{clock, color, store};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route("/events/{id}", put(update_event).delete(delete_event))
}

/// GET /events - List all stored events
async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, AppError> {
    Ok(Json(state.events()?))
}

/// Request body for creating an event
#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date: NaiveDate,
    /// "HH:MM" (24-hour) or "h:MM AM/PM"
    pub start_time: String,
    pub end_time: String,
    pub description: Option<String>,
    pub attendee: Option<String>,
    pub color: Option<String>,
}

/// POST /events - Create a new event
async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<Event>, AppError> {
    let start_time = clock::normalize(&req.start_time)
        .ok_or_else(|| AppError::bad_request(format!("Invalid start_time: {}", req.start_time)))?;
    let end_time = clock::normalize(&req.end_time)
        .ok_or_else(|| AppError::bad_request(format!("Invalid end_time: {}", req.end_time)))?;

    let mut event = Event::new(req.title, req.date, start_time, end_time);
    event.description = req.description;
    event.attendee = req.attendee;
    if let Some(raw) = req.color {
        event.color = color::resolve_color(&raw);
    }

    store::create(state.data_dir(), &event)?;

    Ok(Json(event))
}

/// PUT /events/:id - Update an existing event
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<Event>, AppError> {
    let Some(existing) = store::find(state.data_dir(), &id)? else {
        return Err(AppError::not_found(format!("Event not found: {}", id)));
    };

    let start_time = clock::normalize(&req.start_time)
        .ok_or_else(|| AppError::bad_request(format!("Invalid start_time: {}", req.start_time)))?;
    let end_time = clock::normalize(&req.end_time)
        .ok_or_else(|| AppError::bad_request(format!("Invalid end_time: {}", req.end_time)))?;

    let mut event = existing.event;
    event.title = req.title;
    event.date = req.date;
    event.start_time = start_time;
    event.end_time = end_time;
    event.description = req.description;
    event.attendee = req.attendee;
    if let Some(raw) = req.color {
        event.color = color::resolve_color(&raw);
    }

    store::update(state.data_dir(), &id, &event)?;

    Ok(Json(event))
}

/// DELETE /events/:id - Delete an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if store::delete(state.data_dir(), &id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("Event not found: {}", id)))
    }
}
