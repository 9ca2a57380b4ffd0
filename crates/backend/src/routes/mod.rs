use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use wall_shared::models::{generate_note_id, Note, NoteInput};

use crate::storage::Storage;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<Storage>,
    pub admin_password: Arc<String>,
}

type ApiError = (StatusCode, Json<Value>);

fn bad_request(message: String) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

fn not_found() -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Note not found" })),
    )
}

fn internal(context: &str, err: String) -> ApiError {
    tracing::error!(context, error = %err, "storage failure");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": format!("Failed to {}", context) })),
    )
}

/// The REST API under `/api`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", put(update_note).delete(delete_note))
        .route("/admin/auth", post(authenticate))
        .route("/health", get(health))
        .with_state(state)
}

/// `GET /api/notes`: all notes, newest first.
async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .storage
        .list_notes()
        .map_err(|e| internal("fetch notes", e))?;
    Ok(Json(notes))
}

/// `POST /api/notes`: pin a new note to the wall.
async fn create_note(
    State(state): State<AppState>,
    Json(input): Json<NoteInput>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let body = input.normalize().map_err(bad_request)?;

    let note = Note {
        id: generate_note_id(),
        message: body.message,
        name: body.name,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    state
        .storage
        .save_note(&note)
        .map_err(|e| internal("create note", e))?;

    tracing::info!(id = %note.id, "note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// `PUT /api/notes/{id}`: edit a note's message or author.
async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<NoteInput>,
) -> Result<Json<Note>, ApiError> {
    let body = input.normalize().map_err(bad_request)?;

    let mut note = state
        .storage
        .get_note(&id)
        .map_err(|e| internal("update note", e))?
        .ok_or_else(not_found)?;

    note.message = body.message;
    note.name = body.name;
    state
        .storage
        .save_note(&note)
        .map_err(|e| internal("update note", e))?;

    Ok(Json(note))
}

/// `DELETE /api/notes/{id}`: remove a note from the wall.
async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let removed = state
        .storage
        .delete_note(&id)
        .map_err(|e| internal("delete note", e))?;
    if !removed {
        return Err(not_found());
    }
    tracing::info!(id = %id, "note deleted");
    Ok(Json(json!({ "message": "Note removed" })))
}

#[derive(Deserialize)]
struct AuthRequest {
    password: String,
}

/// `POST /api/admin/auth`: single boolean credential check.
async fn authenticate(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<Value>, ApiError> {
    if req.password == *state.admin_password {
        Ok(Json(json!({ "success": true })))
    } else {
        tracing::warn!("failed admin authentication attempt");
        Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Invalid password" })),
        ))
    }
}

/// `GET /api/health`
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": chrono::Utc::now().to_rfc3339() }))
}
