//! REST client for the wall API, with a localStorage fallback so the wall
//! keeps working when the server is unreachable. Notes read from either
//! source have an identical shape.

use serde::Deserialize;
use wall_shared::models::{Note, NoteInput};

/// localStorage key holding the serialized fallback note list.
const NOTES_STORAGE_KEY: &str = "wall-notes";

// ---------------------------------------------------------------------------
// URL builders (pure)
// ---------------------------------------------------------------------------

pub fn notes_url(base: &str) -> String {
    format!("{}/notes", base)
}

pub fn note_url(base: &str, id: &str) -> String {
    format!("{}/notes/{}", base, id)
}

pub fn auth_url(base: &str) -> String {
    format!("{}/admin/auth", base)
}

fn api_base() -> String {
    // Served from the same origin as the backend.
    let window = web_sys::window().unwrap();
    let origin = window.location().origin().unwrap();
    format!("{}/api", origin)
}

// ---------------------------------------------------------------------------
// Local fallback store
// ---------------------------------------------------------------------------

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Parse the serialized fallback list; garbage or absence yields an empty
/// wall rather than an error.
pub fn parse_local_notes(raw: Option<&str>) -> Vec<Note> {
    raw.and_then(|r| serde_json::from_str(r).ok())
        .unwrap_or_default()
}

fn load_local_notes() -> Vec<Note> {
    let raw = local_storage().and_then(|s| s.get_item(NOTES_STORAGE_KEY).ok().flatten());
    parse_local_notes(raw.as_deref())
}

fn store_local_notes(notes: &[Note]) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(notes)) {
        let _ = storage.set_item(NOTES_STORAGE_KEY, &json);
    }
}

/// Newest notes go to the front, matching the server's ordering.
pub fn prepend_note(notes: &mut Vec<Note>, note: Note) {
    notes.insert(0, note);
}

/// Edit a note in the fallback list; `None` if the id is unknown.
pub fn apply_local_update(
    notes: &mut [Note],
    id: &str,
    message: String,
    name: String,
) -> Option<Note> {
    let note = notes.iter_mut().find(|n| n.id == id)?;
    note.message = message;
    note.name = name;
    Some(note.clone())
}

pub fn remove_local_note(notes: &mut Vec<Note>, id: &str) -> bool {
    let before = notes.len();
    notes.retain(|n| n.id != id);
    notes.len() != before
}

/// Id for a note created while offline. Distinct from server UUIDs so a
/// later sync could recognize them.
pub fn local_note_id(now_ms: f64, rand_unit: f64) -> String {
    format!(
        "local-{}-{:08x}",
        now_ms as u64,
        (rand_unit * 4294967296.0) as u32
    )
}

// ---------------------------------------------------------------------------
// API calls
// ---------------------------------------------------------------------------

/// Fetch all notes, newest first. Falls back to localStorage when the
/// server is unreachable.
pub async fn fetch_notes() -> Vec<Note> {
    match try_fetch_notes().await {
        Ok(notes) => notes,
        Err(_) => load_local_notes(),
    }
}

async fn try_fetch_notes() -> Result<Vec<Note>, String> {
    let resp = reqwest::Client::new()
        .get(notes_url(&api_base()))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(format!("Failed to fetch notes: {}", resp.status()));
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Pin a note. When the server is unreachable the note is created locally
/// with the same validation the server would apply.
pub async fn create_note(input: &NoteInput) -> Result<Note, String> {
    match try_create_note(input).await {
        Ok(note) => Ok(note),
        Err(_) => {
            let body = input.normalize()?;
            let note = Note {
                id: local_note_id(js_sys::Date::now(), js_sys::Math::random()),
                message: body.message,
                name: body.name,
                created_at: String::from(js_sys::Date::new_0().to_iso_string()),
            };
            let mut notes = load_local_notes();
            prepend_note(&mut notes, note.clone());
            store_local_notes(&notes);
            Ok(note)
        }
    }
}

async fn try_create_note(input: &NoteInput) -> Result<Note, String> {
    let resp = reqwest::Client::new()
        .post(notes_url(&api_base()))
        .json(input)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.status().is_success() {
        return Err(read_error(resp).await);
    }
    resp.json().await.map_err(|e| e.to_string())
}

/// Edit a note's message or author.
pub async fn update_note(id: &str, input: &NoteInput) -> Result<Note, String> {
    let resp = reqwest::Client::new()
        .put(note_url(&api_base(), id))
        .json(input)
        .send()
        .await;

    match resp {
        Ok(resp) if resp.status().is_success() => resp.json().await.map_err(|e| e.to_string()),
        Ok(resp) => Err(read_error(resp).await),
        Err(_) => {
            // Server unreachable: edit the fallback list instead.
            let body = input.normalize()?;
            let mut notes = load_local_notes();
            let updated = apply_local_update(&mut notes, id, body.message, body.name)
                .ok_or_else(|| "Note not found".to_string())?;
            store_local_notes(&notes);
            Ok(updated)
        }
    }
}

/// Remove a note from the wall.
pub async fn delete_note(id: &str) -> Result<(), String> {
    let resp = reqwest::Client::new()
        .delete(note_url(&api_base(), id))
        .send()
        .await;

    match resp {
        Ok(resp) if resp.status().is_success() => Ok(()),
        Ok(resp) => Err(read_error(resp).await),
        Err(_) => {
            let mut notes = load_local_notes();
            remove_local_note(&mut notes, id);
            store_local_notes(&notes);
            Ok(())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
}

/// Verify the admin credential. No local fallback: an unreachable server
/// surfaces as a clear error instead of a silent grant.
pub async fn authenticate(password: &str) -> Result<bool, String> {
    let resp = reqwest::Client::new()
        .post(auth_url(&api_base()))
        .json(&serde_json::json!({ "password": password }))
        .send()
        .await
        .map_err(|_| {
            "Cannot connect to server. Please check if the backend is running.".to_string()
        })?;

    if !resp.status().is_success() {
        return Err(read_error(resp).await);
    }
    let auth: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(auth.success)
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    error: String,
}

async fn read_error(resp: reqwest::Response) -> String {
    let status = resp.status();
    match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed: {}", status),
    }
}
