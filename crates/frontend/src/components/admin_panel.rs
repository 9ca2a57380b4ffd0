use dioxus::prelude::*;
use wall_shared::models::{Note, NoteInput};

use crate::api;

/// Password-gated curation panel: list, edit, and remove notes.
///
/// The gate is a single credential check against the server; there is no
/// session, so a reload locks the panel again.
#[component]
pub fn AdminPanel(
    notes: Vec<Note>,
    on_note_updated: EventHandler<Note>,
    on_note_deleted: EventHandler<String>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let mut is_authed = use_signal(|| false);
    let mut password = use_signal(String::new);
    let mut auth_error = use_signal(|| None::<String>);
    let mut editing = use_signal(|| None::<String>);
    let mut edit_message = use_signal(String::new);
    let mut edit_name = use_signal(String::new);

    let open = *is_open.read();
    let authed = *is_authed.read();
    let auth_err = auth_error.read().clone().unwrap_or_default();

    rsx! {
        div { class: "admin-panel",
            button {
                class: "admin-panel__toggle",
                aria_label: "Admin panel",
                onclick: move |_| {
                    let cur = *is_open.read();
                    is_open.set(!cur);
                },
                "Admin"
            }

            if open && !authed {
                form {
                    class: "admin-panel__login",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        let pw = password.read().clone();
                        spawn(async move {
                            match api::authenticate(&pw).await {
                                Ok(true) => {
                                    is_authed.set(true);
                                    auth_error.set(None);
                                    password.set(String::new());
                                }
                                Ok(false) => auth_error.set(Some("Invalid password".to_string())),
                                Err(e) => auth_error.set(Some(e)),
                            }
                        });
                    },
                    input {
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button { r#type: "submit", "Unlock" }
                    if !auth_err.is_empty() {
                        p { class: "admin-panel__error", "{auth_err}" }
                    }
                }
            }

            if open && authed {
                div { class: "admin-panel__list",
                    for note in notes.iter() {
                        AdminRow {
                            key: "{note.id}",
                            note: note.clone(),
                            editing,
                            edit_message,
                            edit_name,
                            on_note_updated,
                            on_note_deleted,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminRow(
    note: Note,
    editing: Signal<Option<String>>,
    edit_message: Signal<String>,
    edit_name: Signal<String>,
    on_note_updated: EventHandler<Note>,
    on_note_deleted: EventHandler<String>,
) -> Element {
    let is_editing = editing.read().as_deref() == Some(note.id.as_str());

    let edit_note = note.clone();
    let mut editing_for_edit = editing;
    let mut msg_for_edit = edit_message;
    let mut name_for_edit = edit_name;

    let save_id = note.id.clone();
    let delete_id = note.id.clone();

    rsx! {
        div { class: "admin-panel__row",
            if is_editing {
                textarea {
                    value: "{edit_message}",
                    oninput: move |evt| edit_message.set(evt.value()),
                }
                input {
                    r#type: "text",
                    value: "{edit_name}",
                    oninput: move |evt| edit_name.set(evt.value()),
                }
                button {
                    onclick: move |_| {
                        let id = save_id.clone();
                        let input = NoteInput {
                            message: edit_message.read().clone(),
                            name: Some(edit_name.read().clone()),
                        };
                        let mut editing = editing;
                        spawn(async move {
                            match api::update_note(&id, &input).await {
                                Ok(updated) => {
                                    on_note_updated.call(updated);
                                    editing.set(None);
                                }
                                Err(e) => alert(&format!("Failed to update note: {}", e)),
                            }
                        });
                    },
                    "Save"
                }
                button {
                    class: "secondary",
                    onclick: move |_| editing_for_edit.set(None),
                    "Cancel"
                }
            } else {
                p { class: "admin-panel__message", "{note.message}" }
                span { class: "admin-panel__author", "{note.name}" }
                button {
                    onclick: move |_| {
                        editing_for_edit.set(Some(edit_note.id.clone()));
                        msg_for_edit.set(edit_note.message.clone());
                        name_for_edit.set(edit_note.name.clone());
                    },
                    "Edit"
                }
                button {
                    class: "danger",
                    onclick: move |_| {
                        if !confirm("Are you sure you want to delete this note?") {
                            return;
                        }
                        let id = delete_id.clone();
                        spawn(async move {
                            match api::delete_note(&id).await {
                                Ok(()) => on_note_deleted.call(id),
                                Err(e) => alert(&format!("Failed to delete note: {}", e)),
                            }
                        });
                    },
                    "Delete"
                }
            }
        }
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
