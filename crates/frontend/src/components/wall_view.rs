use dioxus::prelude::*;
use wall_shared::models::Note;

use super::note_card::NoteCard;

/// Notes rendered before the user asks for more.
const INITIAL_BATCH: usize = 20;

/// The wall itself: a collage of note cards, rendered in batches so a wall
/// with hundreds of memories stays snappy.
#[component]
pub fn WallView(notes: Vec<Note>, is_loading: bool) -> Element {
    let mut shown = use_signal(|| INITIAL_BATCH);

    if is_loading {
        return rsx! {
            section { class: "wall", aria_label: "Wall of notes", LoadingState {} }
        };
    }
    if notes.is_empty() {
        return rsx! {
            section { class: "wall", aria_label: "Wall of notes", EmptyState {} }
        };
    }

    let total = notes.len();
    let count_label = if total == 1 { "memory" } else { "memories" };
    let visible: Vec<Note> = notes.iter().take(*shown.read()).cloned().collect();
    let remaining = total.saturating_sub(visible.len());

    rsx! {
        section { class: "wall", aria_label: "Wall of notes",
            div { class: "wall__counter",
                span { class: "wall__counter-number", "{total}" }
                span { class: "wall__counter-label", " {count_label} collected" }
            }

            div { class: "wall__grid",
                for note in visible {
                    NoteCard { key: "{note.id}", note: note.clone() }
                }
            }

            if remaining > 0 {
                button {
                    class: "wall__more",
                    onclick: move |_| {
                        let cur = *shown.read();
                        shown.set(cur + INITIAL_BATCH);
                    },
                    "Show more ({remaining} waiting)"
                }
            }
        }
    }
}

#[component]
fn LoadingState() -> Element {
    rsx! {
        div { class: "wall__loading",
            div { class: "wall__loading-papers", aria_hidden: "true",
                div { class: "wall__loading-paper" }
                div { class: "wall__loading-paper" }
                div { class: "wall__loading-paper" }
            }
            p { class: "wall__loading-text", "Gathering memories..." }
        }
    }
}

/// An invitation, not an error.
#[component]
fn EmptyState() -> Element {
    rsx! {
        div { class: "wall__empty",
            p { class: "wall__empty-text",
                "The wall is quiet."
                br {}
                span { class: "wall__empty-cta", "Leave a thought?" }
            }
        }
    }
}
