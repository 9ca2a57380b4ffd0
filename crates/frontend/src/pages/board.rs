use dioxus::prelude::*;
use wall_shared::models::{Note, NoteInput};

use crate::api;
use crate::components::admin_panel::AdminPanel;
use crate::components::font_switcher::FontSwitcher;
use crate::components::wall_view::WallView;
use crate::components::write_note::WriteNote;
use crate::Route;

/// The main page: write a note, read the wall.
#[component]
pub fn Board() -> Element {
    let mut notes = use_signal(Vec::<Note>::new);
    let mut is_loading = use_signal(|| true);

    use_future(move || async move {
        notes.set(api::fetch_notes().await);
        is_loading.set(false);
    });

    rsx! {
        div { class: "app",
            header { class: "app__header",
                h1 { class: "app__title", "The Wall" }
                p { class: "app__subtitle", "A quiet place for thoughts" }
                nav { class: "app__nav",
                    Link { to: Route::CanvasMode {}, "Open the canvas" }
                }
            }

            FontSwitcher {}

            WriteNote {
                on_submit: move |input: NoteInput| {
                    spawn(async move {
                        if let Ok(note) = api::create_note(&input).await {
                            // Newest first, same as the server ordering
                            notes.write().insert(0, note);
                        }
                    });
                },
            }

            WallView {
                notes: notes.read().clone(),
                is_loading: *is_loading.read(),
            }

            AdminPanel {
                notes: notes.read().clone(),
                on_note_updated: move |updated: Note| {
                    let mut list = notes.write();
                    if let Some(slot) = list.iter_mut().find(|n| n.id == updated.id) {
                        *slot = updated;
                    }
                },
                on_note_deleted: move |id: String| {
                    notes.write().retain(|n| n.id != id);
                },
            }

            footer { class: "app__footer",
                p { "Leave a thought. Read a memory. That's all." }
            }
        }
    }
}
