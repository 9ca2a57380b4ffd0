use dioxus::prelude::*;
use wall_shared::layout;
use wall_shared::models::Note;
use wall_shared::viewport::ViewportState;

use crate::api;
use crate::components::canvas_view::{screen_size, CanvasView};
use crate::Route;

/// The spatial mode: every note gets a spot on an infinite plane.
///
/// Positions are assigned once per note from its index and id, so the
/// arrangement is stable across reloads; the first load centers the view on
/// the crowd and later additions leave the view alone.
#[component]
pub fn CanvasBoard() -> Element {
    let mut notes = use_signal(Vec::<Note>::new);
    let mut state = use_signal(ViewportState::new);

    use_future(move || async move {
        let fetched = api::fetch_notes().await;
        {
            let mut st = state.write();
            for (i, note) in fetched.iter().enumerate() {
                st.register_position(&note.id, layout::initial_position(i, &note.id));
            }
            st.auto_center(screen_size());
        }
        notes.set(fetched);
    });

    rsx! {
        div { class: "canvas-page",
            header { class: "canvas-page__header",
                h1 { class: "canvas-page__title", "The Wall" }
                nav { class: "canvas-page__nav",
                    Link { to: Route::Home {}, "Back to the wall" }
                }
            }

            CanvasView {
                notes: notes.read().clone(),
                state,
            }
        }
    }
}
