use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use wall_shared::models::Note;
use wall_shared::viewport::{Point, Screen, ViewportState};

use super::navigation_radar::NavigationRadar;
use super::note_card::NoteCard;

/// Warp animation cadence.
const FRAME_INTERVAL_MS: u32 = 16;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Current window size, with a sane fallback when no window exists yet.
pub fn screen_size() -> Screen {
    let fallback = Screen::new(1024.0, 768.0);
    let Some(window) = web_sys::window() else {
        return fallback;
    };
    let w = window.inner_width().ok().and_then(|v| v.as_f64());
    let h = window.inner_height().ok().and_then(|v| v.as_f64());
    match (w, h) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => Screen::new(w, h),
        _ => fallback,
    }
}

pub fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Animate the viewport to `target` over the warp duration.
///
/// The loop holds the token handed out by `begin_warp`; starting another
/// warp invalidates it, so a superseded loop stops on its next tick instead
/// of fighting the new one over the offset.
pub fn warp_to(mut state: Signal<ViewportState>, target: Point) {
    let token = state.write().begin_warp(target, performance_now());
    spawn(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(FRAME_INTERVAL_MS).await;
            if !state.write().tick(token, performance_now()) {
                break;
            }
        }
    });
}

/// An in-flight note drag, tracked from the grip handle.
#[derive(Debug, Clone, PartialEq)]
struct NoteDrag {
    id: String,
    last_x: f64,
    last_y: f64,
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// The infinite canvas: a full-screen surface that pans on background drag,
/// hosts draggable notes, and overlays radar markers for whatever is
/// off-screen.
#[component]
pub fn CanvasView(notes: Vec<Note>, state: Signal<ViewportState>) -> Element {
    // Mouse pan state
    let mut is_panning = use_signal(|| false);
    let mut last_mouse = use_signal(|| (0.0_f64, 0.0_f64));
    // Note drag (started from a grip handle, which stops propagation so the
    // background pan never sees it)
    let mut note_drag = use_signal(|| None::<NoteDrag>);
    // Touch pan state
    let mut touch_last = use_signal(|| None::<(f64, f64)>);

    let offset = state.read().offset();
    let world_style = format!("transform: translate3d({}px, {}px, 0);", offset.x, offset.y);

    rsx! {
        div {
            class: "canvas-viewport",

            onmousedown: move |evt: Event<MouseData>| {
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                let client = evt.client_coordinates();
                last_mouse.set((client.x, client.y));
                is_panning.set(true);
            },

            onmousemove: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                let drag = note_drag.read().clone();
                if let Some(mut drag) = drag {
                    let dx = client.x - drag.last_x;
                    let dy = client.y - drag.last_y;
                    // Copy the position out before writing; a read guard held
                    // across the write would panic.
                    let pos = state.read().position(&drag.id);
                    if let Some(pos) = pos {
                        state
                            .write()
                            .update_position(&drag.id, Point::new(pos.x + dx, pos.y + dy));
                    }
                    drag.last_x = client.x;
                    drag.last_y = client.y;
                    note_drag.set(Some(drag));
                } else if *is_panning.read() {
                    let (lx, ly) = *last_mouse.read();
                    // pan_by drops the delta while a warp is in flight
                    state.write().pan_by(client.x - lx, client.y - ly);
                    last_mouse.set((client.x, client.y));
                }
            },

            onmouseup: move |_| {
                is_panning.set(false);
                note_drag.set(None);
            },

            onmouseleave: move |_| {
                is_panning.set(false);
                note_drag.set(None);
            },

            // --- Touch: single-finger background pan ---

            ontouchstart: move |evt: Event<TouchData>| {
                let touches = evt.data().touches();
                if touches.len() == 1 {
                    let t = &touches[0];
                    touch_last.set(Some((t.client_coordinates().x, t.client_coordinates().y)));
                } else {
                    touch_last.set(None);
                }
            },

            ontouchmove: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let touches = evt.data().touches();
                if touches.len() != 1 {
                    return;
                }
                let t = &touches[0];
                let cur = (t.client_coordinates().x, t.client_coordinates().y);
                if let Some(last) = *touch_last.read() {
                    state.write().pan_by(cur.0 - last.0, cur.1 - last.1);
                }
                touch_last.set(Some(cur));
            },

            ontouchend: move |_| {
                touch_last.set(None);
            },

            // The world. Everything inside lives in world coordinates and is
            // shifted as one by the viewport offset.
            div { class: "canvas-world", style: "{world_style}",
                for note in notes.iter() {
                    DraggableNote {
                        key: "{note.id}",
                        note: note.clone(),
                        state,
                        note_drag,
                    }
                }
            }

            NavigationRadar { notes: notes.clone(), state }
        }
    }
}

/// A note pinned to the canvas. Dragging is only possible from the grip
/// handle, so note text stays selectable and background pans stay easy.
#[component]
fn DraggableNote(
    note: Note,
    state: Signal<ViewportState>,
    note_drag: Signal<Option<NoteDrag>>,
) -> Element {
    let pos = state.read().position(&note.id).unwrap_or_default();
    let id = note.id.clone();
    let dragging = note_drag
        .read()
        .as_ref()
        .is_some_and(|d| d.id == note.id);

    let class = if dragging {
        "draggable-note draggable-note--dragging"
    } else {
        "draggable-note"
    };

    rsx! {
        div {
            class: "{class}",
            style: "position: absolute; left: {pos.x}px; top: {pos.y}px;",

            button {
                class: "draggable-note__grip",
                aria_label: "Drag to move note",
                title: "Drag to move",
                onmousedown: move |evt: Event<MouseData>| {
                    if evt.trigger_button() != Some(MouseButton::Primary) {
                        return;
                    }
                    evt.stop_propagation();
                    let client = evt.client_coordinates();
                    note_drag.set(Some(NoteDrag {
                        id: id.clone(),
                        last_x: client.x,
                        last_y: client.y,
                    }));
                },
                "⠿"
            }

            NoteCard { note: note.clone() }
        }
    }
}
