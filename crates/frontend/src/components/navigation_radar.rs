use dioxus::prelude::*;
use wall_shared::models::Note;
use wall_shared::radar::{compute_markers, warp_target, RadarMarker};
use wall_shared::viewport::ViewportState;

use super::canvas_view::{screen_size, warp_to};
use crate::style::note_style;

/// Longest tooltip preview of a note's message.
const PREVIEW_LEN: usize = 60;

/// Distance label for a marker tooltip.
pub fn format_distance(pixels: f64) -> String {
    if pixels < 500.0 {
        format!("{}px", pixels.round() as i64)
    } else {
        format!("{:.1}k px", pixels / 1000.0)
    }
}

/// Char-safe preview of a message for the hover tooltip.
pub fn truncate_message(message: &str, max: usize) -> String {
    let trimmed = message.trim();
    if trimmed.chars().count() <= max {
        return trimmed.to_string();
    }
    let cut: String = trimmed.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

struct MarkerView {
    marker: RadarMarker,
    name: String,
    message: String,
    color: &'static str,
}

/// Game-HUD style indicators at the screen edges, one per off-screen note,
/// each rotated to point at its note. Hover previews the note; click warps
/// the viewport to it.
#[component]
pub fn NavigationRadar(notes: Vec<Note>, state: Signal<ViewportState>) -> Element {
    let mut hovered = use_signal(|| None::<String>);

    let screen = screen_size();
    let ids: Vec<String> = notes.iter().map(|n| n.id.clone()).collect();
    let markers = compute_markers(&ids, &state.read(), screen);

    let views: Vec<MarkerView> = markers
        .into_iter()
        .map(|marker| {
            let note = notes.iter().find(|n| n.id == marker.note_id);
            MarkerView {
                color: note_style(&marker.note_id).color,
                name: note.map(|n| n.name.clone()).unwrap_or_default(),
                message: note.map(|n| n.message.clone()).unwrap_or_default(),
                marker,
            }
        })
        .collect();

    let rendered = views.into_iter().map(|view| {
        let id = view.marker.note_id.clone();
        let hover_id = id.clone();
        let leave_id = id.clone();
        let is_hovered = hovered.read().as_deref() == Some(id.as_str());
        let marker_class = if is_hovered {
            "radar-marker radar-marker--active"
        } else {
            "radar-marker"
        };
        let preview = truncate_message(&view.message, PREVIEW_LEN);
        let distance_label = format_distance(view.marker.distance);

        rsx! {
            div {
                key: "{id}",
                class: "radar-marker-wrapper",
                style: "left: {view.marker.x}px; top: {view.marker.y}px;",

                button {
                    class: "{marker_class}",
                    style: "transform: rotate({view.marker.angle_degrees}deg); --marker-color: {view.color};",
                    aria_label: "Navigate to note by {view.name}",
                    onclick: move |_| {
                        let pos = state.read().position(&id);
                        if let Some(pos) = pos {
                            warp_to(state, warp_target(pos, screen_size()));
                        }
                    },
                    onmouseenter: move |_| hovered.set(Some(hover_id.clone())),
                    onmouseleave: move |_| {
                        if hovered.read().as_deref() == Some(leave_id.as_str()) {
                            hovered.set(None);
                        }
                    },
                    "➤"
                }

                if is_hovered {
                    div { class: "radar-tooltip",
                        p { class: "radar-tooltip__message", "\u{201c}{preview}\u{201d}" }
                        div { class: "radar-tooltip__meta",
                            span { class: "radar-tooltip__author", "— {view.name}" }
                            span { class: "radar-tooltip__distance", "{distance_label}" }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "navigation-radar", aria_label: "Off-screen note indicators",
            {rendered}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance_near() {
        assert_eq!(format_distance(123.4), "123px");
        assert_eq!(format_distance(499.0), "499px");
    }

    #[test]
    fn test_format_distance_far() {
        assert_eq!(format_distance(1500.0), "1.5k px");
        assert_eq!(format_distance(12800.0), "12.8k px");
    }

    #[test]
    fn test_truncate_short_message_untouched() {
        assert_eq!(truncate_message("hello wall", 60), "hello wall");
    }

    #[test]
    fn test_truncate_long_message() {
        let long = "a".repeat(100);
        let out = truncate_message(&long, 60);
        assert_eq!(out, format!("{}...", "a".repeat(60)));
    }

    #[test]
    fn test_truncate_is_char_safe() {
        // Multi-byte characters must not be split mid-codepoint.
        let msg = "ß".repeat(80);
        let out = truncate_message(&msg, 60);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 63);
    }

    #[test]
    fn test_truncate_trims_trailing_space() {
        let msg = format!("{} tail", "x".repeat(59));
        let out = truncate_message(&msg, 60);
        assert_eq!(out, format!("{}...", "x".repeat(59)));
    }
}
