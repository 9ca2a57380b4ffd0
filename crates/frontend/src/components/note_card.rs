use dioxus::prelude::*;
use wall_shared::models::Note;

use crate::style::note_style;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Human-friendly age label: "just now" through "6d ago", then a short date.
pub fn format_relative(diff_ms: f64, created_at: &str) -> String {
    if !diff_ms.is_finite() || diff_ms < 0.0 {
        return short_date(created_at);
    }
    let mins = (diff_ms / 60_000.0).floor();
    let hours = (diff_ms / 3_600_000.0).floor();
    let days = (diff_ms / 86_400_000.0).floor();

    if mins < 1.0 {
        "just now".to_string()
    } else if mins < 60.0 {
        format!("{} min ago", mins as i64)
    } else if hours < 24.0 {
        format!("{}h ago", hours as i64)
    } else if days < 7.0 {
        format!("{}d ago", days as i64)
    } else {
        short_date(created_at)
    }
}

/// "Aug 6" from an RFC 3339 timestamp; falls back to the raw string when
/// the prefix doesn't parse.
fn short_date(created_at: &str) -> String {
    let parsed = (|| {
        let month: usize = created_at.get(5..7)?.parse().ok()?;
        let day: u32 = created_at.get(8..10)?.parse().ok()?;
        let name = MONTHS.get(month.checked_sub(1)?)?;
        Some(format!("{} {}", name, day))
    })();
    parsed.unwrap_or_else(|| created_at.to_string())
}

/// A paper note on the wall: message, author, age, and seeded decoration.
#[component]
pub fn NoteCard(note: Note) -> Element {
    let style = note_style(&note.id);

    let created_ms =
        js_sys::Date::new(&wasm_bindgen::JsValue::from_str(&note.created_at)).get_time();
    let age = format_relative(js_sys::Date::now() - created_ms, &note.created_at);

    let card_style = format!(
        "background: {}; transform: rotate({:.2}deg) translateY({:.1}px); animation-delay: {:.0}ms;",
        style.color, style.rotation, style.offset_y, style.delay_ms
    );

    rsx! {
        article {
            class: "note-card",
            style: "{card_style}",
            aria_label: "Note from {note.name}",

            // Tape decoration on some notes only
            if style.rotation > 0.5 {
                div { class: "note-card__tape", aria_hidden: "true" }
            }

            p { class: "note-card__message", "{note.message}" }

            footer { class: "note-card__footer",
                span { class: "note-card__author", "— {note.name}" }
                time { class: "note-card__time", datetime: "{note.created_at}", "{age}" }
            }
        }
    }
}
