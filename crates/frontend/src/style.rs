//! Seeded per-note decoration.
//!
//! Each card gets a slight rotation, a vertical nudge, a paper color, and an
//! entrance delay, all derived from its id so the wall looks hand-placed but
//! never reshuffles between renders.

use wall_shared::layout::{id_seed, seeded_unit};

/// Warm, muted paper tones. No bright whites or harsh colors.
pub const NOTE_COLORS: [&str; 8] = [
    "#FFF9C4", // Soft sticky-note yellow
    "#FFF8E1", // Warm cream
    "#FFECB3", // Muted amber
    "#F3E5AB", // Vanilla paper
    "#E8F5E9", // Faded mint
    "#FCE4EC", // Blush pink
    "#FFF3E0", // Peach cream
    "#FFFDE7", // Light butter
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoteStyle {
    /// Degrees, within ±1.5.
    pub rotation: f64,
    /// Pixels, within ±8.
    pub offset_y: f64,
    pub color: &'static str,
    /// Entrance stagger, 0–150 ms.
    pub delay_ms: f64,
}

pub fn note_style(id: &str) -> NoteStyle {
    let seed = id_seed(id);
    let color_idx = (seeded_unit(seed, 2) * NOTE_COLORS.len() as f64) as usize;
    NoteStyle {
        rotation: (seeded_unit(seed, 0) - 0.5) * 3.0,
        offset_y: (seeded_unit(seed, 1) - 0.5) * 16.0,
        color: NOTE_COLORS[color_idx.min(NOTE_COLORS.len() - 1)],
        delay_ms: seeded_unit(seed, 3) * 150.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_is_deterministic() {
        assert_eq!(note_style("note-42"), note_style("note-42"));
    }

    #[test]
    fn test_style_values_stay_in_range() {
        for id in ["a", "note-1", "550e8400-e29b-41d4-a716-446655440000", ""] {
            let s = note_style(id);
            assert!(s.rotation.abs() <= 1.5);
            assert!(s.offset_y.abs() <= 8.0);
            assert!((0.0..=150.0).contains(&s.delay_ms));
            assert!(NOTE_COLORS.contains(&s.color));
        }
    }

    #[test]
    fn test_different_ids_differ() {
        // Not guaranteed for every pair, but these two should not collide on
        // every field at once.
        assert_ne!(note_style("alpha"), note_style("omega"));
    }
}
