//! Edge-of-screen markers pointing at off-screen notes.
//!
//! For each off-screen note the engine casts a ray from the screen center
//! toward the note's visual center, intersects it with the screen edges,
//! clamps the hit into a padded band, and finally nudges markers apart so
//! two notes in the same direction don't stack on one pixel.

use std::f64::consts::PI;

use crate::viewport::{Point, Screen, ViewportState, NOTE_CENTER_X, NOTE_CENTER_Y};

/// Markers keep this many pixels clear of the screen edge.
pub const MARKER_PADDING: f64 = 50.0;

/// Minimum center-to-center distance between two markers.
pub const MARKER_MIN_SPACING: f64 = 60.0;

/// An edge marker for one off-screen note. Derived per render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarMarker {
    pub note_id: String,
    pub x: f64,
    pub y: f64,
    /// Rotation for the marker glyph so it points at its note.
    pub angle_degrees: f64,
    /// Screen-center-to-note distance in pixels.
    pub distance: f64,
}

/// Raw edge intersection for a ray leaving screen center at `angle`
/// (radians, `atan2` convention), clamped into the padded band.
fn edge_position(angle: f64, screen: Screen) -> (f64, f64) {
    let center = screen.center();
    let aspect = screen.width / screen.height;
    let abs_angle = angle.abs();

    let (x, y);
    if abs_angle < aspect.atan() {
        // Right edge
        x = screen.width - MARKER_PADDING;
        y = center.y + (x - center.x) * angle.tan();
    } else if abs_angle > PI - aspect.atan() {
        // Left edge
        x = MARKER_PADDING;
        y = center.y + (x - center.x) * angle.tan();
    } else if angle > 0.0 {
        // Bottom edge
        y = screen.height - MARKER_PADDING;
        x = center.x + (y - center.y) / angle.tan();
    } else {
        // Top edge
        y = MARKER_PADDING;
        x = center.x + (y - center.y) / angle.tan();
    }

    (
        x.clamp(MARKER_PADDING, screen.width - MARKER_PADDING),
        y.clamp(MARKER_PADDING, screen.height - MARKER_PADDING),
    )
}

/// Push a new marker away from any previously placed marker it would sit on.
///
/// Greedy and order dependent: each neighbor within [`MARKER_MIN_SPACING`]
/// shoves the new marker radially out by exactly the spacing, re-clamped to
/// the padded band, and the scan continues. Earlier markers are never
/// revisited, so 3+ tightly clustered notes may still overlap a little;
/// the pass only has to prevent exact stacking.
fn separate(mut x: f64, mut y: f64, placed: &[RadarMarker], screen: Screen) -> (f64, f64) {
    for existing in placed {
        let dx = x - existing.x;
        let dy = y - existing.y;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist < MARKER_MIN_SPACING {
            let away = dy.atan2(dx);
            x = existing.x + away.cos() * MARKER_MIN_SPACING;
            y = existing.y + away.sin() * MARKER_MIN_SPACING;
            x = x.clamp(MARKER_PADDING, screen.width - MARKER_PADDING);
            y = y.clamp(MARKER_PADDING, screen.height - MARKER_PADDING);
        }
    }
    (x, y)
}

/// Compute markers for every off-screen note, in input order.
///
/// Notes without a recorded position are classified visible upstream and
/// produce no marker.
pub fn compute_markers(
    note_ids: &[String],
    state: &ViewportState,
    screen: Screen,
) -> Vec<RadarMarker> {
    let center = screen.center();
    let offset = state.offset();
    let mut markers: Vec<RadarMarker> = Vec::new();

    for id in note_ids {
        if state.is_visible(id, screen) {
            continue;
        }
        let Some(pos) = state.position(id) else {
            continue;
        };

        let note_cx = pos.x + offset.x + NOTE_CENTER_X;
        let note_cy = pos.y + offset.y + NOTE_CENTER_Y;
        let dx = note_cx - center.x;
        let dy = note_cy - center.y;
        let distance = (dx * dx + dy * dy).sqrt();
        // atan2(0, 0) is 0, so a note exactly on the center ray still gets
        // a well-defined (right-edge) marker.
        let angle = dy.atan2(dx);

        let (raw_x, raw_y) = edge_position(angle, screen);
        let (x, y) = separate(raw_x, raw_y, &markers, screen);

        markers.push(RadarMarker {
            note_id: id.clone(),
            x,
            y,
            angle_degrees: angle.to_degrees(),
            distance,
        });
    }

    markers
}

/// Pan offset that would center the given note on screen; feed this to the
/// animator when a marker is clicked.
pub fn warp_target(note_pos: Point, screen: Screen) -> Point {
    Point::new(
        -note_pos.x - NOTE_CENTER_X + screen.width / 2.0,
        -note_pos.y - NOTE_CENTER_Y + screen.height / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Screen = Screen {
        width: 1024.0,
        height: 768.0,
    };

    fn state_with(notes: &[(&str, f64, f64)]) -> ViewportState {
        let mut state = ViewportState::new();
        for (id, x, y) in notes {
            state.register_position(id, Point::new(*x, *y));
        }
        state
    }

    fn ids(notes: &[(&str, f64, f64)]) -> Vec<String> {
        notes.iter().map(|(id, _, _)| id.to_string()).collect()
    }

    #[test]
    fn test_note_to_the_right_gets_right_edge_marker() {
        // Note center well to the right of screen center, same height.
        let notes = [("n1", 5000.0, 384.0 - NOTE_CENTER_Y)];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        assert_eq!(markers.len(), 1);
        let m = &markers[0];
        assert!((m.x - (SCREEN.width - MARKER_PADDING)).abs() < 1e-9);
        assert!((m.y - 384.0).abs() < 1e-6);
        assert!(m.angle_degrees.abs() < 1e-6);
    }

    #[test]
    fn test_note_to_the_left_gets_left_edge_marker() {
        let notes = [("n1", -5000.0, 384.0 - NOTE_CENTER_Y)];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        let m = &markers[0];
        assert!((m.x - MARKER_PADDING).abs() < 1e-9);
        assert!((m.y - 384.0).abs() < 1e-6);
        assert!((m.angle_degrees.abs() - 180.0).abs() < 1e-6);
    }

    #[test]
    fn test_note_below_gets_bottom_edge_marker() {
        let notes = [("n1", 512.0 - NOTE_CENTER_X, 5000.0)];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        let m = &markers[0];
        assert!((m.y - (SCREEN.height - MARKER_PADDING)).abs() < 1e-9);
        assert!((m.x - 512.0).abs() < 1e-6);
        assert!((m.angle_degrees - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_note_above_gets_top_edge_marker() {
        let notes = [("n1", 512.0 - NOTE_CENTER_X, -5000.0)];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        let m = &markers[0];
        assert!((m.y - MARKER_PADDING).abs() < 1e-9);
        assert!((m.x - 512.0).abs() < 1e-6);
        assert!((m.angle_degrees + 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_lower_right_note_scenario() {
        // Screen 1024x768, offset zero, note at (5200, 5100): its center is
        // (5340, 5200), the ray leaves at ~45 degrees which is inside the
        // right-edge sector for a 4:3 screen.
        let notes = [("n1", 5200.0, 5100.0)];
        let state = state_with(&notes);
        assert!(!state.is_visible("n1", SCREEN));

        let markers = compute_markers(&ids(&notes), &state, SCREEN);
        assert_eq!(markers.len(), 1);
        let m = &markers[0];
        assert!((m.x - (SCREEN.width - MARKER_PADDING)).abs() < 1e-9);
        // The tangent overshoots the bottom of the screen and clamps.
        assert!((m.y - (SCREEN.height - MARKER_PADDING)).abs() < 1e-9);
        assert!(m.angle_degrees > 0.0 && m.angle_degrees < 90.0);
    }

    #[test]
    fn test_markers_stay_inside_padded_band() {
        let notes = [
            ("a", 40000.0, 100.0),
            ("b", -40000.0, -35000.0),
            ("c", 12.0, 90000.0),
            ("d", -3.0, -90000.0),
            ("e", 70000.0, 70000.0),
        ];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        assert_eq!(markers.len(), 5);
        for m in &markers {
            assert!(m.x >= MARKER_PADDING && m.x <= SCREEN.width - MARKER_PADDING);
            assert!(m.y >= MARKER_PADDING && m.y <= SCREEN.height - MARKER_PADDING);
        }
    }

    #[test]
    fn test_visible_note_has_no_marker() {
        let notes = [("on", 400.0, 300.0), ("off", 9000.0, 300.0)];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].note_id, "off");
    }

    #[test]
    fn test_unpositioned_note_has_no_marker() {
        let state = ViewportState::new();
        let markers = compute_markers(&["ghost".to_string()], &state, SCREEN);
        assert!(markers.is_empty());
    }

    #[test]
    fn test_coincident_notes_are_separated() {
        // Two notes at the same world position produce the same raw marker;
        // the collision pass must split them by at least the spacing.
        let notes = [("a", -6000.0, 200.0), ("b", -6000.0, 200.0)];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        assert_eq!(markers.len(), 2);
        let dx = markers[0].x - markers[1].x;
        let dy = markers[0].y - markers[1].y;
        let dist = (dx * dx + dy * dy).sqrt();
        assert!(
            dist >= MARKER_MIN_SPACING - 1e-6,
            "markers {:.1}px apart, expected at least {}",
            dist,
            MARKER_MIN_SPACING
        );
    }

    #[test]
    fn test_zero_angle_places_right_edge_marker() {
        // atan2(0, 0) = 0 for a degenerate direction vector; angle zero must
        // resolve to a well-defined right-edge marker, not a panic.
        let (x, y) = edge_position(0.0, SCREEN);
        assert!((x - (SCREEN.width - MARKER_PADDING)).abs() < 1e-9);
        assert!((y - 384.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_center_to_center() {
        let notes = [("n1", 512.0 - NOTE_CENTER_X + 3000.0, 384.0 - NOTE_CENTER_Y)];
        let markers = compute_markers(&ids(&notes), &state_with(&notes), SCREEN);
        assert!((markers[0].distance - 3000.0).abs() < 1e-6);
    }

    #[test]
    fn test_warp_target_centers_note() {
        let target = warp_target(Point::new(100.0, 100.0), SCREEN);
        assert!((target.x - 272.0).abs() < 1e-9);
        assert!((target.y - 184.0).abs() < 1e-9);
    }

    #[test]
    fn test_warp_target_round_trip_makes_note_visible() {
        let mut state = state_with(&[("n1", 5200.0, 5100.0)]);
        assert!(!state.is_visible("n1", SCREEN));
        let target = warp_target(state.position("n1").unwrap(), SCREEN);
        let token = state.begin_warp(target, 0.0);
        while state.tick(token, 1000.0) {}
        assert!(state.is_visible("n1", SCREEN));
        assert_eq!(state.offset(), target);
    }
}
