//! Viewport state for the infinite canvas.
//!
//! The canvas is an unbounded 2D plane. Panning translates the whole world:
//! `screen = world + offset`. [`ViewportState`] is the single owner of the
//! pan offset, the per-note world positions, and the in-flight warp
//! animation; the only writers are the pan gesture, the animator tick, note
//! drag updates, and the one-shot auto-centering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::layout;

/// Rendered note card footprint on the canvas, in pixels.
pub const NOTE_WIDTH: f64 = 280.0;
pub const NOTE_HEIGHT: f64 = 200.0;

/// Offset from a note's top-left anchor to its visual center. Every piece of
/// center-based geometry (visibility, radar angles, centering) must use the
/// same constant or markers drift off their targets.
pub const NOTE_CENTER_X: f64 = NOTE_WIDTH / 2.0;
pub const NOTE_CENTER_Y: f64 = NOTE_HEIGHT / 2.0;

/// Duration of a programmatic "warp to note" pan.
pub const WARP_DURATION_MS: f64 = 800.0;

/// A point in world or screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Visible screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    pub width: f64,
    pub height: f64,
}

impl Screen {
    pub fn new(width: f64, height: f64) -> Self {
        Screen { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// World → screen under the given pan offset.
pub fn to_screen(world: Point, offset: Point) -> Point {
    Point::new(world.x + offset.x, world.y + offset.y)
}

/// Screen → world under the given pan offset.
pub fn to_world(screen: Point, offset: Point) -> Point {
    Point::new(screen.x - offset.x, screen.y - offset.y)
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy)]
struct Warp {
    token: u64,
    start: Point,
    target: Point,
    start_time_ms: f64,
}

/// Owns the pan offset, note positions, and warp animation state.
#[derive(Debug, Default)]
pub struct ViewportState {
    offset: Point,
    positions: HashMap<String, Point>,
    warp: Option<Warp>,
    next_token: u64,
    has_centered: bool,
}

impl ViewportState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current pan offset. Unbounded; the world has no edges.
    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.warp.is_some()
    }

    /// Apply a drag delta to the offset, 1:1 with the gesture.
    ///
    /// Ignored while a warp is in flight so the gesture and the animator
    /// never fight over the offset. Returns whether the delta was applied.
    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        if self.warp.is_some() {
            return false;
        }
        self.offset.x += dx;
        self.offset.y += dy;
        true
    }

    /// Record a note's world position the first time it is placed.
    ///
    /// Idempotent: re-registration (e.g. from a re-render) never resets a
    /// position the user has dragged. Returns whether the position was new.
    pub fn register_position(&mut self, id: &str, pos: Point) -> bool {
        if self.positions.contains_key(id) {
            return false;
        }
        self.positions.insert(id.to_string(), pos);
        true
    }

    /// Overwrite a note's world position (drag updates).
    pub fn update_position(&mut self, id: &str, pos: Point) {
        self.positions.insert(id.to_string(), pos);
    }

    pub fn position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    /// Whether the note's screen-space bounding box intersects the screen.
    ///
    /// A note with no recorded position is reported visible (fail-open), so
    /// it can never hide behind an unreachable radar marker.
    pub fn is_visible(&self, id: &str, screen: Screen) -> bool {
        let Some(pos) = self.positions.get(id) else {
            return true;
        };
        let sx = pos.x + self.offset.x;
        let sy = pos.y + self.offset.y;
        sx + NOTE_WIDTH > 0.0 && sx < screen.width && sy + NOTE_HEIGHT > 0.0 && sy < screen.height
    }

    /// Start an animated pan toward `target`, cancelling any warp already
    /// in flight.
    ///
    /// Returns a token the driving loop must pass back to [`tick`]; a loop
    /// holding a stale token stops on its next tick, so two warps can never
    /// write the offset in the same frame window.
    ///
    /// [`tick`]: ViewportState::tick
    pub fn begin_warp(&mut self, target: Point, now_ms: f64) -> u64 {
        self.next_token += 1;
        let token = self.next_token;
        self.warp = Some(Warp {
            token,
            start: self.offset,
            target,
            start_time_ms: now_ms,
        });
        token
    }

    /// Advance the warp one frame. Returns whether the loop should keep
    /// ticking.
    pub fn tick(&mut self, token: u64, now_ms: f64) -> bool {
        let Some(warp) = self.warp else {
            return false;
        };
        if warp.token != token {
            return false;
        }

        let progress = ((now_ms - warp.start_time_ms) / WARP_DURATION_MS).clamp(0.0, 1.0);
        if progress >= 1.0 {
            self.offset = warp.target;
            self.warp = None;
            return false;
        }

        let eased = ease_out_cubic(progress);
        self.offset = Point::new(
            warp.start.x + (warp.target.x - warp.start.x) * eased,
            warp.start.y + (warp.target.y - warp.start.y) * eased,
        );
        true
    }

    /// Center the view on the centroid of all note positions, once per
    /// session. Later note additions never re-center. Returns whether the
    /// offset was moved.
    pub fn auto_center(&mut self, screen: Screen) -> bool {
        if self.has_centered {
            return false;
        }
        let Some(centroid) = layout::centroid(self.positions.values().copied()) else {
            // Empty wall: nothing to center on. The flag stays unset so the
            // first real batch of notes can still trigger centering.
            return false;
        };
        let center = screen.center();
        self.offset = Point::new(
            center.x - (centroid.x + NOTE_CENTER_X),
            center.y - (centroid.y + NOTE_CENTER_Y),
        );
        self.has_centered = true;
        true
    }

    pub fn has_centered(&self) -> bool {
        self.has_centered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Screen = Screen {
        width: 1024.0,
        height: 768.0,
    };

    #[test]
    fn test_transform_round_trip() {
        let offsets = [
            Point::new(0.0, 0.0),
            Point::new(312.5, -87.25),
            Point::new(-9000.0, 4.0),
        ];
        let worlds = [
            Point::new(0.0, 0.0),
            Point::new(5200.0, 5100.0),
            Point::new(-0.5, 1e6),
        ];
        for offset in offsets {
            for world in worlds {
                let back = to_world(to_screen(world, offset), offset);
                assert!((back.x - world.x).abs() < 1e-9);
                assert!((back.y - world.y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_unknown_note_is_visible() {
        let state = ViewportState::new();
        assert!(state.is_visible("nope", SCREEN));
    }

    #[test]
    fn test_note_at_screen_center_is_visible() {
        let mut state = ViewportState::new();
        let center = SCREEN.center();
        state.register_position(
            "n1",
            Point::new(center.x - NOTE_CENTER_X, center.y - NOTE_CENTER_Y),
        );
        assert!(state.is_visible("n1", SCREEN));
    }

    #[test]
    fn test_far_note_is_not_visible() {
        let mut state = ViewportState::new();
        state.register_position("n1", Point::new(5200.0, 5100.0));
        assert!(!state.is_visible("n1", SCREEN));
    }

    #[test]
    fn test_note_partially_on_screen_is_visible() {
        let mut state = ViewportState::new();
        // Anchor just off the left edge; the card still overlaps the screen.
        state.register_position("n1", Point::new(-NOTE_WIDTH + 1.0, 100.0));
        assert!(state.is_visible("n1", SCREEN));
        // One more pixel left and it is fully outside.
        state.update_position("n1", Point::new(-NOTE_WIDTH, 100.0));
        assert!(!state.is_visible("n1", SCREEN));
    }

    #[test]
    fn test_visibility_tracks_offset() {
        let mut state = ViewportState::new();
        state.register_position("n1", Point::new(5000.0, 0.0));
        assert!(!state.is_visible("n1", SCREEN));
        state.pan_by(-4900.0, 0.0);
        assert!(state.is_visible("n1", SCREEN));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut state = ViewportState::new();
        assert!(state.register_position("n1", Point::new(10.0, 20.0)));
        assert!(!state.register_position("n1", Point::new(99.0, 99.0)));
        assert_eq!(state.position("n1"), Some(Point::new(10.0, 20.0)));
    }

    #[test]
    fn test_update_overwrites() {
        let mut state = ViewportState::new();
        state.register_position("n1", Point::new(10.0, 20.0));
        state.update_position("n1", Point::new(99.0, 98.0));
        assert_eq!(state.position("n1"), Some(Point::new(99.0, 98.0)));
    }

    #[test]
    fn test_pan_applies_delta() {
        let mut state = ViewportState::new();
        assert!(state.pan_by(12.0, -7.0));
        assert!(state.pan_by(3.0, 4.0));
        assert!((state.offset().x - 15.0).abs() < 1e-9);
        assert!((state.offset().y - (-3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_pan_ignored_while_warping() {
        let mut state = ViewportState::new();
        state.begin_warp(Point::new(100.0, 100.0), 0.0);
        assert!(!state.pan_by(50.0, 50.0));
        assert_eq!(state.offset(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_warp_reaches_target_exactly() {
        let mut state = ViewportState::new();
        let target = Point::new(272.0, 184.0);
        let token = state.begin_warp(target, 1000.0);
        assert!(state.tick(token, 1400.0));
        assert!(!state.tick(token, 1000.0 + WARP_DURATION_MS));
        assert_eq!(state.offset(), target);
        assert!(!state.is_animating());
    }

    #[test]
    fn test_warp_is_monotonic_toward_target() {
        let mut state = ViewportState::new();
        let token = state.begin_warp(Point::new(800.0, 0.0), 0.0);
        let mut last = 0.0;
        for step in 1..8 {
            state.tick(token, step as f64 * 100.0);
            let x = state.offset().x;
            assert!(x > last, "offset should advance every tick");
            last = x;
        }
    }

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert!((ease_out_cubic(0.0) - 0.0).abs() < 1e-9);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < 1e-9);
        // Ease-out: more than half the distance covered at the midpoint.
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_new_warp_cancels_old_one() {
        let mut state = ViewportState::new();
        let t1 = state.begin_warp(Point::new(1000.0, 0.0), 0.0);
        state.tick(t1, 200.0);
        let t2 = state.begin_warp(Point::new(-500.0, -500.0), 200.0);

        // The stale loop must stop immediately, without touching the offset.
        let before = state.offset();
        assert!(!state.tick(t1, 300.0));
        assert_eq!(state.offset(), before);

        // The new warp converges to its own target only.
        while state.tick(t2, 200.0 + WARP_DURATION_MS) {}
        assert_eq!(state.offset(), Point::new(-500.0, -500.0));
    }

    #[test]
    fn test_tick_without_warp_stops() {
        let mut state = ViewportState::new();
        assert!(!state.tick(7, 0.0));
    }

    #[test]
    fn test_auto_center_places_centroid_at_screen_center() {
        let mut state = ViewportState::new();
        state.register_position("a", Point::new(0.0, 0.0));
        state.register_position("b", Point::new(200.0, 100.0));
        assert!(state.auto_center(SCREEN));

        // Centroid (100, 50); its visual center should land on screen center.
        let offset = state.offset();
        assert!((offset.x - (512.0 - 100.0 - NOTE_CENTER_X)).abs() < 1e-9);
        assert!((offset.y - (384.0 - 50.0 - NOTE_CENTER_Y)).abs() < 1e-9);
    }

    #[test]
    fn test_auto_center_runs_once() {
        let mut state = ViewportState::new();
        state.register_position("a", Point::new(0.0, 0.0));
        assert!(state.auto_center(SCREEN));
        let first = state.offset();

        state.register_position("b", Point::new(5000.0, 5000.0));
        assert!(!state.auto_center(SCREEN));
        assert_eq!(state.offset(), first);
    }

    #[test]
    fn test_auto_center_skipped_on_empty_wall() {
        let mut state = ViewportState::new();
        assert!(!state.auto_center(SCREEN));
        assert!(!state.has_centered());
        assert_eq!(state.offset(), Point::new(0.0, 0.0));

        // Once notes arrive, centering is still available.
        state.register_position("a", Point::new(10.0, 10.0));
        assert!(state.auto_center(SCREEN));
    }
}
