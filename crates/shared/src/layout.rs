//! Deterministic note placement on the canvas.
//!
//! New notes land on a loose grid, jittered per-note so the wall reads as
//! hand-placed rather than ruled. The jitter is seeded from the note id, so
//! a reload reproduces the same layout without storing positions.

use crate::viewport::Point;

pub const LAYOUT_COLUMNS: usize = 3;
pub const LAYOUT_CELL_WIDTH: f64 = 360.0;
pub const LAYOUT_CELL_HEIGHT: f64 = 280.0;
pub const LAYOUT_ORIGIN: f64 = 80.0;
pub const LAYOUT_JITTER: f64 = 40.0;

/// Fold a note id into a numeric seed (sum of byte values).
pub fn id_seed(id: &str) -> u32 {
    id.bytes().fold(0u32, |acc, b| acc.wrapping_add(b as u32))
}

/// Deterministic value in `[0, 1)` from a seed and a salt.
///
/// The classic `fract(sin(seed) * 10000)` construction: not statistically
/// strong, but stable everywhere and plenty for visual jitter.
pub fn seeded_unit(seed: u32, salt: u32) -> f64 {
    let x = ((seed.wrapping_add(salt)) as f64).sin() * 10000.0;
    x - x.floor()
}

/// Grid-with-jitter position for the `index`-th note.
pub fn initial_position(index: usize, id: &str) -> Point {
    let col = index % LAYOUT_COLUMNS;
    let row = index / LAYOUT_COLUMNS;
    let seed = id_seed(id);
    let jx = (seeded_unit(seed, 0) - 0.5) * 2.0 * LAYOUT_JITTER;
    let jy = (seeded_unit(seed, 1) - 0.5) * 2.0 * LAYOUT_JITTER;
    Point::new(
        LAYOUT_ORIGIN + col as f64 * LAYOUT_CELL_WIDTH + jx,
        LAYOUT_ORIGIN + row as f64 * LAYOUT_CELL_HEIGHT + jy,
    )
}

/// Mean of a set of points; `None` when empty.
pub fn centroid<I: IntoIterator<Item = Point>>(points: I) -> Option<Point> {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut count = 0usize;
    for p in points {
        sum_x += p.x;
        sum_y += p.y;
        count += 1;
    }
    if count == 0 {
        return None;
    }
    Some(Point::new(sum_x / count as f64, sum_y / count as f64))
}
