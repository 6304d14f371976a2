//! Scoring module - line clear points, drop bonuses, levels, and gravity
//!
//! - Line clears pay `LINE_SCORES[rows] * level` (100/300/500/800 at level 1).
//! - Soft drop pays 1 point per cell, hard drop 2 points per cell fallen.
//! - Level is `lines / 10 + 1`; gravity starts at 500ms per row and speeds up by
//!   50ms per level down to a 50ms floor.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS,
    SOFT_DROP_POINTS,
};

/// Points for clearing `lines` rows in one placement at `level` (1-based).
///
/// Anything outside 1..=4 rows pays nothing.
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    LINE_SCORES
        .get(lines)
        .map_or(0, |base| base.saturating_mul(level))
}

/// Drop bonus: soft drop +1 per cell, hard drop +2 per cell
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * HARD_DROP_POINTS
    } else {
        cells * SOFT_DROP_POINTS
    }
}

/// Level for a running line total (starts at 1)
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval in milliseconds for a level
pub fn fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}
