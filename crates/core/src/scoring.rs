//! Scoring module - line clear points, levels and gravity intervals
//!
//! Classic table scoring: the points for a lock event depend only on how many
//! rows it cleared at once, multiplied by the (1-based) level in effect when
//! the piece locked. Level is derived from score, never from lines.

use crate::types::{
    LEVEL_SCORE_STEP, LINE_SCORES, SNAKE_MIN_TICK_MS, SNAKE_TICK_DECREMENT_MS,
    TETRIS_INITIAL_TICK_MS, TETRIS_MIN_TICK_MS, TETRIS_TICK_DECREMENT_MS,
};

/// Calculate line clear score
/// lines: number of lines cleared in one lock (1-4)
/// level: current level (1-based)
pub fn line_clear_points(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level for a given score: one level per [`LEVEL_SCORE_STEP`] points, starting at 1
pub fn level_for_score(score: u32) -> u32 {
    score / LEVEL_SCORE_STEP + 1
}

/// Gravity interval for a level (in milliseconds), clamped at the floor
pub fn tetris_tick_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1);
    TETRIS_INITIAL_TICK_MS
        .saturating_sub(steps.saturating_mul(TETRIS_TICK_DECREMENT_MS))
        .max(TETRIS_MIN_TICK_MS)
}

/// Snake interval after eating once at `current_ms`
pub fn snake_tick_after_food(current_ms: u32) -> u32 {
    current_ms
        .saturating_sub(SNAKE_TICK_DECREMENT_MS)
        .max(SNAKE_MIN_TICK_MS)
}
