//! Scoring and serve reset
//!
//! A ball leaving the field horizontally awards the opposite side a point and
//! re-centers the ball. Every serve is perfectly horizontal and travels
//! toward the side that just scored. There is no win condition.

use crate::consts::*;

use super::state::{Ball, GameEvent, GameState, Side};

/// Check for an out-of-bounds ball, award the point, and reset the serve.
pub fn step(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.ball.rect.left() <= 0.0 {
        state.right_score += 1;
        state.ball = Ball::serve(Side::Right);
        events.push(GameEvent::Score(Side::Right));
    }
    if state.ball.rect.right() >= FIELD_WIDTH {
        state.left_score += 1;
        state.ball = Ball::serve(Side::Left);
        events.push(GameEvent::Score(Side::Left));
    }
}
