//! Ball physics and collision response
//!
//! One Euler step per tick, then wall and paddle collision resolution. The
//! ball's position is never clamped here; only velocity signs and magnitudes
//! change on contact.

use crate::consts::*;

use super::state::{GameEvent, GameState, Paddle};

/// Advance the ball one tick and resolve wall/paddle contact.
///
/// At most one paddle hit is processed per tick; if the ball somehow overlaps
/// both paddles in the same frame, the left paddle wins.
pub fn step(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.ball.rect.pos += state.ball.vel;

    // Wall bounce: sign inversion only, no positional correction. Two
    // consecutive overlapping ticks re-invert, restoring the original sign.
    if state.ball.rect.top() <= 0.0 || state.ball.rect.bottom() >= FIELD_HEIGHT {
        state.ball.vel.y = -state.ball.vel.y;
        events.push(GameEvent::WallHit);
    }

    let hit_paddle = if state.ball.rect.intersects(&state.left_paddle.rect) {
        Some(&state.left_paddle)
    } else if state.ball.rect.intersects(&state.right_paddle.rect) {
        Some(&state.right_paddle)
    } else {
        None
    };

    if let Some(paddle) = hit_paddle {
        let offset = contact_offset(state.ball.rect.center().y, paddle);
        state.ball.vel.x = -state.ball.vel.x * PADDLE_HIT_SPEEDUP;
        state.ball.vel.y = BALL_BASE_SPEED * offset * HIT_SPIN_FACTOR;
        events.push(GameEvent::PaddleHit);
    }
}

/// Signed vertical contact position on the paddle face.
///
/// Roughly [-1, 1] for face contact, but deliberately unclamped: a corner
/// graze past the paddle edge yields |offset| > 1 and a correspondingly
/// steep exit angle.
fn contact_offset(ball_center_y: f32, paddle: &Paddle) -> f32 {
    (ball_center_y - paddle.center_y()) / (PADDLE_HEIGHT / 2.0)
}
