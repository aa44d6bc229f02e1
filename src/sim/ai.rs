//! Reactive AI for the right paddle
//!
//! A tracking heuristic, not a trajectory predictor: it extrapolates the
//! ball's vertical travel by one reaction-constant and steps toward that
//! point. Wall bounces between now and arrival are ignored on purpose.

use crate::consts::*;

use super::state::GameState;

/// Step the right paddle toward the ball's anticipated position.
///
/// Only engages while the ball is moving toward the AI side; otherwise the
/// paddle holds. The paddle always ends the tick fully inside the field.
pub fn step(state: &mut GameState) {
    if state.ball.vel.x <= 0.0 {
        return;
    }

    let target_y = (state.ball.center_y() + state.ball.vel.y * AI_REACTION)
        .clamp(0.0, FIELD_HEIGHT);

    let paddle = &mut state.right_paddle;
    if paddle.center_y() < target_y && paddle.rect.bottom() < FIELD_HEIGHT {
        paddle.rect.pos.y += PADDLE_SPEED;
    } else if paddle.center_y() > target_y && paddle.rect.top() > 0.0 {
        paddle.rect.pos.y -= PADDLE_SPEED;
    }
    paddle.rect.clamp_field_y(FIELD_HEIGHT);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn holds_while_ball_moves_away() {
        let mut state = GameState::new();
        state.ball.vel = Vec2::new(-5.0, 3.0);
        state.ball.rect.pos.y = 20.0; // far above the paddle
        let before = state.right_paddle.rect.pos;

        step(&mut state);
        assert_eq!(state.right_paddle.rect.pos, before);

        // Zero horizontal speed also counts as "not approaching"
        state.ball.vel.x = 0.0;
        step(&mut state);
        assert_eq!(state.right_paddle.rect.pos, before);
    }

    #[test]
    fn steps_toward_anticipated_ball_position() {
        let mut state = GameState::new();
        state.ball.vel = Vec2::new(5.0, 0.0);

        // Ball below the paddle center: move down by exactly one step
        state.ball.rect.set_center_y(state.right_paddle.center_y() + 50.0);
        let y0 = state.right_paddle.rect.pos.y;
        step(&mut state);
        assert_eq!(state.right_paddle.rect.pos.y, y0 + PADDLE_SPEED);

        // Ball above: move back up
        state.ball.rect.set_center_y(state.right_paddle.center_y() - 50.0);
        let y1 = state.right_paddle.rect.pos.y;
        step(&mut state);
        assert_eq!(state.right_paddle.rect.pos.y, y1 - PADDLE_SPEED);
    }

    #[test]
    fn anticipation_leads_the_ball_by_reaction_constant() {
        let mut state = GameState::new();
        // Ball slightly above paddle center but dropping fast: the lagged
        // target lands below center, so the paddle moves down.
        state.ball.vel = Vec2::new(5.0, 20.0);
        state.ball.rect.set_center_y(state.right_paddle.center_y() - 2.0);

        let y0 = state.right_paddle.rect.pos.y;
        step(&mut state);
        assert_eq!(state.right_paddle.rect.pos.y, y0 + PADDLE_SPEED);
    }

    #[test]
    fn paddle_never_leaves_field_bounds() {
        let mut state = GameState::new();
        state.ball.vel = Vec2::new(5.0, 0.0);

        // Chase a ball pinned to the bottom edge for several seconds
        state.ball.rect.set_center_y(FIELD_HEIGHT);
        for _ in 0..200 {
            step(&mut state);
            assert!(state.right_paddle.rect.top() >= 0.0);
            assert!(state.right_paddle.rect.bottom() <= FIELD_HEIGHT);
        }
        assert_eq!(state.right_paddle.rect.bottom(), FIELD_HEIGHT);

        // And back to the top edge
        state.ball.rect.set_center_y(0.0);
        for _ in 0..200 {
            step(&mut state);
            assert!(state.right_paddle.rect.top() >= 0.0);
            assert!(state.right_paddle.rect.bottom() <= FIELD_HEIGHT);
        }
        assert_eq!(state.right_paddle.rect.top(), 0.0);
    }

    #[test]
    fn target_is_clamped_to_field() {
        let mut state = GameState::new();
        // Huge downward speed extrapolates far past the bottom edge; the
        // clamped target still pulls the paddle down, never past the field.
        state.ball.vel = Vec2::new(5.0, 1000.0);
        state.ball.rect.set_center_y(FIELD_HEIGHT - 5.0);

        for _ in 0..100 {
            step(&mut state);
        }
        assert_eq!(state.right_paddle.rect.bottom(), FIELD_HEIGHT);
    }
}
