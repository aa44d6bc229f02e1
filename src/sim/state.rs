//! Game state and core simulation types
//!
//! Everything the per-tick step functions read or mutate lives here; there is
//! no ambient state anywhere else in the crate.

use glam::Vec2;

use crate::consts::*;

/// Which side of the field an entity or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Pointer-controlled paddle
    Left,
    /// AI-controlled paddle
    Right,
}

/// Axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Place the rectangle so its center lands on `center`
    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    /// Place the rectangle so its vertical center lands on `y`
    pub fn set_center_y(&mut self, y: f32) {
        self.pos.y = y - self.size.y * 0.5;
    }

    /// Strict axis-aligned overlap test (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Clamp vertically so the rectangle stays fully inside `[0, field_h]`
    pub fn clamp_field_y(&mut self, field_h: f32) {
        if self.top() < 0.0 {
            self.pos.y = 0.0;
        } else if self.bottom() > field_h {
            self.pos.y = field_h - self.size.y;
        }
    }
}

/// A player paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle for `side`, vertically centered at its fixed horizontal offset
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => FIELD_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        };
        let y = FIELD_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0;
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.rect.center().y
    }
}

/// The ball: a square rect plus a signed velocity vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub vel: Vec2,
}

impl Ball {
    /// Ball centered in the field, serving horizontally toward `dir`
    pub fn serve(dir: Side) -> Self {
        let vx = match dir {
            Side::Right => BALL_BASE_SPEED,
            Side::Left => -BALL_BASE_SPEED,
        };
        let mut rect = Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE);
        rect.set_center(Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
        Self {
            rect,
            vel: Vec2::new(vx, 0.0),
        }
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.rect.center().y
    }
}

/// Discrete events emitted by a tick, consumed by the audio/platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball bounced off a paddle
    PaddleHit,
    /// Ball bounced off the top or bottom wall
    WallHit,
    /// The named side scored a point
    Score(Side),
}

/// Complete game state, threaded explicitly through every step function
#[derive(Debug, Clone)]
pub struct GameState {
    pub left_paddle: Paddle,
    pub right_paddle: Paddle,
    pub ball: Ball,
    pub left_score: u32,
    pub right_score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Initial layout: paddles centered, ball at field center serving right
    pub fn new() -> Self {
        Self {
            left_paddle: Paddle::new(Side::Left),
            right_paddle: Paddle::new(Side::Right),
            ball: Ball::serve(Side::Right),
            left_score: 0,
            right_score: 0,
            time_ticks: 0,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout_is_centered() {
        let state = GameState::new();

        assert_eq!(state.left_paddle.rect.left(), PADDLE_MARGIN);
        assert_eq!(
            state.right_paddle.rect.right(),
            FIELD_WIDTH - PADDLE_MARGIN
        );
        assert_eq!(state.left_paddle.center_y(), FIELD_HEIGHT / 2.0);
        assert_eq!(state.right_paddle.center_y(), FIELD_HEIGHT / 2.0);

        assert_eq!(
            state.ball.rect.center(),
            Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0)
        );
        assert_eq!(state.ball.vel, Vec2::new(BALL_BASE_SPEED, 0.0));
        assert_eq!(state.left_score, 0);
        assert_eq!(state.right_score, 0);
    }

    #[test]
    fn rect_intersection_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 10.0, 10.0);
        let overlapping = Rect::new(9.0, 9.0, 10.0, 10.0);
        let apart = Rect::new(30.0, 30.0, 10.0, 10.0);

        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(!a.intersects(&apart));
    }

    #[test]
    fn clamp_keeps_rect_inside_field() {
        let mut above = Rect::new(0.0, -25.0, 10.0, 60.0);
        above.clamp_field_y(FIELD_HEIGHT);
        assert_eq!(above.top(), 0.0);

        let mut below = Rect::new(0.0, FIELD_HEIGHT - 10.0, 10.0, 60.0);
        below.clamp_field_y(FIELD_HEIGHT);
        assert_eq!(below.bottom(), FIELD_HEIGHT);
    }
}
