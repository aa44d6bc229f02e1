//! Declarative frame rendering
//!
//! The simulation never draws. Each frame the orchestrator's caller asks for
//! a command list describing the 600x400 canvas and hands it to whatever
//! backend is attached. This keeps the whole of `sim` headless-testable.

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Rect, Side};

/// Horizontal alignment for text commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Right,
}

/// A single draw command against the logical canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    /// Fill the canvas with the background color
    Clear,
    /// Filled rectangle in the foreground color
    FillRect(Rect),
    /// One side's score, rendered as integer glyphs at `anchor`
    ScoreText {
        side: Side,
        value: u32,
        anchor: Vec2,
        align: HAlign,
    },
}

/// Number of center-line dashes down the field
const DASH_COUNT: u32 = 20;

/// Build the draw-command list for the current state.
///
/// Order matters: background first, then dashes, paddles, ball, scores.
pub fn frame_commands(state: &GameState) -> Vec<DrawCmd> {
    let mut cmds = Vec::with_capacity(DASH_COUNT as usize + 6);
    cmds.push(DrawCmd::Clear);

    let dash_step = FIELD_HEIGHT / DASH_COUNT as f32;
    let dash_h = FIELD_HEIGHT / 40.0;
    for i in 0..DASH_COUNT {
        cmds.push(DrawCmd::FillRect(Rect::new(
            FIELD_WIDTH / 2.0 - 2.0,
            i as f32 * dash_step,
            4.0,
            dash_h,
        )));
    }

    cmds.push(DrawCmd::FillRect(state.left_paddle.rect));
    cmds.push(DrawCmd::FillRect(state.right_paddle.rect));
    cmds.push(DrawCmd::FillRect(state.ball.rect));

    cmds.push(DrawCmd::ScoreText {
        side: Side::Left,
        value: state.left_score,
        anchor: Vec2::new(FIELD_WIDTH / 4.0, 20.0),
        align: HAlign::Left,
    });
    cmds.push(DrawCmd::ScoreText {
        side: Side::Right,
        value: state.right_score,
        anchor: Vec2::new(FIELD_WIDTH * 3.0 / 4.0, 20.0),
        align: HAlign::Right,
    });

    cmds
}
