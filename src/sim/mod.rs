//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `step` is one frame; no wall-clock time
//! - Stable iteration order (bricks by id)
//! - No rendering, input polling or platform dependencies

pub mod collision;
pub mod input;
pub mod state;
pub mod tick;

pub use collision::{Rect, WallContact, wall_contact};
pub use input::{Direction, HeldKeys, Key, KeyBindings, paddle_displacement};
pub use state::{
    Ball, Brick, Color, Drawable, GameEvent, Outcome, Paddle, Session, SessionStatus,
};
pub use tick::{build_brick_grid, step};
