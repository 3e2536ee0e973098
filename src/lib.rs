//! Breakout - a paddle, a ball and a wall of bricks
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, scoring, termination)
//! - `app`: Menu / start screen / play / game-over state machine and frame driver
//! - `render`: Per-frame snapshot handed to an external renderer
//! - `config`: Startup configuration
//! - `autopilot`: Idle/demo input generator

pub mod app;
pub mod autopilot;
pub mod config;
pub mod error;
pub mod render;
pub mod sim;

pub use app::{App, AppAction, AppState, Flow};
pub use config::{BrickPalette, Config};
pub use error::{BreakoutError, ConfigError};

/// Reference game constants
pub mod consts {
    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Frames per second of the reference game loop
    pub const FRAME_RATE: u32 = 30;
    /// Maximum frames simulated per driver update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 200.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_START_X: f32 = SCREEN_WIDTH / 2.0;
    pub const PADDLE_START_Y: f32 = SCREEN_HEIGHT - 40.0;
    /// Units per frame while a direction key is held
    pub const PADDLE_SPEED: f32 = 30.0;
    pub const PADDLE_MIN_WIDTH: f32 = 60.0;
    /// Width lost per point scored
    pub const PADDLE_SHRINK_RATE: f32 = 5.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = SCREEN_WIDTH / 2.0;
    pub const BALL_START_Y: f32 = SCREEN_HEIGHT / 2.0;
    pub const BALL_START_VX: f32 = 10.0;
    pub const BALL_START_VY: f32 = 12.0;

    /// Brick grid defaults
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROWS: u32 = 6;
    pub const BRICK_COLUMNS: u32 = 8;
    pub const BRICK_HORIZONTAL_PADDING: f32 = 50.0;
    pub const BRICK_VERTICAL_PADDING: f32 = 20.0;
}
