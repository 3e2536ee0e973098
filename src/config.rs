//! Game configuration
//!
//! One structure carries every tunable the simulation reads. It is built once
//! at startup (defaults or a JSON file) and handed to each new session.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::app::Flow;
use crate::consts::*;
use crate::error::{BreakoutError, ConfigError};
use crate::sim::{Color, KeyBindings};

/// How bricks are colored (cosmetic only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrickPalette {
    /// Every brick gets the same color
    Solid { color: Color },
    /// Each brick draws a color from `colors` with an RNG seeded by `seed`
    Seeded { seed: u64, colors: Vec<Color> },
}

impl Default for BrickPalette {
    fn default() -> Self {
        BrickPalette::Solid { color: Color::BLUE }
    }
}

/// Startup configuration for the whole game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation frames per second
    pub frame_rate: u32,
    /// Cap on frames simulated per driver update
    pub max_substeps: u32,
    /// Which menu/start-screen flow to run
    pub flow: Flow,
    pub key_bindings: KeyBindings,

    // === Paddle ===
    /// Width at score 0
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Units moved per frame while a direction is held
    pub paddle_speed: f32,
    pub paddle_min_width: f32,
    /// Width lost per point scored
    pub paddle_shrink_rate: f32,
    /// Center position at session start
    pub paddle_start: Vec2,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start: Vec2,
    /// Units per frame
    pub ball_velocity: Vec2,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_horizontal_padding: f32,
    pub brick_vertical_padding: f32,
    pub brick_palette: BrickPalette,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            frame_rate: FRAME_RATE,
            max_substeps: MAX_SUBSTEPS,
            flow: Flow::StartScreen,
            key_bindings: KeyBindings::default(),

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_min_width: PADDLE_MIN_WIDTH,
            paddle_shrink_rate: PADDLE_SHRINK_RATE,
            paddle_start: Vec2::new(PADDLE_START_X, PADDLE_START_Y),

            ball_radius: BALL_RADIUS,
            ball_start: Vec2::new(BALL_START_X, BALL_START_Y),
            ball_velocity: Vec2::new(BALL_START_VX, BALL_START_VY),

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_horizontal_padding: BRICK_HORIZONTAL_PADDING,
            brick_vertical_padding: BRICK_VERTICAL_PADDING,
            brick_palette: BrickPalette::default(),
        }
    }
}

impl Config {
    /// The reference game: 800x600, 6x8 bricks, start screen before every game
    pub fn classic() -> Self {
        Self::default()
    }

    /// The smaller menu-driven variant: 700x500, 5x8 bricks, main menu flow
    pub fn compact() -> Self {
        let (width, height) = (700.0, 500.0);
        Self {
            screen_width: width,
            screen_height: height,
            flow: Flow::MainMenu,
            paddle_start: Vec2::new(width / 2.0, height - 40.0),
            ball_start: Vec2::new(width / 2.0, height / 2.0),
            brick_rows: 5,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, BreakoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, BreakoutError> {
        let json = std::fs::read_to_string(path).map_err(|source| BreakoutError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, BreakoutError> {
        serde_json::to_string_pretty(self).map_err(BreakoutError::WriteConfig)
    }

    /// Seconds per simulation frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }

    /// Bricks in a full grid
    pub fn brick_count(&self) -> usize {
        self.brick_rows as usize * self.brick_columns as usize
    }

    /// Paddle width for a given score: shrinks linearly, never below the minimum
    pub fn paddle_width_for_score(&self, score: u32) -> f32 {
        (self.paddle_width - score as f32 * self.paddle_shrink_rate).max(self.paddle_min_width)
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(ConfigError::ScreenSize {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.frame_rate == 0 {
            return Err(ConfigError::FrameRate);
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Substeps);
        }

        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let non_negative = [
            ("paddle_shrink_rate", self.paddle_shrink_rate),
            ("brick_horizontal_padding", self.brick_horizontal_padding),
            ("brick_vertical_padding", self.brick_vertical_padding),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }

        if !(self.paddle_min_width > 0.0 && self.paddle_min_width <= self.paddle_width) {
            return Err(ConfigError::PaddleMinWidth {
                min: self.paddle_min_width,
                base: self.paddle_width,
            });
        }
        if self.brick_rows == 0 || self.brick_columns == 0 {
            return Err(ConfigError::EmptyGrid {
                rows: self.brick_rows,
                columns: self.brick_columns,
            });
        }
        if self.ball_radius * 2.0 >= self.screen_width.min(self.screen_height) {
            return Err(ConfigError::BallTooLarge {
                radius: self.ball_radius,
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        for (name, pos) in [("paddle", self.paddle_start), ("ball", self.ball_start)] {
            if !self.on_screen(pos) {
                return Err(ConfigError::StartOutOfBounds { name, x: pos.x, y: pos.y });
            }
        }
        if let BrickPalette::Seeded { colors, .. } = &self.brick_palette
            && colors.is_empty()
        {
            return Err(ConfigError::EmptyPalette);
        }

        let offscreen = self.offscreen_bricks();
        if offscreen > 0 {
            log::warn!(
                "{} of {} bricks extend past the {}x{} screen",
                offscreen,
                self.brick_count(),
                self.screen_width,
                self.screen_height
            );
        }

        Ok(())
    }

    fn on_screen(&self, pos: Vec2) -> bool {
        (0.0..=self.screen_width).contains(&pos.x) && (0.0..=self.screen_height).contains(&pos.y)
    }

    /// Bricks whose rectangle is not fully inside the screen
    pub fn offscreen_bricks(&self) -> usize {
        let pitch_x = self.brick_width + self.brick_horizontal_padding;
        let pitch_y = self.brick_height + self.brick_vertical_padding;
        let columns_out = (0..self.brick_columns)
            .filter(|&col| {
                self.brick_horizontal_padding + col as f32 * pitch_x + self.brick_width
                    > self.screen_width
            })
            .count();
        let rows_out = (0..self.brick_rows)
            .filter(|&row| {
                self.brick_vertical_padding + row as f32 * pitch_y + self.brick_height
                    > self.screen_height
            })
            .count();
        let columns_in = self.brick_columns as usize - columns_out;
        // Everything not in an on-screen column and on-screen row
        self.brick_count() - columns_in * (self.brick_rows as usize - rows_out)
    }
}
