//! Error types
//!
//! The simulation never fails at runtime. Everything here is a startup
//! problem: a bad config file or values that cannot describe a playable game.

use std::path::PathBuf;

use thiserror::Error;

/// A configuration value that cannot produce a playable game
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("screen must have positive size, got {width}x{height}")]
    ScreenSize { width: f32, height: f32 },
    #[error("frame rate must be positive")]
    FrameRate,
    #[error("max_substeps must be at least 1")]
    Substeps,
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f32 },
    #[error("paddle minimum width {min} must be in (0, {base}]")]
    PaddleMinWidth { min: f32, base: f32 },
    #[error("brick grid must have at least one row and one column, got {rows}x{columns}")]
    EmptyGrid { rows: u32, columns: u32 },
    #[error("ball of radius {radius} does not fit a {width}x{height} screen")]
    BallTooLarge { radius: f32, width: f32, height: f32 },
    #[error("{name} start ({x}, {y}) lies outside the screen")]
    StartOutOfBounds { name: &'static str, x: f32, y: f32 },
    #[error("seeded brick palette has no colors")]
    EmptyPalette,
}

/// Top-level error for startup and config loading
#[derive(Debug, Error)]
pub enum BreakoutError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] serde_json::Error),
    #[error("failed to serialize config: {0}")]
    WriteConfig(#[source] serde_json::Error),
}
