//! Game state and core simulation types
//!
//! A `Session` is one play-through: it owns the paddle, the ball, the
//! remaining bricks and the score, from grid creation until win or loss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::tick::build_brick_grid;
use crate::config::Config;

/// An RGB color (cosmetic, read only by renderers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Something an external renderer can draw
pub trait Drawable {
    /// Screen-space bounds
    fn bounds(&self) -> Rect;
    fn color(&self) -> Color;
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position; y never changes
    pub center: Vec2,
    /// Current width (shrinks as the score grows)
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(center: Vec2, width: f32, height: f32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Collision/draw rectangle centered on the paddle
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.center, Vec2::new(self.width, self.height))
    }

    /// Resize while keeping the center where it is
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Move horizontally, then keep the whole paddle on screen
    ///
    /// Uses the same whole-unit split as `rect`, so an odd width's extra
    /// unit on the right still ends at the screen edge.
    pub fn shift(&mut self, dx: f32, screen_width: f32) {
        let left = (self.width / 2.0).floor();
        let right = self.width - left;
        let max = (screen_width - right).max(left);
        self.center.x = (self.center.x + dx).clamp(left, max);
    }
}

impl Drawable for Paddle {
    fn bounds(&self) -> Rect {
        self.rect()
    }

    fn color(&self) -> Color {
        Color::WHITE
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Enclosing square, used for every collision test
    pub fn rect(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Advance one frame
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }
}

impl Drawable for Ball {
    fn bounds(&self) -> Rect {
        self.rect()
    }

    fn color(&self) -> Color {
        Color::WHITE
    }
}

/// A brick in the grid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub rect: Rect,
    pub color: Color,
}

impl Drawable for Brick {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every brick destroyed
    Won,
    /// Ball left through the bottom
    Lost,
}

/// Result of advancing a session by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Ended(Outcome),
}

/// Things that happened during a frame (for audio and effects)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left or right wall
    WallBounce,
    /// Ball bounced off the top wall
    CeilingBounce,
    PaddleHit,
    BricksDestroyed { count: u32 },
    Won,
    Lost,
}

/// One play-through from a full brick grid to win or loss
#[derive(Debug, Clone)]
pub struct Session {
    pub config: Config,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Remaining bricks (ordered by id)
    pub bricks: Vec<Brick>,
    pub score: u32,
    /// Cleared once the session has been won or lost
    pub active: bool,
    pub outcome: Option<Outcome>,
    /// Frames simulated so far
    pub frame: u64,
    /// Events since the last drain
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Fresh session: full grid, score 0, paddle and ball at their start positions
    pub fn new(config: &Config) -> Self {
        let paddle = Paddle::new(
            config.paddle_start,
            config.paddle_width_for_score(0),
            config.paddle_height,
        );
        let ball = Ball::new(config.ball_start, config.ball_velocity, config.ball_radius);
        let bricks = build_brick_grid(config);

        log::info!(
            "New session: {} bricks, paddle width {}",
            bricks.len(),
            paddle.width
        );

        Self {
            config: config.clone(),
            paddle,
            ball,
            bricks,
            score: 0,
            active: true,
            outcome: None,
            frame: 0,
            events: Vec::new(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        match self.outcome {
            Some(outcome) => SessionStatus::Ended(outcome),
            None => SessionStatus::Active,
        }
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// End the session; the score is final from here on
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.active = false;
        self.outcome = Some(outcome);
        self.events.push(match outcome {
            Outcome::Won => GameEvent::Won,
            Outcome::Lost => GameEvent::Lost,
        });
        log::info!(
            "Session {:?} after {} frames with score {} ({} bricks left)",
            outcome,
            self.frame,
            self.score,
            self.bricks.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let config = Config::default();
        let session = Session::new(&config);
        assert_eq!(session.score, 0);
        assert!(session.active);
        assert_eq!(session.status(), SessionStatus::Active);
        assert_eq!(session.bricks.len(), 48);
        assert_eq!(session.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(session.ball.vel, Vec2::new(10.0, 12.0));
        assert_eq!(session.paddle.center, Vec2::new(400.0, 560.0));
    }

    #[test]
    fn test_fresh_session_paddle_width() {
        let session = Session::new(&Config::default());
        assert_eq!(session.paddle.width, 200.0);
        assert_eq!(session.paddle.rect().left(), 300.0);
    }

    #[test]
    fn test_paddle_resize_keeps_center() {
        let mut paddle = Paddle::new(Vec2::new(250.0, 560.0), 200.0, 20.0);
        paddle.set_width(150.0);
        assert_eq!(paddle.center, Vec2::new(250.0, 560.0));
        assert_eq!(paddle.rect().left(), 175.0);
        assert_eq!(paddle.rect().right(), 325.0);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let mut paddle = Paddle::new(Vec2::new(690.0, 560.0), 200.0, 20.0);
        paddle.shift(30.0, 800.0);
        assert_eq!(paddle.center.x, 700.0);
        paddle.shift(-1000.0, 800.0);
        assert_eq!(paddle.center.x, 100.0);
    }

    #[test]
    fn test_odd_width_paddle_stays_on_screen() {
        let mut paddle = Paddle::new(Vec2::new(690.0, 560.0), 195.0, 20.0);
        paddle.shift(30.0, 800.0);
        assert_eq!(paddle.center.x, 702.0);
        assert_eq!(paddle.rect().right(), 800.0);
        paddle.shift(-1000.0, 800.0);
        assert_eq!(paddle.center.x, 97.0);
        assert_eq!(paddle.rect().left(), 0.0);
    }

    #[test]
    fn test_ball_rect_encloses_circle() {
        let ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO, 10.0);
        let rect = ball.rect();
        assert_eq!(rect.left(), 390.0);
        assert_eq!(rect.top(), 290.0);
        assert_eq!(rect.size, Vec2::splat(20.0));
    }

    #[test]
    fn test_drain_events() {
        let mut session = Session::new(&Config::default());
        session.finish(Outcome::Lost);
        assert!(!session.active);
        assert_eq!(session.status(), SessionStatus::Ended(Outcome::Lost));
        assert_eq!(session.drain_events(), vec![GameEvent::Lost]);
        assert!(session.drain_events().is_empty());
    }
}
