//! Render sink contract
//!
//! Once per frame the app exposes what is on screen as plain data. Renderers
//! read it and never touch simulation state.

use serde::Serialize;

use crate::app::{App, AppState, GameSummary};
use crate::sim::{Color, Drawable, GameEvent, Rect, Session};

/// How a sprite should be drawn inside its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Shape {
    Rectangle,
    /// Circle inscribed in the bounds
    Circle,
}

/// A drawable snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sprite {
    pub shape: Shape,
    pub bounds: Rect,
    pub color: Color,
}

impl Sprite {
    pub fn of<D: Drawable>(item: &D, shape: Shape) -> Self {
        Self {
            shape,
            bounds: item.bounds(),
            color: item.color(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub state: AppState,
    pub screen_width: f32,
    pub screen_height: f32,
    pub score: u32,
    /// Paddle, ball, then bricks; empty when no session exists
    pub sprites: Vec<Sprite>,
    /// Set on the game-over screen
    pub summary: Option<GameSummary>,
    /// Events from the frames simulated since the previous view
    pub events: Vec<GameEvent>,
}

impl FrameView {
    pub fn capture(app: &App) -> Self {
        let config = app.config();
        let session = match app.state() {
            AppState::Playing | AppState::GameOver => app.session(),
            _ => None,
        };
        Self {
            state: app.state(),
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            score: session.map(|s| s.score).unwrap_or(0),
            sprites: session.map(sprites).unwrap_or_default(),
            summary: app.summary(),
            events: app.events().to_vec(),
        }
    }
}

fn sprites(session: &Session) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(session.bricks.len() + 2);
    sprites.push(Sprite::of(&session.paddle, Shape::Rectangle));
    sprites.push(Sprite::of(&session.ball, Shape::Circle));
    sprites.extend(session.bricks.iter().map(|b| Sprite::of(b, Shape::Rectangle)));
    sprites
}

/// Something that presents frames (window, terminal, recorder...)
pub trait RenderSink {
    fn present(&mut self, frame: &FrameView);
}

/// Headless sink: logs screen changes and a periodic score line
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
    last_state: Option<AppState>,
}

impl LogSink {
    /// Score line interval while playing
    const REPORT_EVERY: u64 = 300;

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl RenderSink for LogSink {
    fn present(&mut self, frame: &FrameView) {
        self.frames += 1;
        if self.last_state != Some(frame.state) {
            self.last_state = Some(frame.state);
            match (frame.state, frame.summary) {
                (AppState::GameOver, Some(summary)) => log::info!(
                    "GAME OVER - {:?}, score {} in {} frames",
                    summary.outcome,
                    summary.score,
                    summary.frames
                ),
                (state, _) => log::info!("Screen: {:?}", state),
            }
        }
        if frame.state == AppState::Playing && self.frames.is_multiple_of(Self::REPORT_EVERY) {
            log::info!(
                "Score: {} ({} bricks left)",
                frame.score,
                frame.sprites.len().saturating_sub(2)
            );
        }
        for event in &frame.events {
            log::debug!("Event: {:?}", event);
        }
        log::trace!("{}", serde_json::to_string(frame).unwrap_or_default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::FrameInput;
    use crate::config::Config;

    #[test]
    fn test_no_sprites_before_play() {
        let app = App::new(Config::classic()).unwrap();
        let view = FrameView::capture(&app);
        assert_eq!(view.state, AppState::StartScreen);
        assert!(view.sprites.is_empty());
        assert_eq!(view.score, 0);
        assert_eq!(view.summary, None);
    }

    #[test]
    fn test_playing_view() {
        let mut app = App::new(Config::classic()).unwrap();
        app.update(
            0.0,
            &FrameInput {
                key_released: true,
                ..Default::default()
            },
        );
        let view = FrameView::capture(&app);
        assert_eq!(view.sprites.len(), 2 + 48);
        assert_eq!(view.sprites[0].shape, Shape::Rectangle);
        assert_eq!(view.sprites[0].bounds.size.x, 200.0);
        assert_eq!(view.sprites[1].shape, Shape::Circle);
        assert_eq!(view.sprites[1].color, Color::WHITE);
        assert_eq!(view.sprites[2].color, Color::BLUE);
        assert!(view.events.is_empty());
    }

    #[test]
    fn test_view_carries_frame_events() {
        let mut app = App::new(Config::classic()).unwrap();
        let dt = app.config().frame_dt();
        app.update(
            dt,
            &FrameInput {
                key_released: true,
                ..Default::default()
            },
        );
        let session = app.session_mut().unwrap();
        session.ball.pos = glam::Vec2::new(785.0, 400.0);
        session.ball.vel = glam::Vec2::new(10.0, -12.0);
        app.update(dt, &FrameInput::default());

        let view = FrameView::capture(&app);
        assert_eq!(view.events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_view_serializes() {
        let app = App::new(Config::compact()).unwrap();
        let json = serde_json::to_value(FrameView::capture(&app)).unwrap();
        assert_eq!(json["state"], "Menu");
        assert_eq!(json["screen_width"], 700.0);
    }

    #[test]
    fn test_log_sink_counts_frames() {
        let app = App::new(Config::classic()).unwrap();
        let mut sink = LogSink::default();
        let view = FrameView::capture(&app);
        sink.present(&view);
        sink.present(&view);
        assert_eq!(sink.frames(), 2);
    }
}
