//! Idle/demo mode - the computer plays the game
//!
//! Produces the same input a player would: menu clicks, key releases, and
//! held directions that steer the paddle under the ball's predicted landing.

use crate::app::{App, AppState, FrameInput, MenuChoice};
use crate::sim::{HeldKeys, Session};

/// Demo player
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Don't chase targets closer than this to the paddle center
    pub dead_zone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { dead_zone: 15.0 }
    }
}

impl Autopilot {
    /// Input for the app's current screen
    pub fn input(&self, app: &App) -> FrameInput {
        match app.state() {
            AppState::Menu => FrameInput {
                menu: Some(MenuChoice::Play),
                ..Default::default()
            },
            AppState::StartScreen | AppState::GameOver => FrameInput {
                key_released: true,
                ..Default::default()
            },
            AppState::Playing => FrameInput {
                held: app.session().map(|s| self.steer(s)).unwrap_or_default(),
                ..Default::default()
            },
            AppState::Quit => FrameInput::default(),
        }
    }

    /// Held directions that move the paddle toward the target x
    pub fn steer(&self, session: &Session) -> HeldKeys {
        let target = target_x(session);
        let paddle_x = session.paddle.center.x;
        if target > paddle_x + self.dead_zone {
            HeldKeys::RIGHT
        } else if target < paddle_x - self.dead_zone {
            HeldKeys::LEFT
        } else {
            HeldKeys::NONE
        }
    }
}

/// Where the ball will cross the paddle's top edge, or its current x while rising
pub fn target_x(session: &Session) -> f32 {
    let ball = &session.ball;
    if ball.vel.y <= 0.0 {
        return ball.pos.x;
    }

    let contact_y = session.paddle.rect().top() - ball.radius;
    let frames = ((contact_y - ball.pos.y) / ball.vel.y).max(0.0);
    let x = ball.pos.x + ball.vel.x * frames;

    // Fold the straight-line guess back between the side walls
    let min = ball.radius;
    let span = session.config.screen_width - 2.0 * ball.radius;
    if span <= 0.0 {
        return ball.pos.x;
    }
    let t = (x - min).rem_euclid(2.0 * span);
    if t > span { min + 2.0 * span - t } else { min + t }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{GameEvent, step};
    use glam::Vec2;

    #[test]
    fn test_target_straight_down() {
        let mut session = Session::new(&Config::default());
        session.ball.pos = Vec2::new(400.0, 300.0);
        session.ball.vel = Vec2::new(10.0, 12.0);
        // 20 frames to y=540
        assert_eq!(target_x(&session), 600.0);
    }

    #[test]
    fn test_target_folds_off_wall() {
        let mut session = Session::new(&Config::default());
        session.ball.pos = Vec2::new(700.0, 300.0);
        session.ball.vel = Vec2::new(10.0, 12.0);
        // Straight line says 900; reflected off x=790 gives 680
        assert_eq!(target_x(&session), 680.0);
    }

    #[test]
    fn test_rising_ball_is_tracked_directly() {
        let mut session = Session::new(&Config::default());
        session.ball.pos = Vec2::new(123.0, 300.0);
        session.ball.vel = Vec2::new(10.0, -12.0);
        assert_eq!(target_x(&session), 123.0);
    }

    #[test]
    fn test_steer() {
        let pilot = Autopilot::default();
        let mut session = Session::new(&Config::default());
        session.ball.vel = Vec2::new(0.0, -12.0);

        session.ball.pos.x = 600.0;
        assert_eq!(pilot.steer(&session), HeldKeys::RIGHT);
        session.ball.pos.x = 200.0;
        assert_eq!(pilot.steer(&session), HeldKeys::LEFT);
        session.ball.pos.x = 410.0;
        assert_eq!(pilot.steer(&session), HeldKeys::NONE);
    }

    #[test]
    fn test_autopilot_returns_first_ball() {
        let pilot = Autopilot::default();
        let mut session = Session::new(&Config::default());
        let mut paddle_hits = 0;
        for _ in 0..60 {
            let held = pilot.steer(&session);
            step(&mut session, held);
            paddle_hits += session
                .drain_events()
                .iter()
                .filter(|e| **e == GameEvent::PaddleHit)
                .count();
        }
        assert!(session.active);
        assert!(paddle_hits >= 1);
    }

    #[test]
    fn test_drives_menus() {
        let pilot = Autopilot::default();
        let mut app = App::new(Config::compact()).unwrap();
        let dt = app.config().frame_dt();
        assert_eq!(app.update(dt, &pilot.input(&app)), AppState::Playing);

        let mut app = App::new(Config::classic()).unwrap();
        assert_eq!(app.update(dt, &pilot.input(&app)), AppState::Playing);
    }
}
