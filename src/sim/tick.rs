//! Per-frame simulation step
//!
//! Core game loop that advances a session by exactly one frame. Motion is in
//! units per frame, so the result does not depend on wall-clock time.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{Rect, wall_contact};
use super::input::{HeldKeys, paddle_displacement};
use super::state::{Brick, Color, GameEvent, Outcome, Session, SessionStatus};
use crate::config::{BrickPalette, Config};

/// Advance the session by one frame
///
/// Order: ball motion and wall bounces, paddle motion, paddle bounce, brick
/// hits (score and paddle shrink), then the win/loss check. An ended session
/// is left untouched.
pub fn step(session: &mut Session, held: HeldKeys) -> SessionStatus {
    if !session.active {
        return session.status();
    }
    session.frame += 1;

    let screen_width = session.config.screen_width;

    // Ball integration and wall bounces
    let ball = &mut session.ball;
    ball.integrate();
    let contact = wall_contact(ball.pos, ball.radius, screen_width);
    if contact.side {
        ball.vel.x = -ball.vel.x;
        session.events.push(GameEvent::WallBounce);
    }
    if contact.ceiling {
        ball.vel.y = -ball.vel.y;
        session.events.push(GameEvent::CeilingBounce);
    }

    // Paddle motion
    let dx = paddle_displacement(held, &session.paddle, session.config.paddle_speed, screen_width);
    session.paddle.shift(dx, screen_width);

    // Paddle bounce (only while falling, so a stale overlap can't re-trigger)
    let paddle_rect = session.paddle.rect();
    let ball = &mut session.ball;
    if ball.vel.y > 0.0 && ball.rect().overlaps(&paddle_rect) {
        ball.pos.y = paddle_rect.top() - ball.radius;
        ball.vel.y = -ball.vel.y;
        session.events.push(GameEvent::PaddleHit);
        log::debug!("Paddle hit at x={} (frame {})", ball.pos.x, session.frame);
    }

    // Brick hits: every overlapping brick goes, one bounce per frame
    let ball_rect = session.ball.rect();
    let before = session.bricks.len();
    session.bricks.retain(|brick| !brick.rect.overlaps(&ball_rect));
    let destroyed = (before - session.bricks.len()) as u32;
    if destroyed > 0 {
        session.ball.vel.y = -session.ball.vel.y;
        session.score += destroyed;
        let width = session.config.paddle_width_for_score(session.score);
        session.paddle.set_width(width);
        session.events.push(GameEvent::BricksDestroyed { count: destroyed });
        log::debug!(
            "{} brick(s) destroyed, score {}, paddle width {} ({} left)",
            destroyed,
            session.score,
            width,
            session.bricks.len()
        );
    }

    // Termination: clearing the grid wins even if the ball is also leaving
    if session.bricks.is_empty() {
        session.finish(Outcome::Won);
    } else if session.ball.rect().top() > session.config.screen_height {
        session.finish(Outcome::Lost);
    }

    session.status()
}

/// Lay out the full brick grid, column by column
pub fn build_brick_grid(config: &Config) -> Vec<Brick> {
    let size = Vec2::new(config.brick_width, config.brick_height);
    let pitch = size + Vec2::new(config.brick_horizontal_padding, config.brick_vertical_padding);
    let origin = Vec2::new(config.brick_horizontal_padding, config.brick_vertical_padding);

    let mut rng = match &config.brick_palette {
        BrickPalette::Seeded { seed, .. } => Some(Pcg32::seed_from_u64(*seed)),
        BrickPalette::Solid { .. } => None,
    };

    let mut bricks = Vec::with_capacity(config.brick_count());
    for col in 0..config.brick_columns {
        for row in 0..config.brick_rows {
            let top_left = origin + Vec2::new(col as f32, row as f32) * pitch;
            let color = match (&config.brick_palette, rng.as_mut()) {
                (BrickPalette::Seeded { colors, .. }, Some(rng)) if !colors.is_empty() => {
                    colors[rng.random_range(0..colors.len())]
                }
                (BrickPalette::Solid { color }, _) => *color,
                _ => Color::BLUE,
            };
            bricks.push(Brick {
                id: bricks.len() as u32,
                rect: Rect::new(top_left, size),
                color,
            });
        }
    }
    bricks
}
