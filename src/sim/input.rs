//! Paddle input
//!
//! The simulation never polls devices. A driver hands it a snapshot of which
//! logical directions are held, and the resolver turns that into a paddle
//! displacement for the frame.

use serde::{Deserialize, Serialize};

use super::state::Paddle;

/// Physical keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    A,
    D,
}

/// Logical paddle direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Which keys steer which way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub bindings: Vec<(Key, Direction)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (Key::ArrowLeft, Direction::Left),
                (Key::A, Direction::Left),
                (Key::ArrowRight, Direction::Right),
                (Key::D, Direction::Right),
            ],
        }
    }
}

impl KeyBindings {
    pub fn direction(&self, key: Key) -> Option<Direction> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|&(_, dir)| dir)
    }

    /// Build a held-direction snapshot from the keys currently pressed
    pub fn resolve<I>(&self, pressed: I) -> HeldKeys
    where
        I: IntoIterator<Item = Key>,
    {
        let mut held = HeldKeys::default();
        for key in pressed {
            match self.direction(key) {
                Some(Direction::Left) => held.left = true,
                Some(Direction::Right) => held.right = true,
                None => {}
            }
        }
        held
    }
}

/// Directions held during a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    pub const NONE: HeldKeys = HeldKeys {
        left: false,
        right: false,
    };
    pub const LEFT: HeldKeys = HeldKeys {
        left: true,
        right: false,
    };
    pub const RIGHT: HeldKeys = HeldKeys {
        left: false,
        right: true,
    };
}

/// Horizontal paddle displacement for this frame
///
/// Each direction is checked on its own: right adds `speed` while the right
/// edge is short of the screen edge, left subtracts `speed` while the left
/// edge is past zero. Holding both cancels out only when both checks pass.
pub fn paddle_displacement(held: HeldKeys, paddle: &Paddle, speed: f32, screen_width: f32) -> f32 {
    let rect = paddle.rect();
    let mut dx = 0.0;
    if held.right && rect.right() < screen_width {
        dx += speed;
    }
    if held.left && rect.left() > 0.0 {
        dx -= speed;
    }
    dx
}
