//! Collision geometry
//!
//! Every shape collides as an axis-aligned rectangle, the ball included (its
//! enclosing square). This is coarser than a true circle test near paddle and
//! brick corners, and is kept that way on purpose.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            size,
        }
    }

    /// Rectangle of `size` centered on `center`
    ///
    /// Half extents are floored to whole units, so an odd width puts the
    /// extra unit on the right (and an odd height at the bottom).
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = (size / 2.0).floor();
        Self {
            min: center - half,
            size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Strict overlap test: rectangles that only share an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Which screen walls the ball is touching this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    /// Top wall
    pub ceiling: bool,
}

/// Check the ball center against the left, right and top walls
///
/// There is no bottom wall: leaving through the bottom loses the game.
pub fn wall_contact(pos: Vec2, radius: f32, screen_width: f32) -> WallContact {
    WallContact {
        side: pos.x <= radius || pos.x >= screen_width - radius,
        ceiling: pos.y <= radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_center_even() {
        let rect = Rect::from_center(Vec2::new(400.0, 560.0), Vec2::new(200.0, 20.0));
        assert_eq!(rect.left(), 300.0);
        assert_eq!(rect.right(), 500.0);
        assert_eq!(rect.top(), 550.0);
        assert_eq!(rect.bottom(), 570.0);
    }

    #[test]
    fn test_rect_from_center_odd_width() {
        let rect = Rect::from_center(Vec2::new(400.0, 560.0), Vec2::new(195.0, 20.0));
        assert_eq!(rect.left(), 303.0);
        assert_eq!(rect.right(), 498.0);
    }

    #[test]
    fn test_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(10.0, 10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let right = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        let below = Rect::new(Vec2::new(0.0, 10.0), Vec2::new(10.0, 10.0));
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_square_hits_where_circle_would_miss() {
        // Ball square corner clips the brick corner; the circle itself would not reach it
        let ball = Rect::from_center(Vec2::new(100.0, 100.0), Vec2::splat(20.0));
        let brick = Rect::new(Vec2::new(108.0, 108.0), Vec2::new(100.0, 30.0));
        let closest = Vec2::new(108.0, 108.0);
        assert!(closest.distance(Vec2::new(100.0, 100.0)) > 10.0);
        assert!(ball.overlaps(&brick));
    }

    #[test]
    fn test_wall_contact() {
        let width = 800.0;
        assert_eq!(wall_contact(Vec2::new(400.0, 300.0), 10.0, width), WallContact::default());
        assert!(wall_contact(Vec2::new(10.0, 300.0), 10.0, width).side);
        assert!(wall_contact(Vec2::new(790.0, 300.0), 10.0, width).side);
        assert!(!wall_contact(Vec2::new(789.0, 300.0), 10.0, width).side);
        assert!(wall_contact(Vec2::new(400.0, 10.0), 10.0, width).ceiling);
        // No floor
        assert_eq!(wall_contact(Vec2::new(400.0, 900.0), 10.0, width), WallContact::default());
    }
}
