//! Axis-aligned rectangle geometry for track entities
//!
//! Screen coordinates throughout: x grows rightward, y grows downward, so an
//! entity's `top()` is its smallest y and `bottom()` rests on the ground.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal center, the reference point for terrain queries
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Overlap test with strict inequalities: boxes that merely share an edge
    /// do not collide
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open horizontal containment: `[left, right)`
    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left() && x < self.right()
    }
}
