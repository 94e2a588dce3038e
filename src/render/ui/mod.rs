//! All UI related utilities.
//!
//! This module contains the geometry shared by the widgets, the margin configuration value and a
//! UI renderer that batches 2D draw commands for a GPU backend to consume.

use glam::Vec2;

pub mod margins;
pub mod uirenderer;
pub mod widgets;

/// A single vertex of a UI quad.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UIVertex {
    pub position: Vec2,
    pub uv: Vec2,
}

/// An axis-aligned rectangle in screen space, y pointing down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_min_size(min: Vec2, size: Vec2) -> Self {
        Self {
            min,
            max: min + size,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Shrinks the rectangle by the given amount on each edge.
    ///
    /// Negative amounts grow the rectangle. The result is not clamped, so insetting by more than
    /// the rectangle's extent yields a negative width or height.
    pub fn inset(&self, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self {
            min: Vec2::new(self.min.x + left, self.min.y + top),
            max: Vec2::new(self.max.x - right, self.max.y - bottom),
        }
    }
}

impl From<Rect> for [Vec2; 2] {
    fn from(rect: Rect) -> Self {
        [rect.min, rect.max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_shrinks_each_edge() {
        let rect = Rect::from_min_size(Vec2::new(10.0, 20.0), Vec2::new(200.0, 50.0));
        let inset = rect.inset(10.0, 5.0, 8.0, 4.0);

        assert_eq!(inset.min, Vec2::new(18.0, 30.0));
        assert_eq!(inset.max, Vec2::new(206.0, 65.0));
        assert_eq!(inset.size(), Vec2::new(188.0, 35.0));
    }

    #[test]
    fn test_inset_negative_margins_grow() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(20.0, 20.0));
        let grown = rect.inset(-1.0, -2.0, -3.0, -4.0);

        assert_eq!(grown, Rect::new(Vec2::new(7.0, 9.0), Vec2::new(24.0, 22.0)));
    }

    #[test]
    fn test_inset_is_not_clamped() {
        let rect = Rect::from_min_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let inset = rect.inset(6.0, 6.0, 0.0, 0.0);

        assert_eq!(inset.height(), -2.0);
        assert_eq!(inset.width(), 10.0);
    }
}
