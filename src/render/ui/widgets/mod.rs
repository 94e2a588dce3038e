//! Contains all widgets and the `Widget` trait for building user interfaces.

use glam::Vec2;

use super::{Rect, uirenderer::UIRenderer};

/// Context provided to widgets during the layout phase.
pub struct LayoutContext {
    pub max_size: Vec2,
    pub cursor: Vec2,
}

/// A widget trait for building user interfaces.
pub trait Widget {
    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;

    /// Gives a hint of the desired size of the widget.
    fn size_hint(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Updates the widget layout given the available space.
    fn layout(&mut self, ctx: &LayoutContext) -> Vec2;

    /// Draws the widget with the given UI renderer.
    fn draw(&self, ui_renderer: &mut UIRenderer);
}

/// A widget that displays a piece of text.
///
/// Anything that accepts a `&dyn TextWidget` works with a plain [`Label`] as well as with
/// wrappers around it such as [`PaddedLabel`].
pub trait TextWidget: Widget {
    fn text(&self) -> &str;
    fn set_text(&mut self, text: &str);

    /// The rectangle assigned by the last layout pass.
    fn rect(&self) -> Rect;

    /// Draws the text into `rect`.
    fn draw_text(&self, rect: Rect, ui_renderer: &mut UIRenderer);
}

pub mod label;
pub mod padded_label;

pub use label::*;
pub use padded_label::*;
