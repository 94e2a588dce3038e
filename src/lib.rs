//! A text label widget that draws its content inset by a fixed margin on each side.
//!
//! The crate contains a small immediate-mode UI layer (geometry, a batching UI renderer and a
//! bitmap-font [`Label`](render::ui::widgets::Label)) and the
//! [`PaddedLabel`](render::ui::widgets::PaddedLabel) built on top of it.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;

pub use error::{ConfigError, ConfigResult, WidgetError};
pub use render::ui::{
    Rect,
    margins::MarginSet,
    uirenderer::UIRenderer,
    widgets::{Font, Label, LayoutContext, PaddedLabel, TextWidget, Widget},
};
