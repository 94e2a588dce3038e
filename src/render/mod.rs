//! Rendering.

pub mod ui;
