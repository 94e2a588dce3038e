//! A label that keeps a fixed margin between its bounds and its text.

use glam::Vec2;
use serde::{Deserialize, Deserializer};

use crate::{
    error::WidgetError,
    render::ui::{
        Rect,
        margins::MarginSet,
        uirenderer::UIRenderer,
        widgets::{Label, LayoutContext, TextWidget, Widget},
    },
};

/// A [`Label`] drawn inset by a margin on each side.
///
/// The margins are fixed when the widget is created. The natural size is the inner label's
/// natural size plus the margins, and the text is drawn into the assigned rectangle shrunk by the
/// margins. Both are recomputed on every call, so changes to the inner label's text or font show
/// up on the next query.
pub struct PaddedLabel {
    label: Label,
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
    rect: Rect,
}

impl PaddedLabel {
    /// Wraps `label` with the given margins. Margins are not validated; negative values expand
    /// the text rectangle past the widget's bounds.
    pub fn new(label: Label, top: f32, bottom: f32, left: f32, right: f32) -> Self {
        log::debug!(
            "PaddedLabel {:?}: margins top={top} bottom={bottom} left={left} right={right}",
            label.text
        );
        Self {
            label,
            top,
            bottom,
            left,
            right,
            rect: Rect::ZERO,
        }
    }

    /// Same as [`PaddedLabel::new`] with the margins taken from a [`MarginSet`].
    pub fn from_margins(label: Label, margins: MarginSet) -> Self {
        Self::new(
            label,
            margins.top,
            margins.bottom,
            margins.left,
            margins.right,
        )
    }

    /// Building a `PaddedLabel` from decoded data is not supported and always fails.
    ///
    /// The deserializer is left untouched.
    pub fn try_decode<'de, D: Deserializer<'de>>(_deserializer: D) -> Result<Self, WidgetError> {
        let err = WidgetError::UnsupportedConstructionPath {
            widget: "PaddedLabel",
        };
        log::error!("{err}");
        Err(err)
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn margins(&self) -> MarginSet {
        MarginSet::new(self.top, self.bottom, self.left, self.right)
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut Label {
        &mut self.label
    }

    /// The rectangle the text is drawn into when the widget occupies `rect`.
    pub fn text_rect(&self, rect: Rect) -> Rect {
        rect.inset(self.top, self.bottom, self.left, self.right)
    }

    fn margin_size(&self) -> Vec2 {
        Vec2::new(self.left + self.right, self.top + self.bottom)
    }
}

impl<'de> Deserialize<'de> for PaddedLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::try_decode(deserializer).map_err(serde::de::Error::custom)
    }
}

impl Widget for PaddedLabel {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        self.label.size_hint() + self.margin_size()
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        let size = self.size_hint().min(ctx.max_size);
        self.rect = Rect::from_min_size(ctx.cursor, size);

        let text_rect = self.text_rect(self.rect);
        self.label.layout(&LayoutContext {
            max_size: text_rect.size().max(Vec2::ZERO),
            cursor: text_rect.min,
        });
        log::trace!("PaddedLabel laid out at {:?}, text at {text_rect:?}", self.rect);

        size
    }

    fn draw(&self, ui_renderer: &mut UIRenderer) {
        self.draw_text(self.rect, ui_renderer);
    }
}

impl TextWidget for PaddedLabel {
    fn text(&self) -> &str {
        self.label.text()
    }

    fn set_text(&mut self, text: &str) {
        self.label.set_text(text);
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw_text(&self, rect: Rect, ui_renderer: &mut UIRenderer) {
        self.label.draw_text(self.text_rect(rect), ui_renderer);
    }
}
