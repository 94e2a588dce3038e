use std::rc::Rc;

use glam::{Vec2, Vec4};

use crate::render::ui::{
    Rect,
    uirenderer::{DrawCommand, TextureHandle, UIRenderMode, UIRenderer},
    widgets::{LayoutContext, TextWidget, Widget},
};

/// A monospaced bitmap font laid out as a grid of glyph cells in one atlas texture.
pub struct Font {
    atlas: TextureHandle,
    char_size: Vec2,
    first_char: char,
}

impl Font {
    pub fn new(atlas: TextureHandle, char_size: Vec2, first_char: char) -> Self {
        Self {
            atlas,
            char_size,
            first_char,
        }
    }

    pub fn atlas(&self) -> TextureHandle {
        self.atlas
    }

    pub fn glyph_uvs(&self, c: char) -> Option<[Vec2; 2]> {
        let index = (c as u32).checked_sub(self.first_char as u32)?;
        // Sub-pixel cells leave no whole glyph in the atlas.
        let cols = self.atlas.width().checked_div(self.char_size.x as u32)?;
        let rows = self.atlas.height().checked_div(self.char_size.y as u32)?;

        if u64::from(index) < u64::from(cols) * u64::from(rows) {
            let col = index % cols;
            let row = index / cols;

            let uv_size = Vec2::new(1.0 / cols as f32, 1.0 / rows as f32);
            let uv_min = Vec2::new(col as f32 * uv_size.x, row as f32 * uv_size.y);
            let uv_max = uv_min + uv_size;

            Some([uv_min, uv_max])
        } else {
            None
        }
    }

    pub fn measure_text(&self, text: &str, font_size: f32) -> Vec2 {
        let char_size = self.char_size(font_size);
        let lines: Vec<&str> = text.split('\n').collect();
        let max_width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * char_size.x)
            .fold(0.0, f32::max);
        Vec2::new(max_width, lines.len() as f32 * char_size.y)
    }

    pub fn char_size(&self, font_size: f32) -> Vec2 {
        Vec2::new(font_size * (self.char_size.x / self.char_size.y), font_size)
    }

    pub fn text(&self, text: &str, font_size: f32, color: Vec4) -> Vec<DrawCommand> {
        let mut commands = Vec::new();
        let mut cursor = Vec2::ZERO;
        let char_size = self.char_size(font_size);

        for line in text.split('\n') {
            for c in line.chars() {
                if let Some(uvs) = self.glyph_uvs(c) {
                    commands.push(DrawCommand {
                        rect: Rect::from_min_size(cursor, char_size).into(),
                        uv_rect: uvs,
                        mode: UIRenderMode::Texture(self.atlas(), color),
                    });
                }
                cursor.x += char_size.x;
            }
            cursor.x = 0.0;
            cursor.y += char_size.y;
        }

        commands
    }
}

pub struct Label {
    pub text: String,
    pub font_size: f32,
    pub color: Vec4,
    pub font: Rc<Font>,
    rect: Rect,
}

impl Label {
    pub fn new(text: &str, font_size: f32, color: Vec4, font: &Rc<Font>) -> Self {
        Self {
            text: text.to_string(),
            font_size,
            color,
            font: Rc::clone(font),
            rect: Rect::ZERO,
        }
    }
}

impl Widget for Label {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn size_hint(&self) -> Vec2 {
        self.font.measure_text(&self.text, self.font_size)
    }

    fn layout(&mut self, ctx: &LayoutContext) -> Vec2 {
        let size = self.size_hint().min(ctx.max_size);
        self.rect = Rect::from_min_size(ctx.cursor, size);
        size
    }

    fn draw(&self, ui_renderer: &mut UIRenderer) {
        self.draw_text(self.rect, ui_renderer);
    }
}

impl TextWidget for Label {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn draw_text(&self, rect: Rect, ui_renderer: &mut UIRenderer) {
        let commands = self
            .font
            .text(&self.text, self.font_size, self.color)
            .into_iter()
            .map(|mut cmd| {
                cmd.rect[0] += rect.min;
                cmd.rect[1] += rect.min;
                cmd
            });

        for command in commands {
            ui_renderer.add_command(command);
        }

        ui_renderer.finish();
    }
}
