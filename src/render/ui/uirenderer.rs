//! The UI renderer.
//!
//! Widgets push [`DrawCommand`]s into the [`UIRenderer`], which merges consecutive commands that
//! share a [`UIRenderMode`] into a single [`Batch`] of quads. A GPU backend drains the finished
//! batches with [`UIRenderer::take_batches`] and issues one draw call per batch.

use std::num::NonZero;

use glam::{Vec2, Vec4};

use crate::render::ui::UIVertex;

/// Represents a handle to a texture owned by the rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub NonZero<u32>, u32, u32);

impl TextureHandle {
    /// Creates a handle for a texture of the given size in pixels.
    pub fn new(id: NonZero<u32>, width: u32, height: u32) -> Self {
        Self(id, width, height)
    }

    /// Returns the width of the texture.
    pub fn width(&self) -> u32 {
        self.1
    }

    /// Returns the height of the texture.
    pub fn height(&self) -> u32 {
        self.2
    }
}

/// The rendering mode for a UI element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UIRenderMode {
    Texture(TextureHandle, Vec4),
    Color(Vec4),
}

/// A draw command for rendering a UI element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawCommand {
    pub rect: [Vec2; 2],
    pub uv_rect: [Vec2; 2],
    pub mode: UIRenderMode,
}

/// A run of quads sharing one render mode.
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    pub mode: UIRenderMode,
    pub vertices: Vec<UIVertex>,
    pub indices: Vec<u32>,
}

impl Batch {
    /// Number of quads in the batch.
    pub fn len(&self) -> usize {
        self.vertices.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Screen rectangles of the quads, as `[min, max]`.
    pub fn quads(&self) -> impl Iterator<Item = [Vec2; 2]> + '_ {
        self.vertices
            .chunks_exact(4)
            .map(|quad| [quad[1].position, quad[3].position])
    }
}

/// The UI renderer for batching 2D elements.
#[derive(Default)]
pub struct UIRenderer {
    current_mode: Option<UIRenderMode>,
    vertices: Vec<UIVertex>,
    indices: Vec<u32>,
    batches: Vec<Batch>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a draw command to the UI renderer.
    pub fn add_command(&mut self, command: DrawCommand) {
        // A mode change closes the running batch.
        if self.current_mode.is_some_and(|mode| mode != command.mode) {
            self.finish();
        }
        self.append_command(&command);
        self.current_mode = Some(command.mode);
    }

    /// Finishes the current batch.
    pub fn finish(&mut self) {
        if let Some(mode) = self.current_mode.take()
            && !self.vertices.is_empty()
        {
            self.batches.push(Batch {
                mode,
                vertices: std::mem::take(&mut self.vertices),
                indices: std::mem::take(&mut self.indices),
            });
        }
    }

    /// The batches finished so far.
    pub fn batches(&self) -> &[Batch] {
        &self.batches
    }

    /// Finishes the current batch and hands every finished batch to the caller.
    pub fn take_batches(&mut self) -> Vec<Batch> {
        self.finish();
        std::mem::take(&mut self.batches)
    }

    /// Appends a draw command's vertices and indices to the current batch.
    fn append_command(&mut self, command: &DrawCommand) {
        let base_index = self.vertices.len() as u32;
        let [min, max] = command.rect;
        let [uv_min, uv_max] = command.uv_rect;

        self.vertices.push(UIVertex {
            position: Vec2::new(max.x, min.y),
            uv: Vec2::new(uv_max.x, uv_min.y),
        });
        self.vertices.push(UIVertex {
            position: Vec2::new(min.x, min.y),
            uv: Vec2::new(uv_min.x, uv_min.y),
        });
        self.vertices.push(UIVertex {
            position: Vec2::new(min.x, max.y),
            uv: Vec2::new(uv_min.x, uv_max.y),
        });
        self.vertices.push(UIVertex {
            position: Vec2::new(max.x, max.y),
            uv: Vec2::new(uv_max.x, uv_max.y),
        });
        self.indices.push(base_index);
        self.indices.push(base_index + 1);
        self.indices.push(base_index + 2);
        self.indices.push(base_index);
        self.indices.push(base_index + 2);
        self.indices.push(base_index + 3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad(x: f32, mode: UIRenderMode) -> DrawCommand {
        DrawCommand {
            rect: [Vec2::new(x, 0.0), Vec2::new(x + 1.0, 1.0)],
            uv_rect: [Vec2::ZERO, Vec2::ONE],
            mode,
        }
    }

    #[test]
    fn test_same_mode_commands_share_a_batch() {
        let red = UIRenderMode::Color(Vec4::new(1.0, 0.0, 0.0, 1.0));
        let mut renderer = UIRenderer::new();
        renderer.add_command(quad(0.0, red));
        renderer.add_command(quad(1.0, red));
        renderer.finish();

        let batches = renderer.batches();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].len(), 2);
        assert_eq!(batches[0].indices, vec![0, 1, 2, 0, 2, 3, 4, 5, 6, 4, 6, 7]);
        let quads: Vec<_> = batches[0].quads().collect();
        assert_eq!(quads[1], [Vec2::new(1.0, 0.0), Vec2::new(2.0, 1.0)]);
    }

    #[test]
    fn test_mode_change_starts_new_batch() {
        let red = UIRenderMode::Color(Vec4::new(1.0, 0.0, 0.0, 1.0));
        let blue = UIRenderMode::Color(Vec4::new(0.0, 0.0, 1.0, 1.0));
        let mut renderer = UIRenderer::new();
        renderer.add_command(quad(0.0, red));
        renderer.add_command(quad(1.0, blue));
        renderer.add_command(quad(2.0, blue));

        let batches = renderer.take_batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].mode, red);
        assert_eq!(batches[1].mode, blue);
        assert_eq!(batches[1].len(), 2);
        assert_eq!(batches[1].indices[..3], [0, 1, 2]);
        assert!(renderer.batches().is_empty());
    }

    #[test]
    fn test_finish_without_commands_records_nothing() {
        let mut renderer = UIRenderer::new();
        renderer.finish();
        renderer.finish();
        assert!(renderer.batches().is_empty());
    }
}
