use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::document::CanvasDocument;
use crate::image::CanvasImage;

/// Last known screen-global placement of the canvas surface.
///
/// The carousel and the canvas are laid out independently, so screen-global
/// coordinates are the only ones both sides can compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasBounds {
    pub origin: Pos2,
    pub size: Vec2,
}

impl CanvasBounds {
    pub fn new(origin: Pos2, size: Vec2) -> Self {
        Self {
            origin,
            size: size.max(Vec2::ZERO),
        }
    }

    /// False until the canvas has been given a non-empty size.
    pub fn is_laid_out(&self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    pub fn screen_rect(&self) -> Rect {
        Rect::from_min_size(self.origin, self.size)
    }

    /// Inclusive on every edge: a pointer on the border counts as inside.
    pub fn contains(&self, screen_pos: Pos2) -> bool {
        self.screen_rect().contains(screen_pos)
    }

    /// Translates a screen-global point into canvas-local coordinates.
    pub fn to_local(&self, screen_pos: Pos2) -> Pos2 {
        (screen_pos - self.origin).to_pos2()
    }

    pub fn to_screen(&self, local_pos: Pos2) -> Pos2 {
        self.origin + local_pos.to_vec2()
    }
}

/// Top-most image covering `local_pos`, if any.
pub fn image_at(doc: &CanvasDocument, local_pos: Pos2) -> Option<&CanvasImage> {
    doc.images()
        .iter()
        .filter(|image| image.canvas_rect().contains(local_pos))
        .max_by_key(|image| image.z_order)
}
