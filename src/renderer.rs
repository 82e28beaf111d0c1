use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

use crate::document::CanvasDocument;
use crate::id_generator::ImageId;
use crate::image::{CanvasImage, ResourceHandle};
use crate::state::DragOverlay;

const TILE_PALETTE: [Color32; 8] = [
    Color32::from_rgb(0xE5, 0x73, 0x73),
    Color32::from_rgb(0xFF, 0xB7, 0x4D),
    Color32::from_rgb(0xFF, 0xF1, 0x76),
    Color32::from_rgb(0x81, 0xC7, 0x84),
    Color32::from_rgb(0x4D, 0xD0, 0xE1),
    Color32::from_rgb(0x64, 0xB5, 0xF6),
    Color32::from_rgb(0x95, 0x75, 0xCD),
    Color32::from_rgb(0xF0, 0x62, 0x92),
];

const TILE_ROUNDING: f32 = 6.0;

/// A live, not yet committed offset applied to one image while it is being
/// dragged on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovePreview {
    pub id: ImageId,
    pub offset: Vec2,
}

/// Paints the published view state. Images are drawn as labelled placeholder
/// tiles; the core never carries pixel data.
#[derive(Debug, Clone)]
pub struct Renderer {
    canvas_fill: Color32,
    selection_stroke: Stroke,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            canvas_fill: Color32::from_gray(245),
            selection_stroke: Stroke::new(3.0, Color32::from_rgb(0x19, 0x76, 0xD2)),
        }
    }

    /// Fill colour used for every tile of `resource`
    pub fn tile_color(resource: ResourceHandle) -> Color32 {
        TILE_PALETTE[resource.0 as usize % TILE_PALETTE.len()]
    }

    /// Screen rectangle of `image` on a canvas whose top-left corner is at
    /// `canvas_origin`.
    pub fn image_screen_rect(
        image: &CanvasImage,
        canvas_origin: Pos2,
        preview: Option<MovePreview>,
    ) -> Rect {
        let offset = match preview {
            Some(preview) if preview.id == image.id => preview.offset,
            _ => Vec2::ZERO,
        };
        image.canvas_rect().translate(canvas_origin.to_vec2() + offset)
    }

    /// Renders the canvas and its images in z-order
    ///
    /// Args:
    ///     painter (egui::Painter): The painter to draw with, clipped to the canvas
    ///     canvas_rect (egui::Rect): Screen rectangle of the canvas surface
    ///     document (CanvasDocument): The document to draw
    ///     labels: Maps a resource to the text drawn on its tile
    pub fn paint_canvas(
        &self,
        painter: &Painter,
        canvas_rect: Rect,
        document: &CanvasDocument,
        preview: Option<MovePreview>,
        labels: impl Fn(ResourceHandle) -> String,
    ) {
        painter.rect_filled(canvas_rect, 0.0, self.canvas_fill);

        for image in document.images_by_z_order() {
            let rect = Self::image_screen_rect(image, canvas_rect.min, preview);
            self.paint_tile(painter, rect, image.resource, &labels(image.resource));
            if image.selected {
                painter.rect_stroke(rect, TILE_ROUNDING, self.selection_stroke);
            }
        }
    }

    pub fn paint_tile(&self, painter: &Painter, rect: Rect, resource: ResourceHandle, label: &str) {
        painter.rect_filled(rect, TILE_ROUNDING, Self::tile_color(resource));
        painter.rect_stroke(rect, TILE_ROUNDING, Stroke::new(1.0, Color32::from_gray(90)));
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(13.0),
            Color32::from_gray(30),
        );
    }

    /// Draws the dragged preview centered under the pointer. Nothing is drawn
    /// when no drag is in flight.
    pub fn paint_drag_overlay(
        &self,
        painter: &Painter,
        overlay: &DragOverlay,
        footprint: f32,
        label: &str,
    ) {
        let (true, Some(resource)) = (overlay.active, overlay.resource) else {
            return;
        };
        let rect = Rect::from_center_size(overlay.position, egui::vec2(footprint, footprint));
        painter.rect_filled(
            rect.translate(egui::vec2(3.0, 3.0)),
            TILE_ROUNDING,
            Color32::from_black_alpha(60),
        );
        self.paint_tile(painter, rect, resource, label);
    }
}
