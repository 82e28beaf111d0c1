mod history;
mod use_cases;

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::document::CanvasDocument;
use crate::id_generator::ImageId;
use crate::image::ResourceHandle;

pub use history::HistoryBuffer;
pub use use_cases::{
    add_image, add_image_with_id, clamp_to_viewport, deselect_all, move_image, scale_image,
    select_image,
};

/// One invocation of a canvas use-case.
///
/// An `Edit` is a plain description; `apply` turns it into the next document
/// without touching the one it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Edit {
    /// Place a new image, selected and on top
    Add {
        id: ImageId,
        resource: ResourceHandle,
        position: Pos2,
    },
    /// Move an image, clamped to the viewport
    Move {
        id: ImageId,
        target: Pos2,
        viewport_size: Vec2,
    },
    /// Multiply an image's scale by a pinch delta
    Scale { id: ImageId, factor: f32 },
    /// Select one image, or clear the selection
    Select { id: Option<ImageId> },
}

impl Edit {
    pub fn apply(&self, doc: &CanvasDocument) -> CanvasDocument {
        match self {
            Edit::Add {
                id,
                resource,
                position,
            } => add_image_with_id(doc, *id, *resource, *position),
            Edit::Move {
                id,
                target,
                viewport_size,
            } => move_image(doc, *id, *target, *viewport_size),
            Edit::Scale { id, factor } => scale_image(doc, *id, *factor),
            Edit::Select { id } => select_image(doc, *id),
        }
    }
}
