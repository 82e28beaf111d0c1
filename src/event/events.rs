use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

use crate::id_generator::ImageId;
use crate::image::ResourceHandle;

/// Already-classified input accepted by the controller.
///
/// Gesture recognition happens upstream; by the time an event is queued it
/// describes an intent, not raw pointer data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CanvasEvent {
    /// Place a new image at a canvas-local position (committed)
    AddImage {
        resource: ResourceHandle,
        position: Pos2,
    },
    /// Move an image to a canvas-local position (committed, sent on release)
    MoveImage { id: ImageId, position: Pos2 },
    /// Apply a pinch delta; only `commit: true` is recorded in history
    ScaleImage {
        id: ImageId,
        factor: f32,
        commit: bool,
    },
    SelectImage(Option<ImageId>),
    DeselectAll,
    Undo,
    Redo,
    /// The canvas surface was laid out with a new size
    UpdateViewportSize(Vec2),
    /// A carousel tile started following the pointer (screen-global)
    StartGlobalDrag {
        resource: ResourceHandle,
        origin: Pos2,
    },
    UpdateGlobalDrag(Pos2),
    EndGlobalDrag,
    CancelGlobalDrag,
    /// The canvas surface moved or resized on screen (screen-global)
    UpdateCanvasBounds { origin: Pos2, size: Vec2 },
}

impl CanvasEvent {
    /// Short name for log lines
    pub fn kind(&self) -> &'static str {
        match self {
            CanvasEvent::AddImage { .. } => "AddImage",
            CanvasEvent::MoveImage { .. } => "MoveImage",
            CanvasEvent::ScaleImage { .. } => "ScaleImage",
            CanvasEvent::SelectImage(_) => "SelectImage",
            CanvasEvent::DeselectAll => "DeselectAll",
            CanvasEvent::Undo => "Undo",
            CanvasEvent::Redo => "Redo",
            CanvasEvent::UpdateViewportSize(_) => "UpdateViewportSize",
            CanvasEvent::StartGlobalDrag { .. } => "StartGlobalDrag",
            CanvasEvent::UpdateGlobalDrag(_) => "UpdateGlobalDrag",
            CanvasEvent::EndGlobalDrag => "EndGlobalDrag",
            CanvasEvent::CancelGlobalDrag => "CancelGlobalDrag",
            CanvasEvent::UpdateCanvasBounds { .. } => "UpdateCanvasBounds",
        }
    }
}
