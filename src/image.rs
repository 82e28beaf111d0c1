use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::constants::{BASE_IMAGE_SIZE, MAX_ZOOM, MIN_ZOOM};
use crate::id_generator::ImageId;

/// Opaque reference to image content. The core never looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceHandle(pub u32);

/// One image instance placed on the canvas.
///
/// Values are never mutated in place by the use-cases; every edit goes through
/// one of the `with_*` builders and yields a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasImage {
    pub id: ImageId,
    pub resource: ResourceHandle,
    /// Top-left anchor in canvas-local coordinates
    pub position: Pos2,
    pub scale: f32,
    pub z_order: i64,
    pub selected: bool,
}

impl CanvasImage {
    pub fn new(id: ImageId, resource: ResourceHandle, position: Pos2) -> Self {
        Self {
            id,
            resource,
            position,
            scale: 1.0,
            z_order: 0,
            selected: false,
        }
    }

    pub fn with_position(&self, position: Pos2) -> Self {
        Self {
            position,
            ..*self
        }
    }

    /// Returns a copy whose scale is clamped into the zoom range.
    pub fn with_scale(&self, scale: f32) -> Self {
        Self {
            scale: clamp_scale(scale),
            ..*self
        }
    }

    pub fn with_selection(&self, selected: bool, z_order: i64) -> Self {
        Self {
            selected,
            z_order,
            ..*self
        }
    }

    pub fn deselected(&self) -> Self {
        Self {
            selected: false,
            ..*self
        }
    }

    /// Edge length of the image's square footprint at its current scale.
    pub fn footprint(&self) -> f32 {
        BASE_IMAGE_SIZE * self.scale
    }

    /// Area covered by the image in canvas-local coordinates.
    pub fn canvas_rect(&self) -> Rect {
        Rect::from_min_size(self.position, Vec2::splat(self.footprint()))
    }
}

/// Clamps a scale into `[MIN_ZOOM, MAX_ZOOM]`.
pub fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(MIN_ZOOM, MAX_ZOOM)
}
