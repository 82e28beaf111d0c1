use egui::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::Z_INDEX_STEP;
use crate::id_generator::ImageId;
use crate::image::CanvasImage;

/// The canvas contents: placed images in insertion order plus the size of the
/// surface they are laid out on.
///
/// A document is a value. Every edit produces a new document, so snapshots
/// kept in the history never alias the working copy.
///
/// Invariants:
/// - image ids are unique
/// - at most one image is selected
/// - an image that becomes top-most gets `max_z_order() + Z_INDEX_STEP`,
///   nothing else is renumbered
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasDocument {
    images: Vec<CanvasImage>,
    viewport_size: Vec2,
}

impl CanvasDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_size(viewport_size: Vec2) -> Self {
        Self {
            images: Vec::new(),
            viewport_size: viewport_size.max(Vec2::ZERO),
        }
    }

    /// Images in insertion order
    pub fn images(&self) -> &[CanvasImage] {
        &self.images
    }

    /// Images in paint order, bottom first.
    pub fn images_by_z_order(&self) -> Vec<&CanvasImage> {
        let mut images: Vec<&CanvasImage> = self.images.iter().collect();
        images.sort_by_key(|image| image.z_order);
        images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn viewport_size(&self) -> Vec2 {
        self.viewport_size
    }

    pub fn get(&self, id: ImageId) -> Option<&CanvasImage> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.get(id).is_some()
    }

    pub fn selected(&self) -> Option<&CanvasImage> {
        self.images.iter().find(|image| image.selected)
    }

    pub fn selected_id(&self) -> Option<ImageId> {
        self.selected().map(|image| image.id)
    }

    /// Highest z-order in the document, never below zero.
    pub fn max_z_order(&self) -> i64 {
        self.images
            .iter()
            .map(|image| image.z_order)
            .max()
            .unwrap_or(0)
            .max(0)
    }

    fn next_z_order(&self) -> i64 {
        self.max_z_order().saturating_add(Z_INDEX_STEP)
    }

    /// Appends `image` as the only selected, top-most image.
    pub(crate) fn push_selected(&self, image: CanvasImage) -> Self {
        let z_order = self.next_z_order();
        let mut images: Vec<CanvasImage> =
            self.images.iter().map(CanvasImage::deselected).collect();
        images.push(image.with_selection(true, z_order));
        Self {
            images,
            viewport_size: self.viewport_size,
        }
    }

    /// Replaces the image with `id` by `update(image)`. Returns `None` when the
    /// id is not in the document.
    pub(crate) fn update_image(
        &self,
        id: ImageId,
        update: impl FnOnce(&CanvasImage) -> CanvasImage,
    ) -> Option<Self> {
        let index = self.images.iter().position(|image| image.id == id)?;
        let mut images = self.images.clone();
        images[index] = update(&images[index]);
        Some(Self {
            images,
            viewport_size: self.viewport_size,
        })
    }

    /// Selects `id`, raising it above all siblings, and deselects everything
    /// else. Returns `None` when the id is not in the document.
    pub(crate) fn select(&self, id: ImageId) -> Option<Self> {
        if !self.contains(id) {
            return None;
        }
        let z_order = self.next_z_order();
        let images = self
            .images
            .iter()
            .map(|image| {
                if image.id == id {
                    image.with_selection(true, z_order)
                } else {
                    image.deselected()
                }
            })
            .collect();
        Some(Self {
            images,
            viewport_size: self.viewport_size,
        })
    }

    pub(crate) fn deselect_all(&self) -> Self {
        Self {
            images: self.images.iter().map(CanvasImage::deselected).collect(),
            viewport_size: self.viewport_size,
        }
    }

    /// Returns a copy laid out on a surface of `size`. Negative extents are
    /// treated as zero.
    pub fn resized(&self, size: Vec2) -> Self {
        Self {
            images: self.images.clone(),
            viewport_size: size.max(Vec2::ZERO),
        }
    }
}
