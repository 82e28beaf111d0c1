//! The four canonical canvas edits.
//!
//! Each function takes the current document and returns the next one. None of
//! them touch history; the caller decides whether a result is committed.

use egui::{Pos2, Vec2, pos2};

use crate::document::CanvasDocument;
use crate::id_generator::{self, ImageId};
use crate::image::{CanvasImage, ResourceHandle};

/// Places a new image at `position` with a freshly generated id.
pub fn add_image(doc: &CanvasDocument, resource: ResourceHandle, position: Pos2) -> CanvasDocument {
    add_image_with_id(doc, id_generator::generate_id(), resource, position)
}

/// Places a new image with a caller-chosen id. The new image is selected,
/// starts at scale 1.0 and paints above every existing image.
pub fn add_image_with_id(
    doc: &CanvasDocument,
    id: ImageId,
    resource: ResourceHandle,
    position: Pos2,
) -> CanvasDocument {
    doc.push_selected(CanvasImage::new(id, resource, position))
}

/// Moves an image to `target`, keeping its footprint inside `viewport_size`.
/// Unknown ids leave the document unchanged.
pub fn move_image(
    doc: &CanvasDocument,
    id: ImageId,
    target: Pos2,
    viewport_size: Vec2,
) -> CanvasDocument {
    match doc.update_image(id, |image| {
        let position = clamp_to_viewport(target, image.footprint(), viewport_size);
        image.with_position(position)
    }) {
        Some(next) => next,
        None => {
            log::warn!("Ignoring move of unknown image {}", id);
            doc.clone()
        }
    }
}

/// Multiplies an image's scale by `factor`, clamped to the zoom range.
/// Unknown ids and factors that are not finite and positive are ignored.
pub fn scale_image(doc: &CanvasDocument, id: ImageId, factor: f32) -> CanvasDocument {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("Ignoring scale factor {} for image {}", factor, id);
        return doc.clone();
    }
    doc.update_image(id, |image| image.with_scale(image.scale * factor))
        .unwrap_or_else(|| {
            log::warn!("Ignoring scale of unknown image {}", id);
            doc.clone()
        })
}

/// Selects `id` and raises it to the top, or clears the selection for `None`.
/// Selecting an unknown id leaves the document unchanged.
pub fn select_image(doc: &CanvasDocument, id: Option<ImageId>) -> CanvasDocument {
    match id {
        Some(id) => doc.select(id).unwrap_or_else(|| {
            log::warn!("Ignoring selection of unknown image {}", id);
            doc.clone()
        }),
        None => doc.deselect_all(),
    }
}

pub fn deselect_all(doc: &CanvasDocument) -> CanvasDocument {
    select_image(doc, None)
}

/// Per axis: `max(0, min(v, viewport - footprint))`.
pub fn clamp_to_viewport(target: Pos2, footprint: f32, viewport_size: Vec2) -> Pos2 {
    pos2(
        target.x.min(viewport_size.x - footprint).max(0.0),
        target.y.min(viewport_size.y - footprint).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_viewport_is_identity() {
        let clamped = clamp_to_viewport(pos2(10.0, 20.0), 80.0, Vec2::new(400.0, 300.0));
        assert_eq!(clamped, pos2(10.0, 20.0));
    }

    #[test]
    fn test_clamp_viewport_smaller_than_footprint() {
        let clamped = clamp_to_viewport(pos2(50.0, -50.0), 80.0, Vec2::new(40.0, 40.0));
        assert_eq!(clamped, pos2(0.0, 0.0));
    }

    #[test]
    fn test_clamp_zero_viewport() {
        let clamped = clamp_to_viewport(pos2(1e6, 1e6), 80.0, Vec2::ZERO);
        assert_eq!(clamped, Pos2::ZERO);
    }
}
