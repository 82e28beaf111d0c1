use collage_canvas::command::{
    add_image, add_image_with_id, deselect_all, move_image, scale_image, select_image,
};
use collage_canvas::constants::{BASE_IMAGE_SIZE, MAX_ZOOM, MIN_ZOOM, Z_INDEX_STEP};
use collage_canvas::id_generator::generate_id;
use collage_canvas::{CanvasDocument, Edit, ImageId, ResourceHandle};
use egui::{Pos2, Vec2, pos2, vec2};

// Helper to create a test document with three images on a 400x300 viewport
fn create_test_document() -> (CanvasDocument, [ImageId; 3]) {
    let ids = [generate_id(), generate_id(), generate_id()];
    let mut doc = CanvasDocument::with_viewport_size(vec2(400.0, 300.0));
    doc = add_image_with_id(&doc, ids[0], ResourceHandle(1), pos2(10.0, 10.0));
    doc = add_image_with_id(&doc, ids[1], ResourceHandle(2), pos2(50.0, 60.0));
    doc = add_image_with_id(&doc, ids[2], ResourceHandle(3), pos2(120.0, 30.0));
    (doc, ids)
}

fn selected_count(doc: &CanvasDocument) -> usize {
    doc.images().iter().filter(|image| image.selected).count()
}

#[test]
fn test_add_image_to_empty_document() {
    let doc = add_image(&CanvasDocument::new(), ResourceHandle(4), pos2(5.0, 6.0));

    assert_eq!(doc.len(), 1);
    let image = &doc.images()[0];
    assert_eq!(image.resource, ResourceHandle(4));
    assert_eq!(image.position, pos2(5.0, 6.0));
    assert!((image.scale - 1.0).abs() < 0.001);
    assert_eq!(image.z_order, Z_INDEX_STEP);
    assert!(image.selected);
}

#[test]
fn test_add_image_is_only_selection_and_strictly_top_most() {
    let (doc, ids) = create_test_document();

    assert_eq!(selected_count(&doc), 1);
    let newest = doc.get(ids[2]).unwrap();
    assert!(newest.selected);
    for image in doc.images().iter().filter(|image| image.id != ids[2]) {
        assert!(image.z_order < newest.z_order);
    }
    assert_eq!(newest.z_order, 3 * Z_INDEX_STEP);
}

#[test]
fn test_add_image_keeps_insertion_order_and_unique_ids() {
    let (doc, ids) = create_test_document();
    let order: Vec<ImageId> = doc.images().iter().map(|image| image.id).collect();
    assert_eq!(order, ids.to_vec());

    let other = add_image(&doc, ResourceHandle(1), Pos2::ZERO);
    let fresh = other.images().last().unwrap().id;
    assert!(!ids.contains(&fresh));
}

#[test]
fn test_add_image_leaves_input_untouched() {
    let (doc, _) = create_test_document();
    let before = doc.clone();
    let _ = add_image(&doc, ResourceHandle(5), pos2(1.0, 1.0));
    assert_eq!(doc, before);
}

#[test]
fn test_select_raises_and_selects_only_target() {
    let (doc, ids) = create_test_document();
    let max_before = doc.max_z_order();

    let doc = select_image(&doc, Some(ids[0]));

    assert_eq!(selected_count(&doc), 1);
    assert_eq!(doc.selected_id(), Some(ids[0]));
    assert_eq!(doc.get(ids[0]).unwrap().z_order, max_before + Z_INDEX_STEP);
    // Siblings are never renumbered
    assert_eq!(doc.get(ids[1]).unwrap().z_order, 2 * Z_INDEX_STEP);
}

#[test]
fn test_reselecting_top_image_still_bumps() {
    let (doc, ids) = create_test_document();
    let doc = select_image(&doc, Some(ids[2]));
    assert_eq!(doc.get(ids[2]).unwrap().z_order, 4 * Z_INDEX_STEP);
}

#[test]
fn test_select_none_clears_selection() {
    let (doc, _) = create_test_document();
    let doc = select_image(&doc, None);
    assert_eq!(selected_count(&doc), 0);
    assert_eq!(doc.selected_id(), None);
    assert_eq!(deselect_all(&doc), doc);
}

#[test]
fn test_select_unknown_id_is_ignored() {
    let (doc, _) = create_test_document();
    let after = select_image(&doc, Some(generate_id()));
    assert_eq!(after, doc);
}

#[test]
fn test_at_most_one_selection_over_mixed_sequence() {
    let (mut doc, ids) = create_test_document();
    let edits = [
        Edit::Select { id: Some(ids[1]) },
        Edit::Select { id: None },
        Edit::Add {
            id: generate_id(),
            resource: ResourceHandle(7),
            position: pos2(3.0, 3.0),
        },
        Edit::Select { id: Some(ids[0]) },
        Edit::Select { id: Some(ids[2]) },
        Edit::Select { id: Some(generate_id()) },
    ];
    for edit in &edits {
        doc = edit.apply(&doc);
        assert!(selected_count(&doc) <= 1, "after {:?}", edit);
    }
    assert_eq!(doc.selected_id(), Some(ids[2]));
}

#[test]
fn test_move_within_bounds() {
    let (doc, ids) = create_test_document();
    let doc = move_image(&doc, ids[1], pos2(100.0, 100.0), doc.viewport_size());
    assert_eq!(doc.get(ids[1]).unwrap().position, pos2(100.0, 100.0));
}

#[test]
fn test_move_clamps_far_out_of_bounds() {
    let (doc, ids) = create_test_document();
    let viewport = vec2(400.0, 300.0);

    let targets = [
        pos2(-1e9, -1e9),
        pos2(1e9, 1e9),
        pos2(-5.0, 1000.0),
        pos2(399.0, -0.5),
    ];
    for target in targets {
        let moved = move_image(&doc, ids[0], target, viewport);
        let image = moved.get(ids[0]).unwrap();
        let footprint = image.footprint();
        assert!(image.position.x >= 0.0 && image.position.x <= viewport.x - footprint);
        assert!(image.position.y >= 0.0 && image.position.y <= viewport.y - footprint);
    }
}

#[test]
fn test_move_clamp_uses_scaled_footprint() {
    let (doc, ids) = create_test_document();
    let doc = scale_image(&doc, ids[0], 2.0);
    let doc = move_image(&doc, ids[0], pos2(1000.0, 1000.0), vec2(400.0, 300.0));
    let image = doc.get(ids[0]).unwrap();
    assert!((image.position.x - (400.0 - 2.0 * BASE_IMAGE_SIZE)).abs() < 0.001);
    assert!((image.position.y - (300.0 - 2.0 * BASE_IMAGE_SIZE)).abs() < 0.001);
}

#[test]
fn test_move_on_degenerate_viewport_pins_to_origin() {
    let (doc, ids) = create_test_document();
    let doc = move_image(&doc, ids[1], pos2(75.0, 20.0), Vec2::ZERO);
    assert_eq!(doc.get(ids[1]).unwrap().position, Pos2::ZERO);
}

#[test]
fn test_move_only_changes_position() {
    let (doc, ids) = create_test_document();
    let before = doc.get(ids[0]).copied().unwrap();
    let doc = move_image(&doc, ids[0], pos2(30.0, 40.0), vec2(400.0, 300.0));
    let after = doc.get(ids[0]).unwrap();
    assert_eq!(after.z_order, before.z_order);
    assert_eq!(after.selected, before.selected);
    assert!((after.scale - before.scale).abs() < 0.001);
}

#[test]
fn test_move_unknown_id_is_ignored() {
    let (doc, _) = create_test_document();
    let after = move_image(&doc, generate_id(), pos2(1.0, 1.0), vec2(400.0, 300.0));
    assert_eq!(after, doc);
}

#[test]
fn test_scale_is_multiplicative() {
    let (doc, ids) = create_test_document();
    let doc = scale_image(&doc, ids[0], 1.5);
    let doc = scale_image(&doc, ids[0], 2.0);
    assert!((doc.get(ids[0]).unwrap().scale - 3.0).abs() < 0.001);
}

#[test]
fn test_scale_stays_in_zoom_range() {
    let (mut doc, ids) = create_test_document();
    let factors = [3.0, 3.0, 0.1, 0.01, 1.2, 50.0, 0.5, 0.999, 1.0001];
    for factor in factors {
        doc = scale_image(&doc, ids[1], factor);
        let scale = doc.get(ids[1]).unwrap().scale;
        assert!((MIN_ZOOM..=MAX_ZOOM).contains(&scale), "scale {} after {}", scale, factor);
    }
}

#[test]
fn test_scale_clamp_is_idempotent() {
    let (doc, ids) = create_test_document();
    let at_max = scale_image(&doc, ids[0], 100.0);
    assert!((at_max.get(ids[0]).unwrap().scale - MAX_ZOOM).abs() < 0.001);
    let again = scale_image(&at_max, ids[0], 1.0);
    assert_eq!(again, at_max);
}

#[test]
fn test_scale_rejects_degenerate_factors() {
    let (doc, ids) = create_test_document();
    for factor in [0.0, -2.0, f32::NAN, f32::INFINITY] {
        assert_eq!(scale_image(&doc, ids[0], factor), doc);
    }
}

#[test]
fn test_scale_unknown_id_is_ignored() {
    let (doc, _) = create_test_document();
    assert_eq!(scale_image(&doc, generate_id(), 2.0), doc);
}

#[test]
fn test_paint_order_follows_z_order() {
    let (doc, ids) = create_test_document();
    let doc = select_image(&doc, Some(ids[0]));
    let order: Vec<ImageId> = doc.images_by_z_order().iter().map(|image| image.id).collect();
    assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
}

#[test]
fn test_document_serializes_to_json() {
    let (doc, _) = create_test_document();
    let json = serde_json::to_string(&doc).unwrap();
    let restored: CanvasDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, doc);
}
