//! Fixed canvas invariants shared by the use-cases, the history and the drag coordinator.

/// Stacking increment given to an image when it becomes the top-most one.
pub const Z_INDEX_STEP: i64 = 1500;

/// Default number of document snapshots kept by the history.
pub const MAX_HISTORY_SIZE: usize = 50;

pub const MIN_ZOOM: f32 = 0.9;
pub const MAX_ZOOM: f32 = 4.0;

/// Edge length of a placed image at scale 1.0, in canvas units.
pub const BASE_IMAGE_SIZE: f32 = 80.0;
