pub mod hit_testing;

pub use hit_testing::{CanvasBounds, image_at};
