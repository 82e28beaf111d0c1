use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a placed image, stable for the image's whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageId(Uuid);

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Generates a fresh random id for a new canvas image.
pub fn generate_id() -> ImageId {
    ImageId(Uuid::new_v4())
}
