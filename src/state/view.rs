use serde::{Deserialize, Serialize};

use crate::document::CanvasDocument;
use super::DragOverlay;

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub document: CanvasDocument,
    pub drag: DragOverlay,
    pub can_undo: bool,
    pub can_redo: bool,
}
