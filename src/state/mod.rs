pub mod drag;
mod view;

pub use drag::{DragCoordinator, DragOverlay, DragSession, DragState, DropOutcome, Rebound};
pub use view::ViewState;
