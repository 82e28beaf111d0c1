mod bus;
mod events;
mod queue;

use crate::state::ViewState;

pub use bus::StatePublisher;
pub use events::CanvasEvent;
pub use queue::{EventReceiver, EventSender, event_queue};

/// Receives every view state the controller publishes.
pub trait ViewStateHandler: Send {
    fn handle_view_state(&mut self, state: &ViewState);
}

impl<F> ViewStateHandler for F
where
    F: FnMut(&ViewState) + Send,
{
    fn handle_view_state(&mut self, state: &ViewState) {
        self(state)
    }
}
