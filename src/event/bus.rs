use parking_lot::Mutex;

use super::ViewStateHandler;
use crate::state::ViewState;

/// Pushes view states to every subscribed handler.
pub struct StatePublisher {
    handlers: Mutex<Vec<Box<dyn ViewStateHandler>>>,
}

impl std::fmt::Debug for StatePublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatePublisher")
            .field("handlers", &format!("<{} handlers>", self.handlers.lock().len()))
            .finish()
    }
}

impl Default for StatePublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl StatePublisher {
    pub fn new() -> Self {
        Self {
            handlers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive view states
    pub fn subscribe(&self, handler: impl ViewStateHandler + 'static) {
        self.handlers.lock().push(Box::new(handler));
    }

    /// Emit a view state to all registered handlers
    pub fn publish(&self, state: &ViewState) {
        for handler in self.handlers.lock().iter_mut() {
            handler.handle_view_state(state);
        }
    }
}
