use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::{FutureExt, StreamExt};

use super::CanvasEvent;
use crate::error::{CollageError, Result};

/// Creates the unbounded, order-preserving queue between gesture sources and
/// the controller.
pub fn event_queue() -> (EventSender, EventReceiver) {
    let (sender, receiver) = mpsc::unbounded();
    (EventSender { sender }, EventReceiver { receiver })
}

/// Producer half. Clone one per gesture source.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: UnboundedSender<CanvasEvent>,
}

impl EventSender {
    pub fn send(&self, event: CanvasEvent) -> Result<()> {
        self.sender
            .unbounded_send(event)
            .map_err(|_| CollageError::QueueClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// Consumer half, owned by whoever drives the controller.
#[derive(Debug)]
pub struct EventReceiver {
    receiver: UnboundedReceiver<CanvasEvent>,
}

impl EventReceiver {
    /// Next queued event without waiting, or `None` if the queue is empty or
    /// every sender is gone.
    pub fn try_recv(&mut self) -> Option<CanvasEvent> {
        self.receiver.next().now_or_never().flatten()
    }

    /// Waits for the next event; `None` once every sender has been dropped.
    pub async fn recv(&mut self) -> Option<CanvasEvent> {
        self.receiver.next().await
    }

    /// Stops accepting new events. Already queued events can still be read.
    pub fn close(&mut self) {
        self.receiver.close();
    }
}
