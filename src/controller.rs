use crate::command::{Edit, HistoryBuffer};
use crate::config::CollageConfig;
use crate::document::CanvasDocument;
use crate::event::{CanvasEvent, EventReceiver, StatePublisher, ViewStateHandler};
use crate::id_generator;
use crate::image::ResourceHandle;
use crate::repository::ImageRepository;
use crate::state::{DragCoordinator, DropOutcome, ViewState};

/// Composition root of the canvas core.
///
/// Owns the working document, the drag coordinator and the history, and is
/// the single writer for all three. Each event is handled to completion, then
/// the combined view state is recomputed and pushed to every subscriber.
///
/// Commit policy: adds, moves, committed scales and both steps of a drop are
/// recorded in history. Selection, viewport changes and live pinch updates
/// only change the working document.
#[derive(Debug)]
pub struct ManipulatorController {
    document: CanvasDocument,
    drag: DragCoordinator,
    history: HistoryBuffer<CanvasDocument>,
    sample_images: Vec<ResourceHandle>,
    view: ViewState,
    publisher: StatePublisher,
}

impl ManipulatorController {
    /// Wires the controller from its collaborators. Any snapshots already in
    /// `history` are dropped; the empty document becomes the baseline.
    pub fn new(
        repository: &dyn ImageRepository,
        mut history: HistoryBuffer<CanvasDocument>,
        drag: DragCoordinator,
    ) -> Self {
        let document = CanvasDocument::new();
        history.clear();
        history.push(document.clone());

        let sample_images = repository.sample_images();
        log::info!(
            "Canvas controller ready: {} sample images, history capacity {}",
            sample_images.len(),
            history.capacity()
        );

        let mut controller = Self {
            document,
            drag,
            history,
            sample_images,
            view: ViewState::default(),
            publisher: StatePublisher::new(),
        };
        controller.view = controller.compute_view();
        controller
    }

    pub fn from_config(repository: &dyn ImageRepository, config: &CollageConfig) -> Self {
        Self::new(
            repository,
            HistoryBuffer::with_capacity(config.history_capacity),
            DragCoordinator::new(config.drop_footprint),
        )
    }

    pub fn sample_images(&self) -> &[ResourceHandle] {
        &self.sample_images
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.document
    }

    pub fn drag(&self) -> &DragCoordinator {
        &self.drag
    }

    pub fn history(&self) -> &HistoryBuffer<CanvasDocument> {
        &self.history
    }

    /// Register a handler that receives every published view state.
    pub fn subscribe(&self, handler: impl ViewStateHandler + 'static) {
        self.publisher.subscribe(handler);
    }

    /// Processes one event and returns the resulting view state.
    pub fn handle(&mut self, event: CanvasEvent) -> &ViewState {
        log::debug!("Handling {} event", event.kind());

        match event {
            CanvasEvent::AddImage { resource, position } => {
                self.apply(
                    Edit::Add {
                        id: id_generator::generate_id(),
                        resource,
                        position,
                    },
                    true,
                );
            }
            CanvasEvent::MoveImage { id, position } => {
                let viewport_size = self.document.viewport_size();
                self.apply(
                    Edit::Move {
                        id,
                        target: position,
                        viewport_size,
                    },
                    true,
                );
            }
            CanvasEvent::ScaleImage { id, factor, commit } => {
                self.apply(Edit::Scale { id, factor }, commit);
            }
            CanvasEvent::SelectImage(id) => {
                self.apply(Edit::Select { id }, false);
            }
            CanvasEvent::DeselectAll => {
                self.apply(Edit::Select { id: None }, false);
            }
            CanvasEvent::Undo => {
                let viewport_size = self.document.viewport_size();
                if let Some(previous) = self.history.undo() {
                    // Snapshots carry the viewport of their time; the live layout wins
                    self.document = previous.resized(viewport_size);
                    log::info!("Undo: {} images on canvas", self.document.len());
                }
            }
            CanvasEvent::Redo => {
                let viewport_size = self.document.viewport_size();
                if let Some(next) = self.history.redo() {
                    self.document = next.resized(viewport_size);
                    log::info!("Redo: {} images on canvas", self.document.len());
                }
            }
            CanvasEvent::UpdateViewportSize(size) => {
                self.document = self.document.resized(size);
            }
            CanvasEvent::StartGlobalDrag { resource, origin } => {
                self.drag.start_drag(resource, origin);
            }
            CanvasEvent::UpdateGlobalDrag(pointer) => {
                self.drag.update_position(pointer);
            }
            CanvasEvent::EndGlobalDrag => {
                self.end_global_drag();
            }
            CanvasEvent::CancelGlobalDrag => {
                self.drag.cancel_drag();
            }
            CanvasEvent::UpdateCanvasBounds { origin, size } => {
                self.drag.update_canvas_bounds(origin, size);
            }
        }

        self.view = self.compute_view();
        self.publisher.publish(&self.view);
        &self.view
    }

    /// Handles every event currently queued, without waiting. Returns how many
    /// events were processed.
    pub fn drain(&mut self, receiver: &mut EventReceiver) -> usize {
        let mut handled = 0;
        while let Some(event) = receiver.try_recv() {
            self.handle(event);
            handled += 1;
        }
        handled
    }

    /// Handles events until every sender has been dropped.
    pub async fn run(&mut self, mut receiver: EventReceiver) {
        while let Some(event) = receiver.recv().await {
            self.handle(event);
        }
        log::debug!("Event queue closed, controller loop finished");
    }

    fn end_global_drag(&mut self) {
        match self.drag.end_drag() {
            DropOutcome::Valid { resource, position } => {
                log::info!("Dropped {:?} on canvas at {:?}", resource, position);
                // Two separate commits: the deselect and the add each get an undo step
                self.apply(Edit::Select { id: None }, true);
                self.apply(
                    Edit::Add {
                        id: id_generator::generate_id(),
                        resource,
                        position,
                    },
                    true,
                );
            }
            DropOutcome::Invalid => {
                log::debug!("Drag released outside the canvas");
            }
        }
    }

    fn apply(&mut self, edit: Edit, commit: bool) {
        log::debug!("Applying {:?} (commit: {})", edit, commit);
        self.document = edit.apply(&self.document);
        if commit {
            self.history.push(self.document.clone());
        }
    }

    fn compute_view(&self) -> ViewState {
        ViewState {
            document: self.document.clone(),
            drag: self.drag.overlay(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }
}
