use eframe::egui::{self, Rect, Sense};

use crate::config::CollageConfig;
use crate::controller::ManipulatorController;
use crate::event::{CanvasEvent, EventReceiver, EventSender, event_queue};
use crate::geometry::{CanvasBounds, image_at};
use crate::id_generator::ImageId;
use crate::image::ResourceHandle;
use crate::renderer::{MovePreview, Renderer};
use crate::repository::{ImageRepository, SampleImageRepository};
use crate::state::{DragOverlay, ViewState};

const CAROUSEL_HEIGHT: f32 = 110.0;
const CAROUSEL_TILE: f32 = 80.0;
/// Seconds the preview takes to fly back to the carousel after a missed drop
const REBOUND_SECONDS: f64 = 0.25;

/// Host window: turns egui input into canvas events and paints the view
/// state the controller publishes.
pub struct CollageApp {
    controller: ManipulatorController,
    sender: EventSender,
    receiver: EventReceiver,
    repository: SampleImageRepository,
    renderer: Renderer,
    drop_footprint: f32,
    /// Last canvas rect reported to the controller
    canvas_rect: Option<Rect>,
    move_preview: Option<MovePreview>,
    /// Image currently being pinch-zoomed
    pinching: Option<ImageId>,
    rebound_started: Option<f64>,
}

impl CollageApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: &CollageConfig) -> Self {
        let repository = SampleImageRepository;
        let controller = ManipulatorController::from_config(&repository, config);

        let ctx = cc.egui_ctx.clone();
        controller.subscribe(move |_state: &ViewState| ctx.request_repaint());

        let (sender, receiver) = event_queue();
        Self {
            controller,
            sender,
            receiver,
            repository,
            renderer: Renderer::new(),
            drop_footprint: config.drop_footprint,
            canvas_rect: None,
            move_preview: None,
            pinching: None,
            rebound_started: None,
        }
    }

    fn send(&self, event: CanvasEvent) {
        if let Err(err) = self.sender.send(event) {
            log::error!("Dropping canvas event: {}", err);
        }
    }

    fn label(&self, resource: ResourceHandle) -> String {
        self.repository
            .label(resource)
            .unwrap_or_else(|| format!("#{}", resource.0))
    }

    fn toolbar(&mut self, ctx: &egui::Context, view: &ViewState) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Photo Collage");
                ui.separator();
                if ui.add_enabled(view.can_undo, egui::Button::new("Undo")).clicked() {
                    self.send(CanvasEvent::Undo);
                }
                if ui.add_enabled(view.can_redo, egui::Button::new("Redo")).clicked() {
                    self.send(CanvasEvent::Redo);
                }
                ui.separator();
                ui.label(format!("{} images", view.document.len()));
            });
        });
    }

    fn carousel(&mut self, ctx: &egui::Context) {
        let samples = self.controller.sample_images().to_vec();
        egui::TopBottomPanel::bottom("carousel")
            .exact_height(CAROUSEL_HEIGHT)
            .show(ctx, |ui| {
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    ui.horizontal_centered(|ui| {
                        for resource in samples {
                            let (rect, response) = ui.allocate_exact_size(
                                egui::vec2(CAROUSEL_TILE, CAROUSEL_TILE),
                                Sense::drag(),
                            );
                            self.renderer
                                .paint_tile(ui.painter(), rect, resource, &self.label(resource));

                            let pointer = response.interact_pointer_pos();
                            if response.drag_started() {
                                self.rebound_started = None;
                                self.send(carousel_drag_start(resource, rect));
                            }
                            if response.dragged() {
                                if let Some(pointer) = pointer {
                                    self.send(CanvasEvent::UpdateGlobalDrag(pointer));
                                }
                            }
                            if response.drag_stopped() {
                                self.send(CanvasEvent::EndGlobalDrag);
                            }
                        }
                    });
                });
            });
    }

    fn canvas(&mut self, ctx: &egui::Context, view: &ViewState) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let (background, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
            let canvas_rect = background.rect;

            if self.canvas_rect != Some(canvas_rect) {
                self.canvas_rect = Some(canvas_rect);
                self.send(CanvasEvent::UpdateViewportSize(canvas_rect.size()));
                self.send(CanvasEvent::UpdateCanvasBounds {
                    origin: canvas_rect.min,
                    size: canvas_rect.size(),
                });
            }

            self.renderer.paint_canvas(
                &painter,
                canvas_rect,
                &view.document,
                self.move_preview,
                |resource| self.label(resource),
            );

            // Registered bottom to top so the top-most image wins the hit test
            for image in view.document.images_by_z_order() {
                let rect = Renderer::image_screen_rect(image, canvas_rect.min, self.move_preview);
                let response = ui.interact(
                    rect,
                    egui::Id::new(("canvas_image", image.id)),
                    Sense::click_and_drag(),
                );
                if response.clicked() || response.drag_started() {
                    self.send(CanvasEvent::SelectImage(Some(image.id)));
                }
                if response.dragged() {
                    let offset = self
                        .move_preview
                        .filter(|preview| preview.id == image.id)
                        .map_or(egui::Vec2::ZERO, |preview| preview.offset);
                    self.move_preview = Some(MovePreview {
                        id: image.id,
                        offset: offset + response.drag_delta(),
                    });
                }
                if response.drag_stopped() {
                    if let Some(preview) = self.move_preview.take() {
                        self.send(CanvasEvent::MoveImage {
                            id: image.id,
                            position: image.position + preview.offset,
                        });
                    }
                }
            }

            if background.clicked() {
                self.send(CanvasEvent::DeselectAll);
            }

            let bounds = CanvasBounds::new(canvas_rect.min, canvas_rect.size());
            let hovered = ui
                .input(|input| input.pointer.hover_pos())
                .filter(|pointer| bounds.contains(*pointer))
                .and_then(|pointer| image_at(&view.document, bounds.to_local(pointer)))
                .map(|image| image.id);
            self.handle_zoom(ctx, hovered);
        });
    }

    /// Live pinch updates are sent uncommitted; the first frame without zoom
    /// commits the gesture.
    fn handle_zoom(&mut self, ctx: &egui::Context, hovered: Option<ImageId>) {
        let zoom = ctx.input(|input| input.zoom_delta());
        let target = self.pinching.or(hovered);
        match target {
            Some(id) if (zoom - 1.0).abs() > f32::EPSILON => {
                if self.pinching.is_none() {
                    self.send(CanvasEvent::SelectImage(Some(id)));
                }
                self.pinching = Some(id);
                self.send(CanvasEvent::ScaleImage {
                    id,
                    factor: zoom,
                    commit: false,
                });
            }
            _ => {
                if let Some(id) = self.pinching.take() {
                    self.send(CanvasEvent::ScaleImage {
                        id,
                        factor: 1.0,
                        commit: true,
                    });
                }
            }
        }
    }

    fn drag_overlay(&mut self, ctx: &egui::Context, view: &ViewState) {
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Tooltip,
            egui::Id::new("drag_overlay"),
        ));
        let overlay = view.drag;
        let Some(resource) = overlay.resource else {
            return;
        };
        let label = self.label(resource);

        if overlay.active {
            self.renderer
                .paint_drag_overlay(&painter, &overlay, self.drop_footprint, &label);
            return;
        }

        // Missed drop: fly the preview back to where it came from, then clear
        let now = ctx.input(|input| input.time);
        let started = *self.rebound_started.get_or_insert(now);
        let t = ((now - started) / REBOUND_SECONDS).clamp(0.0, 1.0) as f32;
        let rebound = DragOverlay {
            active: true,
            position: overlay.rebound_position(t),
            ..overlay
        };
        self.renderer
            .paint_drag_overlay(&painter, &rebound, self.drop_footprint, &label);

        if t >= 1.0 {
            self.rebound_started = None;
            self.send(CanvasEvent::CancelGlobalDrag);
        } else {
            ctx.request_repaint();
        }
    }
}

/// A carousel drag is anchored on its tile, so a missed drop flies back to
/// the tile rather than to where the drag threshold was crossed.
fn carousel_drag_start(resource: ResourceHandle, tile: Rect) -> CanvasEvent {
    CanvasEvent::StartGlobalDrag {
        resource,
        origin: tile.center(),
    }
}

impl eframe::App for CollageApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.controller.view_state().clone();

        self.toolbar(ctx, &view);
        self.carousel(ctx);
        self.canvas(ctx, &view);
        self.drag_overlay(ctx, &view);

        let handled = self.controller.drain(&mut self.receiver);
        if handled > 0 {
            log::trace!("Handled {} canvas events this frame", handled);
        }
    }
}
