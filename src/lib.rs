#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod constants;
pub mod controller;
pub mod document;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod image;
pub mod renderer;
pub mod repository;
pub mod state;

pub use app::CollageApp;
pub use command::{Edit, HistoryBuffer};
pub use config::CollageConfig;
pub use controller::ManipulatorController;
pub use document::CanvasDocument;
pub use error::{CollageError, Result};
pub use event::{CanvasEvent, EventReceiver, EventSender, event_queue};
pub use geometry::CanvasBounds;
pub use id_generator::ImageId;
pub use image::{CanvasImage, ResourceHandle};
pub use renderer::Renderer;
pub use repository::{ImageRepository, SampleImageRepository};
pub use state::{DragCoordinator, DragOverlay, DragState, DropOutcome, ViewState};
