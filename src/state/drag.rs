//! The global drag state machine.
//!
//! A drag starts on a carousel tile and ends either over the canvas or
//! somewhere else. Pointer positions are tracked in screen-global
//! coordinates; they are converted to canvas-local coordinates exactly once,
//! when the drag resolves.
//!
//! # State Transitions
//!
//! ```text
//!              start_drag                       end_drag (valid)
//! ┌──────────┐ ─────────► ┌──────────────┐ ─────────────────► ┌──────────┐
//! │   Idle   │            │   Dragging   │                    │   Idle   │
//! │          │ ◄───────── │              │ ─────────────────► │ rebound  │
//! └──────────┘ cancel_drag└──────┬───────┘  end_drag (invalid)└──────────┘
//!                                │ ▲
//!                                └─┘ update_position
//! ```
//!
//! Canvas bounds live beside the state and can be updated at any time.
use egui::{Pos2, Vec2, vec2};
use serde::{Deserialize, Serialize};

use crate::geometry::CanvasBounds;
use crate::image::ResourceHandle;

/// A drag in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub resource: ResourceHandle,
    /// Screen-global position where the drag began
    pub origin: Pos2,
    /// Latest screen-global pointer position
    pub pointer: Pos2,
}

/// What is left of a drag that was released outside the canvas, kept so the
/// host can animate the preview back to its carousel origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebound {
    pub resource: ResourceHandle,
    pub origin: Pos2,
    pub release: Pos2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    /// No drag in flight
    Idle { rebound: Option<Rebound> },
    /// A carousel image is following the pointer
    Dragging(DragSession),
}

impl Default for DragState {
    fn default() -> Self {
        DragState::Idle { rebound: None }
    }
}

/// How a drag resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DropOutcome {
    Invalid,
    /// Dropped over the canvas; `position` is the canvas-local top-left anchor
    /// that centers the image under the pointer
    Valid {
        resource: ResourceHandle,
        position: Pos2,
    },
}

impl DropOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, DropOutcome::Valid { .. })
    }
}

impl DragState {
    pub fn start(resource: ResourceHandle, origin: Pos2) -> Self {
        DragState::Dragging(DragSession {
            resource,
            origin,
            pointer: origin,
        })
    }

    pub fn moved_to(self, pointer: Pos2) -> Self {
        match self {
            DragState::Dragging(session) => DragState::Dragging(DragSession { pointer, ..session }),
            idle => idle,
        }
    }

    /// Resolves the drag against `bounds`.
    ///
    /// Every path leads back to `Idle`. An invalid release from `Dragging`
    /// keeps a `Rebound` for the exit animation.
    pub fn end(self, bounds: &CanvasBounds, footprint: f32) -> (DragState, DropOutcome) {
        let DragState::Dragging(session) = self else {
            return (self, DropOutcome::Invalid);
        };

        if !bounds.is_laid_out() || !bounds.contains(session.pointer) {
            let rebound = Rebound {
                resource: session.resource,
                origin: session.origin,
                release: session.pointer,
            };
            return (
                DragState::Idle {
                    rebound: Some(rebound),
                },
                DropOutcome::Invalid,
            );
        }

        let position = bounds.to_local(session.pointer) - vec2(footprint / 2.0, footprint / 2.0);
        (
            DragState::default(),
            DropOutcome::Valid {
                resource: session.resource,
                position,
            },
        )
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging(session) => Some(session),
            DragState::Idle { .. } => None,
        }
    }

    pub fn rebound(&self) -> Option<&Rebound> {
        match self {
            DragState::Idle { rebound } => rebound.as_ref(),
            DragState::Dragging(_) => None,
        }
    }
}

/// Renderer-facing description of the drag preview.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DragOverlay {
    pub active: bool,
    pub resource: Option<ResourceHandle>,
    /// Current screen-global pointer (or release point while rebounding)
    pub position: Pos2,
    /// Screen-global carousel origin
    pub origin: Pos2,
}

impl DragOverlay {
    /// Point on the way from the release point back to the carousel origin,
    /// `t` running from 0 (released) to 1 (home).
    pub fn rebound_position(&self, t: f32) -> Pos2 {
        self.position.lerp(self.origin, t.clamp(0.0, 1.0))
    }
}

/// Owns the drag state, the canvas bounds and the drop footprint.
#[derive(Debug, Clone)]
pub struct DragCoordinator {
    state: DragState,
    bounds: CanvasBounds,
    footprint: f32,
}

impl DragCoordinator {
    /// `footprint` is the on-screen edge length of a dropped image, already
    /// resolved to screen units.
    pub fn new(footprint: f32) -> Self {
        Self {
            state: DragState::default(),
            bounds: CanvasBounds::default(),
            footprint,
        }
    }

    pub fn start_drag(&mut self, resource: ResourceHandle, origin: Pos2) {
        if let DragState::Dragging(session) = &self.state {
            log::debug!("Restarting drag of {:?} with {:?}", session.resource, resource);
        }
        self.state = DragState::start(resource, origin);
    }

    /// Ignored unless a drag is in flight.
    pub fn update_position(&mut self, pointer: Pos2) {
        self.state = self.state.moved_to(pointer);
    }

    pub fn update_canvas_bounds(&mut self, origin: Pos2, size: Vec2) {
        self.bounds = CanvasBounds::new(origin, size);
    }

    pub fn end_drag(&mut self) -> DropOutcome {
        let (state, outcome) = std::mem::take(&mut self.state).end(&self.bounds, self.footprint);
        self.state = state;
        outcome
    }

    /// Back to a clean `Idle` from anywhere. Safe to call repeatedly.
    pub fn cancel_drag(&mut self) {
        self.state = DragState::default();
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn bounds(&self) -> &CanvasBounds {
        &self.bounds
    }

    pub fn footprint(&self) -> f32 {
        self.footprint
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn rebound(&self) -> Option<&Rebound> {
        self.state.rebound()
    }

    pub fn overlay(&self) -> DragOverlay {
        match &self.state {
            DragState::Dragging(session) => DragOverlay {
                active: true,
                resource: Some(session.resource),
                position: session.pointer,
                origin: session.origin,
            },
            DragState::Idle {
                rebound: Some(rebound),
            } => DragOverlay {
                active: false,
                resource: Some(rebound.resource),
                position: rebound.release,
                origin: rebound.origin,
            },
            DragState::Idle { rebound: None } => DragOverlay::default(),
        }
    }
}
