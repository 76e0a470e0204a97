//! Responsive recompute: debounced viewport-resize handling.
//!
//! Resize never regenerates piece geometry; grid topology is fixed for
//! the lifetime of a content load. The controller only recomputes the
//! placement offset (and, under aspect preservation, rescaled
//! dimensions) and hands the result to the render layer, whose spring
//! settle animation owns the actual motion.

use crate::core::{Dimensions, Vec2};
use crate::fit::{self, Anchor};

const DEFAULT_DEBOUNCE_SECS: f64 = 0.2;

/// Spring parameters for the render layer's settle animation. The core
/// carries these through untouched; it never integrates the spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Spring tightness; higher is snappier. 50..300 is the useful band.
    pub stiffness: f64,
    /// Friction; higher settles without bounce. 10..40 is the useful band.
    pub damping: f64,
    /// Inertia; higher feels heavier. 0.1..2 is the useful band.
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 20.0,
            mass: 0.5,
        }
    }
}

/// Result of a recompute: a new placement offset, plus new content
/// dimensions when aspect preservation rescaled them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeUpdate {
    pub dimensions: Option<Dimensions>,
    pub offset: Vec2,
}

/// Pure recompute for a settled viewport size.
///
/// With aspect preservation and a recorded pre-fit dimension, the content
/// is refit against the new default maxima; otherwise only the placement
/// offset moves.
#[tracing::instrument]
pub fn recompute_placement(
    current: Dimensions,
    original: Option<Dimensions>,
    anchor: Anchor,
    viewport: Dimensions,
    maintain_aspect: bool,
) -> ResizeUpdate {
    match original {
        Some(original) if maintain_aspect && original.width > 0.0 => {
            let dims = fit::fit_within(original, fit::default_max_dimensions(viewport), false);
            ResizeUpdate {
                dimensions: Some(dims),
                offset: fit::resolve_anchor(anchor, dims, viewport),
            }
        }
        _ => ResizeUpdate {
            dimensions: None,
            offset: fit::resolve_anchor(anchor, current, viewport),
        },
    }
}

/// Trailing-only debouncer for resize events.
///
/// The core performs no scheduling, so time comes in from the caller as
/// seconds. `observe` supersedes any pending event; `poll` fires at most
/// the last one once its window has elapsed; `cancel` must be called on
/// teardown so no stale event fires against a gone consumer.
#[derive(Clone, Debug)]
pub struct ResizeController {
    window_secs: f64,
    pending: Option<Pending>,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    viewport: Dimensions,
    due: f64,
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_SECS)
    }
}

impl ResizeController {
    pub fn new(window_secs: f64) -> Self {
        Self {
            window_secs: window_secs.max(0.0),
            pending: None,
        }
    }

    /// Record a resize event at `now` seconds. Replaces any pending one.
    pub fn observe(&mut self, viewport: Dimensions, now: f64) {
        self.pending = Some(Pending {
            viewport,
            due: now + self.window_secs,
        });
    }

    /// The settled viewport, if the debounce window has elapsed. Consumes
    /// the pending event.
    pub fn poll(&mut self, now: f64) -> Option<Dimensions> {
        match self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                Some(p.viewport)
            }
            _ => None,
        }
    }

    /// Drop pending work. Call on teardown or when inputs change identity.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
