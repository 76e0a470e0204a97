//! # Tessella guide (v0.1.0)
//!
//! This module is a standalone walkthrough of Tessella's architecture and
//! public API. If you are looking for copy/paste snippets, start with the
//! repository `README.md`. If you are implementing new features, start
//! here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`AssemblerConfig`](crate::AssemblerConfig): the plain-value
//!   configuration surface (grid order, shape, anchor, opacities,
//!   duration, drive mode, size requests)
//! - [`Assembly`](crate::Assembly): one generation pass; content
//!   dimensions, placement offset, and the immutable piece collection
//! - [`Piece`](crate::Piece): a polygonal region with its boundary,
//!   masks, and randomized scatter state
//! - [`ProgressSignal`](crate::ProgressSignal): the single source of
//!   truth driving all pieces' visual state at an instant
//! - [`evaluate`](crate::evaluate): the pure motion formula; returns a
//!   [`VisualState`](crate::VisualState) per piece
//!
//! The pipeline is explicitly staged:
//!
//! 1. Fit & placement: [`resolve_dimensions`](crate::fit::resolve_dimensions)
//!    and [`resolve_anchor`](crate::fit::resolve_anchor)
//! 2. Decomposition: [`generate_pieces`](crate::grid::generate_pieces)
//! 3. Per-frame or per-scrub evaluation: [`evaluate`](crate::evaluate)
//!
//! [`Assembly::generate`](crate::Assembly::generate) composes (1) and (2).
//! There is no implicit dependency tracking: callers re-run the stages
//! they need when inputs change.
//!
//! ---
//!
//! ## One formula, two drive modes
//!
//! Autoplay feeds [`ProgressSignal::Elapsed`](crate::ProgressSignal)
//! seconds from its clock; controlled mode feeds
//! [`ProgressSignal::Scrub`](crate::ProgressSignal) values in `[0,100]`
//! from whatever control surface the caller owns. Both normalize to the
//! same timeline position and the same per-piece local progress, so the
//! two modes agree exactly at matching positions: scrubbing to 100
//! shows the same assembled frame autoplay ends on.
//!
//! Evaluation is memoryless. Calling [`evaluate`](crate::evaluate) with a
//! non-monotonic scrub sequence is fine; each call depends only on its
//! arguments.
//!
//! ---
//!
//! ## Where the randomness lives
//!
//! Scatter starts, rotations, delays and scatter masks come from one
//! injected [`Rng64`](crate::Rng64) per generation pass. Seed it
//! ([`AssemblerConfig::seed`](crate::AssemblerConfig)) for reproducible
//! output under test; leave the seed unset for entropy-backed production
//! scatter. Piece ids, cell geometry, boundaries and assembled masks are
//! deterministic regardless of seed.
//!
//! ---
//!
//! ## What renders, and what this crate does not do
//!
//! Tessella computes geometry and motion state; a render layer paints
//! one element per piece, applies its boundary mask string and the
//! current [`VisualState`](crate::VisualState) transform, and owns the
//! frame clock. Media decode (learning an image or video's native size)
//! happens outside too: pass the result in as `Option<Dimensions>`,
//! where `None` on failure selects the configured fallback surface.
//!
//! On viewport resize, [`ResizeController`](crate::ResizeController)
//! debounces (trailing only) and
//! [`recompute_placement`](crate::recompute_placement) produces a new
//! offset (and, under aspect preservation, new dimensions). The render
//! layer's spring settle animation (configured by
//! [`SpringConfig`](crate::SpringConfig), never integrated here) moves
//! the container. Piece geometry is untouched by resize.
