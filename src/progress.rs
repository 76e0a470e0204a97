//! The motion model: one pure formula turning a global progress signal
//! into a piece's interpolated visual state.
//!
//! Both drive modes reduce to the same piece-local progress computation,
//! so an autoplay clock and an external scrubber agree exactly on the
//! assembled end-state and on per-piece timing offsets. Evaluation is
//! memoryless: the same `(piece, signal, config)` tuple always yields an
//! identical [`VisualState`], regardless of call order.

use crate::grid::Piece;

/// Scale every piece starts at before growing to 1.
const SCALE_START: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    OutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for kurbo::Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        kurbo::Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// The single source of truth driving all pieces' visual state at an
/// instant: either wall-clock seconds since playback start, or an
/// externally scrubbed scalar in [0,100].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ProgressSignal {
    Elapsed(f64),
    Scrub(f64),
}

impl ProgressSignal {
    /// Position on the 0..total_duration timeline, in seconds.
    pub fn timeline_secs(self, total_duration: f64) -> f64 {
        match self {
            Self::Elapsed(secs) => secs,
            Self::Scrub(value) => value / 100.0 * total_duration,
        }
    }
}

/// A piece's own [0,1] animation completion: the global signal shifted by
/// the piece's stagger delay, then cubic ease-out.
///
/// A delay at or beyond the total duration is degenerate: local progress
/// pins to 0 until the signal reaches the end of the timeline, then
/// jumps to 1. Never NaN.
pub fn piece_progress(signal: ProgressSignal, delay: f64, total_duration: f64) -> f64 {
    let t = signal.timeline_secs(total_duration);
    let span = total_duration - delay;

    if span <= 0.0 {
        return if t >= total_duration { 1.0 } else { 0.0 };
    }

    let raw = ((t - delay) / span).clamp(0.0, 1.0);
    Ease::OutCubic.apply(raw)
}

/// Interpolated presentation state for one piece. The boundary mask used
/// throughout is the piece's assembled mask; the scatter mask is only a
/// static pre-animation shape in the time-driven playback path.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct VisualState {
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub rotation: f64,
    pub opacity: f64,
    pub scale: f64,
}

/// Opacity endpoints and timeline length for evaluation.
#[derive(Clone, Copy, Debug)]
pub struct MotionParams {
    pub total_duration: f64,
    pub start_opacity: f64,
    pub end_opacity: f64,
}

/// Evaluate one piece at a global progress signal.
///
/// Position and rotation interpolate toward zero: the assembled position
/// is the piece's natural, non-offset-relative origin; the container
/// carries the placement offset. Output is rounded (2 decimals for
/// position/rotation/opacity, 3 for scale) so scrubbing does not produce
/// sub-pixel jitter; rounding keeps the function idempotent.
pub fn evaluate(piece: &Piece, signal: ProgressSignal, params: MotionParams) -> VisualState {
    let t = piece_progress(signal, piece.delay, params.total_duration);
    let position = <kurbo::Vec2 as Lerp>::lerp(&piece.start, &kurbo::Vec2::ZERO, t);

    VisualState {
        x: round2(position.x),
        y: round2(position.y),
        rotation: round2(<f64 as Lerp>::lerp(&piece.start_rotation, &0.0, t)),
        opacity: round2(<f64 as Lerp>::lerp(
            &params.start_opacity,
            &params.end_opacity,
            t,
        )),
        scale: round3(<f64 as Lerp>::lerp(&SCALE_START, &1.0, t)),
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}
