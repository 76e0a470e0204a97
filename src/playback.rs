//! Autoplay timeline: the one-shot playback path.
//!
//! The core performs no scheduling. The render layer ticks at whatever
//! rate it likes and hands wall-clock elapsed seconds in; everything here
//! depends only on elapsed time, so playback is frame-rate independent.

use crate::grid::Piece;
use crate::progress::{Ease, ProgressSignal};

const FLOURISH_DURATION: f64 = 1.0;

/// One autoplay run over a generated piece collection. Runs once from 0
/// to `duration + max piece delay`; not restartable. Regenerate the
/// assembly to play again.
#[derive(Clone, Debug)]
pub struct Autoplay {
    duration: f64,
    max_delay: f64,
    completion_fired: bool,
}

impl Autoplay {
    pub fn new(duration: f64, pieces: &[Piece]) -> Self {
        let max_delay = pieces.iter().map(|p| p.delay).fold(0.0, f64::max);
        Self {
            duration,
            max_delay,
            completion_fired: false,
        }
    }

    /// Full playback span in seconds, including the longest stagger.
    pub fn span(&self) -> f64 {
        self.duration + self.max_delay
    }

    /// The signal to feed [`crate::progress::evaluate`] at this instant.
    pub fn signal(&self, elapsed: f64) -> ProgressSignal {
        ProgressSignal::Elapsed(elapsed)
    }

    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.span()
    }

    /// One-shot completion trigger: true exactly once, the first time the
    /// playback span has fully elapsed.
    pub fn take_completion(&mut self, elapsed: f64) -> bool {
        if self.completion_fired || !self.is_finished(elapsed) {
            return false;
        }
        self.completion_fired = true;
        true
    }

    /// The flourish window that follows completion.
    pub fn flourish(&self) -> CompletionFlourish {
        CompletionFlourish {
            delay: self.span(),
            duration: FLOURISH_DURATION,
        }
    }
}

/// Shimmer overlay played once after assembly completes: opacity
/// keyframes [0, 1, 0] at times [0, 0.5, 1] of its window, linear
/// between keys, 0 outside the window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompletionFlourish {
    pub delay: f64,
    pub duration: f64,
}

impl CompletionFlourish {
    pub fn opacity_at(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        let u = (elapsed - self.delay) / self.duration;
        if !(0.0..=1.0).contains(&u) {
            return 0.0;
        }
        if u < 0.5 {
            Ease::Linear.apply(u / 0.5)
        } else {
            1.0 - Ease::Linear.apply((u - 0.5) / 0.5)
        }
    }
}
