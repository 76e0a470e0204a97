//! Scatter generation: each piece starts off-canvas at a random edge with
//! a random rotation and stagger delay.

use crate::core::{Dimensions, Vec2};
use crate::rng::Rng64;

/// A piece's randomized pre-assembly state. Computed once at generation
/// time; resize never recomputes it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scatter {
    pub start: Vec2,
    /// Degrees, uniform in [-360, 360].
    pub rotation: f64,
    /// Seconds, uniform in [0, max_delay].
    pub delay: f64,
}

/// Pick one of the four viewport edges uniformly and place the start
/// beyond it by a random 50..300 px margin. Along the parallel axis the
/// position spans 120% of the viewport dimension, inset by 10% and
/// corrected by `offset`, so the piece stays fully off-screen after the
/// container-level placement shift.
pub fn generate_scatter(
    viewport: Dimensions,
    offset: Vec2,
    max_delay: f64,
    rng: &mut Rng64,
) -> Scatter {
    let vw = viewport.width;
    let vh = viewport.height;

    let start = match rng.next_index(4) {
        // top
        0 => Vec2::new(
            rng.next_f64_01() * vw * 1.2 - offset.x - vw * 0.1,
            -(rng.next_f64_01() * 250.0) - 50.0,
        ),
        // right
        1 => Vec2::new(
            vw + rng.next_f64_01() * 250.0 + 50.0 - offset.x,
            rng.next_f64_01() * vh * 1.2 - offset.y - vh * 0.1,
        ),
        // bottom
        2 => Vec2::new(
            rng.next_f64_01() * vw * 1.2 - offset.x - vw * 0.1,
            vh + rng.next_f64_01() * 250.0 + 50.0 - offset.y,
        ),
        // left
        _ => Vec2::new(
            -(rng.next_f64_01() * 250.0) - 50.0,
            rng.next_f64_01() * vh * 1.2 - offset.y - vh * 0.1,
        ),
    };

    Scatter {
        start,
        rotation: (rng.next_f64_01() - 0.5) * 720.0,
        delay: rng.next_f64_01() * max_delay.max(0.0),
    }
}
