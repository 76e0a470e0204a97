pub use kurbo::{Point, Rect, Vec2};

/// Pixel dimensions of a rectangular surface (content area, viewport,
/// parent container).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_degenerate(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Aspect ratio as height over width; `None` when either axis is
    /// degenerate, so callers fall back instead of dividing by zero.
    pub fn aspect(self) -> Option<f64> {
        if self.is_degenerate() {
            None
        } else {
            Some(self.height / self.width)
        }
    }

    pub fn scaled(self, factor: f64) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }
}
