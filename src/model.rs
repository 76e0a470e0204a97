//! The assembly model: configuration plus the explicit generation
//! pipeline (fit → place → decompose → scatter).

use crate::core::{Dimensions, Vec2};
use crate::error::{TessellaError, TessellaResult};
use crate::fit::{self, Anchor, SizeSpec};
use crate::grid::{self, Piece, PieceShape, ScatterParams};
use crate::resize::SpringConfig;
use crate::rng::{Rng64, stable_hash64};

/// How the global progress signal is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DriveMode {
    /// Internal clock, plays once.
    Autoplay,
    /// Externally supplied 0..100 scalar, scrubbable in any order.
    Controlled,
}

/// Plain-value configuration surface for one assembly.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AssemblerConfig {
    /// Grid divisions per axis; must be >= 1.
    pub grid_order: u32,
    pub shape: PieceShape,
    pub anchor: Anchor,
    /// Opacity pieces start at, in [0,1].
    pub start_opacity: f64,
    /// Opacity pieces end at, in [0,1].
    pub end_opacity: f64,
    /// Total animation duration in seconds; must be > 0.
    pub duration_secs: f64,
    /// Upper bound for per-piece stagger delays, seconds.
    pub max_delay_secs: f64,
    pub drive: DriveMode,
    /// Requested width; percent resolves against the parent container.
    pub requested_width: Option<SizeSpec>,
    pub requested_height: Option<SizeSpec>,
    /// Rescale content with the viewport on resize.
    pub maintain_aspect: bool,
    /// Dimensions used when no media is present or loading failed.
    pub fallback: Dimensions,
    pub spring: SpringConfig,
    /// None seeds scatter from entropy; Some makes generation
    /// reproducible.
    pub seed: Option<u64>,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            grid_order: 8,
            shape: PieceShape::TrianglePair,
            anchor: Anchor::Center,
            start_opacity: 0.1,
            end_opacity: 1.0,
            duration_secs: 4.0,
            max_delay_secs: 1.2,
            drive: DriveMode::Autoplay,
            requested_width: None,
            requested_height: None,
            maintain_aspect: false,
            fallback: Dimensions::new(600.0, 400.0),
            spring: SpringConfig::default(),
            seed: None,
        }
    }
}

impl AssemblerConfig {
    pub fn validate(&self) -> TessellaResult<()> {
        if self.grid_order == 0 {
            return Err(TessellaError::validation("grid_order must be >= 1"));
        }
        if !(self.duration_secs > 0.0) {
            return Err(TessellaError::animation("duration_secs must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.start_opacity) {
            return Err(TessellaError::animation("start_opacity must be in [0,1]"));
        }
        if !(0.0..=1.0).contains(&self.end_opacity) {
            return Err(TessellaError::animation("end_opacity must be in [0,1]"));
        }
        if self.max_delay_secs < 0.0 || !self.max_delay_secs.is_finite() {
            return Err(TessellaError::animation(
                "max_delay_secs must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Opacity endpoints and timeline length for
    /// [`crate::progress::evaluate`].
    pub fn motion_params(&self) -> crate::progress::MotionParams {
        crate::progress::MotionParams {
            total_duration: self.duration_secs,
            start_opacity: self.start_opacity,
            end_opacity: self.end_opacity,
        }
    }
}

/// One generation pass: the immutable piece collection with its content
/// dimensions and placement offset. Regenerating builds a whole new
/// `Assembly`; partial regeneration is never observable.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Assembly {
    pub content: Dimensions,
    /// Pre-fit native dimensions, recorded when aspect preservation is on
    /// so resize can refit from the source size.
    pub original: Option<Dimensions>,
    /// Container-level placement offset. Not baked into piece geometry.
    pub offset: Vec2,
    pub pieces: Vec<Piece>,
    /// Gates first paint.
    pub ready: bool,
}

impl Assembly {
    /// Run the full pipeline for loaded media (`native = Some`) or the
    /// fallback surface (`native = None`, covering both the flat-colored
    /// panel mode and media load failure).
    #[tracing::instrument(skip(config))]
    pub fn generate(
        config: &AssemblerConfig,
        native: Option<Dimensions>,
        parent: Dimensions,
        viewport: Dimensions,
    ) -> TessellaResult<Self> {
        config.validate()?;
        ensure_finite("parent", parent)?;
        ensure_finite("viewport", viewport)?;

        let native = match native {
            Some(native) => native,
            None => {
                tracing::debug!(
                    fallback = ?config.fallback,
                    "no media dimensions; using fallback surface"
                );
                config.fallback
            }
        };
        ensure_finite("content", native)?;

        let content = fit::resolve_dimensions(
            native,
            config.requested_width,
            config.requested_height,
            parent,
            viewport,
        );
        let offset = fit::resolve_anchor(config.anchor, content, viewport);

        // The scatter stream is domain-separated from the raw seed, so
        // future streams (per-piece jitter, flourish variants) can hash
        // their own label without disturbing existing scatter output.
        let mut rng = match config.seed {
            Some(seed) => Rng64::new(stable_hash64(seed, "scatter")),
            None => Rng64::from_entropy(),
        };

        // Pieces scatter relative to the unshifted content area; the
        // container carries the placement offset, so no correction here.
        let pieces = grid::generate_pieces(
            content,
            config.grid_order,
            config.shape,
            ScatterParams {
                viewport,
                offset: Vec2::ZERO,
                max_delay: config.max_delay_secs,
            },
            &mut rng,
        );

        Ok(Self {
            content,
            original: config.maintain_aspect.then_some(native),
            offset,
            pieces,
            ready: true,
        })
    }

    /// Largest stagger delay in this pass.
    pub fn max_delay(&self) -> f64 {
        self.pieces.iter().map(|p| p.delay).fold(0.0, f64::max)
    }
}

/// Non-finite inputs would leak NaN into every downstream mask and
/// scatter position, so generation refuses them up front.
fn ensure_finite(name: &str, dims: Dimensions) -> TessellaResult<()> {
    if dims.width.is_finite() && dims.height.is_finite() {
        Ok(())
    } else {
        Err(TessellaError::geometry(format!(
            "{name} dimensions must be finite, got {}x{}",
            dims.width, dims.height
        )))
    }
}
