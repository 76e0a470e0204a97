use crate::core::Dimensions;
use crate::error::TessellaResult;
use crate::fit::{Anchor, SizeSpec};
use crate::grid::PieceShape;
use crate::model::{AssemblerConfig, DriveMode};
use crate::resize::SpringConfig;

/// Fluent construction for [`AssemblerConfig`], validated on `build`.
pub struct AssemblerBuilder {
    config: AssemblerConfig,
}

impl AssemblerBuilder {
    pub fn new(grid_order: u32, shape: PieceShape) -> Self {
        Self {
            config: AssemblerConfig {
                grid_order,
                shape,
                ..AssemblerConfig::default()
            },
        }
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.config.anchor = anchor;
        self
    }

    pub fn opacity(mut self, start: f64, end: f64) -> Self {
        self.config.start_opacity = start;
        self.config.end_opacity = end;
        self
    }

    pub fn duration_secs(mut self, secs: f64) -> Self {
        self.config.duration_secs = secs;
        self
    }

    pub fn max_delay_secs(mut self, secs: f64) -> Self {
        self.config.max_delay_secs = secs;
        self
    }

    pub fn drive(mut self, drive: DriveMode) -> Self {
        self.config.drive = drive;
        self
    }

    /// Requested width as a spec string (`"80%"`, `"500px"`, `"500"`).
    /// Unparseable strings are dropped silently and the native dimension
    /// is used instead.
    pub fn width(mut self, spec: &str) -> Self {
        self.config.requested_width = parse_or_warn(spec, "width");
        self
    }

    pub fn height(mut self, spec: &str) -> Self {
        self.config.requested_height = parse_or_warn(spec, "height");
        self
    }

    pub fn width_px(mut self, px: f64) -> Self {
        self.config.requested_width = Some(SizeSpec::Px(px));
        self
    }

    pub fn height_px(mut self, px: f64) -> Self {
        self.config.requested_height = Some(SizeSpec::Px(px));
        self
    }

    pub fn maintain_aspect(mut self, keep: bool) -> Self {
        self.config.maintain_aspect = keep;
        self
    }

    pub fn fallback(mut self, dims: Dimensions) -> Self {
        self.config.fallback = dims;
        self
    }

    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.config.spring = spring;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn build(self) -> TessellaResult<AssemblerConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

fn parse_or_warn(spec: &str, axis: &str) -> Option<SizeSpec> {
    let parsed = SizeSpec::parse(spec);
    if parsed.is_none() {
        tracing::debug!(axis, spec, "unparseable size spec; using native dimension");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_expected_config() {
        let config = AssemblerBuilder::new(4, PieceShape::Quad)
            .anchor(Anchor::TopRight)
            .opacity(0.2, 0.9)
            .duration_secs(2.5)
            .drive(DriveMode::Controlled)
            .width("50%")
            .height_px(300.0)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.grid_order, 4);
        assert_eq!(config.shape, PieceShape::Quad);
        assert_eq!(config.anchor, Anchor::TopRight);
        assert_eq!(config.requested_width, Some(SizeSpec::Percent(50.0)));
        assert_eq!(config.requested_height, Some(SizeSpec::Px(300.0)));
        assert_eq!(config.drive, DriveMode::Controlled);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn malformed_size_specs_fall_back_silently() {
        let config = AssemblerBuilder::new(2, PieceShape::Quad)
            .width("wat")
            .build()
            .unwrap();
        assert_eq!(config.requested_width, None);
    }

    #[test]
    fn build_rejects_invalid_configs() {
        assert!(AssemblerBuilder::new(0, PieceShape::Quad).build().is_err());
        assert!(
            AssemblerBuilder::new(2, PieceShape::Quad)
                .duration_secs(0.0)
                .build()
                .is_err()
        );
        assert!(
            AssemblerBuilder::new(2, PieceShape::Quad)
                .opacity(-0.1, 1.0)
                .build()
                .is_err()
        );
    }
}
