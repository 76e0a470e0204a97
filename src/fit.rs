//! Fit & placement: resolve requested size specifications into concrete
//! pixel dimensions and a named/percentage anchor into a pixel offset.

use crate::core::{Dimensions, Vec2};

/// Fixed inset used by corner anchor presets.
const EDGE_PADDING: f64 = 50.0;

/// Default maximum content bound, relative to the viewport and capped.
/// Natural-fit sizing never upscales beyond this.
pub fn default_max_dimensions(viewport: Dimensions) -> Dimensions {
    Dimensions::new(
        f64::min(800.0, viewport.width - 100.0).max(0.0),
        f64::min(600.0, viewport.height - 300.0).max(0.0),
    )
}

/// A requested width or height: absolute pixels or a percentage of the
/// parent container.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum SizeSpec {
    Px(f64),
    Percent(f64),
}

impl SizeSpec {
    /// Parse `"80%"`, `"500px"` or `"500"`. Returns `None` for anything
    /// unparseable; callers fall back to the native dimension silently.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if let Some(pct) = value.strip_suffix('%') {
            return pct.trim().parse::<f64>().ok().map(Self::Percent);
        }
        if let Some(px) = value.strip_suffix("px") {
            return px.trim().parse::<f64>().ok().map(Self::Px);
        }
        value.parse::<f64>().ok().map(Self::Px)
    }

    pub fn resolve(self, parent_size: f64) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Percent(p) => parent_size * p / 100.0,
        }
    }
}

/// Resolve requested width/height against native content dimensions.
///
/// - neither requested: fit the native dimensions into the default
///   maximum bound for the viewport, preserving aspect ratio;
/// - one requested: resolve it (percent against the parent) and derive
///   the other from the native aspect ratio;
/// - both requested: resolve both independently. This path deliberately
///   skips aspect enforcement for callers that know the target
///   proportions.
pub fn resolve_dimensions(
    native: Dimensions,
    requested_width: Option<SizeSpec>,
    requested_height: Option<SizeSpec>,
    parent: Dimensions,
    viewport: Dimensions,
) -> Dimensions {
    match (requested_width, requested_height) {
        (None, None) => fit_within(native, default_max_dimensions(viewport), false),
        (Some(w), Some(h)) => {
            Dimensions::new(w.resolve(parent.width), h.resolve(parent.height))
        }
        (Some(w), None) => {
            let width = w.resolve(parent.width);
            match native.aspect() {
                Some(aspect) => Dimensions::new(width, width * aspect),
                None => Dimensions::new(width, native.height),
            }
        }
        (None, Some(h)) => {
            let height = h.resolve(parent.height);
            match native.aspect() {
                Some(aspect) => Dimensions::new(height / aspect, height),
                None => Dimensions::new(native.width, height),
            }
        }
    }
}

/// Scale `original` uniformly to fit inside `max`. Never upscales unless
/// `allow_scale_up` is set.
pub fn fit_within(original: Dimensions, max: Dimensions, allow_scale_up: bool) -> Dimensions {
    let cap = if allow_scale_up { f64::INFINITY } else { 1.0 };
    let scale = f64::min(
        f64::min(max.width / original.width, max.height / original.height),
        cap,
    );
    if !scale.is_finite() {
        return original;
    }
    original.scaled(scale)
}

/// Where the assembled surface should sit within the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    /// Percentage point of the viewport mapped to the content's center.
    Custom { x: f64, y: f64 },
}

/// Resolve an anchor into the pixel translation applied to the whole
/// assembled surface. Piece geometry is never offset by this.
pub fn resolve_anchor(anchor: Anchor, content: Dimensions, viewport: Dimensions) -> Vec2 {
    let (vw, vh) = (viewport.width, viewport.height);
    let (w, h) = (content.width, content.height);
    match anchor {
        Anchor::Center => Vec2::new((vw - w) / 2.0, (vh - h) / 2.0),
        Anchor::TopLeft => Vec2::new(EDGE_PADDING, EDGE_PADDING),
        Anchor::TopRight => Vec2::new(vw - w - EDGE_PADDING, EDGE_PADDING),
        Anchor::BottomLeft => Vec2::new(EDGE_PADDING, vh - h - EDGE_PADDING),
        Anchor::BottomRight => Vec2::new(vw - w - EDGE_PADDING, vh - h - EDGE_PADDING),
        Anchor::Custom { x, y } => Vec2::new(vw * x / 100.0 - w / 2.0, vh * y / 100.0 - h / 2.0),
    }
}
