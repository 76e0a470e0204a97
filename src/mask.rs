//! Boundary-mask serialization.
//!
//! A mask is a `polygon(x% y%, …)` string whose points are percentages of
//! a piece's own bounding box, so it stays self-contained no matter where
//! the piece is painted.

use crate::core::{Point, Rect};
use crate::rng::Rng64;

/// Convert absolute boundary points into a percentage polygon relative to
/// `bbox`. Deriving the mask twice from identical inputs yields
/// byte-identical output.
///
/// Zero-sized bounding axes use a guarded denominator so degenerate
/// geometry produces `0%` coordinates, never NaN.
pub fn polygon_mask(points: &[Point], bbox: Rect) -> String {
    let w = if bbox.width() > 0.0 { bbox.width() } else { 1.0 };
    let h = if bbox.height() > 0.0 { bbox.height() } else { 1.0 };

    let coords = points
        .iter()
        .map(|p| {
            let x = (p.x - bbox.x0) / w * 100.0;
            let y = (p.y - bbox.y0) / h * 100.0;
            format!("{x}% {y}%")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("polygon({coords})")
}

/// Sample a randomized decorative polygon used as a piece's pre-assembly
/// shape: `point_count` angles evenly spaced around the box center with
/// jitter, radius in [20,40] percent units. No geometric relationship to
/// the assembled mask; never use it for tiling or hit-testing.
pub fn scatter_polygon(point_count: usize, rng: &mut Rng64) -> String {
    let center_x = 50.0;
    let center_y = 50.0;

    let coords = (0..point_count)
        .map(|i| {
            let angle =
                (i as f64 / point_count as f64) * std::f64::consts::TAU + rng.next_f64_01() * 0.5;
            let radius = rng.next_f64_range(20.0, 40.0);
            let x = center_x + angle.cos() * radius;
            let y = center_y + angle.sin() * radius;
            format!("{x}% {y}%")
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("polygon({coords})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_is_relative_to_own_bbox() {
        let bbox = Rect::new(100.0, 200.0, 150.0, 300.0);
        let points = [
            Point::new(100.0, 200.0),
            Point::new(150.0, 200.0),
            Point::new(100.0, 300.0),
        ];
        assert_eq!(
            polygon_mask(&points, bbox),
            "polygon(0% 0%, 100% 0%, 0% 100%)"
        );
    }

    #[test]
    fn mask_is_deterministic() {
        let bbox = Rect::new(0.0, 0.0, 37.0, 41.0);
        let points = [
            Point::new(0.0, 0.0),
            Point::new(37.0, 0.0),
            Point::new(0.0, 41.0),
        ];
        assert_eq!(polygon_mask(&points, bbox), polygon_mask(&points, bbox));
    }

    #[test]
    fn zero_sized_bbox_yields_no_nan() {
        let bbox = Rect::new(10.0, 10.0, 10.0, 10.0);
        let points = [Point::new(10.0, 10.0), Point::new(10.0, 10.0)];
        let mask = polygon_mask(&points, bbox);
        assert!(!mask.contains("NaN"));
        assert_eq!(mask, "polygon(0% 0%, 0% 0%)");
    }

    #[test]
    fn scatter_polygon_has_requested_vertex_count() {
        let mut rng = Rng64::new(11);
        for count in [3usize, 4] {
            let poly = scatter_polygon(count, &mut rng);
            assert_eq!(poly.matches('%').count(), count * 2);
            assert!(poly.starts_with("polygon("));
        }
    }

    #[test]
    fn scatter_polygon_points_stay_in_radius_band() {
        let mut rng = Rng64::new(3);
        for _ in 0..50 {
            let poly = scatter_polygon(3, &mut rng);
            let inner = poly
                .trim_start_matches("polygon(")
                .trim_end_matches(')');
            for pair in inner.split(", ") {
                let mut it = pair.split_whitespace();
                let x: f64 = it.next().unwrap().trim_end_matches('%').parse().unwrap();
                let y: f64 = it.next().unwrap().trim_end_matches('%').parse().unwrap();
                let r = ((x - 50.0).powi(2) + (y - 50.0).powi(2)).sqrt();
                // Small epsilon for the trig round-trip.
                assert!((19.99..=40.01).contains(&r), "radius {r} out of band");
            }
        }
    }
}
