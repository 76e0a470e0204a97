//! Grid decomposition: partition a content rectangle into N×N cells and
//! emit one quad or two triangles per cell, each with an exact boundary
//! and a percentage mask.

use crate::core::{Dimensions, Point, Rect, Vec2};
use crate::mask::{polygon_mask, scatter_polygon};
use crate::rng::Rng64;
use crate::scatter::generate_scatter;

/// Tessellation applied to each grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PieceShape {
    /// One four-corner piece per cell.
    Quad,
    /// Two triangles per cell, split along the cell's main diagonal.
    /// The diagonal choice is fixed.
    TrianglePair,
}

impl PieceShape {
    pub fn vertex_count(self) -> usize {
        match self {
            Self::Quad => 4,
            Self::TrianglePair => 3,
        }
    }

    pub fn pieces_per_cell(self) -> usize {
        match self {
            Self::Quad => 1,
            Self::TrianglePair => 2,
        }
    }
}

/// One polygonal region of the tiled content area.
///
/// `cell`, `boundary` and `mask` are deterministic for a fixed
/// (content, order, shape); `scatter_mask`, `start`, `start_rotation`
/// and `delay` are drawn from the generation pass's randomness source.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Piece {
    /// Dense, zero-based, row-major; two sequential ids per cell for
    /// [`PieceShape::TrianglePair`] (top-left triangle first).
    pub id: u32,
    /// Position and size within the unshifted content area.
    pub cell: Rect,
    /// Absolute polygon corners: 3 for a triangle, 4 for a quad.
    pub boundary: Vec<Point>,
    /// Assembled boundary mask, percentages of the piece's bounding box.
    /// Always matches `boundary` exactly.
    pub mask: String,
    /// Randomized decorative polygon shown before assembly. Never used
    /// for tiling or hit-testing.
    pub scatter_mask: String,
    /// Off-canvas start position.
    pub start: Vec2,
    /// Start rotation in degrees.
    pub start_rotation: f64,
    /// Stagger delay in seconds.
    pub delay: f64,
}

/// Parameters the scatter half of generation needs: where pieces fly in
/// from, how the container shift corrects start positions, and the
/// stagger bound.
#[derive(Clone, Copy, Debug)]
pub struct ScatterParams {
    pub viewport: Dimensions,
    /// Correction for the container-level placement shift. Zero when the
    /// container itself carries the placement offset.
    pub offset: Vec2,
    pub max_delay: f64,
}

/// Partition `content` into `order`×`order` cells and emit pieces in
/// row-major order. An `order` below 1 is clamped to 1 so degenerate
/// input yields a single piece rather than an error.
///
/// The returned collection is complete before it is handed back, so a
/// caller swapping it in replaces the previous generation atomically.
#[tracing::instrument(skip(rng))]
pub fn generate_pieces(
    content: Dimensions,
    order: u32,
    shape: PieceShape,
    scatter: ScatterParams,
    rng: &mut Rng64,
) -> Vec<Piece> {
    let order = order.max(1);
    let cell_w = content.width / f64::from(order);
    let cell_h = content.height / f64::from(order);

    let mut pieces = Vec::with_capacity(order as usize * order as usize * shape.pieces_per_cell());
    let mut id = 0u32;

    for row in 0..order {
        for col in 0..order {
            let x = f64::from(col) * cell_w;
            let y = f64::from(row) * cell_h;
            let cell = Rect::new(x, y, x + cell_w, y + cell_h);

            match shape {
                PieceShape::Quad => {
                    pieces.push(make_piece(id, cell, quad_points(cell), shape, scatter, rng));
                    id += 1;
                }
                PieceShape::TrianglePair => {
                    pieces.push(make_piece(
                        id,
                        cell,
                        top_left_triangle_points(cell),
                        shape,
                        scatter,
                        rng,
                    ));
                    id += 1;
                    pieces.push(make_piece(
                        id,
                        cell,
                        bottom_right_triangle_points(cell),
                        shape,
                        scatter,
                        rng,
                    ));
                    id += 1;
                }
            }
        }
    }

    pieces
}

fn make_piece(
    id: u32,
    cell: Rect,
    boundary: Vec<Point>,
    shape: PieceShape,
    params: ScatterParams,
    rng: &mut Rng64,
) -> Piece {
    debug_assert_eq!(boundary.len(), shape.vertex_count());
    let mask = polygon_mask(&boundary, cell);
    let scatter_mask = scatter_polygon(shape.vertex_count(), rng);
    let scatter = generate_scatter(params.viewport, params.offset, params.max_delay, rng);

    Piece {
        id,
        cell,
        boundary,
        mask,
        scatter_mask,
        start: scatter.start,
        start_rotation: scatter.rotation,
        delay: scatter.delay,
    }
}

/// Clockwise from the top-left corner.
fn quad_points(cell: Rect) -> Vec<Point> {
    vec![
        Point::new(cell.x0, cell.y0),
        Point::new(cell.x1, cell.y0),
        Point::new(cell.x1, cell.y1),
        Point::new(cell.x0, cell.y1),
    ]
}

fn top_left_triangle_points(cell: Rect) -> Vec<Point> {
    vec![
        Point::new(cell.x0, cell.y0),
        Point::new(cell.x1, cell.y0),
        Point::new(cell.x0, cell.y1),
    ]
}

fn bottom_right_triangle_points(cell: Rect) -> Vec<Point> {
    vec![
        Point::new(cell.x1, cell.y0),
        Point::new(cell.x1, cell.y1),
        Point::new(cell.x0, cell.y1),
    ]
}
