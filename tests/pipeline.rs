//! End-to-end pipeline properties: generation, placement, both drive
//! modes, and resize recompute working together.

use tessella::{
    Anchor, AssemblerBuilder, Assembly, Autoplay, Dimensions, DriveMode, PieceShape,
    ProgressSignal, ResizeController, Vec2, evaluate, recompute_placement,
};

fn viewport() -> Dimensions {
    Dimensions::new(1200.0, 800.0)
}

fn assembly(shape: PieceShape, order: u32) -> Assembly {
    let config = AssemblerBuilder::new(order, shape)
        .seed(1234)
        .drive(DriveMode::Controlled)
        .build()
        .unwrap();
    Assembly::generate(&config, Some(Dimensions::new(600.0, 400.0)), viewport(), viewport())
        .unwrap()
}

#[test]
fn piece_counts_match_the_tessellation() {
    assert_eq!(assembly(PieceShape::Quad, 3).pieces.len(), 9);
    assert_eq!(assembly(PieceShape::TrianglePair, 3).pieces.len(), 18);
}

#[test]
fn tiling_covers_the_content_area() {
    for shape in [PieceShape::Quad, PieceShape::TrianglePair] {
        let assembly = assembly(shape, 4);
        let area: f64 = assembly
            .pieces
            .iter()
            .map(|p| {
                let pts = &p.boundary;
                let n = pts.len();
                let twice: f64 = (0..n)
                    .map(|i| {
                        let a = pts[i];
                        let b = pts[(i + 1) % n];
                        a.x * b.y - b.x * a.y
                    })
                    .sum();
                (twice / 2.0).abs()
            })
            .sum();
        let expected = assembly.content.width * assembly.content.height;
        assert!((area - expected).abs() < 1e-6, "{shape:?}: {area} vs {expected}");
    }
}

#[test]
fn regeneration_keeps_geometry_and_may_change_scatter() {
    let a = assembly(PieceShape::TrianglePair, 2);
    let b = assembly(PieceShape::TrianglePair, 2);
    for (pa, pb) in a.pieces.iter().zip(&b.pieces) {
        assert_eq!(pa.id, pb.id);
        assert_eq!(pa.cell, pb.cell);
        assert_eq!(pa.mask, pb.mask);
    }
}

#[test]
fn scrub_and_clock_agree_on_the_assembled_end_state() {
    let config = AssemblerBuilder::new(3, PieceShape::Quad)
        .seed(9)
        .duration_secs(4.0)
        .opacity(0.1, 1.0)
        .build()
        .unwrap();
    let assembly =
        Assembly::generate(&config, None, viewport(), viewport()).unwrap();
    let params = config.motion_params();

    for piece in &assembly.pieces {
        let scrubbed = evaluate(piece, ProgressSignal::Scrub(100.0), params);
        let clocked = evaluate(piece, ProgressSignal::Elapsed(4.0), params);
        assert_eq!(scrubbed, clocked);
        assert_eq!(scrubbed.x, 0.0);
        assert_eq!(scrubbed.y, 0.0);
        assert_eq!(scrubbed.rotation, 0.0);
        assert_eq!(scrubbed.opacity, 1.0);
        assert_eq!(scrubbed.scale, 1.0);

        // And on the scattered start state.
        let at_zero = evaluate(piece, ProgressSignal::Scrub(0.0), params);
        assert_eq!(at_zero, evaluate(piece, ProgressSignal::Elapsed(0.0), params));
        assert_eq!(at_zero.opacity, 0.1);
        assert_eq!(at_zero.scale, 0.2);
    }
}

#[test]
fn non_monotonic_scrubbing_is_order_free() {
    let assembly = assembly(PieceShape::Quad, 2);
    let config = AssemblerBuilder::new(2, PieceShape::Quad).build().unwrap();
    let params = config.motion_params();
    let piece = &assembly.pieces[0];

    let direct = evaluate(piece, ProgressSignal::Scrub(50.0), params);
    for v in [80.0, 20.0, 50.0, 99.0, 0.0] {
        let _ = evaluate(piece, ProgressSignal::Scrub(v), params);
    }
    assert_eq!(direct, evaluate(piece, ProgressSignal::Scrub(50.0), params));
}

#[test]
fn autoplay_span_covers_every_stagger_then_flourishes() {
    let config = AssemblerBuilder::new(3, PieceShape::TrianglePair)
        .seed(1234)
        .duration_secs(4.0)
        .build()
        .unwrap();
    let assembly =
        Assembly::generate(&config, Some(Dimensions::new(600.0, 400.0)), viewport(), viewport())
            .unwrap();
    let mut play = Autoplay::new(config.duration_secs, &assembly.pieces);
    let span = play.span();

    assert_eq!(span, 4.0 + assembly.max_delay());

    // The clock drives evaluation through the playback signal; once the
    // span has elapsed every piece sits assembled.
    let params = config.motion_params();
    for piece in &assembly.pieces {
        let done = evaluate(piece, play.signal(span), params);
        assert_eq!(done.x, 0.0);
        assert_eq!(done.y, 0.0);
        assert_eq!(done.opacity, 1.0);
    }

    assert!(!play.take_completion(span - 0.01));
    assert!(play.take_completion(span));
    assert!(!play.take_completion(span + 1.0));

    let flourish = play.flourish();
    assert_eq!(flourish.opacity_at(span + 0.5), 1.0);
    assert_eq!(flourish.opacity_at(span + 2.0), 0.0);
}

#[test]
fn fit_and_anchor_contract_examples() {
    // Aspect lock: 1000x500 at "50%" of an 800-wide parent -> 400x200.
    let config = AssemblerBuilder::new(2, PieceShape::Quad)
        .width("50%")
        .seed(1)
        .build()
        .unwrap();
    let assembly = Assembly::generate(
        &config,
        Some(Dimensions::new(1000.0, 500.0)),
        Dimensions::new(800.0, 600.0),
        viewport(),
    )
    .unwrap();
    assert_eq!(assembly.content, Dimensions::new(400.0, 200.0));
    // Center anchor of 400x200 in 1200x800.
    assert_eq!(assembly.offset, Vec2::new(400.0, 300.0));
}

#[test]
fn resize_pipeline_debounces_then_recomputes_only_placement() {
    let config = AssemblerBuilder::new(2, PieceShape::Quad)
        .seed(5)
        .build()
        .unwrap();
    let assembly =
        Assembly::generate(&config, Some(Dimensions::new(600.0, 400.0)), viewport(), viewport())
            .unwrap();
    let geometry_before: Vec<_> = assembly.pieces.iter().map(|p| p.cell).collect();

    let mut ctl = ResizeController::default();
    ctl.observe(Dimensions::new(1400.0, 900.0), 0.0);
    ctl.observe(Dimensions::new(1000.0, 700.0), 0.1);
    assert_eq!(ctl.poll(0.15), None);

    let settled = ctl.poll(0.5).expect("trailing event fires");
    assert_eq!(settled, Dimensions::new(1000.0, 700.0));

    let update = recompute_placement(
        assembly.content,
        assembly.original,
        Anchor::Center,
        settled,
        config.maintain_aspect,
    );
    assert_eq!(update.dimensions, None);
    assert_eq!(update.offset, Vec2::new(200.0, 150.0));

    // Grid topology is untouched by resize.
    let geometry_after: Vec<_> = assembly.pieces.iter().map(|p| p.cell).collect();
    assert_eq!(geometry_before, geometry_after);
}

#[test]
fn interpolated_states_never_contain_nan() {
    let config = AssemblerBuilder::new(3, PieceShape::TrianglePair)
        .seed(77)
        .build()
        .unwrap();
    // Zero-dimension content is visually degenerate but must stay finite.
    let assembly = Assembly::generate(
        &config,
        Some(Dimensions::ZERO),
        viewport(),
        viewport(),
    )
    .unwrap();
    let params = config.motion_params();

    for piece in &assembly.pieces {
        assert!(!piece.mask.contains("NaN"));
        for scrub in [0.0, 33.3, 100.0] {
            let state = evaluate(piece, ProgressSignal::Scrub(scrub), params);
            for v in [state.x, state.y, state.rotation, state.opacity, state.scale] {
                assert!(v.is_finite());
            }
        }
    }
}
