//! Generate a small assembly and print interpolated piece states at a few
//! scrub positions, the way a control surface would drive them.

use tessella::{
    AssemblerBuilder, Assembly, Dimensions, DriveMode, PieceShape, ProgressSignal, evaluate,
};

fn main() -> tessella::TessellaResult<()> {
    tracing_subscriber::fmt().init();

    let viewport = Dimensions::new(1280.0, 720.0);
    let config = AssemblerBuilder::new(2, PieceShape::TrianglePair)
        .drive(DriveMode::Controlled)
        .duration_secs(4.0)
        .seed(42)
        .build()?;

    let assembly = Assembly::generate(
        &config,
        Some(Dimensions::new(1000.0, 500.0)),
        viewport,
        viewport,
    )?;

    println!(
        "content {}x{} offset ({:.1}, {:.1}) pieces {}",
        assembly.content.width,
        assembly.content.height,
        assembly.offset.x,
        assembly.offset.y,
        assembly.pieces.len()
    );

    let params = config.motion_params();
    for scrub in [0.0, 25.0, 50.0, 75.0, 100.0] {
        println!("-- scrub {scrub}");
        for piece in assembly.pieces.iter().take(3) {
            let state = evaluate(piece, ProgressSignal::Scrub(scrub), params);
            println!(
                "  piece {:>2}: x {:>8.2} y {:>8.2} rot {:>8.2} opacity {:.2} scale {:.3}",
                piece.id, state.x, state.y, state.rotation, state.opacity, state.scale
            );
        }
    }

    Ok(())
}
