#![forbid(unsafe_code)]

pub mod core;
pub mod dsl;
pub mod error;
pub mod fit;
pub mod grid;
pub mod guide;
pub mod mask;
pub mod model;
pub mod playback;
pub mod progress;
pub mod resize;
pub mod rng;
pub mod scatter;

pub use self::core::{Dimensions, Point, Rect, Vec2};
pub use dsl::AssemblerBuilder;
pub use error::{TessellaError, TessellaResult};
pub use fit::{Anchor, SizeSpec};
pub use grid::{Piece, PieceShape};
pub use model::{Assembly, AssemblerConfig, DriveMode};
pub use playback::{Autoplay, CompletionFlourish};
pub use progress::{Ease, MotionParams, ProgressSignal, VisualState, evaluate};
pub use resize::{ResizeController, SpringConfig, recompute_placement};
pub use rng::Rng64;
