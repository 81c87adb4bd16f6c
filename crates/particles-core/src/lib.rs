pub mod animator;
pub mod clock;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod palette;
pub mod shapes;
pub mod smoothing;
pub mod state;
pub mod tracking;
pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use animator::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use gesture::*;
pub use palette::*;
pub use shapes::*;
pub use smoothing::*;
pub use state::*;
pub use tracking::*;
