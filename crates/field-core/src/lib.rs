pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod paint;
pub mod palette;
pub mod particle;
pub mod pointer;
pub mod stats;

pub use config::*;
pub use error::*;
pub use field::*;
pub use paint::*;
pub use palette::*;
pub use particle::*;
pub use pointer::*;
pub use stats::*;
