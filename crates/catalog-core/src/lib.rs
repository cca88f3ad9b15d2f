//! Publication list filtering.
//!
//! Records are supplied by the caller; this crate only narrows them by kind
//! and by a free-text term, keeping their order.

pub mod error;
pub mod filter;
pub mod publication;

pub use error::*;
pub use filter::*;
pub use publication::*;
