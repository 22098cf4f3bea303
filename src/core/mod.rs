//! Constants and timekeeping shared by every layer.

pub mod clock;
pub mod constants;

pub use clock::*;
pub use constants::*;
