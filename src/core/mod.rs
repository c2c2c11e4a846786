//! Core functionality
//!
//! Value types, the driver contract and the bundled drivers.

pub mod drivers;
pub mod traits;
pub mod types;
