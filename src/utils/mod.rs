//! Utility modules
//!
//! - **logging**: subscriber setup for `tracing`

pub mod logging;

pub use logging::{LogLevel, init_logging};
