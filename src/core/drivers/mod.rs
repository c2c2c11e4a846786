//! Driver implementations
//!
//! - `base` - configuration, connection plumbing and the unimplemented shell
//!   every provider starts from
//! - `dummy` - in-memory driver

pub mod base;
pub mod dummy;

pub use base::{BaseDriver, DriverConfig, DriverContext, HttpConnection};
pub use dummy::{DummyDriver, LocalConnection};
