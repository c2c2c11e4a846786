//! Error types for load balancer drivers
//!
//! ## Layout
//!
//! - `DriverError`: the single error type every driver operation returns.
//!   - `NotImplemented`: the driver lacks a required operation. Fatal to the
//!     call; fix the driver, do not handle it at runtime.
//!   - `InvalidValue`: algorithm translation miss, carrying the offending value
//!     and the driver name. Recoverable by the caller.
//!   - `Connection`: transport could not be established. Returned from driver
//!     construction unmodified.
//!   - `Authentication`, `NotFound`, `Validation`, `Provider`, `Transport`:
//!     raised by concrete drivers talking to a provider.
//! - `ConfigError`: driver configuration loading and validation.
//!
//! Errors propagate to the caller unmodified. Nothing in this crate retries.

mod config;
mod driver;

pub use config::{ConfigError, ConfigResult};
pub use driver::{DriverError, DriverResult, InvalidKind};
