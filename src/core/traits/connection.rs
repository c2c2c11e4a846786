//! Connection trait
//!
//! Transport collaborator owned by every driver

use std::fmt::Debug;

use crate::core::drivers::base::DriverConfig;
use crate::core::types::DriverResult;

/// Pre-authenticated transport a driver issues provider requests through
///
/// A connection is built from the driver's credentials and connected exactly
/// once, while the driver is being constructed. What a request looks like on
/// the wire is up to the concrete connection and driver.
pub trait Connection: Send + Sync + Debug + Sized {
    /// Build an unconnected transport from key, secret and security flag
    fn open(config: &DriverConfig) -> DriverResult<Self>;

    /// Establish the transport
    ///
    /// # Errors
    /// `DriverError::Connection` when the transport cannot be established.
    fn connect(&mut self) -> DriverResult<()>;

    /// Whether `connect` has succeeded
    fn is_connected(&self) -> bool;
}
