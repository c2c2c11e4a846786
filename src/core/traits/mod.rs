//! Core traits module
//!
//! Contains the abstract interfaces drivers and transports implement

pub mod connection;
pub mod driver;
pub mod error_mapper;

pub use connection::Connection;
pub use driver::LoadBalancerDriver;
pub use error_mapper::{ErrorMapper, GenericErrorMapper};
