//! # cloudlb-rs
//!
//! Provider-agnostic management of cloud load balancers.
//!
//! ## Features
//!
//! - **One contract for every provider**: [`LoadBalancerDriver`] covers
//!   balancer lifecycle, member attachment and algorithm translation
//! - **Portable algorithms**: [`Algorithm`] maps to and from each provider's
//!   native values through per-driver constant tables
//! - **Snapshots bound to their driver**: a [`Balancer`] borrows the driver that
//!   produced it, so it cannot outlive it
//! - **Synchronous**: every call returns once the connection has answered
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloudlb_rs::{Algorithm, CreateBalancerRequest, DummyDriver, LoadBalancerDriver, Member, Node};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = DummyDriver::with_key("my-key")?;
//!
//!     let balancer = driver.create_balancer(
//!         CreateBalancerRequest::new("web", 80)
//!             .with_algorithm(Algorithm::LeastConnections)
//!             .with_member(Member::unassigned("10.0.0.1", 80)),
//!     )?;
//!
//!     let node = Node::new("vm-1").with_public_ip("203.0.113.7");
//!     let member = balancer.attach_compute_node(&node)?;
//!     println!("attached {}", member);
//!
//!     for member in balancer.list_members()? {
//!         println!("{}", member);
//!     }
//!
//!     driver.destroy_balancer(&balancer)?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod core;
pub mod utils;

// Re-export main types
pub use crate::core::drivers::{
    BaseDriver, DriverConfig, DriverContext, DummyDriver, HttpConnection, LocalConnection,
};
pub use crate::core::traits::{Connection, ErrorMapper, GenericErrorMapper, LoadBalancerDriver};
pub use crate::core::types::{
    Algorithm, Balancer, BalancerLookup, ComputeNode, ConfigError, ConfigResult,
    CreateBalancerRequest, DEFAULT_ALGORITHM, DriverError, DriverResult, IntoResourceId, Member,
    Node, normalize_id,
};
pub use utils::{LogLevel, init_logging};
