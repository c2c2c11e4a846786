//! Core type definition module
//!
//! Value types shared by every load balancer driver

pub mod algorithm;
pub mod balancer;
pub mod errors;
pub mod identifier;
pub mod member;
pub mod node;
pub mod requests;

// Re-export all public types
pub use algorithm::{Algorithm, DEFAULT_ALGORITHM};
pub use balancer::Balancer;
pub use errors::*;
pub use identifier::{IntoResourceId, normalize_id};
pub use member::Member;
pub use node::{ComputeNode, Node};
pub use requests::{BalancerLookup, CreateBalancerRequest};
