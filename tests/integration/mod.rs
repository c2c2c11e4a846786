//! Integration tests for cloudlb-rs
//!
//! These tests drive the public API end to end with real stub objects.

pub mod algorithm_tests;
pub mod balancer_tests;
pub mod config_tests;
pub mod http_connection_tests;
