//! Compute nodes that can be attached to a balancer

use serde::{Deserialize, Serialize};

/// Anything that exposes public network addresses
pub trait ComputeNode {
    /// Public addresses, in provider order
    fn public_ips(&self) -> &[String];
}

/// Plain compute node description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub public_ips: Vec<String>,
    #[serde(default)]
    pub private_ips: Vec<String>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_public_ip(mut self, ip: impl Into<String>) -> Self {
        self.public_ips.push(ip.into());
        self
    }

    pub fn with_private_ip(mut self, ip: impl Into<String>) -> Self {
        self.private_ips.push(ip.into());
        self
    }
}

impl ComputeNode for Node {
    fn public_ips(&self) -> &[String] {
        &self.public_ips
    }
}
