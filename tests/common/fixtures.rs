//! Test fixtures and data factories

use cloudlb_rs::{ComputeNode, Node};

/// Factory for compute nodes
pub struct NodeFactory;

impl NodeFactory {
    /// Node with a single public address
    pub fn single(ip: &str) -> Node {
        Node::new("node-single").with_public_ip(ip)
    }

    /// Node with several public addresses and a private one
    pub fn multi_homed() -> Node {
        Node::new("node-multi")
            .with_public_ip("203.0.113.10")
            .with_public_ip("203.0.113.11")
            .with_public_ip("198.51.100.12")
            .with_private_ip("10.10.0.5")
    }

    /// Node that only has private addresses
    pub fn private_only() -> Node {
        Node::new("node-private").with_private_ip("10.10.0.6")
    }
}

/// Compute node type that is not `Node`, to check the trait is all that matters
pub struct BareMetalHost {
    pub addresses: Vec<String>,
}

impl ComputeNode for BareMetalHost {
    fn public_ips(&self) -> &[String] {
        &self.addresses
    }
}
