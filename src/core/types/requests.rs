//! Request types accepted by driver operations

use serde::{Deserialize, Serialize};

use super::algorithm::Algorithm;
use super::balancer::Balancer;
use super::errors::{DriverError, DriverResult};
use super::member::Member;

/// Options for `create_balancer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBalancerRequest {
    /// Display name (required)
    pub name: String,
    /// Listen port (required)
    pub port: u16,
    /// Defaults to round robin
    #[serde(default)]
    pub algorithm: Algorithm,
    /// Members attached on creation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
}

impl CreateBalancerRequest {
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            port,
            algorithm: Algorithm::default(),
            members: Vec::new(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_member(mut self, member: Member) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Check the required options are usable
    pub fn validate(&self) -> DriverResult<()> {
        if self.name.trim().is_empty() {
            return Err(DriverError::validation("name", "balancer name is required"));
        }
        if self.port == 0 {
            return Err(DriverError::validation("port", "listen port must be non-zero"));
        }
        Ok(())
    }
}

/// Which balancer `balancer_detail` should fetch
#[derive(Debug)]
pub enum BalancerLookup<'a, D> {
    /// A balancer previously returned by the driver
    Balancer(&'a Balancer<'a, D>),
    /// A provider identifier
    Id(String),
}

impl<'a, D> BalancerLookup<'a, D> {
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Identifier to look up, if one is known
    pub fn balancer_id(&self) -> Option<&str> {
        match self {
            Self::Balancer(balancer) => balancer.id(),
            Self::Id(id) if id.is_empty() => None,
            Self::Id(id) => Some(id.as_str()),
        }
    }
}

impl<'a, D> From<&'a Balancer<'a, D>> for BalancerLookup<'a, D> {
    fn from(balancer: &'a Balancer<'a, D>) -> Self {
        Self::Balancer(balancer)
    }
}

impl<D> From<&str> for BalancerLookup<'_, D> {
    fn from(id: &str) -> Self {
        Self::Id(id.to_string())
    }
}

impl<D> From<String> for BalancerLookup<'_, D> {
    fn from(id: String) -> Self {
        Self::Id(id)
    }
}
