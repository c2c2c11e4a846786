//! Backend member of a load balancer

use serde::{Deserialize, Serialize};
use std::fmt;

use super::identifier::{IntoResourceId, deserialize_resource_id};

/// One backend endpoint attached to a balancer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, deserialize_with = "deserialize_resource_id")]
    id: Option<String>,
    address: String,
    port: u16,
}

impl Member {
    /// Create a member. Falsy ids (`None`, `""`, `0`) leave the member without
    /// an identifier; anything else is stored in string form.
    pub fn new(id: impl IntoResourceId, address: impl Into<String>, port: u16) -> Self {
        Self {
            id: id.into_resource_id(),
            address: address.into(),
            port,
        }
    }

    /// Member that has not been assigned an identifier yet
    pub fn unassigned(address: impl Into<String>, port: u16) -> Self {
        Self::new(None::<String>, address, port)
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Copy of this member carrying a provider-assigned identifier
    pub fn with_id(&self, id: impl IntoResourceId) -> Self {
        Self::new(id, self.address.clone(), self.port)
    }

    /// Same endpoint, ignoring identifiers
    pub fn same_endpoint(&self, other: &Member) -> bool {
        self.address == other.address && self.port == other.port
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Member: id={}, address={}:{}>",
            self.id.as_deref().unwrap_or("None"),
            self.address,
            self.port
        )
    }
}
