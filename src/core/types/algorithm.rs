//! Portable load-balancing algorithms

use serde::{Deserialize, Serialize};
use std::fmt;

/// Load-balancing strategy, independent of any provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Algorithm {
    /// Random backend per connection
    Random = 0,
    /// Rotate through backends in order
    RoundRobin = 1,
    /// Backend with the fewest open connections
    LeastConnections = 2,
}

/// Algorithm used when a caller does not pick one
pub const DEFAULT_ALGORITHM: Algorithm = Algorithm::RoundRobin;

impl Algorithm {
    /// Every variant, in discriminant order
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Random,
        Algorithm::RoundRobin,
        Algorithm::LeastConnections,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::RoundRobin => "round_robin",
            Self::LeastConnections => "least_connections",
        }
    }
}

impl Default for Algorithm {
    fn default() -> Self {
        DEFAULT_ALGORITHM
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Algorithm {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_u8() == value)
            .ok_or(value)
    }
}
