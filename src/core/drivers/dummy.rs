//! In-memory dummy driver
//!
//! Keeps balancers and members in process memory. It speaks no provider API
//! and is meant for tests, demos and exercising code written against
//! `LoadBalancerDriver` without an account.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

use super::base::{DriverConfig, DriverContext};
use crate::core::traits::{Connection, LoadBalancerDriver};
use crate::core::types::{
    Algorithm, Balancer, BalancerLookup, CreateBalancerRequest, DriverError, DriverResult, Member,
};

/// Connection that performs no I/O
#[derive(Debug, Default)]
pub struct LocalConnection {
    connected: bool,
}

impl Connection for LocalConnection {
    fn open(_config: &DriverConfig) -> DriverResult<Self> {
        Ok(Self::default())
    }

    fn connect(&mut self) -> DriverResult<()> {
        self.connected = true;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

const RUNNING: &str = "running";

#[derive(Debug, Clone)]
struct StoredBalancer {
    name: String,
    ip: String,
    port: u16,
    algorithm: &'static str,
    members: Vec<Member>,
}

#[derive(Debug, Default)]
struct DummyState {
    balancers: BTreeMap<u64, StoredBalancer>,
    last_balancer_id: u64,
    last_member_id: u64,
}

impl DummyState {
    fn next_member(&mut self, member: &Member) -> Member {
        self.last_member_id += 1;
        member.with_id(self.last_member_id)
    }
}

/// Driver backed by process memory
///
/// Native algorithm names follow HAProxy: `random`, `roundrobin`, `leastconn`.
/// Balancer ids are sequential integers rendered as strings, addresses come
/// from 192.0.2.0/24 and every balancer reports the state `running`.
#[derive(Debug)]
pub struct DummyDriver {
    context: DriverContext<LocalConnection>,
    state: RwLock<DummyState>,
}

impl DummyDriver {
    pub fn new(config: DriverConfig) -> DriverResult<Self> {
        Ok(Self {
            context: DriverContext::new(config)?,
            state: RwLock::new(DummyState::default()),
        })
    }

    /// Driver authenticated with a bare key
    pub fn with_key(key: impl Into<String>) -> DriverResult<Self> {
        Self::new(DriverConfig::new(key))
    }

    pub fn context(&self) -> &DriverContext<LocalConnection> {
        &self.context
    }

    /// Algorithm a balancer was created with
    pub fn balancer_algorithm(&self, balancer: &Balancer<'_, Self>) -> DriverResult<Algorithm> {
        let id = parse_id(balancer.id())?;
        let native = {
            let state = self.state.read();
            state
                .balancers
                .get(&id)
                .map(|stored| stored.algorithm)
                .ok_or_else(|| not_found(id))?
        };
        self.value_to_algorithm(&native)
    }

    fn snapshot(&self, id: u64, stored: &StoredBalancer) -> Balancer<'_, Self> {
        Balancer::new(id, stored.name.clone(), RUNNING, stored.ip.clone(), stored.port, self)
    }
}

fn parse_id(id: Option<&str>) -> DriverResult<u64> {
    let id = id.ok_or_else(|| DriverError::not_found("balancer without an id"))?;
    id.parse()
        .map_err(|_| DriverError::not_found(format!("balancer {}", id)))
}

fn not_found(id: u64) -> DriverError {
    DriverError::not_found(format!("balancer {}", id))
}

impl LoadBalancerDriver for DummyDriver {
    type AlgorithmValue = &'static str;

    const VALUE_TO_ALGORITHM: &'static [(&'static str, Algorithm)] = &[
        ("random", Algorithm::Random),
        ("roundrobin", Algorithm::RoundRobin),
        ("leastconn", Algorithm::LeastConnections),
    ];

    const ALGORITHM_TO_VALUE: &'static [(Algorithm, &'static str)] = &[
        (Algorithm::Random, "random"),
        (Algorithm::RoundRobin, "roundrobin"),
        (Algorithm::LeastConnections, "leastconn"),
    ];

    fn name(&self) -> &'static str {
        "dummy"
    }

    fn list_balancers(&self) -> DriverResult<Vec<Balancer<'_, Self>>> {
        let state = self.state.read();
        Ok(state
            .balancers
            .iter()
            .map(|(id, stored)| self.snapshot(*id, stored))
            .collect())
    }

    fn create_balancer(&self, request: CreateBalancerRequest) -> DriverResult<Balancer<'_, Self>> {
        request.validate()?;
        let algorithm = self.algorithm_to_value(request.algorithm)?;

        for (index, member) in request.members.iter().enumerate() {
            if request.members[..index].iter().any(|m| m.same_endpoint(member)) {
                return Err(DriverError::validation(
                    "members",
                    format!("{}:{} listed twice", member.address(), member.port()),
                ));
            }
        }

        let mut state = self.state.write();
        state.last_balancer_id += 1;
        let id = state.last_balancer_id;
        let members: Vec<Member> = request
            .members
            .iter()
            .map(|member| state.next_member(member))
            .collect();

        let stored = StoredBalancer {
            name: request.name,
            ip: format!("192.0.2.{}", id % 254 + 1),
            port: request.port,
            algorithm,
            members,
        };
        debug!(
            "Created balancer {} ({}) on {}:{} with {} member(s)",
            id,
            stored.name,
            stored.ip,
            stored.port,
            stored.members.len()
        );

        let balancer = self.snapshot(id, &stored);
        state.balancers.insert(id, stored);
        Ok(balancer)
    }

    fn destroy_balancer(&self, balancer: &Balancer<'_, Self>) -> DriverResult<bool> {
        let id = parse_id(balancer.id())?;
        let removed = self.state.write().balancers.remove(&id).is_some();
        debug!("Destroy balancer {}: {}", id, removed);
        Ok(removed)
    }

    fn balancer_detail(&self, lookup: BalancerLookup<'_, Self>) -> DriverResult<Balancer<'_, Self>> {
        let id = parse_id(lookup.balancer_id())?;
        let state = self.state.read();
        state
            .balancers
            .get(&id)
            .map(|stored| self.snapshot(id, stored))
            .ok_or_else(|| not_found(id))
    }

    fn balancer_attach_member(
        &self,
        balancer: &Balancer<'_, Self>,
        member: Member,
    ) -> DriverResult<Member> {
        let id = parse_id(balancer.id())?;
        let mut state = self.state.write();

        let already_attached = state
            .balancers
            .get(&id)
            .ok_or_else(|| not_found(id))?
            .members
            .iter()
            .any(|m| m.same_endpoint(&member));
        if already_attached {
            return Err(DriverError::validation(
                "member",
                format!("{}:{} is already attached", member.address(), member.port()),
            ));
        }

        let attached = state.next_member(&member);
        if let Some(stored) = state.balancers.get_mut(&id) {
            stored.members.push(attached.clone());
        }
        debug!("Attached {} to balancer {}", attached, id);
        Ok(attached)
    }

    fn balancer_detach_member(
        &self,
        balancer: &Balancer<'_, Self>,
        member: &Member,
    ) -> DriverResult<bool> {
        let id = parse_id(balancer.id())?;
        let mut state = self.state.write();
        let stored = state.balancers.get_mut(&id).ok_or_else(|| not_found(id))?;

        let position = stored.members.iter().position(|m| match member.id() {
            Some(member_id) => m.id() == Some(member_id),
            None => m.same_endpoint(member),
        });

        Ok(match position {
            Some(index) => {
                let removed = stored.members.remove(index);
                debug!("Detached {} from balancer {}", removed, id);
                true
            }
            None => false,
        })
    }

    fn balancer_list_members(&self, balancer: &Balancer<'_, Self>) -> DriverResult<Vec<Member>> {
        let id = parse_id(balancer.id())?;
        let state = self.state.read();
        state
            .balancers
            .get(&id)
            .map(|stored| stored.members.clone())
            .ok_or_else(|| not_found(id))
    }
}
