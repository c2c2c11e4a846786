//! Load balancer snapshot bound to its driver

use serde::Serialize;
use std::fmt;

use super::errors::DriverResult;
use super::identifier::IntoResourceId;
use super::member::Member;
use super::node::ComputeNode;
use crate::core::traits::LoadBalancerDriver;

/// Point-in-time view of a provider-managed load balancer
///
/// A balancer borrows the driver that produced it and forwards its operations
/// to that driver. The `'d` lifetime ties it to the driver: once the driver is
/// dropped, no balancer obtained from it can be used. Provider-side changes
/// are not reflected here; fetch a fresh copy with `balancer_detail`.
#[derive(Serialize)]
#[serde(bound = "")]
pub struct Balancer<'d, D> {
    id: Option<String>,
    name: String,
    state: String,
    ip: String,
    port: u16,
    #[serde(skip)]
    driver: &'d D,
}

impl<'d, D> Balancer<'d, D> {
    pub fn new(
        id: impl IntoResourceId,
        name: impl Into<String>,
        state: impl Into<String>,
        ip: impl Into<String>,
        port: u16,
        driver: &'d D,
    ) -> Self {
        Self {
            id: id.into_resource_id(),
            name: name.into(),
            state: state.into(),
            ip: ip.into(),
            port,
            driver,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider-reported status, passed through as received
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn driver(&self) -> &'d D {
        self.driver
    }
}

impl<'d, D: LoadBalancerDriver> Balancer<'d, D> {
    /// Attach a compute node through the owning driver
    pub fn attach_compute_node<N: ComputeNode + ?Sized>(&self, node: &N) -> DriverResult<Member> {
        self.driver.balancer_attach_compute_node(self, node)
    }

    /// Attach a member through the owning driver
    pub fn attach_member(&self, member: Member) -> DriverResult<Member> {
        self.driver.balancer_attach_member(self, member)
    }

    /// Detach a member through the owning driver
    pub fn detach_member(&self, member: &Member) -> DriverResult<bool> {
        self.driver.balancer_detach_member(self, member)
    }

    /// List members through the owning driver
    pub fn list_members(&self) -> DriverResult<Vec<Member>> {
        self.driver.balancer_list_members(self)
    }
}

impl<D> Clone for Balancer<'_, D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            state: self.state.clone(),
            ip: self.ip.clone(),
            port: self.port,
            driver: self.driver,
        }
    }
}

impl<D> fmt::Debug for Balancer<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Balancer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("ip", &self.ip)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl<D> fmt::Display for Balancer<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Balancer: id={}, name={}, state={}>",
            self.id.as_deref().unwrap_or("None"),
            self.name,
            self.state
        )
    }
}
