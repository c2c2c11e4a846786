//! Shared driver building blocks
//!
//! - `DriverConfig` - credentials and endpoint settings
//! - `DriverContext` - credentials plus the connected transport, embedded by
//!   every concrete driver
//! - `HttpConnection` - blocking HTTP transport
//! - `BaseDriver` - driver shell without any provider operations

mod config;
mod connection;

pub use config::DriverConfig;
pub use connection::HttpConnection;

use tracing::info;

use crate::core::traits::{Connection, LoadBalancerDriver};
use crate::core::types::{
    Algorithm, Balancer, BalancerLookup, CreateBalancerRequest, DriverError, DriverResult, Member,
};

/// Credentials and the connection a driver owns
///
/// Constructing a context connects the transport; if that fails the error is
/// returned as-is and no context exists.
#[derive(Debug)]
pub struct DriverContext<C> {
    config: DriverConfig,
    connection: C,
}

impl<C: Connection> DriverContext<C> {
    /// Open and connect a transport built from `config`
    pub fn new(config: DriverConfig) -> DriverResult<Self> {
        config.validate()?;
        let connection = C::open(&config)?;
        Self::with_connection(config, connection)
    }

    /// Connect a transport the caller already built
    pub fn with_connection(config: DriverConfig, mut connection: C) -> DriverResult<Self> {
        config.validate()?;
        connection.connect()?;
        info!(
            "Driver connection established (secure: {}, host: {})",
            config.secure,
            config.host.as_deref().unwrap_or("<none>")
        );
        Ok(Self { config, connection })
    }

    pub fn key(&self) -> &str {
        &self.config.key
    }

    pub fn secret(&self) -> Option<&str> {
        self.config.secret.as_deref()
    }

    pub fn secure(&self) -> bool {
        self.config.secure
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn connection(&self) -> &C {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut C {
        &mut self.connection
    }
}

/// Driver with credentials and a connection but no provider operations
///
/// Every required operation fails with `DriverError::NotImplemented` and both
/// algorithm tables are empty. Useful as a placeholder while a provider is
/// being brought up, and as the reference for what "unimplemented" looks like.
#[derive(Debug)]
pub struct BaseDriver<C> {
    context: DriverContext<C>,
}

impl<C: Connection> BaseDriver<C> {
    pub fn new(config: DriverConfig) -> DriverResult<Self> {
        Ok(Self {
            context: DriverContext::new(config)?,
        })
    }

    pub fn with_connection(config: DriverConfig, connection: C) -> DriverResult<Self> {
        Ok(Self {
            context: DriverContext::with_connection(config, connection)?,
        })
    }

    pub fn context(&self) -> &DriverContext<C> {
        &self.context
    }

    fn unsupported<T>(&self, operation: &'static str) -> DriverResult<T> {
        Err(DriverError::not_implemented(operation, self.name()))
    }
}

impl<C: Connection> LoadBalancerDriver for BaseDriver<C> {
    type AlgorithmValue = u8;

    const VALUE_TO_ALGORITHM: &'static [(u8, Algorithm)] = &[];
    const ALGORITHM_TO_VALUE: &'static [(Algorithm, u8)] = &[];

    fn name(&self) -> &'static str {
        "base"
    }

    fn list_balancers(&self) -> DriverResult<Vec<Balancer<'_, Self>>> {
        self.unsupported("list_balancers")
    }

    fn create_balancer(&self, _request: CreateBalancerRequest) -> DriverResult<Balancer<'_, Self>> {
        self.unsupported("create_balancer")
    }

    fn destroy_balancer(&self, _balancer: &Balancer<'_, Self>) -> DriverResult<bool> {
        self.unsupported("destroy_balancer")
    }

    fn balancer_detail(&self, _lookup: BalancerLookup<'_, Self>) -> DriverResult<Balancer<'_, Self>> {
        self.unsupported("balancer_detail")
    }

    fn balancer_attach_member(
        &self,
        _balancer: &Balancer<'_, Self>,
        _member: Member,
    ) -> DriverResult<Member> {
        self.unsupported("balancer_attach_member")
    }

    fn balancer_detach_member(
        &self,
        _balancer: &Balancer<'_, Self>,
        _member: &Member,
    ) -> DriverResult<bool> {
        self.unsupported("balancer_detach_member")
    }

    fn balancer_list_members(&self, _balancer: &Balancer<'_, Self>) -> DriverResult<Vec<Member>> {
        self.unsupported("balancer_list_members")
    }
}
