//! Load balancer driver trait
//!
//! Defines the contract every provider implementation fulfils

use std::fmt::{Debug, Display};

use crate::core::types::{
    Algorithm, Balancer, BalancerLookup, ComputeNode, CreateBalancerRequest, DriverError,
    DriverResult, Member,
};

/// Unified load balancer driver interface
///
/// Every provider implements this trait once. Operations a provider must
/// supply have no default body, so a missing one is a compile error rather
/// than a runtime surprise. The default bodies are limited to behaviour that
/// is meaningful for every provider: attaching a compute node, and translating
/// between [`Algorithm`] and the provider's native algorithm values.
///
/// Calls are synchronous: each one returns once the underlying connection has
/// answered. Drivers do not retry and do not swallow errors.
///
/// # Algorithm tables
///
/// Each driver type declares two constant tables. They are read-only and
/// shared by every instance of the driver.
///
/// ```rust,ignore
/// impl LoadBalancerDriver for MyDriver {
///     type AlgorithmValue = &'static str;
///
///     const VALUE_TO_ALGORITHM: &'static [(&'static str, Algorithm)] = &[
///         ("ROUND_ROBIN", Algorithm::RoundRobin),
///         ("LEAST_CONN", Algorithm::LeastConnections),
///     ];
///     const ALGORITHM_TO_VALUE: &'static [(Algorithm, &'static str)] = &[
///         (Algorithm::RoundRobin, "ROUND_ROBIN"),
///         (Algorithm::LeastConnections, "LEAST_CONN"),
///     ];
///
///     // required operations...
/// }
/// ```
pub trait LoadBalancerDriver: Send + Sync + Debug + Sized {
    /// Provider-native algorithm representation
    type AlgorithmValue: Clone + PartialEq + Debug + Display + Send + Sync + 'static;

    /// Native value to portable algorithm
    const VALUE_TO_ALGORITHM: &'static [(Self::AlgorithmValue, Algorithm)];

    /// Portable algorithm to native value
    const ALGORITHM_TO_VALUE: &'static [(Algorithm, Self::AlgorithmValue)];

    // ==================== Metadata ====================

    /// Driver identifier used in diagnostics, e.g. "dummy"
    fn name(&self) -> &'static str;

    // ==================== Balancers ====================

    /// List every balancer owned by the authenticated account
    fn list_balancers(&self) -> DriverResult<Vec<Balancer<'_, Self>>>;

    /// Create a new balancer
    ///
    /// `request.algorithm` defaults to round robin and `request.members` are
    /// attached as part of creation.
    fn create_balancer(&self, request: CreateBalancerRequest) -> DriverResult<Balancer<'_, Self>>;

    /// Destroy a balancer
    ///
    /// # Returns
    /// `true` if the provider reports the balancer destroyed. Idempotency is
    /// up to the provider.
    fn destroy_balancer(&self, balancer: &Balancer<'_, Self>) -> DriverResult<bool>;

    /// Fetch the current state of a balancer, by object or by id
    fn balancer_detail(&self, lookup: BalancerLookup<'_, Self>) -> DriverResult<Balancer<'_, Self>>;

    // ==================== Members ====================

    /// Attach a compute node as a member
    ///
    /// # Default Implementation
    /// Builds an unassigned member from the node's first public address and the
    /// balancer's listen port, then calls [`balancer_attach_member`]. Other
    /// public addresses are ignored.
    ///
    /// [`balancer_attach_member`]: LoadBalancerDriver::balancer_attach_member
    fn balancer_attach_compute_node<N: ComputeNode + ?Sized>(
        &self,
        balancer: &Balancer<'_, Self>,
        node: &N,
    ) -> DriverResult<Member> {
        let address = node.public_ips().first().ok_or_else(|| {
            DriverError::validation("public_ips", "compute node has no public address")
        })?;
        let member = Member::unassigned(address.clone(), balancer.port());
        self.balancer_attach_member(balancer, member)
    }

    /// Attach a member, returning it as the provider recorded it
    fn balancer_attach_member(
        &self,
        balancer: &Balancer<'_, Self>,
        member: Member,
    ) -> DriverResult<Member>;

    /// Detach a member
    ///
    /// # Returns
    /// `true` if the member was detached
    fn balancer_detach_member(
        &self,
        balancer: &Balancer<'_, Self>,
        member: &Member,
    ) -> DriverResult<bool>;

    /// Members currently attached to a balancer
    fn balancer_list_members(&self, balancer: &Balancer<'_, Self>) -> DriverResult<Vec<Member>>;

    // ==================== Algorithm translation ====================

    /// Translate a native value into a portable algorithm
    ///
    /// # Errors
    /// `DriverError::InvalidValue` carrying `value` when the value is not in
    /// [`VALUE_TO_ALGORITHM`](LoadBalancerDriver::VALUE_TO_ALGORITHM).
    fn value_to_algorithm(&self, value: &Self::AlgorithmValue) -> DriverResult<Algorithm> {
        Self::VALUE_TO_ALGORITHM
            .iter()
            .find(|(native, _)| native == value)
            .map(|(_, algorithm)| *algorithm)
            .ok_or_else(|| DriverError::invalid_value(value, self.name()))
    }

    /// Translate a portable algorithm into the native value
    ///
    /// # Errors
    /// `DriverError::InvalidValue` carrying `algorithm` when the algorithm is
    /// not in [`ALGORITHM_TO_VALUE`](LoadBalancerDriver::ALGORITHM_TO_VALUE).
    fn algorithm_to_value(&self, algorithm: Algorithm) -> DriverResult<Self::AlgorithmValue> {
        Self::ALGORITHM_TO_VALUE
            .iter()
            .find(|(portable, _)| *portable == algorithm)
            .map(|(_, native)| native.clone())
            .ok_or_else(|| DriverError::invalid_algorithm(algorithm, self.name()))
    }

    /// Algorithms this driver can express, in table order
    fn supported_algorithms(&self) -> Vec<Algorithm> {
        Self::ALGORITHM_TO_VALUE
            .iter()
            .map(|(algorithm, _)| *algorithm)
            .collect()
    }
}
