//! Resolver contract between a host and resolver plugins.
//!
//! The host only depends on these traits and the per-call `ResolverContext`;
//! it does not know about the hub or any other specific backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::error::ResolveError;
use crate::params::Param;

/// Label key the host uses to route resolution requests to a resolver.
pub const LABEL_KEY_RESOLVER_TYPE: &str = "resolution.tekton.dev/type";

/// Feature flags relevant to resolvers, read from host configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    pub enable_hub_resolver: bool,
}

/// Ambient state handed to every resolver call.
///
/// Passed explicitly on each call instead of living in a process-wide global,
/// so resolvers stay testable without a host.
#[derive(Debug, Clone, Default)]
pub struct ResolverContext {
    pub flags: FeatureFlags,
    /// Installation configuration map (the resolver's config-map contents).
    pub config: HashMap<String, String>,
    /// Set to true by the host to cancel an in-flight fetch.
    pub abort: Option<Arc<AtomicBool>>,
    /// Upper bound on the whole fetch, if the host has a deadline.
    pub deadline: Option<Duration>,
}

impl ResolverContext {
    pub fn new(flags: FeatureFlags, config: HashMap<String, String>) -> Self {
        Self {
            flags,
            config,
            abort: None,
            deadline: None,
        }
    }

    pub fn with_abort(mut self, abort: Arc<AtomicBool>) -> Self {
        self.abort = Some(abort);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn abort_requested(&self) -> bool {
        self.abort
            .as_ref()
            .map(|a| a.load(Ordering::Relaxed))
            .unwrap_or(false)
    }
}

/// Where fetched content came from. Resolvers that cannot vouch for the
/// content's origin return `None` from `ResolvedResource::source`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSource {
    pub uri: String,
    pub digest: HashMap<String, String>,
    pub entry_point: String,
}

/// Content returned to the host after a successful resolution.
pub trait ResolvedResource: Send + Sync + std::fmt::Debug {
    /// Raw fetched bytes; interpretation is up to the host.
    fn data(&self) -> &[u8];
    /// Metadata to attach alongside the data.
    fn annotations(&self) -> HashMap<String, String>;
    fn source(&self) -> Option<&ConfigSource>;
}

/// Trait implemented by resolver plugins (e.g. the hub resolver).
pub trait Resolver: Send + Sync {
    /// Sets up any dependencies the resolver needs before serving requests.
    fn initialize(&mut self) -> Result<(), ResolveError>;

    /// Name the host refers to this resolver by.
    fn name(&self) -> &'static str;

    /// Name of the config map holding this resolver's installation defaults.
    fn config_name(&self) -> &'static str;

    /// Labels a request must carry to be routed to this resolver.
    fn selector(&self) -> HashMap<String, String>;

    /// Checks request parameters without touching the network.
    fn validate_params(&self, ctx: &ResolverContext, params: &[Param]) -> Result<(), ResolveError>;

    /// Resolves the request into content.
    fn resolve(
        &self,
        ctx: &ResolverContext,
        params: &[Param],
    ) -> Result<Box<dyn ResolvedResource>, ResolveError>;
}
