//! Hub resolver: fetch task and pipeline definitions from a hub catalog.
//!
//! Resolution is stateless. The resolver owns only its URL template; every
//! request collapses its parameters, merges installation defaults, builds one
//! URL, issues one GET and decodes the `data.yaml` payload.

mod envelope;
mod fetch;
mod resource;
mod url;

pub use envelope::{decode_body, HubData, HubResponse};
pub use fetch::{fetch_document, FetchOptions};
pub use resource::ResolvedHubResource;
pub use url::{UrlTemplate, DEFAULT_HUB_URL};

use std::collections::HashMap;

use crate::error::ResolveError;
use crate::params::{self, HubParams, Param};
use crate::resolver::{ResolvedResource, Resolver, ResolverContext, LABEL_KEY_RESOLVER_TYPE};

/// Value of the resolver-type label on requests meant for this resolver.
pub const LABEL_VALUE_HUB_RESOLVER_TYPE: &str = "hub";

const RESOLVER_NAME: &str = "Hub";
const CONFIG_MAP_NAME: &str = "hubresolver-config";

#[derive(Debug, Clone, Default)]
pub struct HubResolver {
    template: UrlTemplate,
}

impl HubResolver {
    /// Builds a resolver for the given template (four `%s` slots).
    pub fn new(hub_url: &str) -> Result<Self, ResolveError> {
        Ok(Self {
            template: UrlTemplate::parse(hub_url)?,
        })
    }

    pub fn template(&self) -> &UrlTemplate {
        &self.template
    }

    /// Resolves parameters and renders the lookup URL without fetching.
    pub fn lookup_url(&self, ctx: &ResolverContext, params: &[Param]) -> Result<String, ResolveError> {
        let hub_params = params::resolve_params(ctx, params)?;
        Ok(self.template.render(&hub_params))
    }

    /// Fetches and decodes the resource described by fully-populated parameters.
    pub fn fetch(
        &self,
        ctx: &ResolverContext,
        hub_params: &HubParams,
    ) -> Result<ResolvedHubResource, ResolveError> {
        let url = self.template.render(hub_params);
        tracing::debug!(%url, kind = %hub_params.kind, "fetching from hub");
        let opts = FetchOptions {
            deadline: ctx.deadline,
            abort: ctx.abort.clone(),
        };
        let body = fetch_document(&url, &opts)?;
        let content = decode_body(&body)?;
        Ok(ResolvedHubResource::new(content))
    }
}

impl Resolver for HubResolver {
    fn initialize(&mut self) -> Result<(), ResolveError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        RESOLVER_NAME
    }

    fn config_name(&self) -> &'static str {
        CONFIG_MAP_NAME
    }

    fn selector(&self) -> HashMap<String, String> {
        HashMap::from([(
            LABEL_KEY_RESOLVER_TYPE.to_string(),
            LABEL_VALUE_HUB_RESOLVER_TYPE.to_string(),
        )])
    }

    fn validate_params(&self, ctx: &ResolverContext, params: &[Param]) -> Result<(), ResolveError> {
        params::validate_params(ctx, params)
    }

    fn resolve(
        &self,
        ctx: &ResolverContext,
        params: &[Param],
    ) -> Result<Box<dyn ResolvedResource>, ResolveError> {
        let hub_params = params::resolve_params(ctx, params)?;
        Ok(Box::new(self.fetch(ctx, &hub_params)?))
    }
}
