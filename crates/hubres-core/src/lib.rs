pub mod config;
pub mod logging;

pub mod error;
pub mod hub;
pub mod params;
pub mod resolver;

pub use error::ResolveError;
pub use hub::{HubResolver, ResolvedHubResource};
pub use params::{HubParams, Kind, Param, ParamValue};
pub use resolver::{FeatureFlags, ResolvedResource, Resolver, ResolverContext};
