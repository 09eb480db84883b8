//! Parameter checks and default merging.
//!
//! Validation only looks at what the caller sent. Installation defaults are
//! merged in on the resolve path only.

use super::{
    collapse, string_param, HubParams, Kind, Param, CONFIG_CATALOG, CONFIG_KIND, PARAM_CATALOG,
    PARAM_KIND, PARAM_NAME, PARAM_VERSION,
};
use crate::error::ResolveError;
use crate::resolver::ResolverContext;

fn ensure_enabled(ctx: &ResolverContext) -> Result<(), ResolveError> {
    if ctx.flags.enable_hub_resolver {
        Ok(())
    } else {
        Err(ResolveError::Disabled)
    }
}

/// Checks that `name` and `version` are present and that `kind`, if sent, is
/// `task` or `pipeline`. Never performs I/O.
pub fn validate_params(ctx: &ResolverContext, params: &[Param]) -> Result<(), ResolveError> {
    ensure_enabled(ctx)?;
    let map = collapse(params);

    if !map.contains_key(PARAM_NAME) {
        return Err(ResolveError::MissingParameter(PARAM_NAME));
    }
    if !map.contains_key(PARAM_VERSION) {
        return Err(ResolveError::MissingParameter(PARAM_VERSION));
    }
    if let Some(kind) = map.get(PARAM_KIND) {
        kind.as_str()
            .ok_or_else(ResolveError::invalid_kind)?
            .parse::<Kind>()?;
    }
    Ok(())
}

/// Produces fully-populated parameters, filling `catalog` and `kind` from the
/// installation configuration when the request omits them.
pub fn resolve_params(ctx: &ResolverContext, params: &[Param]) -> Result<HubParams, ResolveError> {
    ensure_enabled(ctx)?;
    let map = collapse(params);

    let catalog = match string_param(&map, PARAM_CATALOG)? {
        Some(c) => c.to_string(),
        None => ctx
            .config
            .get(CONFIG_CATALOG)
            .cloned()
            .ok_or(ResolveError::MissingDefault(PARAM_CATALOG))?,
    };

    let kind = match map.get(PARAM_KIND) {
        Some(value) => value.as_str().ok_or_else(ResolveError::invalid_kind)?,
        None => ctx
            .config
            .get(CONFIG_KIND)
            .map(String::as_str)
            .ok_or(ResolveError::MissingDefault(PARAM_KIND))?,
    };
    let kind: Kind = kind.parse()?;

    let name = string_param(&map, PARAM_NAME)?.ok_or(ResolveError::MissingParameter(PARAM_NAME))?;
    let version =
        string_param(&map, PARAM_VERSION)?.ok_or(ResolveError::MissingParameter(PARAM_VERSION))?;

    for (param, value) in [(PARAM_CATALOG, catalog.as_str()), (PARAM_NAME, name), (PARAM_VERSION, version)] {
        if value.is_empty() {
            return Err(ResolveError::InvalidParameter(format!(
                "{} param must not be empty",
                param
            )));
        }
    }

    Ok(HubParams {
        catalog,
        kind,
        name: name.to_string(),
        version: version.to_string(),
    })
}
