//! `hubres validate` – check parameters without contacting the hub.

use anyhow::Result;
use hubres_core::config::HubresConfig;
use hubres_core::{HubResolver, Param, Resolver};

pub fn run_validate(cfg: &HubresConfig, params: &[Param]) -> Result<()> {
    let resolver = HubResolver::new(&cfg.hub_url)?;
    resolver.validate_params(&cfg.resolver_context(), params)?;
    println!("parameters ok");
    Ok(())
}
