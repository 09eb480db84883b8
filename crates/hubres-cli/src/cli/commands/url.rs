//! `hubres url` – print the lookup URL a resolve would fetch.

use anyhow::Result;
use hubres_core::config::HubresConfig;
use hubres_core::{HubResolver, Param};

pub fn run_url(cfg: &HubresConfig, params: &[Param]) -> Result<()> {
    let resolver = HubResolver::new(&cfg.hub_url)?;
    println!("{}", resolver.lookup_url(&cfg.resolver_context(), params)?);
    Ok(())
}
