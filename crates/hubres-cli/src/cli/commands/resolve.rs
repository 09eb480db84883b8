//! `hubres resolve` – fetch a resource and write its content.

use anyhow::{Context, Result};
use hubres_core::config::HubresConfig;
use hubres_core::{HubResolver, Param, Resolver};
use std::io::Write;
use std::path::Path;

pub fn run_resolve(cfg: &HubresConfig, params: &[Param], output: Option<&Path>) -> Result<()> {
    let mut resolver = HubResolver::new(&cfg.hub_url)?;
    resolver.initialize()?;
    let ctx = cfg.resolver_context();

    resolver.validate_params(&ctx, params)?;
    let resource = resolver.resolve(&ctx, params)?;
    tracing::info!(bytes = resource.data().len(), "resolved resource from hub");

    match output {
        Some(path) => std::fs::write(path, resource.data())
            .with_context(|| format!("write {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(resource.data())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
