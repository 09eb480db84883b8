//! `hubres info` – show the identity the resolver registers with its host.

use anyhow::Result;
use hubres_core::{HubResolver, Resolver};

pub fn run_info() -> Result<()> {
    let resolver = HubResolver::default();
    println!("name:        {}", resolver.name());
    println!("config map:  {}", resolver.config_name());
    let mut selector: Vec<_> = resolver.selector().into_iter().collect();
    selector.sort();
    for (k, v) in selector {
        println!("selector:    {k}={v}");
    }
    Ok(())
}
