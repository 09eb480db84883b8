use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::hub::DEFAULT_HUB_URL;
use crate::params::{CONFIG_CATALOG, CONFIG_KIND};
use crate::resolver::{FeatureFlags, ResolverContext};

/// Installation configuration loaded from `~/.config/hubres/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubresConfig {
    /// Lookup URL template with four `%s` slots: catalog, kind, name, version.
    #[serde(default = "default_hub_url")]
    pub hub_url: String,
    /// Feature flag gating every resolver operation.
    #[serde(default = "default_enabled")]
    pub enable_hub_resolver: bool,
    /// Catalog used when a request does not name one.
    #[serde(default)]
    pub default_catalog: Option<String>,
    /// Kind ("task" or "pipeline") used when a request does not name one.
    #[serde(default)]
    pub default_kind: Option<String>,
    /// Optional limit on a single fetch, in seconds (None = transport defaults).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_hub_url() -> String {
    DEFAULT_HUB_URL.to_string()
}

fn default_enabled() -> bool {
    true
}

impl Default for HubresConfig {
    fn default() -> Self {
        Self {
            hub_url: default_hub_url(),
            enable_hub_resolver: true,
            default_catalog: Some("Tekton".to_string()),
            default_kind: Some("task".to_string()),
            timeout_secs: None,
        }
    }
}

impl HubresConfig {
    /// The resolver's configuration map, keyed the way the resolver reads it.
    pub fn installation_config(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        if let Some(catalog) = &self.default_catalog {
            map.insert(CONFIG_CATALOG.to_string(), catalog.clone());
        }
        if let Some(kind) = &self.default_kind {
            map.insert(CONFIG_KIND.to_string(), kind.clone());
        }
        map
    }

    pub fn feature_flags(&self) -> FeatureFlags {
        FeatureFlags {
            enable_hub_resolver: self.enable_hub_resolver,
        }
    }

    /// Per-call context carrying flags, defaults and the optional deadline.
    pub fn resolver_context(&self) -> ResolverContext {
        let ctx = ResolverContext::new(self.feature_flags(), self.installation_config());
        match self.timeout_secs {
            Some(secs) => ctx.with_deadline(Duration::from_secs(secs)),
            None => ctx,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("hubres")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<HubresConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: HubresConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HubresConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HubresConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}
