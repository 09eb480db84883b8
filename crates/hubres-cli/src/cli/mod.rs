//! CLI host for the hub resolver.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use hubres_core::config::{self, HubresConfig};
use hubres_core::params::{PARAM_CATALOG, PARAM_KIND, PARAM_NAME, PARAM_VERSION};
use hubres_core::Param;
use std::path::PathBuf;

use commands::{run_completions, run_info, run_resolve, run_url, run_validate};

/// Top-level CLI for the hubres hub resolver.
#[derive(Debug, Parser)]
#[command(name = "hubres")]
#[command(about = "hubres: resolve task and pipeline definitions from a hub catalog", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/hubres/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log to stderr instead of the state-dir log file.
    #[arg(long, global = true)]
    pub log_stderr: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a resource from the hub and print its YAML.
    Resolve {
        #[command(flatten)]
        request: RequestArgs,

        /// Write the content to this file instead of stdout.
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Check request parameters without contacting the hub.
    Validate {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the URL a resolve would fetch.
    Url {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Show resolver name, config-map name and label selector.
    Info,

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

/// Request parameters. Left optional so the resolver, not clap, reports what is missing.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Resource name in the catalog (e.g. git-clone).
    #[arg(long)]
    pub name: Option<String>,

    /// Resource version (e.g. 0.9).
    #[arg(long)]
    pub version: Option<String>,

    /// Resource kind: task or pipeline. Defaults to the installation's default-kind.
    #[arg(long)]
    pub kind: Option<String>,

    /// Catalog name. Defaults to the installation's default-catalog.
    #[arg(long)]
    pub catalog: Option<String>,

    /// Extra raw parameter as NAME=VALUE; repeatable, applied last.
    #[arg(long = "param", value_name = "NAME=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

impl RequestArgs {
    /// Request parameters in the order they are sent to the resolver.
    pub fn to_params(&self) -> Vec<Param> {
        let named = [
            (PARAM_CATALOG, &self.catalog),
            (PARAM_KIND, &self.kind),
            (PARAM_NAME, &self.name),
            (PARAM_VERSION, &self.version),
        ];
        named
            .into_iter()
            .filter_map(|(n, v)| v.as_deref().map(|v| Param::new(n, v)))
            .chain(self.params.iter().map(|(n, v)| Param::new(n.as_str(), v.as_str())))
            .collect()
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let k = k.trim();
    if k.is_empty() {
        return Err(format!("empty parameter name in '{s}'"));
    }
    Ok((k.to_string(), v.to_string()))
}

impl Cli {
    fn load_config(&self) -> Result<HubresConfig> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init().context("load hubres config")?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        Ok(cfg)
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            CliCommand::Resolve { request, output } => {
                let cfg = self.load_config()?;
                run_resolve(&cfg, &request.to_params(), output.as_deref())?;
            }
            CliCommand::Validate { request } => {
                let cfg = self.load_config()?;
                run_validate(&cfg, &request.to_params())?;
            }
            CliCommand::Url { request } => {
                let cfg = self.load_config()?;
                run_url(&cfg, &request.to_params())?;
            }
            CliCommand::Info => run_info()?,
            CliCommand::Completions { shell } => run_completions(*shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
