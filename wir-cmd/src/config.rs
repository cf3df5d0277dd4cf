//! Config file discovery for the CLI.
//!
//! Search order when `--config` is not given: `$WIR_CONFIG`,
//! `./config/wir.yaml`, `./config.yaml`, `~/.config/will-it-rain/config.yaml`.
//! Missing files are skipped; with none found the defaults apply.

use anyhow::Context;
use log::{debug, info};
use std::path::{Path, PathBuf};
use wir_core::ServiceConfig;

pub const CONFIG_ENV_VAR: &str = "WIR_CONFIG";

/// Candidate config paths, most specific first.
pub fn candidate_paths(explicit: Option<PathBuf>, env_path: Option<String>) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(p) = explicit {
        candidates.push(p);
    }
    if let Some(p) = env_path {
        candidates.push(PathBuf::from(p));
    }
    candidates.push(PathBuf::from("./config/wir.yaml"));
    candidates.push(PathBuf::from("./config.yaml"));
    if let Some(mut d) = dirs::config_dir() {
        d.push("will-it-rain/config.yaml");
        candidates.push(d);
    }
    candidates
}

pub fn parse_config(yaml: &str) -> anyhow::Result<ServiceConfig> {
    Ok(serde_yaml::from_str(yaml)?)
}

fn read_config(path: &Path) -> anyhow::Result<ServiceConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    parse_config(&s).with_context(|| format!("parsing YAML in {}", path.display()))
}

/// Load the first config file that exists, then apply the base URL override.
///
/// An explicitly requested file that does not exist is an error.
pub fn load_config(
    explicit: Option<PathBuf>,
    base_url_override: Option<String>,
) -> anyhow::Result<ServiceConfig> {
    if let Some(p) = explicit.as_ref() {
        if !p.exists() {
            anyhow::bail!("Config file {} not found", p.display());
        }
    }

    let env_path = std::env::var(CONFIG_ENV_VAR).ok();
    let mut config = match candidate_paths(explicit, env_path)
        .into_iter()
        .find(|p| p.exists())
    {
        Some(path) => {
            info!("Using config {}", path.display());
            read_config(&path)?
        }
        None => {
            debug!("No config file found, using defaults");
            ServiceConfig::default()
        }
    };

    if let Some(url) = base_url_override {
        config.service_base_url = url;
    }
    Ok(config)
}
