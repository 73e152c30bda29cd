//! Server configuration resolved from Leptos options plus environment.
//!
//! DESIGN
//! ======
//! Leptos owns the site address and output paths (`[workspace.metadata.leptos]`
//! or `LEPTOS_*` variables). Hosting platforms usually hand out only a port,
//! so `PORT` overrides the port of that address and nothing else.

use std::net::SocketAddr;
use std::path::PathBuf;

use leptos::prelude::LeptosOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds.
    pub addr: SocketAddr,
    /// Directory holding `pkg/` and the copied `assets/`.
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Build config from Leptos options and the `PORT` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPort`] when `PORT` is set but not a `u16`.
    pub fn from_env(options: &LeptosOptions) -> Result<Self, ConfigError> {
        let port = std::env::var("PORT").ok();
        Self::resolve(options, port.as_deref())
    }

    fn resolve(options: &LeptosOptions, port: Option<&str>) -> Result<Self, ConfigError> {
        let addr = override_port(options.site_addr, port)?;
        let site_root = PathBuf::from(options.site_root.as_ref());
        Ok(Self { addr, site_root })
    }
}

/// Replace the port of `base` when `port` is present and non-blank.
fn override_port(base: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ConfigError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(base);
    };
    let parsed = raw
        .parse::<u16>()
        .map_err(|source| ConfigError::InvalidPort { value: raw.to_owned(), source })?;
    Ok(SocketAddr::new(base.ip(), parsed))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
