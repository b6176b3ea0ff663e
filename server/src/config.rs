//! Startup settings.
//!
//! Read once in `main` from `HOST`, `PORT` and `TODO_DEBUG`. Lookups go
//! through a closure so tests never touch the real process environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::{ServerError, ServerResult};

pub const DEFAULT_PORT: u16 = 5000;

/// Startup settings, read from the process environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Verbose logging and template debug info.
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            debug: false,
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `PORT` and `TODO_DEBUG`. Unset variables keep their defaults.
    pub fn from_env() -> ServerResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServerResult<Self> {
        let defaults = Self::default();

        let ip = match lookup("HOST") {
            Some(raw) => raw
                .parse::<IpAddr>()
                .map_err(|e| ServerError::Config(format!("invalid HOST `{raw}`: {e}")))?,
            None => defaults.bind_addr.ip(),
        };
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ServerError::Config(format!("invalid PORT `{raw}`: {e}")))?,
            None => defaults.bind_addr.port(),
        };
        let debug = match lookup("TODO_DEBUG") {
            Some(raw) => parse_flag(&raw)
                .ok_or_else(|| ServerError::Config(format!("invalid TODO_DEBUG `{raw}`")))?,
            None => defaults.debug,
        };

        Ok(Self {
            bind_addr: SocketAddr::new(ip, port),
            debug,
        })
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "info"
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
