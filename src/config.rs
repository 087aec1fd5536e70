//! Server configuration parsing, validation, and environment overrides.
//!
//! Configuration is layered: an optional TOML file provides defaults, then
//! the `MCP_TRANSPORT` and `PORT` environment variables override it. The
//! transport value is resolved once at startup; an unrecognized value is a
//! hard startup failure with no fallback.

use std::env;
use std::fmt::{Display, Formatter};
use std::fs;
use std::net::IpAddr;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::{AppError, Result};

/// Environment variable selecting the MCP transport.
pub const TRANSPORT_ENV: &str = "MCP_TRANSPORT";

/// Environment variable overriding the listen port for network transports.
pub const PORT_ENV: &str = "PORT";

fn default_port() -> u16 {
    3000
}

fn default_bind_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

/// The I/O channel the server binds to at startup.
///
/// Maps one-to-one onto the transport implementations provided by the
/// `rmcp` SDK; this crate only selects among them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportKind {
    /// stdin/stdout pipe transport for direct invocation by MCP clients.
    Stdio,
    /// HTTP transport with Server-Sent Events streaming.
    Sse,
    /// Streamable HTTP request/response transport.
    Http,
}

impl TransportKind {
    /// Whether this transport binds a network socket (and thus uses `PORT`).
    #[must_use]
    pub const fn is_network(self) -> bool {
        matches!(self, Self::Sse | Self::Http)
    }
}

impl Display for TransportKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdio => write!(f, "stdio"),
            Self::Sse => write!(f, "sse"),
            Self::Http => write!(f, "http"),
        }
    }
}

impl FromStr for TransportKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stdio" => Ok(Self::Stdio),
            "sse" => Ok(Self::Sse),
            "http" => Ok(Self::Http),
            other => Err(AppError::Config(format!(
                "unrecognized transport '{other}': expected stdio, sse, or http"
            ))),
        }
    }
}

/// Server configuration parsed from `config.toml` and the environment.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    /// Selected MCP transport.
    #[serde(default = "ServerConfig::default_transport")]
    pub transport: TransportKind,
    /// Listen port for network-bound transports; ignored by stdio.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bind address for network-bound transports.
    #[serde(default = "default_bind_host")]
    pub bind_host: IpAddr,
    /// Server name advertised during MCP initialization.
    #[serde(default = "ServerConfig::default_server_name")]
    pub server_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: Self::default_transport(),
            port: default_port(),
            bind_host: default_bind_host(),
            server_name: Self::default_server_name(),
        }
    }
}

impl ServerConfig {
    const fn default_transport() -> TransportKind {
        TransportKind::Stdio
    }

    fn default_server_name() -> String {
        env!("CARGO_PKG_NAME").to_owned()
    }

    /// Load configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        Ok(config)
    }

    /// Apply `MCP_TRANSPORT` and `PORT` environment overrides.
    ///
    /// Environment values win over the TOML file. Fails fast so a typo in
    /// either variable stops startup instead of silently binding the wrong
    /// transport.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `MCP_TRANSPORT` names an unknown
    /// transport or `PORT` is not a valid port number.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = env::var(TRANSPORT_ENV) {
            self.transport = raw.parse()?;
        }

        if let Ok(raw) = env::var(PORT_ENV) {
            self.port = raw
                .parse()
                .map_err(|err| AppError::Config(format!("invalid {PORT_ENV} '{raw}': {err}")))?;
        }

        Ok(())
    }

    /// Resolve the final configuration: optional TOML file, then env vars.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` on file, TOML, or override failures.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::load_from_path(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }
}
