#![forbid(unsafe_code)]

//! `mcp-scaffold` — starter scaffold for building MCP servers.
//!
//! Owns the capability registries, the transport selector, and the handler
//! contracts; the MCP wire protocol and transport mechanics come from the
//! `rmcp` SDK.

pub mod capability;
pub mod config;
pub mod errors;
pub mod registry;
pub mod sample;
pub mod server;

pub use config::{ServerConfig, TransportKind};
pub use errors::{AppError, Result};
