//! envdump - export an environment's data stores to local files.
//!
//! The binary is a thin wrapper around [`dispatch::run`]; everything it does
//! is reachable from here so the export can be embedded in other tools
//! without terminating the host process on failure.

pub mod aws;
pub mod cli;
pub mod config;
pub mod conversions;
pub mod dispatch;
pub mod export;
pub mod sources;

pub use config::{AwsConfig, ExportConfig};
pub use dispatch::run;
pub use envdump_core::{ExportError, Result};
