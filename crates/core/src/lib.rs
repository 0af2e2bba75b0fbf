//! envdump_core - pure building blocks for the envdump exporter.
//!
//! Nothing in this crate performs I/O. Resource names, output paths and
//! exported record shapes are all derived here so the AWS shell stays thin.

pub mod directory;
pub mod environment;
pub mod error;
pub mod output;
pub mod pagination;
pub mod record;

pub use error::{ExportError, Result};
pub use record::Record;
