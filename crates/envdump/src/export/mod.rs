//! Exporters: one per store, each writing below the configured output root.

mod buckets;
mod json;
mod tables;
mod users;
mod writer;

pub use buckets::{export_bucket, export_buckets};
pub use tables::{export_table, export_tables};
pub use users::export_users;
pub use writer::{ensure_dir, write_file};
