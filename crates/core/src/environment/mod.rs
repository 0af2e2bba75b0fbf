mod catalog;
mod target;

pub use catalog::{Environment, BUCKET_PREFIX, BUCKET_SUFFIXES, TABLE_SUFFIXES};
pub use target::{ExportTarget, TargetKind};
