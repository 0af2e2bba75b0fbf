mod layout;
mod summary;

pub use layout::{sanitize, ObjectPath, OutputLayout, DEFAULT_OUTPUT_ROOT, ENV_PLACEHOLDER};
pub use summary::ExportSummary;
