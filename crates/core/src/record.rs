//! Generic exported record.

use serde_json::{Map, Value};

/// One exported row: field name to untyped JSON value.
///
/// Backed by a sorted map, so serializing the same record always yields the
/// same bytes regardless of the order the source returned its fields in.
pub type Record = Map<String, Value>;
