mod types;

pub use types::{UserAttribute, UserRecord};
