pub mod status_code;

pub use status_code::{StatusBadge, StatusCode, DEFAULT_STATUS_CLASS};
