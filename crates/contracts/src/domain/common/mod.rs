//! Common types shared by all backend records

pub mod envelope;
pub mod lenient;

// Re-exports
pub use envelope::ActionEnvelope;
