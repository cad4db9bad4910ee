// Common module - shared types and utilities across all modules

pub mod error;
pub mod state;
pub mod validation;

// Re-export commonly used types for convenience
pub use state::AppState;
pub use validation::{ValidationResult, Validator};
