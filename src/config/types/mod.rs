//! Utility types for configuration handling.

mod error;
mod field;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::{FieldPath, fields};
