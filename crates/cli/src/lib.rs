pub mod cli;
pub mod color;
pub mod error;
pub mod loader;
pub mod paths;
pub mod report;
pub mod schema;
pub mod validate;

pub use cli::Cli;
pub use error::{Error, ExitCode, Result};
pub use loader::{Backend, YamlParser};
pub use report::TextReporter;
pub use schema::{Schema, SchemaViolation, resolve_schema_path};
pub use validate::{DocumentFailure, Outcome};
