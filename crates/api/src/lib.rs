pub mod database;
pub mod error;
pub mod models;
pub mod package;
pub mod prepare;

// Re-export commonly used types
pub use database::CompilationDatabase;
pub use error::{ApiError, ApiResult};
pub use models::*;
pub use package::PackageQuery;
pub use prepare::{FlagPreparer, IdentityPreparer};
