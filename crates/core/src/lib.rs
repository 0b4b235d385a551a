pub mod config;
pub mod database;
pub mod error;
pub mod flags;
pub mod logging;
pub mod pkg_config;
pub mod prepare;
pub mod resolver;

pub use config::ResolverConfig;
pub use database::JsonCompilationDatabase;
pub use error::{FlagscopeError, Result};
pub use pkg_config::PkgConfig;
pub use prepare::ClangFlagPreparer;
pub use resolver::{FlagResolver, FlagResolverBuilder};
