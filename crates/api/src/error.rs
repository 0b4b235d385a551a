use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to run `{program} --cflags {package}`: {reason}")]
    ProcessInvocation {
        program: String,
        package: String,
        reason: String,
    },
    #[error("No compilation entry for {}", .0.display())]
    MissingEntry(PathBuf),
    #[error("Compilation database error: {0}")]
    Database(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
