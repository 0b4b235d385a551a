use crate::error::ApiResult;
use crate::models::CompilationInfo;
use std::path::Path;

/// An index mapping source files to the flags they are built with.
pub trait CompilationDatabase: Send + Sync {
    /// Look up the compilation entry for `file`.
    ///
    /// Returns `ApiError::MissingEntry` when the database knows nothing about it.
    fn compilation_info(&self, file: &Path) -> ApiResult<CompilationInfo>;
}
