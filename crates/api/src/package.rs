use crate::error::ApiResult;

/// Source of the compiler flags an installed package wants (pkg-config style).
pub trait PackageQuery: Send + Sync {
    /// Flags reported for `name`, already split into tokens with empty ones removed.
    fn query_package_flags(&self, name: &str) -> ApiResult<Vec<String>>;
}
