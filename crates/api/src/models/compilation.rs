use super::flags::FlagList;
use serde::{Deserialize, Serialize};

/// Per-file answer of a compilation database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationInfo {
    pub compiler_flags: FlagList,
    /// Directory relative paths in `compiler_flags` are interpreted against.
    pub compiler_working_dir: String,
}
