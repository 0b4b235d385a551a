use crate::models::FlagList;
use std::path::Path;

/// Adjusts raw compilation-database flags into a form the completion engine can parse.
pub trait FlagPreparer: Send + Sync {
    fn prepare_flags(&self, flags: FlagList, filename: &Path) -> FlagList;
}

/// Passes flags through untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityPreparer;

impl FlagPreparer for IdentityPreparer {
    fn prepare_flags(&self, flags: FlagList, _filename: &Path) -> FlagList {
        flags
    }
}
