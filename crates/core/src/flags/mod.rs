//! Flag assembly: the static flag table and path absolutization.

pub mod absolutize;
pub mod table;

pub use absolutize::{PATH_FLAG_PREFIXES, make_relative_paths_absolute};
pub use table::{BASE_FLAGS, DEFAULT_PACKAGES, STDLIB_OVERRIDE_FLAG, build_flag_table};
