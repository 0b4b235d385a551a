use flagscope_api::{ApiResult, FlagList, PackageQuery};
use tracing::debug;

/// Warning, definition and language flags every file gets when no
/// compilation database is configured.
pub const BASE_FLAGS: &[&str] = &[
    "-Wall",
    "-Wextra",
    "-Werror",
    "-pedantic",
    "-Winit-self",
    "-Wshadow",
    "-Wformat=2",
    "-Wmissing-declarations",
    "-Wstrict-overflow=5",
    "-Wcast-align",
    "-Wcast-qual",
    "-Wconversion",
    "-Wunused-macros",
    "-Wwrite-strings",
    "-Wimplicit-fallthrough",
    "-DNDEBUG",
    "-DUSE_CLANG_COMPLETER",
    "-DTERMITE_VERSION=\"ycm\"",
    "-D_POSIX_C_SOURCE=200809L",
    "-std=c++11",
    "-x",
    "c++",
];

/// Packages whose cflags are appended to the base flags.
pub const DEFAULT_PACKAGES: &[&str] = &["gtk+-3.0", "vte-2.91"];

/// Standard library selection stripped from database flags.
pub const STDLIB_OVERRIDE_FLAG: &str = "-stdlib=libc++";

/// Concatenate `base_flags` with the cflags of each package, in order.
///
/// The first failing package query aborts the build.
pub fn build_flag_table(
    base_flags: &[String],
    packages: &[String],
    query: &dyn PackageQuery,
) -> ApiResult<FlagList> {
    let mut table: FlagList = base_flags.iter().map(String::as_str).collect();

    for package in packages {
        let package_flags = query.query_package_flags(package)?;
        debug!("{} contributes {} flags", package, package_flags.len());
        table.extend(package_flags);
    }

    Ok(table)
}
