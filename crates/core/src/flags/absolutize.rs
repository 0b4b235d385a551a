use flagscope_api::FlagList;
use std::path::Path;

/// Flags whose argument is a filesystem path, either attached (`-Iinc`) or
/// as the following token (`-I inc`). Tested in this order.
pub const PATH_FLAG_PREFIXES: [&str; 4] = ["-isystem", "-I", "-iquote", "--sysroot="];

/// Rewrite relative path arguments of path flags so they are absolute under `working_dir`.
///
/// An empty `working_dir` returns the flags unchanged.
pub fn make_relative_paths_absolute(flags: &FlagList, working_dir: &Path) -> FlagList {
    if working_dir.as_os_str().is_empty() {
        return flags.clone();
    }

    let mut new_flags = FlagList::with_capacity(flags.len());
    let mut make_next_absolute = false;

    for flag in flags {
        if make_next_absolute {
            make_next_absolute = false;
            if Path::new(flag).is_absolute() {
                new_flags.push(flag.as_str());
            } else {
                new_flags.push(join_lossy(working_dir, flag));
            }
            continue;
        }

        let mut new_flag = flag.clone();
        for prefix in PATH_FLAG_PREFIXES {
            if flag == prefix {
                make_next_absolute = true;
                break;
            }
            if let Some(path) = flag.strip_prefix(prefix) {
                new_flag = format!("{}{}", prefix, join_lossy(working_dir, path));
                break;
            }
        }
        new_flags.push(new_flag);
    }

    new_flags
}

// Absolute `path` replaces `base`, matching Path::join.
fn join_lossy(base: &Path, path: &str) -> String {
    base.join(path).to_string_lossy().into_owned()
}
