use flagscope_api::{FlagList, FlagPreparer};
use std::path::Path;

/// Flags that take the following token as their argument and only matter to a build.
const DROP_WITH_ARGUMENT: &[&str] = &["-o", "-MF", "-MT", "-MQ"];
const DROP: &[&str] = &["-c", "-M", "-MM", "-MD", "-MMD", "-MP"];
const SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx", "c++", "C", "m", "mm"];

/// Turns a recorded compiler invocation into flags a clang-based
/// completion engine can parse the file with.
///
/// Strips the compiler (and any wrapper in front of it), the file being
/// compiled (or, for a header, the source it borrowed flags from) and
/// output/dependency-file options.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClangFlagPreparer;

impl FlagPreparer for ClangFlagPreparer {
    fn prepare_flags(&self, flags: FlagList, filename: &Path) -> FlagList {
        let mut prepared = FlagList::with_capacity(flags.len());
        let mut iter = flags.into_iter().skip_while(|f| !f.starts_with('-'));

        while let Some(flag) = iter.next() {
            if DROP_WITH_ARGUMENT.contains(&flag.as_str()) {
                iter.next();
                continue;
            }
            if DROP.contains(&flag.as_str())
                || has_attached_argument(&flag)
                || is_source_file(&flag, filename)
            {
                continue;
            }
            prepared.push(flag);
        }

        prepared
    }
}

// `-oa.o`, `-MFa.d` and friends
fn has_attached_argument(flag: &str) -> bool {
    DROP_WITH_ARGUMENT
        .iter()
        .any(|prefix| flag.len() > prefix.len() && flag.starts_with(prefix))
}

fn is_source_file(token: &str, filename: &Path) -> bool {
    if token.starts_with('-') {
        return false;
    }
    let token = Path::new(token);
    if token == filename {
        return true;
    }
    if token.is_relative()
        && token.file_name().is_some()
        && token.file_name() == filename.file_name()
    {
        return true;
    }
    token
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SOURCE_EXTENSIONS.contains(&ext))
}
