//! `compile_commands.json` backed compilation database.
//!
//! Entries are keyed by their normalized absolute file path. Lookups for
//! header files without an entry of their own fall back to a sibling source
//! file with the same stem.

pub mod path;

use crate::error::{FlagscopeError, Result};
use flagscope_api::{ApiError, ApiResult, CompilationDatabase, CompilationInfo, FlagList};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

pub const DATABASE_FILE_NAME: &str = "compile_commands.json";

const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx"];
const SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx"];

/// One object of the JSON array.
#[derive(Debug, Clone, Deserialize)]
pub struct CompileCommand {
    pub directory: PathBuf,
    pub file: PathBuf,
    #[serde(default)]
    pub arguments: Option<Vec<String>>,
    #[serde(default)]
    pub command: Option<String>,
}

impl CompileCommand {
    /// The command line as tokens, preferring `arguments` over `command`.
    pub fn tokens(&self) -> ApiResult<Vec<String>> {
        if let Some(args) = &self.arguments {
            return Ok(args.clone());
        }
        let command = self.command.as_deref().ok_or_else(|| {
            ApiError::Database(format!(
                "entry for {} has neither `arguments` nor `command`",
                self.file.display()
            ))
        })?;
        shlex::split(command).ok_or_else(|| {
            ApiError::Database(format!("cannot split command for {}", self.file.display()))
        })
    }
}

#[derive(Debug)]
struct Entry {
    working_dir: PathBuf,
    command: CompileCommand,
}

#[derive(Debug)]
pub struct JsonCompilationDatabase {
    folder: PathBuf,
    entries: HashMap<PathBuf, Entry>,
}

impl JsonCompilationDatabase {
    /// Load `folder/compile_commands.json`.
    pub fn load(folder: impl Into<PathBuf>) -> Result<Self> {
        let folder = folder.into();
        let db_path = folder.join(DATABASE_FILE_NAME);
        if !db_path.is_file() {
            return Err(FlagscopeError::Config(format!(
                "no {} in {}",
                DATABASE_FILE_NAME,
                folder.display()
            )));
        }

        let content = std::fs::read_to_string(&db_path)?;
        let commands: Vec<CompileCommand> = serde_json::from_str(&content)?;
        let db = Self::from_commands(folder, commands);
        info!(
            "Loaded {} compilation entries from {}",
            db.len(),
            db_path.display()
        );
        Ok(db)
    }

    /// Build from already parsed commands. Relative `directory` values are
    /// taken relative to `folder`. The first entry for a file wins.
    pub fn from_commands(folder: impl Into<PathBuf>, commands: Vec<CompileCommand>) -> Self {
        let folder = folder.into();
        let mut entries = HashMap::with_capacity(commands.len());

        for command in commands {
            let working_dir = path::anchor(&folder, &command.directory);
            let file = path::anchor(&working_dir, &command.file);
            entries
                .entry(file)
                .or_insert(Entry {
                    working_dir,
                    command,
                });
        }

        Self { folder, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn find_entry(&self, file: &Path) -> Option<&Entry> {
        if let Some(entry) = self.entries.get(file) {
            return Some(entry);
        }

        let ext = file.extension().and_then(|e| e.to_str())?;
        if !HEADER_EXTENSIONS.contains(&ext) {
            return None;
        }

        SOURCE_EXTENSIONS.iter().find_map(|source_ext| {
            let candidate = file.with_extension(source_ext);
            let entry = self.entries.get(&candidate)?;
            trace!(
                "Using {} flags for header {}",
                candidate.display(),
                file.display()
            );
            Some(entry)
        })
    }
}

impl CompilationDatabase for JsonCompilationDatabase {
    fn compilation_info(&self, file: &Path) -> ApiResult<CompilationInfo> {
        let key = path::anchor(&self.folder, file);
        let entry = self
            .find_entry(&key)
            .ok_or_else(|| ApiError::MissingEntry(key.clone()))?;

        debug!("Compilation entry found for {}", key.display());
        Ok(CompilationInfo {
            compiler_flags: FlagList::from(entry.command.tokens()?),
            compiler_working_dir: entry.working_dir.to_string_lossy().into_owned(),
        })
    }
}
