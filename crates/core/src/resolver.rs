//! Flag resolution for a single source file.
//!
//! With a compilation database bound, flags come from the file's recorded
//! compiler invocation. Otherwise every file gets the static flag table,
//! with relative paths anchored at the configuration directory.

use crate::config::ResolverConfig;
use crate::database::JsonCompilationDatabase;
use crate::error::Result;
use crate::flags::{
    BASE_FLAGS, DEFAULT_PACKAGES, STDLIB_OVERRIDE_FLAG, build_flag_table,
    make_relative_paths_absolute,
};
use crate::pkg_config::PkgConfig;
use crate::prepare::ClangFlagPreparer;
use flagscope_api::{
    CompilationDatabase, FlagList, FlagPreparer, FlagResolution, PackageQuery,
};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, trace};

pub struct FlagResolver {
    config_dir: PathBuf,
    database: Option<Arc<dyn CompilationDatabase>>,
    preparer: Arc<dyn FlagPreparer>,
    package_query: Arc<dyn PackageQuery>,
    base_flags: Vec<String>,
    packages: Vec<String>,
    table: OnceCell<FlagList>,
}

impl FlagResolver {
    pub fn builder(config_dir: impl Into<PathBuf>) -> FlagResolverBuilder {
        FlagResolverBuilder::new(config_dir)
    }

    /// Wire a resolver from project configuration: `pkg-config` for package
    /// flags and, when a folder is configured, its `compile_commands.json`.
    pub fn from_config(config_dir: impl Into<PathBuf>, config: &ResolverConfig) -> Result<Self> {
        let config_dir = config_dir.into();
        let mut builder = Self::builder(config_dir.clone())
            .with_package_query(Arc::new(PkgConfig::new(config.pkg_config.clone())))
            .with_base_flags(config.base_flags())
            .with_packages(config.packages.clone());

        if let Some(folder) = config.database_folder(&config_dir) {
            let database = JsonCompilationDatabase::load(folder)?;
            builder = builder.with_database(Arc::new(database));
        }

        Ok(builder.build())
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn has_database(&self) -> bool {
        self.database.is_some()
    }

    /// The static flag table, built on first use.
    ///
    /// A failed package query is returned to the caller and retried on the next call.
    pub fn flag_table(&self) -> Result<&FlagList> {
        let table = self.table.get_or_try_init(|| {
            debug!("Building flag table for packages {:?}", self.packages);
            build_flag_table(&self.base_flags, &self.packages, self.package_query.as_ref())
        })?;
        Ok(table)
    }

    pub fn resolve(&self, filename: &Path) -> Result<FlagResolution> {
        let flags = match &self.database {
            Some(database) => self.resolve_from_database(database.as_ref(), filename)?,
            None => make_relative_paths_absolute(self.flag_table()?, &self.config_dir),
        };

        trace!("{} -> {}", filename.display(), flags);
        Ok(FlagResolution::cached(flags))
    }

    fn resolve_from_database(
        &self,
        database: &dyn CompilationDatabase,
        filename: &Path,
    ) -> Result<FlagList> {
        let info = database.compilation_info(filename)?;
        let flags = make_relative_paths_absolute(
            &info.compiler_flags,
            Path::new(&info.compiler_working_dir),
        );
        let mut flags = self.preparer.prepare_flags(flags, filename);

        if flags.remove_if_present(STDLIB_OVERRIDE_FLAG) {
            trace!("Dropped {} for {}", STDLIB_OVERRIDE_FLAG, filename.display());
        }
        Ok(flags)
    }
}

pub struct FlagResolverBuilder {
    config_dir: PathBuf,
    database: Option<Arc<dyn CompilationDatabase>>,
    preparer: Arc<dyn FlagPreparer>,
    package_query: Arc<dyn PackageQuery>,
    base_flags: Vec<String>,
    packages: Vec<String>,
}

impl FlagResolverBuilder {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            database: None,
            preparer: Arc::new(ClangFlagPreparer),
            package_query: Arc::new(PkgConfig::default()),
            base_flags: BASE_FLAGS.iter().map(|f| f.to_string()).collect(),
            packages: DEFAULT_PACKAGES.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn with_database(mut self, database: Arc<dyn CompilationDatabase>) -> Self {
        self.database = Some(database);
        self
    }

    pub fn with_preparer(mut self, preparer: Arc<dyn FlagPreparer>) -> Self {
        self.preparer = preparer;
        self
    }

    pub fn with_package_query(mut self, query: Arc<dyn PackageQuery>) -> Self {
        self.package_query = query;
        self
    }

    pub fn with_base_flags(mut self, flags: Vec<String>) -> Self {
        self.base_flags = flags;
        self
    }

    pub fn with_packages(mut self, packages: Vec<String>) -> Self {
        self.packages = packages;
        self
    }

    pub fn build(self) -> FlagResolver {
        info!(
            "Flag resolver for {} ({})",
            self.config_dir.display(),
            if self.database.is_some() {
                "compilation database"
            } else {
                "static flags"
            }
        );

        FlagResolver {
            config_dir: self.config_dir,
            database: self.database,
            preparer: self.preparer,
            package_query: self.package_query,
            base_flags: self.base_flags,
            packages: self.packages,
            table: OnceCell::new(),
        }
    }
}
