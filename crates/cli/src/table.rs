use crate::{OutputFormat, current_dir_or, print_flags};
use flagscope_core::{FlagResolver, ResolverConfig};
use std::path::PathBuf;
use tracing::info;

pub fn run(project: Option<PathBuf>, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let project = current_dir_or(project)?;
    let config = ResolverConfig::load(&project)?;
    // The table is printed as configured, without absolutization
    let resolver = FlagResolver::builder(&project)
        .with_package_query(std::sync::Arc::new(flagscope_core::PkgConfig::new(
            config.pkg_config.clone(),
        )))
        .with_base_flags(config.base_flags())
        .with_packages(config.packages.clone())
        .build();

    let table = resolver.flag_table()?;
    info!("Flag table has {} entries", table.len());
    print_flags(table, true, format)
}
