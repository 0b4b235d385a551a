use crate::{OutputFormat, absolute, current_dir_or, print_flags};
use flagscope_core::{FlagResolver, ResolverConfig};
use std::path::PathBuf;
use tracing::info;

pub fn run(
    file: PathBuf,
    project: Option<PathBuf>,
    database: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let project = current_dir_or(project)?;
    let mut config = ResolverConfig::load(&project)?;
    if let Some(folder) = database {
        config.compilation_database_folder = Some(absolute(&folder)?);
    }

    let resolver = FlagResolver::from_config(&project, &config)?;
    let file = absolute(&file)?;

    info!("Resolving flags for {}", file.display());
    let resolution = resolver.resolve(&file)?;
    info!("{} flags", resolution.flags.len());

    print_flags(&resolution.flags, resolution.do_cache, format)
}
