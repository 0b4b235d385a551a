mod absolutize;
mod flags;
mod table;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "flagscope",
    version,
    about = "Compiler flags for semantic completion",
    long_about = "flagscope answers which compiler flags a source file should be parsed with. \
                  It reads them from a compile_commands.json when one is configured, and otherwise \
                  falls back to a built-in flag table extended with pkg-config cflags."
)]
pub struct Cli {
    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the flags for a source file
    #[command(
        long_about = "Resolves the flags for FILE. Settings are read from .flagscope.json in the \
                            project directory; --database overrides its compilation database folder."
    )]
    Flags {
        /// Source file to resolve flags for
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Project directory holding .flagscope.json. Defaults to current directory.
        #[arg(short, long, value_name = "DIR")]
        project: Option<PathBuf>,

        /// Folder containing compile_commands.json
        #[arg(short, long, value_name = "DIR")]
        database: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Make relative path arguments of include flags absolute
    Absolutize {
        /// Directory relative paths are anchored at
        #[arg(short, long, value_name = "DIR")]
        base: PathBuf,

        /// Flags to rewrite (pass after `--`)
        #[arg(value_name = "FLAGS", allow_hyphen_values = true)]
        flags: Vec<String>,
    },
    /// Print the static flag table used when no compilation database is configured
    Table {
        /// Project directory holding .flagscope.json. Defaults to current directory.
        #[arg(short, long, value_name = "DIR")]
        project: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// {"flags": [...], "do_cache": true}
    Json,
    /// One flag per line
    Lines,
    /// A single shell-quoted command line
    Shell,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = flagscope_core::logging::init_logging("cli", cli.verbose);

    let result = match cli.command {
        Commands::Flags {
            file,
            project,
            database,
            format,
        } => flags::run(file, project, database, format),
        Commands::Absolutize { base, flags } => absolutize::run(base, flags),
        Commands::Table { project, format } => table::run(project, format),
    };

    if let Err(e) = &result {
        tracing::error!("{}", e);
    }
    result
}

fn current_dir_or(path: Option<PathBuf>) -> Result<PathBuf, std::io::Error> {
    match path {
        Some(p) => absolute(&p),
        None => std::env::current_dir(),
    }
}

fn absolute(path: &Path) -> Result<PathBuf, std::io::Error> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

fn print_flags(
    flags: &flagscope_api::FlagList,
    do_cache: bool,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", format_flags(flags, do_cache, format)?);
    Ok(())
}

fn format_flags(
    flags: &flagscope_api::FlagList,
    do_cache: bool,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    let rendered = match format {
        OutputFormat::Json => {
            let resolution = flagscope_api::FlagResolution {
                flags: flags.clone(),
                do_cache,
            };
            serde_json::to_string_pretty(&resolution)?
        }
        OutputFormat::Lines => flags.as_slice().join("\n"),
        OutputFormat::Shell => shlex::try_join(flags.iter().map(String::as_str))?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn sample_flags() -> flagscope_api::FlagList {
        flagscope_api::FlagList::from(&["-I", "/my proj/inc", r#"-DTERMITE_VERSION="ycm""#][..])
    }

    #[test]
    fn test_format_lines() {
        let out = format_flags(&sample_flags(), true, OutputFormat::Lines).unwrap();
        assert_eq!(out, "-I\n/my proj/inc\n-DTERMITE_VERSION=\"ycm\"");
    }

    #[test]
    fn test_format_shell_round_trips_through_shlex() {
        let out = format_flags(&sample_flags(), true, OutputFormat::Shell).unwrap();
        assert_eq!(
            shlex::split(&out).unwrap(),
            sample_flags().into_inner()
        );
    }

    #[test]
    fn test_format_shell_rejects_nul_byte() {
        let flags = flagscope_api::FlagList::from(&["-DX=a\0b"][..]);
        assert!(format_flags(&flags, true, OutputFormat::Shell).is_err());
    }

    #[test]
    fn test_format_json() {
        let out = format_flags(&sample_flags(), true, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["do_cache"], serde_json::json!(true));
        assert_eq!(value["flags"][1], serde_json::json!("/my proj/inc"));
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_absolutize_accepts_hyphen_flags() {
        let cli = Cli::try_parse_from(["flagscope", "absolutize", "--base", "/proj", "--", "-I", "inc"])
            .unwrap();
        match cli.command {
            Commands::Absolutize { base, flags } => {
                assert_eq!(base, PathBuf::from("/proj"));
                assert_eq!(flags, vec!["-I", "inc"]);
            }
            _ => panic!("Expected absolutize command"),
        }
    }

    #[test]
    fn test_flags_defaults_to_json() {
        let cli = Cli::try_parse_from(["flagscope", "flags", "termite.cc"]).unwrap();
        match cli.command {
            Commands::Flags {
                file,
                project,
                database,
                format,
            } => {
                assert_eq!(file, PathBuf::from("termite.cc"));
                assert!(project.is_none());
                assert!(database.is_none());
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected flags command"),
        }
    }
}
