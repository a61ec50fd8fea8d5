use std::env;
use std::path::{Path, PathBuf};

use tabconv::paths::{expand_home, path_exists};
use tabconv::{CollisionPolicy, Converter, ConverterBuilder, DateFormat};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::cli::args::CliArgs;
use crate::cli::errors::AppError;

/// Counts of a finished run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub failed: usize,
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "tabconv=warn",
        1 => "tabconv=info",
        _ => "tabconv=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn run(args: CliArgs) -> Result<RunSummary, AppError> {
    let delimiter = parse_delimiter(&args.delimiter)?;

    let cwd = env::current_dir()?;
    let home = dirs::home_dir();
    let output_dir = resolve_output_dir(args.output_dir.as_deref(), &cwd, home.as_deref())?;

    let mut builder = ConverterBuilder::new()
        .with_output_dir(&output_dir)
        .with_delimiter(delimiter);
    if let Some(format) = args.date_format {
        builder = builder.with_date_format(DateFormat::Custom(format));
    }
    if args.no_clobber {
        builder = builder.with_collision_policy(CollisionPolicy::Reject);
    }
    let converter = builder.build()?;

    info!("Output directory: {:?}", output_dir);

    let mut summary = RunSummary::default();
    for pattern in &args.patterns {
        for entry in expand_pattern(pattern) {
            match entry {
                Ok(file) => convert_one(&converter, &file, &mut summary),
                Err(e) => {
                    println!("failed to convert file {:?}: {}", e.path(), e.error());
                    summary.failed += 1;
                }
            }
        }
    }

    info!("Converted: {}", summary.converted);
    info!("Failed: {}", summary.failed);
    Ok(summary)
}

fn convert_one(converter: &Converter, file: &Path, summary: &mut RunSummary) {
    match converter.convert(file) {
        Ok(report) => {
            info!(
                "Converted {:?} ({}): {} file(s)",
                file,
                report.direction,
                report.outputs.len()
            );
            summary.converted += 1;
        }
        Err(e) => {
            println!("failed to convert file {:?}: {}", file, e);
            summary.failed += 1;
        }
    }
}

/// The delimiter must be exactly one byte.
fn parse_delimiter(delimiter: &str) -> Result<char, AppError> {
    match delimiter.as_bytes() {
        [byte] => Ok(*byte as char),
        _ => Err(AppError::InvalidDelimiter {
            delimiter: delimiter.to_string(),
        }),
    }
}

/// Expands `~`, defaults to `cwd` and checks that the directory exists.
fn resolve_output_dir(
    output_dir: Option<&str>,
    cwd: &Path,
    home: Option<&Path>,
) -> Result<PathBuf, AppError> {
    let dir = match output_dir {
        None => cwd.to_path_buf(),
        Some(raw) => {
            let expanded =
                expand_home(raw, home).map_err(|_| AppError::HomeDirUnavailable {
                    path: raw.to_string(),
                })?;
            cwd.join(expanded)
        }
    };

    if !path_exists(&dir)? {
        return Err(AppError::OutputDirMissing { path: dir });
    }
    Ok(dir)
}

/// Matches of a glob pattern in enumeration order. A pattern that does not
/// parse is used as a literal path.
fn expand_pattern(pattern: &str) -> Vec<Result<PathBuf, glob::GlobError>> {
    match glob::glob(pattern) {
        Ok(paths) => paths.collect(),
        Err(e) => {
            debug!("Invalid pattern {:?} ({}), using it as a path", pattern, e);
            vec![Ok(PathBuf::from(pattern))]
        }
    }
}
