//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration for the solver run
#[derive(Debug, Clone)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Every tag a solver must carry
    pub tags: Vec<String>,
    /// Input directory with `~` expanded
    pub input_dir: PathBuf,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    ///
    /// # Errors
    ///
    /// [`CliError::Config`] if the input directory starts with `~` and no
    /// home directory can be determined.
    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let input_dir = expand_tilde(&args.input_dir, dirs::home_dir())?;
        let tags = args
            .tags
            .iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags,
            input_dir,
            quiet: args.quiet,
        })
    }
}

/// Expand a leading `~` to `home`
fn expand_tilde(path: &Path, home: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let Some(rest) = path.to_str().and_then(|s| s.strip_prefix('~')) else {
        return Ok(path.to_path_buf());
    };
    if !(rest.is_empty() || rest.starts_with('/')) {
        // `~user` is left alone
        return Ok(path.to_path_buf());
    }
    let home = home.ok_or_else(|| {
        CliError::Config(format!("cannot expand {}: no home directory", path.display()))
    })?;
    Ok(home.join(rest.trim_start_matches('/')))
}
