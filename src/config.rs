use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;
use thiserror::Error;

use crate::io::DEFAULT_OUTPUT;
use crate::io::SeedSource;
use crate::rule::Rule;

/// Grow an elementary cellular automaton from a seed row and save it as a PNG.
///
/// The seed is a line of `0`s and `1`s, read from `--filename` or from standard input.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// The rule to apply, between 0 and 255
    #[arg(allow_negative_numbers = true)]
    pub rule: i64,

    /// The number of output rows, including the seed
    #[arg(allow_negative_numbers = true)]
    pub rows: i64,

    /// File for the seed. Reads one line of stdin when absent
    #[arg(long)]
    pub filename: Option<PathBuf>,

    /// Where to write the image
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Side length, in pixels, of each cell
    #[arg(long, default_value_t = 1)]
    pub scale: u32,

    /// Log more. Repeat for even more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Default log filter directive for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("rule has to be between 0 and 255, got {0}")]
    RuleOutOfRange(i64),

    #[error("the number of rows has to be > 0, got {0}")]
    NoRows(i64),

    #[error("the input file {0:?} does not exist")]
    MissingSeedFile(PathBuf),

    #[error("the scale has to be > 0")]
    ZeroScale,
}

/// Validated run parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rule: Rule,

    /// Always at least 1
    pub rows: usize,

    pub seed: SeedSource,

    pub output: PathBuf,

    /// Always at least 1
    pub scale: u32,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let rule = Rule::try_from(cli.rule).map_err(|_| ConfigError::RuleOutOfRange(cli.rule))?;

        let rows = match usize::try_from(cli.rows) {
            Ok(rows) if rows > 0 => rows,
            _ => return Err(ConfigError::NoRows(cli.rows)),
        };

        let seed = match cli.filename {
            Some(path) if !path.exists() => return Err(ConfigError::MissingSeedFile(path)),
            Some(path) => SeedSource::File(path),
            None => SeedSource::Stdin,
        };

        if cli.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }

        Ok(Config {
            rule,
            rows,
            seed,
            output: cli.output,
            scale: cli.scale,
        })
    }
}
