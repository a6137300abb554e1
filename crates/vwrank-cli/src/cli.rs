//! CLI argument definitions for vwrank.
//!
//! # Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--url` | GOOGL sample CSV | Price CSV location (`VWRANK_URL`) |
//! | `--file` | - | Read a local CSV instead of fetching (conflicts with `--url`) |
//! | `--selection` | prompt | `1` months, `2` years, `3` both |
//! | `--top` | `6` | Periods per best/worst list |
//! | `--zero-volume` | `fail` | Zero-volume period handling |
//! | `--format` | `text` | Output format (text, json) |
//! | `--timeout-ms` | `10000` | HTTP timeout (`VWRANK_TIMEOUT_MS`) |
//!
//! # Examples
//!
//! ```bash
//! # Interactive menu against the default CSV
//! vwrank
//!
//! # Best and worst six years from a local download
//! vwrank --file GOOGL.csv --selection 2
//!
//! # Top 3 months and years as JSON
//! vwrank --selection 3 --top 3 --format json --pretty
//! ```

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Parser, ValueEnum};
use vwrank_core::{PriceSource, ZeroVolumePolicy, DEFAULT_RANKING_SIZE};

use crate::selection::Selection;

pub const DEFAULT_URL: &str = "http://193.1.33.31:88/pa1/GOOGL.csv";

/// Rank the best and worst months and years of a stock by volume-weighted
/// average adjusted close.
#[derive(Debug, Parser)]
#[command(
    name = "vwrank",
    author,
    version,
    about = "Best and worst periods of a stock by volume-weighted average price",
    long_about = "vwrank downloads a daily price CSV (Date,Open,High,Low,Close,Adj Close,Volume), \
computes the volume-weighted average adjusted close for every month and year, and prints \
the best and worst periods.\n\
\n\
Without --selection an interactive menu asks which periods to show."
)]
pub struct Cli {
    /// URL of the daily price CSV.
    #[arg(long, env = "VWRANK_URL", default_value = DEFAULT_URL)]
    pub url: String,

    /// Read the CSV from a local file instead of fetching --url.
    #[arg(long, value_name = "PATH", conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Periods to report: 1 (months), 2 (years) or 3 (both).
    ///
    /// Prompts on stdin when omitted.
    #[arg(long, short = 's')]
    pub selection: Option<Selection>,

    /// Number of periods in each best and worst list.
    #[arg(long, default_value_t = DEFAULT_RANKING_SIZE, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub top: usize,

    /// Handling of periods whose total volume is zero.
    #[arg(long, value_enum, default_value_t = ZeroVolumeArg::Fail)]
    pub zero_volume: ZeroVolumeArg,

    /// Output format for the report.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,

    /// HTTP timeout in milliseconds.
    #[arg(long, env = "VWRANK_TIMEOUT_MS", default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Log pipeline progress to stderr (overridden by RUST_LOG).
    #[arg(long, short = 'v', default_value_t = false)]
    pub verbose: bool,
}

impl Cli {
    pub fn source(&self) -> PriceSource {
        match &self.file {
            Some(path) => PriceSource::File(path.clone()),
            None => PriceSource::Url(self.url.clone()),
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width report lines.
    Text,
    /// Single JSON document.
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ZeroVolumeArg {
    /// Stop with an error.
    Fail,
    /// Leave the period out of the rankings.
    Skip,
}

impl From<ZeroVolumeArg> for ZeroVolumePolicy {
    fn from(value: ZeroVolumeArg) -> Self {
        match value {
            ZeroVolumeArg::Fail => Self::Fail,
            ZeroVolumeArg::Skip => Self::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_report() {
        let cli = Cli::try_parse_from(["vwrank"]).expect("defaults parse");
        assert_eq!(cli.top, 6);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.zero_volume, ZeroVolumeArg::Fail);
        assert!(cli.selection.is_none());
    }

    #[test]
    fn file_selects_local_source() {
        let cli = Cli::try_parse_from(["vwrank", "--file", "prices.csv"]).expect("parses");
        assert_eq!(cli.source(), PriceSource::File(PathBuf::from("prices.csv")));
    }

    #[test]
    fn file_and_url_together_are_rejected() {
        let err = Cli::try_parse_from(["vwrank", "--file", "prices.csv", "--url", "http://x"])
            .expect_err("must conflict");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn selection_and_top_are_parsed() {
        let cli = Cli::try_parse_from(["vwrank", "-s", "2", "--top", "3", "--zero-volume", "skip"])
            .expect("parses");
        assert_eq!(cli.selection, Some(Selection::Years));
        assert_eq!(cli.top, 3);
        assert_eq!(ZeroVolumePolicy::from(cli.zero_volume), ZeroVolumePolicy::Skip);
    }

    #[test]
    fn rejects_zero_top_and_unknown_selection() {
        assert!(Cli::try_parse_from(["vwrank", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["vwrank", "--selection", "4"]).is_err());
    }
}
