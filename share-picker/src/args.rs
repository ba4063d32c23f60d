use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use shares_core::{CatalogLayout, StepPolicy};
use std::path::PathBuf;

/// Picks the most profitable set of shares that fits in a budget.
#[derive(Parser, Debug, Clone)]
#[command(name = "share-picker")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Search strategy.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Optimized)]
    pub algorithm: Algorithm,

    /// Catalog file (defaults to the configured catalog).
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Column layout of the catalog file.
    #[arg(short, long, value_enum)]
    pub layout: Option<CatalogLayout>,

    /// Budget in euros.
    #[arg(short, long)]
    pub budget: Option<Decimal>,

    /// Use the debug catalog and the debug budget from the settings.
    #[arg(short, long)]
    pub debug: bool,

    /// Print the dynamic-programming grid (optimized algorithm only).
    #[arg(short, long)]
    pub print_grid: bool,

    /// Only time the solver over N runs and print the elapsed seconds.
    #[arg(short, long, num_args = 0..=1, default_missing_value = "1")]
    pub timing: Option<u32>,

    /// Number of ranked combinations to print (brute-force only).
    #[arg(short = 'k', long, default_value_t = 1)]
    pub top: usize,

    /// How the budget axis step is derived (optimized algorithm only).
    #[arg(short, long, value_enum)]
    pub step: Option<StepPolicy>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Settings file (TOML, JSON or YAML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    BruteForce,
    Optimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["share-picker"]);
        assert_eq!(args.algorithm, Algorithm::Optimized);
        assert_eq!(args.format, OutputFormat::Table);
        assert_eq!(args.top, 1);
        assert!(args.timing.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_short_flags() {
        let args = Args::parse_from([
            "share-picker",
            "-a",
            "brute-force",
            "-f",
            "dataset1.csv",
            "-l",
            "decimal",
            "-b",
            "500.50",
            "-p",
            "-t",
        ]);
        assert_eq!(args.algorithm, Algorithm::BruteForce);
        assert_eq!(args.file, Some(PathBuf::from("dataset1.csv")));
        assert_eq!(args.layout, Some(CatalogLayout::Decimal));
        assert_eq!(args.budget, Some(dec!(500.50)));
        assert!(args.print_grid);
        assert_eq!(args.timing, Some(1));
    }

    #[test]
    fn test_timing_rounds() {
        let args = Args::parse_from(["share-picker", "--timing", "10", "--step", "gcd"]);
        assert_eq!(args.timing, Some(10));
        assert_eq!(args.step, Some(StepPolicy::Gcd));
    }
}
