use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{info, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use shares::{Combination, Instrument, Solver, CENTS_PER_EURO};
use shares_core::report::{render_combinations, render_grid, render_json};
use shares_core::solver::top;
use shares_core::{load_catalog, BruteForceSolver, OptimizedSolver};

pub mod args;
pub mod settings;
pub mod timing;

use args::{Algorithm, Args, OutputFormat};
use settings::Settings;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&settings.log_level))
        .init();

    let (catalog_path, budget) = if args.debug {
        (settings.debug_file.clone(), settings.debug_budget)
    } else {
        (
            args.file.clone().unwrap_or_else(|| settings.catalog_file.clone()),
            args.budget.unwrap_or(settings.budget),
        )
    };
    let layout = args.layout.unwrap_or(settings.layout);
    let max_cost = to_cents(budget)?;

    let shares = load_catalog(&catalog_path, layout)
        .with_context(|| format!("Failed to load catalog {:?}", catalog_path))?;
    info!(
        "Loaded {} shares from {:?}, budget {} EUR",
        shares.len(),
        catalog_path,
        budget
    );

    let optimized = OptimizedSolver::with_policy(args.step.unwrap_or(settings.step));
    let solver: &dyn Solver = match args.algorithm {
        Algorithm::BruteForce => &BruteForceSolver,
        Algorithm::Optimized => &optimized,
    };

    if let Some(rounds) = args.timing {
        let elapsed = timing::time_solver(solver, &shares, max_cost, rounds);
        info!("{} solver: {} run(s)", solver.name(), rounds);
        println!("{}", elapsed.as_secs_f64());
        return Ok(());
    }

    let results = match args.algorithm {
        Algorithm::BruteForce => {
            if args.print_grid {
                warn!("--print-grid only applies to the optimized algorithm");
            }
            top(
                BruteForceSolver::new().enumerate_feasible(&shares, max_cost),
                args.top,
            )
        }
        Algorithm::Optimized => {
            if args.top != 1 {
                warn!("--top only applies to the brute-force algorithm");
            }
            vec![solve_optimized(&optimized, &shares, max_cost, args.print_grid)]
        }
    };

    match args.format {
        OutputFormat::Table => print!("{}", render_combinations(&results)),
        OutputFormat::Json => println!("{}", render_json(&results)?),
    }

    Ok(())
}

fn solve_optimized(
    solver: &OptimizedSolver,
    shares: &[Instrument],
    max_cost: u64,
    print_grid: bool,
) -> Combination {
    match solver.build_table(shares, max_cost) {
        Some(table) => {
            if print_grid {
                println!("{}", render_grid(&table, shares));
            }
            table.best(shares)
        }
        None => Combination::new(),
    }
}

/// Converts a budget in euros to cents, dropping fractions of a cent.
fn to_cents(euros: Decimal) -> Result<u64> {
    (euros * Decimal::from(CENTS_PER_EURO))
        .floor()
        .to_u64()
        .ok_or_else(|| anyhow!("Invalid budget: {} EUR", euros))
}
