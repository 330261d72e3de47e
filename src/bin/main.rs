use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;

use lp_tableau::algorithm::{OptimizationResult, SolveRelaxation};
use lp_tableau::algorithm::config::SolverConfig;
use lp_tableau::io::import;

/// Maximize cᵗx subject to Ax = b, x ≥ 0 with the two phase simplex method.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the cost coefficients on a single line
    #[arg(default_value = "cT.txt")]
    cost_file: PathBuf,
    /// File containing one constraint per line: the coefficients followed by the right-hand side
    #[arg(default_value = "Ab.txt")]
    constraint_file: PathBuf,
    /// Values within this distance of zero are treated as zero
    #[arg(long)]
    epsilon: Option<f64>,
    /// Maximum number of pivots in each phase, 0 for no limit
    #[arg(long)]
    max_iterations: Option<usize>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let mut config = SolverConfig::default();
    if let Some(epsilon) = opts.epsilon {
        ensure!(epsilon.is_finite() && epsilon >= 0f64, "epsilon should be nonnegative, got {}", epsilon);
        config = config.with_epsilon(epsilon);
    }
    if let Some(max_iterations) = opts.max_iterations {
        config = config.with_max_iterations((max_iterations > 0).then_some(max_iterations));
    }

    log::info!("Reading {:?} and {:?}", opts.cost_file, opts.constraint_file);
    let program = import(&opts.cost_file, &opts.constraint_file)
        .with_context(|| format!(
            "could not read a problem from {:?} and {:?}", opts.cost_file, opts.constraint_file,
        ))?;

    let result = program.solve_relaxation(&config).context("Solving linear program")?;
    match result {
        OptimizationResult::FiniteOptimum(solution) => print!("{}", solution),
        OptimizationResult::Infeasible => println!("LP is not feasible."),
        OptimizationResult::Unbounded { .. } => println!("LP is unbounded."),
    }

    Ok(())
}
