use approx::assert_abs_diff_eq;

use lp_tableau::algorithm::{OptimizationResult, SolveRelaxation};
use lp_tableau::algorithm::config::SolverConfig;
use lp_tableau::algorithm::two_phase::solve;
use lp_tableau::algorithm::two_phase::strategy::pivot_rule::LargestCoefficient;
use lp_tableau::data::linear_program::canonical_form::LinearProgram;
use lp_tableau::data::linear_program::solution::Solution;

use super::read;

fn solve_finite(program: &LinearProgram<f64>) -> Solution<f64> {
    match program.solve_relaxation(&SolverConfig::default()).unwrap() {
        OptimizationResult::FiniteOptimum(solution) => {
            let original = &solution.values()[..program.nr_columns()];
            assert!(program.is_feasible(original, 1e-8));
            assert_abs_diff_eq!(program.objective_value(original), solution.objective_value(), epsilon = 1e-8);
            solution
        },
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}

#[test]
fn two_products() {
    let solution = solve_finite(&read("two_products"));
    assert_abs_diff_eq!(solution.objective_value(), 10f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(0), 2f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(1), 2f64, epsilon = 1e-10);
}

#[test]
fn single_constraint() {
    let solution = solve_finite(&read("single_constraint"));
    assert_eq!(solution.to_string(), "Optimum value: 5\nSolution values:\nx_0: 5\n");
}

#[test]
fn conflicting() {
    let result = read("conflicting").solve_relaxation(&SolverConfig::default());
    assert_eq!(result, Ok(OptimizationResult::Infeasible));
}

#[test]
fn ray() {
    let result = read("ray").solve_relaxation(&SolverConfig::default());
    assert!(matches!(result, Ok(OptimizationResult::Unbounded { .. })));
}

#[test]
fn slack_form() {
    let solution = solve_finite(&read("slack_form"));
    assert_abs_diff_eq!(solution.objective_value(), 9f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(0), 3f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(1), 1f64, epsilon = 1e-10);
}

/// Balanced transportation problem, one of the constraints is redundant.
#[test]
fn transport() {
    let program = read("transport");
    let solution = solve_finite(&program);
    assert_abs_diff_eq!(solution.objective_value(), -125f64, epsilon = 1e-8);
    for (j, expected) in [5f64, 0f64, 15f64, 5f64, 25f64, 0f64].into_iter().enumerate() {
        assert_abs_diff_eq!(solution.value(j), expected, epsilon = 1e-8);
    }

    let config = SolverConfig::default();
    match solve::<_, LargestCoefficient>(&program, &config).unwrap() {
        OptimizationResult::FiniteOptimum(other) => {
            assert_abs_diff_eq!(other.objective_value(), -125f64, epsilon = 1e-8);
        },
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}
