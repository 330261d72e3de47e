use approx::assert_abs_diff_eq;

use crate::algorithm::{OptimizationResult, SolveRelaxation};
use crate::algorithm::config::SolverConfig;
use crate::algorithm::error::SolveError;
use crate::algorithm::two_phase::solve;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, LargestCoefficient};
use crate::data::linear_program::canonical_form::LinearProgram;
use crate::data::linear_program::solution::Solution;
use crate::tests::{problem_1, problem_2};

fn finite_optimum(result: OptimizationResult<f64>) -> Solution<f64> {
    match result {
        OptimizationResult::FiniteOptimum(solution) => solution,
        other => panic!("Expected a finite optimum, got {:?}", other),
    }
}

/// The objective value is consistent with the solution, and the solution satisfies all constraints.
fn assert_optimality_conditions(program: &LinearProgram<f64>, solution: &Solution<f64>) {
    let original = &solution.values()[..program.nr_columns()];
    assert_abs_diff_eq!(program.objective_value(original), solution.objective_value(), epsilon = 1e-8);
    assert!(program.is_feasible(original, 1e-8));
    // Artificial variables are zero
    assert!(solution.values()[program.nr_columns()..].iter().all(|value| value.abs() < 1e-8));
}

#[test]
fn solve_relaxation_1() {
    let _ = env_logger::builder().is_test(true).try_init();

    let program = problem_1::create();
    let solution = finite_optimum(program.solve_relaxation(&SolverConfig::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 10f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(0), 2f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(1), 2f64, epsilon = 1e-10);
    assert_eq!(solution.basis(), &[0, 1]);
    assert_optimality_conditions(&program, &solution);
}

#[test]
fn solve_relaxation_2() {
    let program = problem_2::create();
    let solution = finite_optimum(program.solve_relaxation(&SolverConfig::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 5f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(0), 2f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(1), 0f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(2), 3f64, epsilon = 1e-10);
    // The artificial variable of the redundant row stays in the basis
    assert_eq!(solution.basis(), &[0, 2, 5]);
    assert_optimality_conditions(&program, &solution);
}

#[test]
fn single_variable() {
    let program = LinearProgram::new(vec![1f64], vec![vec![1f64]], vec![5f64]).unwrap();
    let solution = finite_optimum(program.solve_relaxation(&SolverConfig::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 5f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(0), 5f64, epsilon = 1e-10);
    assert_eq!(solution.nr_variables(), 2);
}

#[test]
fn infeasible() {
    let program = LinearProgram::new(
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64], vec![1f64, 1f64]],
        vec![1f64, 3f64],
    ).unwrap();
    let result = program.solve_relaxation(&SolverConfig::default());
    assert_eq!(result, Ok(OptimizationResult::Infeasible));
}

#[test]
fn unbounded() {
    let program = LinearProgram::new(
        vec![1f64, 0f64],
        vec![vec![1f64, -1f64]],
        vec![0f64],
    ).unwrap();
    let result = program.solve_relaxation(&SolverConfig::default());
    assert_eq!(result, Ok(OptimizationResult::Unbounded { column: 1 }));
}

#[test]
fn negative_right_hand_side() {
    // x_0 - x_1 = -1, x_0 + x_1 = 3 has the single solution (1, 2)
    let program = LinearProgram::new(
        vec![1f64, 1f64],
        vec![vec![1f64, -1f64], vec![1f64, 1f64]],
        vec![-1f64, 3f64],
    ).unwrap();
    let solution = finite_optimum(program.solve_relaxation(&SolverConfig::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 3f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(0), 1f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(1), 2f64, epsilon = 1e-10);
    assert_optimality_conditions(&program, &solution);
}

#[test]
fn pivot_rules_agree() {
    let config = SolverConfig::default();
    for program in [problem_1::create(), problem_2::create()] {
        let first = finite_optimum(solve::<_, FirstProfitable>(&program, &config).unwrap());
        let largest = finite_optimum(solve::<_, LargestCoefficient>(&program, &config).unwrap());
        assert_abs_diff_eq!(first.objective_value(), largest.objective_value(), epsilon = 1e-10);
    }
}

#[test]
fn inequality_form() {
    // maximize 2 x_0 + 3 x_1 subject to x_0 + x_1 <= 4, x_0 + 3 x_1 <= 6, with slacks x_2 and x_3
    let program = LinearProgram::new(
        vec![2f64, 3f64, 0f64, 0f64],
        vec![vec![1f64, 1f64, 1f64, 0f64], vec![1f64, 3f64, 0f64, 1f64]],
        vec![4f64, 6f64],
    ).unwrap();
    let solution = finite_optimum(program.solve_relaxation(&SolverConfig::default()).unwrap());

    assert_abs_diff_eq!(solution.objective_value(), 9f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(0), 3f64, epsilon = 1e-10);
    assert_abs_diff_eq!(solution.value(1), 1f64, epsilon = 1e-10);
    assert_optimality_conditions(&program, &solution);
}

#[test]
fn phase_one_bounded_below_tolerance() {
    // Each artificial variable bounds x_0 through a coefficient of 5e-11, below the tolerance,
    // while their sum makes x_0 profitable in the auxiliary problem
    let program = LinearProgram::new(vec![1f64], vec![vec![5e-11f64]; 3], vec![1f64; 3]).unwrap();
    let result = program.solve_relaxation(&SolverConfig::default());
    assert_eq!(result, Err(SolveError::NumericalInstability { column: 0 }));
}
