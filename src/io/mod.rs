//! # Reading of linear programs
//!
//! A linear program is read from two plain text files. The first contains the cost vector on a
//! single line. In the second, every line is a constraint: the coefficients, followed by the
//! right-hand side value. Values are separated by whitespace.
use std::fs;
use std::path::Path;

use crate::data::linear_program::canonical_form::LinearProgram;
use crate::io::error::{FileLocation, ImportError, ParseError};

pub mod error;

/// Import a problem from a cost file and a constraint file.
///
/// # Errors
///
/// When a file cannot be found or read, a value cannot be parsed, or the dimensions of the problem
/// don't agree, an error type is returned.
pub fn import(cost_path: &Path, constraint_path: &Path) -> Result<LinearProgram<f64>, ImportError> {
    let cost_text = fs::read_to_string(cost_path)?;
    let constraint_text = fs::read_to_string(constraint_path)?;

    parse(&cost_text, &constraint_text)
}

/// Parse a problem from the contents of a cost file and a constraint file.
///
/// # Arguments
///
/// * `cost_text`: The first non-empty line holds one cost coefficient per variable.
/// * `constraint_text`: Every non-empty line holds the coefficients of a constraint, followed by
/// its right-hand side value.
///
/// # Errors
///
/// A `ParseError` when a value is not a number or a file contains no values, and an
/// `InconsistencyError` when the dimensions don't agree.
pub fn parse(cost_text: &str, constraint_text: &str) -> Result<LinearProgram<f64>, ImportError> {
    let cost = match into_number_lines(cost_text).next() {
        Some((file_location, values)) => {
            let values = values?;
            if values.is_empty() {
                return Err(ParseError::with_file_location("No cost coefficients", file_location).into());
            }
            values
        },
        None => return Err(ParseError::new("The cost file contains no values").into()),
    };

    let mut constraints = Vec::new();
    let mut b = Vec::new();
    for (file_location, values) in into_number_lines(constraint_text) {
        let mut row = values?;
        match row.pop() {
            Some(rhs) if !row.is_empty() => {
                b.push(rhs);
                constraints.push(row);
            },
            _ => return Err(ParseError::with_file_location(
                "A constraint needs at least one coefficient and a right-hand side",
                file_location,
            ).into()),
        }
    }
    if constraints.is_empty() {
        return Err(ParseError::new("The constraint file contains no constraints").into());
    }

    Ok(LinearProgram::new(cost, constraints, b)?)
}

/// Split text into the numbers on each non-empty line.
///
/// # Return value
///
/// For each line that contains more than whitespace, the line number (counting from one) with the
/// line itself, and the values on that line.
fn into_number_lines(text: &str) -> impl Iterator<Item = (FileLocation<'_>, Result<Vec<f64>, ParseError>)> {
    text.lines()
        .enumerate()
        .map(|(number, line)| (number as u64 + 1u64, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|file_location| {
            let values = file_location.1.split_whitespace()
                .map(|atom| atom.parse::<f64>().map_err(|_| ParseError::with_file_location(
                    format!("Could not parse \"{}\" as a number", atom),
                    file_location,
                )))
                .collect();
            (file_location, values)
        })
}
