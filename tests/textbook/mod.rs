//! # Small textbook problems
//!
//! Each problem is stored in its own folder as a cost file `cT.txt` and a constraint file
//! `Ab.txt`, the format read by the binary.
use std::path::{Path, PathBuf};

use lp_tableau::data::linear_program::canonical_form::LinearProgram;
use lp_tableau::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem folders are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Read a problem, based on the problem name.
///
/// # Arguments
///
/// * `name`: Name of the folder containing the problem files.
fn read(name: &str) -> LinearProgram<f64> {
    let directory = problem_file_directory().join(name);
    import(&directory.join("cT.txt"), &directory.join("Ab.txt")).unwrap()
}
