//! # Error reporting for reading of linear programs
//!
//! A collection of enums and structures describing any problems encountered during reading and
//! parsing, and while checking the dimensions of a linear program.
use std::error::Error;
use std::fmt::{self, Display};
use std::io;

/// An `ImportError` is created when an error was encountered during IO or parsing.
///
/// It is the highest error in the io error hierarchy.
#[derive(Debug)]
pub enum ImportError {
    /// The file to read isn't found, or the reading of file couldn't start or was interrupted.
    IO(io::Error),
    /// Contents of the file could not be parsed into numbers.
    ///
    /// # Note
    ///
    /// If the dimensions of the linear program are inconsistent, that will not be represented with
    /// this error. This variant should only be created for syntactically incorrect files.
    Parse(ParseError),
    /// There is a logical inconsistency in the linear program described by the files.
    ///
    /// For example, a constraint row might have a different number of coefficients than there are
    /// cost coefficients.
    LinearProgram(InconsistencyError),
}

impl Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::IO(error) => error.fmt(f),
            ImportError::Parse(error) => error.fmt(f),
            ImportError::LinearProgram(error) => error.fmt(f),
        }
    }
}

impl Error for ImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImportError::IO(error) => Some(error),
            ImportError::Parse(error) => Some(error),
            ImportError::LinearProgram(error) => Some(error),
        }
    }
}

impl From<io::Error> for ImportError {
    fn from(error: io::Error) -> Self {
        ImportError::IO(error)
    }
}

impl From<ParseError> for ImportError {
    fn from(error: ParseError) -> Self {
        ImportError::Parse(error)
    }
}

impl From<InconsistencyError> for ImportError {
    fn from(error: InconsistencyError) -> Self {
        ImportError::LinearProgram(error)
    }
}

/// A `ParseError` represents all errors encountered during parsing.
///
/// It may hold a file location containing a line number and line, at which the error was caused.
#[derive(Debug)]
pub struct ParseError {
    description: String,
    file_location: Option<(u64, String)>,
}

impl ParseError {
    /// Create a new `ParseError` with only a description.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    pub fn new(description: impl Into<String>) -> ParseError {
        ParseError { description: description.into(), file_location: None }
    }

    /// Create a new `ParseError` instance with a `FileLocation` as a cause.
    ///
    /// # Arguments
    ///
    /// * `description`: What's wrong at the moment of creation.
    /// * `file_location`: A reference to a line number and line that caused the error.
    pub fn with_file_location(
        description: impl Into<String>,
        file_location: FileLocation,
    ) -> ParseError {
        let (line_number, line) = file_location;
        ParseError {
            description: description.into(),
            file_location: Some((line_number, line.to_string())),
        }
    }

    /// Line number (counting from one) at which the error was caused, if known.
    pub fn line_number(&self) -> Option<u64> {
        self.file_location.as_ref().map(|&(line_number, _)| line_number)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ParseError: {}", self.description)?;
        if let Some((line_number, line)) = &self.file_location {
            write!(f, "\n\tCaused at line\t{}:\t{}", line_number, line)?;
        }
        Ok(())
    }
}

impl Error for ParseError {}

/// A `FileLocation` references a line in the file by the line number of the file as originally
/// read from the disk. It contains a reference to the line itself.
pub type FileLocation<'a> = (u64, &'a str);

/// An `InconsistencyError` is created when the dimensions of a linear program don't agree.
///
/// This `Error` is not returned when the linear program is infeasible or unbounded. It is meant
/// only for descriptions of linear programs, and should not be used after the solving started.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InconsistencyError {
    description: String,
    row: Option<usize>,
}

impl InconsistencyError {
    /// Wrap a text in an `InconsistencyError`.
    ///
    /// # Arguments
    ///
    /// * `description`: A human-readable text meant for the end user.
    pub fn new(description: impl Into<String>) -> InconsistencyError {
        InconsistencyError { description: description.into(), row: None }
    }

    /// Wrap a text in an `InconsistencyError` that is caused by a specific constraint row.
    pub fn in_row(description: impl Into<String>, row: usize) -> InconsistencyError {
        InconsistencyError { description: description.into(), row: Some(row) }
    }

    /// Index of the offending constraint row, if the error can be attributed to a single row.
    pub fn row(&self) -> Option<usize> {
        self.row
    }
}

impl Display for InconsistencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.row {
            Some(row) => write!(f, "ProgramError: {} (constraint row {})", self.description, row),
            None => write!(f, "ProgramError: {}", self.description),
        }
    }
}

impl Error for InconsistencyError {}
