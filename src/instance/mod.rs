//! Plain-text instance files.
//!
//! The format is line-oriented with labeled fields; `#` starts a comment
//! line and blank lines are ignored. Values may wrap across lines:
//!
//! ```text
//! # 3 tasks on 2 machines
//! n: 3
//! m: 2
//! Pi: 5 3 8
//! Sij:
//! 0 2 1 3
//! 0 0 4 2
//! 0 1 0 5
//! 0 2 3 0
//! ```
//!
//! `Pi` lists one processing time per task. `Sij` is the full
//! `(n + 1) x (n + 1)` setup matrix in state indices, row 0 holding the
//! initial setups from the idle state.

pub mod generate;

use std::fmt::Write as _;
use std::path::Path;
use std::str::FromStr;

use crate::problem::{Problem, ProblemError};

/// Why an instance could not be read or written.
#[derive(Debug)]
pub enum InstanceError {
    /// Underlying file IO failure.
    Io(std::io::Error),
    /// A required field is absent or truncated.
    MissingField(&'static str),
    /// A field is present but unparseable.
    Malformed { field: &'static str, detail: String },
    /// The parsed data does not form a valid problem.
    Problem(ProblemError),
}

impl std::fmt::Display for InstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::Io(err) => write!(f, "instance io error: {}", err),
            InstanceError::MissingField(field) => {
                write!(f, "instance field '{}' is missing or truncated", field)
            }
            InstanceError::Malformed { field, detail } => {
                write!(f, "instance field '{}' is malformed: {}", field, detail)
            }
            InstanceError::Problem(err) => write!(f, "instance data invalid: {}", err),
        }
    }
}

impl std::error::Error for InstanceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstanceError::Io(err) => Some(err),
            InstanceError::Problem(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InstanceError {
    fn from(err: std::io::Error) -> Self {
        InstanceError::Io(err)
    }
}

impl From<ProblemError> for InstanceError {
    fn from(err: ProblemError) -> Self {
        InstanceError::Problem(err)
    }
}

/// Token cursor over the non-comment content of an instance file.
struct Reader<'a> {
    tokens: std::vec::IntoIter<&'a str>,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str) -> Self {
        let tokens: Vec<&str> = text
            .lines()
            .filter(|line| !line.trim_start().starts_with('#'))
            .flat_map(str::split_whitespace)
            .collect();
        Self {
            tokens: tokens.into_iter(),
        }
    }

    fn expect_label(&mut self, field: &'static str, label: &str) -> Result<(), InstanceError> {
        match self.tokens.next() {
            Some(token) if token == label => Ok(()),
            Some(token) => Err(InstanceError::Malformed {
                field,
                detail: format!("expected '{}', found '{}'", label, token),
            }),
            None => Err(InstanceError::MissingField(field)),
        }
    }

    fn number<T>(&mut self, field: &'static str) -> Result<T, InstanceError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.tokens.next() {
            Some(token) => token.parse().map_err(|err| InstanceError::Malformed {
                field,
                detail: format!("'{}': {}", token, err),
            }),
            None => Err(InstanceError::MissingField(field)),
        }
    }

    fn numbers<T>(&mut self, field: &'static str, count: usize) -> Result<Vec<T>, InstanceError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        (0..count).map(|_| self.number(field)).collect()
    }

    fn finish(mut self) -> Result<(), InstanceError> {
        match self.tokens.next() {
            Some(token) => Err(InstanceError::Malformed {
                field: "Sij",
                detail: format!("unexpected trailing data starting at '{}'", token),
            }),
            None => Ok(()),
        }
    }
}

/// Parses an instance from its text form.
pub fn parse_str(text: &str) -> Result<Problem, InstanceError> {
    let mut reader = Reader::new(text);
    reader.expect_label("n", "n:")?;
    let n: usize = reader.number("n")?;
    reader.expect_label("m", "m:")?;
    let m: usize = reader.number("m")?;
    reader.expect_label("Pi", "Pi:")?;
    let processing = reader.numbers::<u32>("Pi", n)?;
    reader.expect_label("Sij", "Sij:")?;
    let side = n + 1;
    let flat = reader.numbers::<u32>("Sij", side * side)?;
    reader.finish()?;

    let rows: Vec<Vec<u32>> = flat.chunks(side).map(<[u32]>::to_vec).collect();
    let setups = crate::problem::SetupMatrix::from_rows(n, rows)?;
    Ok(Problem::new(m, processing, setups)?)
}

/// Renders a problem in the instance text format.
pub fn to_text(problem: &Problem) -> String {
    let n = problem.num_tasks();
    let mut out = String::new();
    let _ = writeln!(out, "n: {}", n);
    let _ = writeln!(out, "m: {}", problem.num_machines());
    let times: Vec<String> = problem
        .tasks()
        .iter()
        .map(|task| task.processing_time.to_string())
        .collect();
    let _ = writeln!(out, "Pi: {}", times.join(" "));
    let _ = writeln!(out, "Sij:");
    for from in 0..=n {
        let row: Vec<String> = (0..=n)
            .map(|to| problem.setups().entry(from, to).to_string())
            .collect();
        let _ = writeln!(out, "{}", row.join(" "));
    }
    out
}

/// Reads and parses an instance file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Problem, InstanceError> {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text)
}

/// Writes a problem as an instance file, replacing any existing file.
pub fn write_file(path: impl AsRef<Path>, problem: &Problem) -> Result<(), InstanceError> {
    std::fs::write(path, to_text(problem))?;
    Ok(())
}
