//! Error types
//!
//! Each failure class of the harness has its own enum so callers can tell a
//! malformed request from a missing problem, a broken version, or a failure
//! raised by the solution itself.

use crate::{ProblemId, VersionId};
use std::path::PathBuf;
use thiserror::Error;

/// Invalid range expression such as `1..` or `abc`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A segment does not match `N` or `N..M`
    #[error(
        "malformed range string `{segment}` - must be of the form x[..y] and can be comma separated"
    )]
    Malformed {
        /// The offending segment, as written
        segment: String,
    },
    /// A bound does not fit the identifier type
    #[error("range bound `{value}` is too large")]
    Overflow {
        /// The offending number, as written
        value: String,
    },
    /// The expression selects more than `limit` numbers
    #[error("range `{segment}` selects more than {limit} numbers")]
    TooLarge {
        /// The segment that crossed the limit, as written
        segment: String,
        /// Most numbers one expression may select
        limit: usize,
    },
}

/// A discovered version whose entry point cannot be obtained
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolutionError {
    /// The unit exists but nothing registered a `solution` for it
    #[error("{unit} exists but registers no `solution` entry point for problem {problem}")]
    MissingEntryPoint {
        /// Problem number
        problem: ProblemId,
        /// Version number
        version: VersionId,
        /// Unit name, e.g. `version003`
        unit: String,
    },
    /// More than one `solution` claims the same problem and version
    #[error("{unit} of problem {problem} is registered {count} times")]
    Ambiguous {
        /// Problem number
        problem: ProblemId,
        /// Version number
        version: VersionId,
        /// Unit name
        unit: String,
        /// Number of registrations found
        count: usize,
    },
    /// The registered entry point lives under a different problem's module
    #[error("{unit} registered for problem {problem} is defined in `{module}`")]
    ProblemMismatch {
        /// Problem number
        problem: ProblemId,
        /// Version number
        version: VersionId,
        /// Unit name
        unit: String,
        /// Module path of the registration
        module: String,
    },
}

/// Failure raised by a solution while computing its answer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// An argument was required but not supplied
    #[error("missing argument `--{name}`")]
    MissingArgument {
        /// Argument name
        name: String,
    },
    /// An argument could not be converted or is out of range
    #[error("invalid argument `--{name}`: {reason}")]
    InvalidArgument {
        /// Argument name
        name: String,
        /// Human-readable cause
        reason: String,
    },
    /// The problem needs a resource bundle that was not loaded or has the wrong shape
    #[error("missing resource: {0}")]
    MissingResource(String),
    /// The search space was exhausted without finding an answer
    #[error("no solution found")]
    NoSolution,
    /// Any other failure
    #[error("{0}")]
    Other(String),
}

/// Problem arguments that do not fit the problem's declared parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// `--name` is not declared by the problem
    #[error("unknown argument `--{name}`")]
    Unknown {
        /// Argument name
        name: String,
    },
    /// `--name` given more than once
    #[error("argument `--{name}` given more than once")]
    Duplicate {
        /// Argument name
        name: String,
    },
    /// `--name` given without a value
    #[error("argument `--{name}` expects a value")]
    MissingValue {
        /// Argument name
        name: String,
    },
    /// A required argument was not given
    #[error("missing required argument `--{name}`")]
    Missing {
        /// Argument name
        name: String,
    },
    /// A token that starts with `--` but carries no usable name
    #[error("malformed argument `{token}`")]
    Invalid {
        /// The token as written
        token: String,
    },
    /// A value without a preceding `--name`
    #[error("positional argument `{value}` not allowed")]
    Positional {
        /// The stray value
        value: String,
    },
}

/// Failure loading a problem's resource file
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The file exists but cannot be read
    #[error("failed to read resource {path}: {source}")]
    Io {
        /// Resource file path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// The file has no kind header
    #[error("resource {path} is empty")]
    Empty {
        /// Resource file path
        path: PathBuf,
    },
    /// The kind header is not one of `integer`, `float`, `matrix`, `string`
    #[error("resource {path} has unknown kind `{kind}`")]
    UnknownKind {
        /// Resource file path
        path: PathBuf,
        /// The header as written
        kind: String,
    },
    /// The payload does not match its kind
    #[error("resource {path}, line {line}: {reason}")]
    Parse {
        /// Resource file path
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// Human-readable cause
        reason: String,
    },
}

/// Errors that abort a whole invocation
#[derive(Debug, Error)]
pub enum CoreError {
    /// No storage entry matches the requested problem
    #[error("Problem {number} not implemented")]
    ProblemNotImplemented {
        /// Problem number
        problem: ProblemId,
        /// Zero-padded problem number used in messages
        number: String,
    },
    /// Scanning the solution store failed
    #[error("failed to scan {path}: {source}")]
    Io {
        /// Directory being scanned
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Malformed problem or version selector
    #[error(transparent)]
    Range(#[from] RangeError),
    /// Problem arguments do not match the problem's parameters
    #[error(transparent)]
    Args(#[from] ArgsError),
    /// The problem's resource file is unusable
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
