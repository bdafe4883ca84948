//! Unified error types for the intersection controller.
//!
//! Every failure this crate can report happens before the control loop
//! starts: a malformed table, a bad configuration value, or a port that
//! refused to initialise.  Once `run_forever` is entered there is no error
//! channel left.  All variants are `Copy`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible startup operation funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The state table is malformed.
    Table(TableError),
    /// A signal or detector port failed to initialise.
    Init(InitError),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table(e) => write!(f, "state table: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Table errors
// ---------------------------------------------------------------------------

/// Configuration errors in the state table, detected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// A table must hold at least one state.
    Empty,
    /// More rows than the fixed-capacity arena can hold.
    TooManyStates { count: usize, max: usize },
    /// A transition entry names a state that does not exist.
    DanglingTransition {
        state: usize,
        input: usize,
        target: usize,
    },
    /// The requested start state is outside the table.
    InvalidStart { index: usize, len: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "table has no states"),
            Self::TooManyStates { count, max } => {
                write!(f, "{count} states exceeds capacity of {max}")
            }
            Self::DanglingTransition {
                state,
                input,
                target,
            } => write!(
                f,
                "state {state} input 0b{input:03b} points at missing state {target}"
            ),
            Self::InvalidStart { index, len } => {
                write!(f, "start state {index} outside table of {len} states")
            }
        }
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

// ---------------------------------------------------------------------------
// Port initialisation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    /// An output line could not be driven to its safe level.
    Outputs(&'static str),
    /// An input line could not be sampled.
    Inputs(&'static str),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Outputs(msg) => write!(f, "outputs: {msg}"),
            Self::Inputs(msg) => write!(f, "inputs: {msg}"),
        }
    }
}

impl From<InitError> for Error {
    fn from(e: InitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
    /// A stored config blob could not be decoded.
    Corrupted,
    /// The config could not be encoded into a blob.
    EncodeFailed,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {msg}"),
            Self::Corrupted => write!(f, "stored config is corrupted"),
            Self::EncodeFailed => write!(f, "config could not be encoded"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
