//! Error types for Primer
//!
//! The variants mirror the fault classes of the language the tour imitates,
//! so a failed step reads the same way it would in a REPL.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrimerError {
    #[error("ValueError: {0}")]
    ValueError(String),

    #[error("KeyError: {0}")]
    KeyError(String),

    #[error("IndexError: {0}")]
    IndexError(String),

    #[error("TypeError: {0}")]
    TypeError(String),

    #[error("ZeroDivisionError: {0}")]
    ZeroDivision(String),

    #[error("NameError: name '{0}' is not defined")]
    NameError(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

pub type Result<T> = std::result::Result<T, PrimerError>;
