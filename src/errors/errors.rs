use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::VariableNotDefined { .. } => "VariableNotDefined",
            ErrorImpl::EmptySource => "EmptySource",
            ErrorImpl::InvalidConfig { .. } => "InvalidConfig",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` does not start any token, it was skipped",
                character
            )),
            ErrorImpl::VariableNotDefined { .. } => ErrorTip::None,
            ErrorImpl::EmptySource => {
                ErrorTip::Suggestion(String::from("Provide some source text to analyse"))
            }
            ErrorImpl::InvalidConfig { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.position.line, self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("{variable} is not defined")]
    VariableNotDefined { variable: String },
    #[error("source text is empty")]
    EmptySource,
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}
