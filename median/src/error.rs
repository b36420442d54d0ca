//! Error types.

use std::fmt::{Display, Formatter};

pub type MaxResult<T> = Result<T, MaxError>;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MaxError {
    Generic,
    InvalidPtr,
    Duplicate,
    OutOfMem,
    /// The class for a type was used before `register()` was called.
    NotRegistered,
}

impl Display for MaxError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MaxError::Generic => write!(f, "generic error"),
            MaxError::InvalidPtr => write!(f, "invalid pointer"),
            MaxError::Duplicate => write!(f, "duplicate"),
            MaxError::OutOfMem => write!(f, "out of memory"),
            MaxError::NotRegistered => write!(f, "class not registered"),
        }
    }
}

impl std::error::Error for MaxError {}
