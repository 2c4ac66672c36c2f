use thiserror::Error;

/// Errors raised while building table content.
///
/// Every check runs before the table is touched, so a failed call leaves the
/// table exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: &'static str,
    },

    #[error("Argument '{argument}' out of range: {reason}")]
    OutOfRange {
        argument: &'static str,
        reason: String,
    },

    #[error("Arithmetic overflow while summing '{argument}'")]
    Overflow { argument: &'static str },
}
