#![deny(unsafe_code)]

use thiserror::Error;

/// Errors raised while resolving a case identifier into a canonical label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LabelError {
    /// Numeric case id outside the repository's [1, 99] range.
    #[error("case id {id} is out of range (valid ids are 1 to 99)")]
    OutOfRange { id: i64 },

    /// The case has two registered aneurysms and needs a sub-label.
    #[error("case id {id} has multiple aneurysms; choose one of {}", choices.join(", "))]
    Ambiguous { id: u32, choices: Vec<String> },

    /// Input does not match `C####[a|b]`.
    #[error("malformed case label '{input}' (expected 'C' followed by four digits, e.g. C0042 or C0028a)")]
    Malformed { input: String },
}

/// Result type for label resolution.
pub type Result<T> = std::result::Result<T, LabelError>;
