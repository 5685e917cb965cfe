//! Error taxonomy for the scan phase.
//!
//! Only parsing can fail. Resolution is a pure query over an already-built
//! registry and always produces an aggregate, so it has no error type.

use thiserror::Error;

/// Errors produced while turning a configuration line into an [`Instruction`].
///
/// The engine does not decide what to do with a bad line: the scan driver in
/// `api.rs` skips and logs by default, but callers composing
/// [`Instruction::from_line`] directly may fail fast instead.
///
/// [`Instruction`]: crate::Instruction
/// [`Instruction::from_line`]: crate::Instruction::from_line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line cannot be tokenized or is structurally incomplete:
    /// unterminated quoted segment, dangling escape, empty after trimming,
    /// or a directive missing a required payload token.
    #[error("malformed line: {reason}")]
    MalformedLine { reason: String },

    /// The line tokenized cleanly but its kind keyword is not one of
    /// `store`, `support`, `link`, `include`.
    #[error("unknown instruction kind `{0}`")]
    UnknownInstructionKind(String),
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ParseError::MalformedLine { reason: reason.into() }
    }
}
