//! Errors raised by the algebra itself.
//!
//! Almost every operation on [`Outcome`](crate::Outcome) is total, so the
//! taxonomy is small: the only operation that can fail on its own is
//! [`Outcome::unsafe_flatten`](crate::Outcome::unsafe_flatten), which
//! reinterprets a payload at runtime.

use thiserror::Error;

/// Error returned by [`Outcome::unsafe_flatten`](crate::Outcome::unsafe_flatten).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    /// The held payload is neither a nested outcome of the requested type
    /// nor a value of the requested payload type.
    #[error("cannot flatten {variant} payload of type `{found}` into `{expected}`")]
    TypeMismatch {
        /// Variant holding the payload, `"Success"` or `"Failure"`.
        variant: &'static str,
        /// The outcome type requested by the caller.
        expected: &'static str,
        /// The type actually held.
        found: &'static str,
    },
}
