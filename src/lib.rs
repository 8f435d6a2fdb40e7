//! # Outcome
//!
//! A success/failure sum type with a closed combinator algebra, and
//! factories that turn raised errors into typed failure reasons.
//!
//! ## Overview
//!
//! - [`Outcome`] is exactly one of `Success(S)` or `Failure(F)`. Its
//!   combinators (`map`, `flat_map`, `filter`, `recover`, `swap`, ...) never
//!   mutate and always return a valid outcome.
//! - [`Outcome::of`], [`Outcome::of_failure`] and [`Outcome::of_classified`]
//!   run a fallible computation and convert a raised error into a failure
//!   reason. Classification goes through an insertion-ordered
//!   [`ReasonMap`](classify::ReasonMap), so it is deterministic.
//! - [`FailureReason`] lets failure payloads describe themselves;
//!   [`Unexpected`] wraps errors nobody planned for.
//!
//! ## Quick Example
//!
//! ```rust
//! use outcome::classify::{ErrorClass, ReasonMap};
//! use outcome::Outcome;
//! use std::num::ParseIntError;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Reason {
//!     NotANumber,
//!     Negative,
//!     Unknown,
//! }
//!
//! let reasons = ReasonMap::new().with(ErrorClass::of::<ParseIntError>(), Reason::NotANumber);
//!
//! let parse = |raw: &str| {
//!     Outcome::of_classified(|| raw.parse::<i64>(), &reasons, Reason::Unknown)
//!         .filter(|n| *n >= 0, Reason::Negative)
//! };
//!
//! assert_eq!(parse("42"), Outcome::Success(42));
//! assert_eq!(parse("-1"), Outcome::Failure(Reason::Negative));
//! assert_eq!(parse("forty-two"), Outcome::Failure(Reason::NotANumber));
//!
//! let total = parse("x").recover(|_| 0).map(|n| n + 1);
//! assert_eq!(total, Outcome::Success(1));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![cfg_attr(feature = "try_trait", feature(try_trait_v2))]

pub mod classify;
mod constructors;
pub mod error;
pub mod outcome;
pub mod reason;
pub mod testing;
pub mod throwing;
pub mod unexpected;

// Re-exports
pub use classify::{ErrorClass, ReasonMap};
pub use error::FlattenError;
pub use outcome::Outcome;
pub use reason::{Describable, FailureReason, FailureThrowable};
pub use throwing::Throwable;
pub use unexpected::Unexpected;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::classify::{ErrorClass, ReasonMap};
    pub use crate::error::FlattenError;
    pub use crate::outcome::Outcome;
    pub use crate::reason::{Describable, FailureReason, FailureThrowable};
    pub use crate::throwing::Throwable;
    pub use crate::unexpected::Unexpected;
}
