//! The success/failure sum type and its combinators.
//!
//! `Outcome<S, F>` is the result of a fallible computation: either a
//! `Success` holding a value or a `Failure` holding a reason. It is
//! "success-biased": `map`, `flat_map`, `filter` and friends act on the
//! success value and pass failures through untouched.
//!
//! # Outcome vs Result
//!
//! `Outcome` deliberately mirrors `std::result::Result`, and converts to and
//! from it losslessly. It adds the combinators needed to work with failure
//! *reasons* as first-class values:
//!
//! - `try_map`/`try_peek` catch an error raised by the supplied closure and
//!   replace it with a reason chosen by the caller
//! - `recover`, `or` and `swap` move between the two variants
//! - `filter` turns an unwanted success into a failure
//!
//! # Absent values
//!
//! A success value may itself be absent. Model this with `S = Option<T>`:
//! `Success(None)` is still a success, but [`Outcome::present`] and
//! [`Outcome::present_iter`] report it as "no value".
//!
//! # Examples
//!
//! ```rust
//! use outcome::Outcome;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, &'static str> {
//!     Outcome::of(|| raw.parse::<u16>(), "not a number")
//!         .filter(|port| *port >= 1024, "privileged port")
//! }
//!
//! assert_eq!(parse_port("8080"), Outcome::Success(8080));
//! assert_eq!(parse_port("80"), Outcome::Failure("privileged port"));
//! assert_eq!(parse_port("http"), Outcome::Failure("not a number"));
//!
//! let port = parse_port("80").recover(|_| 8080);
//! assert_eq!(port, Outcome::Success(8080));
//! ```

use std::any::{type_name, Any};
use std::fmt;

use crate::error::FlattenError;
use crate::throwing::{trace_caught, AnyThrowingConsumer, AnyThrowingFunction, Throwable};

/// The outcome of a fallible computation: a `Success(S)` or a `Failure(F)`.
///
/// An outcome is exactly one variant for its entire lifetime. Combinators
/// consume `self` and return a new outcome; nothing is mutated in place.
/// Equality, ordering, hashing and `Debug` are structural on the payload.
///
/// # Example
///
/// ```rust
/// use outcome::Outcome;
///
/// let success: Outcome<i32, &str> = Outcome::success(12);
/// let failure: Outcome<i32, &str> = Outcome::failure("missing");
///
/// assert_eq!(success.map(|v| v * 2), Outcome::Success(24));
/// assert_eq!(failure.map(|v| v * 2), Outcome::Failure("missing"));
///
/// let described = failure.fold(|r| format!("failed: {}", r), |v| v.to_string());
/// assert_eq!(described, "failed: missing");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome<S, F> {
    /// The computation succeeded with a value.
    Success(S),
    /// The computation failed with a reason.
    Failure(F),
}

impl<S, F> Outcome<S, F> {
    // ========== Constructors ==========

    /// Create a `Success`.
    #[inline]
    pub fn success(value: S) -> Self {
        Outcome::Success(value)
    }

    /// Create a `Failure`.
    #[inline]
    pub fn failure(reason: F) -> Self {
        Outcome::Failure(reason)
    }

    // ========== Predicates ==========

    /// Returns `true` if this is a `Success`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert!(Outcome::<i32, ()>::success(12).is_success());
    /// assert!(!Outcome::<i32, ()>::failure(()).is_success());
    /// ```
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    // ========== Extractors ==========

    /// The success value, if any.
    #[inline]
    pub fn value(&self) -> Option<&S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure reason, if any.
    #[inline]
    pub fn reason(&self) -> Option<&F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(reason) => Some(reason),
        }
    }

    /// Returns the success value, consuming self.
    #[inline]
    pub fn into_value(self) -> Option<S> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the failure reason, consuming self.
    #[inline]
    pub fn into_reason(self) -> Option<F> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(reason) => Some(reason),
        }
    }

    /// Convert to `Outcome<&S, &F>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Convert to `Outcome<&mut S, &mut F>`.
    #[inline]
    pub fn as_mut(&mut self) -> Outcome<&mut S, &mut F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Return the success value or a default.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::success(12).value_or(0), 12);
    /// assert_eq!(Outcome::<i32, &str>::failure("gone").value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: S) -> S {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Return the success value or compute it from the reason.
    #[inline]
    pub fn value_or_else<G>(self, function: G) -> S
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(reason) => function(reason),
        }
    }

    // ========== Transformations ==========

    /// Transform the success value, passing failures through unchanged.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(12);
    /// assert_eq!(success.map(|v| format!("{} * 2 -> {}", v, v * 2)),
    ///            Outcome::Success("12 * 2 -> 24".to_string()));
    /// ```
    #[inline]
    pub fn map<N, G>(self, function: G) -> Outcome<N, F>
    where
        G: FnOnce(S) -> N,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(function(value)),
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Transform the failure reason, passing successes through unchanged.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::failure(21);
    /// assert_eq!(failure.map_failure(|r| r * 2), Outcome::Failure(42));
    /// ```
    #[inline]
    pub fn map_failure<R, G>(self, function: G) -> Outcome<S, R>
    where
        G: FnOnce(F) -> R,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(reason) => Outcome::Failure(function(reason)),
        }
    }

    /// Transform the success value with a function that may raise an error.
    ///
    /// If the function raises, the error is dropped and the outcome becomes
    /// `Failure(on_error)`. Failures pass through and the function is not
    /// run.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let raw: Outcome<&str, &str> = Outcome::success("12");
    /// assert_eq!(raw.try_map(|s| s.parse::<i32>(), "not a number"), Outcome::Success(12));
    ///
    /// let raw: Outcome<&str, &str> = Outcome::success("twelve");
    /// assert_eq!(raw.try_map(|s| s.parse::<i32>(), "not a number"),
    ///            Outcome::Failure("not a number"));
    /// ```
    pub fn try_map<N, G, E>(self, function: G, on_error: F) -> Outcome<N, F>
    where
        G: FnOnce(S) -> Result<N, E>,
        E: Into<Throwable>,
    {
        match self {
            Outcome::Success(value) => match function.apply_any(value) {
                Ok(mapped) => Outcome::Success(mapped),
                Err(error) => {
                    trace_caught("try_map", &error);
                    Outcome::Failure(on_error)
                }
            },
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Inspect the success value, returning self unchanged.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome: Outcome<i32, ()> = Outcome::success(12);
    /// let outcome = outcome.peek(|v| seen = Some(*v));
    /// assert_eq!(seen, Some(12));
    /// assert_eq!(outcome, Outcome::Success(12));
    /// ```
    #[inline]
    pub fn peek<C>(self, consumer: C) -> Self
    where
        C: FnOnce(&S),
    {
        if let Outcome::Success(value) = &self {
            consumer(value);
        }
        self
    }

    /// Inspect the success value with a consumer that may raise an error.
    ///
    /// If the consumer raises, the outcome becomes `Failure(on_error)`.
    /// Failures pass through and the consumer is not run.
    pub fn try_peek<C, E>(self, consumer: C, on_error: F) -> Self
    where
        C: FnOnce(&S) -> Result<(), E>,
        E: Into<Throwable>,
    {
        let raised = match &self {
            Outcome::Success(value) => consumer.accept_any(value).err(),
            Outcome::Failure(_) => None,
        };
        match raised {
            Some(error) => {
                trace_caught("try_peek", &error);
                Outcome::Failure(on_error)
            }
            None => self,
        }
    }

    /// Turn a failure into a success by computing a value from the reason.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::failure(21);
    /// assert_eq!(failure.recover(|r| r * 2), Outcome::Success(42));
    ///
    /// let success: Outcome<i32, i32> = Outcome::success(12);
    /// assert_eq!(success.recover(|r| r * 2), Outcome::Success(12));
    /// ```
    #[inline]
    pub fn recover<G>(self, function: G) -> Self
    where
        G: FnOnce(F) -> S,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(reason) => Outcome::Success(function(reason)),
        }
    }

    /// Swap the variants: a success value becomes a failure reason and vice
    /// versa.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, &str> = Outcome::success(12);
    /// assert_eq!(success.swap(), Outcome::Failure(12));
    /// assert_eq!(success.swap().swap(), success);
    /// ```
    #[inline]
    pub fn swap(self) -> Outcome<F, S> {
        match self {
            Outcome::Success(value) => Outcome::Failure(value),
            Outcome::Failure(reason) => Outcome::Success(reason),
        }
    }

    // ========== Folding ==========

    /// Fold both variants into a single value.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::success(12);
    /// assert_eq!(success.fold(|r| r + 9, |v| v * 2), 24);
    /// ```
    #[inline]
    pub fn fold<T, G, H>(self, on_failure: G, on_success: H) -> T
    where
        G: FnOnce(F) -> T,
        H: FnOnce(S) -> T,
    {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(reason) => on_failure(reason),
        }
    }

    // ========== Monadic Operations ==========

    /// Chain a computation on the success value.
    ///
    /// The outcome returned by `function` is returned as is.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::success(12);
    /// assert_eq!(success.flat_map(|v| Outcome::<i32, i32>::success(v * 2)), Outcome::Success(24));
    /// assert_eq!(success.flat_map(|v| Outcome::<i32, i32>::failure(v + 9)), Outcome::Failure(21));
    /// ```
    #[inline]
    pub fn flat_map<N, G>(self, function: G) -> Outcome<N, F>
    where
        G: FnOnce(S) -> Outcome<N, F>,
    {
        match self {
            Outcome::Success(value) => function(value),
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }

    /// Keep a success only if `predicate` accepts its value.
    ///
    /// A rejected success becomes `Failure(reason)`. Failures are returned
    /// unchanged and the predicate is not run.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, i32> = Outcome::success(12);
    /// assert_eq!(success.filter(|v| *v == 12, 21), Outcome::Success(12));
    /// assert_eq!(success.filter(|v| *v != 12, 21), Outcome::Failure(21));
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P, reason: F) -> Self
    where
        P: FnOnce(&S) -> bool,
    {
        match self {
            Outcome::Success(value) if predicate(&value) => Outcome::Success(value),
            Outcome::Success(_) => Outcome::Failure(reason),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Return self if it is a success, otherwise the outcome produced by
    /// `supplier`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let failure: Outcome<i32, i32> = Outcome::failure(21);
    /// assert_eq!(failure.or(|| Outcome::success(24)), Outcome::Success(24));
    ///
    /// let success: Outcome<i32, i32> = Outcome::success(12);
    /// assert_eq!(success.or(|| Outcome::success(24)), Outcome::Success(12));
    /// ```
    #[inline]
    pub fn or<G>(self, supplier: G) -> Self
    where
        G: FnOnce() -> Self,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(_) => supplier(),
        }
    }

    /// Flatten a payload that is itself an outcome, checking its types at
    /// runtime.
    ///
    /// If the held value (or reason) is an `Outcome<V, R>`, that nested
    /// outcome is returned. Otherwise self is returned re-typed, which
    /// requires the held value to be a `V` (or the held reason an `R`).
    ///
    /// # Errors
    ///
    /// This operation trusts the caller's choice of `V` and `R`. When the
    /// held payload is neither an `Outcome<V, R>` nor of the matching
    /// payload type, [`FlattenError::TypeMismatch`] is returned. Prefer
    /// [`Outcome::flatten`] whenever the nesting is known statically.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, i32>, i32> = Outcome::success(Outcome::failure(21));
    /// assert_eq!(nested.unsafe_flatten::<i32, i32>(), Ok(Outcome::Failure(21)));
    ///
    /// let flat: Outcome<i32, i32> = Outcome::success(12);
    /// assert_eq!(flat.unsafe_flatten::<i32, i32>(), Ok(Outcome::Success(12)));
    ///
    /// let wrong: Outcome<String, i32> = Outcome::success("12".to_string());
    /// assert!(wrong.unsafe_flatten::<i32, i32>().is_err());
    /// ```
    pub fn unsafe_flatten<V, R>(self) -> Result<Outcome<V, R>, FlattenError>
    where
        S: 'static,
        F: 'static,
        V: 'static,
        R: 'static,
    {
        match self {
            Outcome::Success(value) => {
                let payload: Box<dyn Any> = Box::new(value);
                match payload.downcast::<Outcome<V, R>>() {
                    Ok(nested) => Ok(*nested),
                    Err(payload) => payload
                        .downcast::<V>()
                        .map(|value| Outcome::Success(*value))
                        .map_err(|_| flatten_mismatch::<S, V, R>("Success")),
                }
            }
            Outcome::Failure(reason) => {
                let payload: Box<dyn Any> = Box::new(reason);
                match payload.downcast::<Outcome<V, R>>() {
                    Ok(nested) => Ok(*nested),
                    Err(payload) => payload
                        .downcast::<R>()
                        .map(|reason| Outcome::Failure(*reason))
                        .map_err(|_| flatten_mismatch::<F, V, R>("Failure")),
                }
            }
        }
    }

    // ========== Conversions ==========

    /// The success value as an `Option`.
    ///
    /// For absent values stored as `S = Option<T>`, see [`Outcome::present`].
    #[inline]
    pub fn to_optional(self) -> Option<S> {
        self.into_value()
    }

    /// A sequence holding the success value, or nothing for a failure.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let success: Outcome<i32, ()> = Outcome::success(12);
    /// assert_eq!(success.stream().collect::<Vec<_>>(), vec![12]);
    ///
    /// let failure: Outcome<i32, ()> = Outcome::failure(());
    /// assert_eq!(failure.stream().count(), 0);
    /// ```
    #[inline]
    pub fn stream(self) -> std::option::IntoIter<S> {
        self.into_value().into_iter()
    }

    /// Iterate over a borrowed success value.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.value().into_iter()
    }

    /// Convert to `Result` (Success becomes Ok, Failure becomes Err).
    #[inline]
    pub fn into_result(self) -> Result<S, F> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(reason) => Err(reason),
        }
    }

    /// Create from `Result` (Ok becomes Success, Err becomes Failure).
    #[inline]
    pub fn from_result(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(reason) => Outcome::Failure(reason),
        }
    }
}

fn flatten_mismatch<Held, V, R>(variant: &'static str) -> FlattenError {
    let error = FlattenError::TypeMismatch {
        variant,
        expected: type_name::<Outcome<V, R>>(),
        found: type_name::<Held>(),
    };
    #[cfg(feature = "tracing")]
    tracing::warn!("unsafe_flatten failed: {}", error);
    error
}

// Flatten for a success value that is itself an outcome
impl<S, F> Outcome<Outcome<S, F>, F> {
    /// Flatten a nested outcome.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let nested: Outcome<Outcome<i32, &str>, &str> = Outcome::success(Outcome::success(12));
    /// assert_eq!(nested.flatten(), Outcome::Success(12));
    ///
    /// let outer: Outcome<Outcome<i32, &str>, &str> = Outcome::failure("outer");
    /// assert_eq!(outer.flatten(), Outcome::Failure("outer"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<S, F> {
        match self {
            Outcome::Success(inner) => inner,
            Outcome::Failure(reason) => Outcome::Failure(reason),
        }
    }
}

// A success whose value may be absent
impl<T, F> Outcome<Option<T>, F> {
    /// The success value if it is present.
    ///
    /// `Success(None)` and any failure both yield `None`.
    ///
    /// ```rust
    /// use outcome::Outcome;
    ///
    /// let absent: Outcome<Option<i32>, ()> = Outcome::success(None);
    /// assert!(absent.is_success());
    /// assert_eq!(absent.present(), None);
    /// ```
    #[inline]
    pub fn present(self) -> Option<T> {
        self.into_value().flatten()
    }

    /// A sequence of zero or one present success values.
    #[inline]
    pub fn present_iter(self) -> std::option::IntoIter<T> {
        self.present().into_iter()
    }
}

// ========== Trait Implementations ==========

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        Outcome::from_result(result)
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        outcome.into_result()
    }
}

impl<S, F> IntoIterator for Outcome<S, F> {
    type Item = S;
    type IntoIter = std::option::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.stream()
    }
}

impl<'a, S, F> IntoIterator for &'a Outcome<S, F> {
    type Item = &'a S;
    type IntoIter = std::option::IntoIter<&'a S>;

    fn into_iter(self) -> Self::IntoIter {
        self.value().into_iter()
    }
}

impl<S: fmt::Display, F: fmt::Display> fmt::Display for Outcome<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success(value) => write!(f, "Success{{value={}}}", value),
            Outcome::Failure(reason) => write!(f, "Failure{{reason={}}}", reason),
        }
    }
}

#[cfg(feature = "try_trait")]
mod try_impl {
    use super::Outcome;
    use std::convert::Infallible;
    use std::ops::{ControlFlow, FromResidual, Try};

    impl<S, F> Try for Outcome<S, F> {
        type Output = S;
        type Residual = Outcome<Infallible, F>;

        fn from_output(output: S) -> Self {
            Outcome::Success(output)
        }

        fn branch(self) -> ControlFlow<Self::Residual, S> {
            match self {
                Outcome::Success(value) => ControlFlow::Continue(value),
                Outcome::Failure(reason) => ControlFlow::Break(Outcome::Failure(reason)),
            }
        }
    }

    impl<S, F, G: From<F>> FromResidual<Outcome<Infallible, F>> for Outcome<S, G> {
        fn from_residual(residual: Outcome<Infallible, F>) -> Self {
            match residual {
                Outcome::Success(never) => match never {},
                Outcome::Failure(reason) => Outcome::Failure(G::from(reason)),
            }
        }
    }

    impl<S, F, E: Into<F>> FromResidual<Result<Infallible, E>> for Outcome<S, F> {
        fn from_residual(residual: Result<Infallible, E>) -> Self {
            match residual {
                Ok(never) => match never {},
                Err(error) => Outcome::Failure(error.into()),
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_variant_predicates(x: i32) {
            let success: Outcome<i32, i32> = Outcome::success(x);
            prop_assert!(success.is_success() && !success.is_failure());

            let failure: Outcome<i32, i32> = Outcome::failure(x);
            prop_assert!(failure.is_failure() && !failure.is_success());
        }

        #[test]
        fn prop_swap_involution(x: i32) {
            let outcome: Outcome<i32, i32> = Outcome::success(x);
            prop_assert_eq!(outcome.swap().swap(), outcome);

            let outcome: Outcome<i32, i32> = Outcome::failure(x);
            prop_assert_eq!(outcome.swap().swap(), outcome);
        }

        #[test]
        fn prop_functor_identity(x: i32) {
            let outcome: Outcome<i32, ()> = Outcome::success(x);
            prop_assert_eq!(outcome.map(|v| v), Outcome::Success(x));

            let outcome: Outcome<(), i32> = Outcome::failure(x);
            prop_assert_eq!(outcome.map_failure(|r| r), Outcome::Failure(x));
        }

        #[test]
        fn prop_functor_composition(x: i32) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let outcome: Outcome<i32, ()> = Outcome::success(x);
            prop_assert_eq!(outcome.map(f).map(g), outcome.map(|v| g(f(v))));

            let outcome: Outcome<(), i32> = Outcome::failure(x);
            prop_assert_eq!(
                outcome.map_failure(f).map_failure(g),
                outcome.map_failure(|r| g(f(r)))
            );
        }

        #[test]
        fn prop_fold_selects_variant(x: i32, y: i32) {
            let success: Outcome<i32, i32> = Outcome::success(x);
            prop_assert_eq!(success.fold(|_| None, Some), Some(x));

            let failure: Outcome<i32, i32> = Outcome::failure(y);
            prop_assert_eq!(failure.fold(Some, |_| None), Some(y));
        }

        #[test]
        fn prop_filter_failure_untouched(x: i32, keep: bool) {
            let failure: Outcome<i32, i32> = Outcome::failure(x);
            prop_assert_eq!(failure.filter(|_| keep, -1), Outcome::Failure(x));
        }

        #[test]
        fn prop_result_roundtrip(x: i32) {
            let outcome: Outcome<i32, ()> = Outcome::success(x);
            let result: Result<i32, ()> = outcome.into();
            prop_assert_eq!(Outcome::from(result), outcome);
        }
    }
}
