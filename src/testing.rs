//! Testing utilities for code producing outcomes.
//!
//! This module provides assertion macros for [`Outcome`](crate::Outcome)
//! values and, with the `proptest` feature, an `Arbitrary` implementation
//! generating both variants.
//!
//! # Examples
//!
//! ```rust
//! use outcome::{assert_failure, assert_reason, assert_success, assert_value, Outcome};
//!
//! let success = Outcome::<_, &str>::success(12);
//! assert_success!(success);
//! assert_value!(success, 12);
//!
//! let failure = Outcome::<i32, _>::failure("missing");
//! assert_failure!(failure);
//! assert_reason!(failure, "missing");
//! ```

/// Assert that an outcome is a success.
///
/// This macro will panic if the outcome is a `Failure`.
///
/// # Example
///
/// ```rust
/// use outcome::{assert_success, Outcome};
///
/// let outcome = Outcome::<_, String>::success(42);
/// assert_success!(outcome);
/// ```
#[macro_export]
macro_rules! assert_success {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Success(_) => {}
            $crate::Outcome::Failure(reason) => {
                panic!("Expected Success, got Failure: {:?}", reason);
            }
        }
    };
}

/// Assert that an outcome is a failure.
///
/// This macro will panic if the outcome is a `Success`.
///
/// # Example
///
/// ```rust
/// use outcome::{assert_failure, Outcome};
///
/// let outcome = Outcome::<i32, _>::failure("error");
/// assert_failure!(outcome);
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($outcome:expr) => {
        match $outcome {
            $crate::Outcome::Failure(_) => {}
            $crate::Outcome::Success(value) => {
                panic!("Expected Failure, got Success: {:?}", value);
            }
        }
    };
}

/// Assert that an outcome is a success holding the expected value.
#[macro_export]
macro_rules! assert_value {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Success(value) => {
                assert_eq!(value, $expected);
            }
            $crate::Outcome::Failure(reason) => {
                panic!(
                    "Expected Success with value {:?}, got Failure: {:?}",
                    $expected, reason
                );
            }
        }
    };
}

/// Assert that an outcome is a failure holding the expected reason.
///
/// # Example
///
/// ```rust
/// use outcome::{assert_reason, Outcome};
///
/// let outcome = Outcome::<i32, _>::failure(vec!["error1", "error2"]);
/// assert_reason!(outcome, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_reason {
    ($outcome:expr, $expected:expr) => {
        match $outcome {
            $crate::Outcome::Failure(reason) => {
                assert_eq!(reason, $expected);
            }
            $crate::Outcome::Success(value) => {
                panic!(
                    "Expected Failure with reason {:?}, got Success: {:?}",
                    $expected, value
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::Outcome;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<S, F> Arbitrary for Outcome<S, F>
where
    S: Arbitrary + 'static,
    F: Arbitrary + 'static,
    S::Strategy: 'static,
    F::Strategy: 'static,
{
    type Parameters = (S::Parameters, F::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (s_params, f_params) = args;
        prop_oneof![
            any_with::<S>(s_params).prop_map(Outcome::success),
            any_with::<F>(f_params).prop_map(Outcome::failure),
        ]
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::Outcome;

    #[test]
    fn assert_success_macro() {
        let outcome = Outcome::<_, Vec<String>>::success(42);
        assert_success!(outcome);
    }

    #[test]
    fn assert_failure_macro() {
        let outcome = Outcome::<i32, _>::failure(vec!["error".to_string()]);
        assert_failure!(outcome);
    }

    #[test]
    fn assert_value_macro() {
        let outcome = Outcome::<_, ()>::success(Some(12));
        assert_value!(outcome, Some(12));
    }

    #[test]
    fn assert_reason_macro() {
        let outcome = Outcome::<i32, _>::failure(vec!["error1", "error2"]);
        assert_reason!(outcome, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let outcome = Outcome::<i32, _>::failure("error");
        assert_success!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let outcome = Outcome::<_, String>::success(42);
        assert_failure!(outcome);
    }

    #[test]
    #[should_panic(expected = "Expected Success with value")]
    fn assert_value_panics_on_failure() {
        let outcome = Outcome::<i32, _>::failure("error");
        assert_value!(outcome, 12);
    }

    #[test]
    #[should_panic(expected = "Expected Failure with reason")]
    fn assert_reason_panics_on_success() {
        let outcome = Outcome::<_, &str>::success(42);
        assert_reason!(outcome, "error");
    }

    #[test]
    #[should_panic]
    fn assert_value_panics_on_other_value() {
        let outcome = Outcome::<_, ()>::success(12);
        assert_value!(outcome, 24);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::Outcome;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn outcome_arbitrary_generates_valid_instances(
                outcome in any::<Outcome<i32, String>>()
            ) {
                match outcome {
                    Outcome::Success(_) => prop_assert!(outcome.is_success()),
                    Outcome::Failure(_) => prop_assert!(outcome.is_failure()),
                }
            }
        }
    }
}
