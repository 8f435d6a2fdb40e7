//! End-to-end scenarios: running fallible computations, classifying their
//! errors and composing the resulting outcomes.

use outcome::prelude::*;
use std::io;
use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
#[error("illegal argument")]
struct IllegalArgument;

#[derive(Debug, thiserror::Error)]
#[error("i/o failure")]
struct IoFailure(#[source] IllegalArgument);

#[derive(Debug, thiserror::Error)]
#[error("end of file")]
struct EndOfFile;

#[derive(Debug, Clone, PartialEq)]
enum Reason {
    Io,
    Argument,
    Root,
    Number,
    Missing,
}

fn reasons() -> ReasonMap<Reason> {
    ReasonMap::new()
        .with(ErrorClass::of::<IoFailure>().extended_by::<EndOfFile>(), Reason::Io)
        .with(ErrorClass::of::<IllegalArgument>(), Reason::Argument)
        .with(ErrorClass::any(), Reason::Root)
        .with(ErrorClass::of::<ParseIntError>(), Reason::Number)
}

#[test]
fn reason_by_default_then_compose() {
    let outcome = Outcome::of(|| Err::<i32, _>(io::Error::other("unreachable")), "reasonX");
    assert_eq!(outcome, Outcome::Failure("reasonX"));

    let mapped = outcome.map(|v| v * 2);
    assert_eq!(mapped, Outcome::Failure("reasonX"));

    let recovered = mapped.recover(|_| 42);
    assert_eq!(recovered, Outcome::Success(42));
}

#[test]
fn cause_exact_match_wins() {
    let outcome = Outcome::<(), _>::of_classified(
        || Err(IoFailure(IllegalArgument)),
        &reasons(),
        Reason::Missing,
    );
    assert_eq!(outcome, Outcome::Failure(Reason::Argument));
}

#[test]
fn own_exact_match_wins_without_cause() {
    let outcome = Outcome::<(), _>::of_classified(
        || "x".parse::<i32>().map(|_| ()),
        &reasons(),
        Reason::Missing,
    );
    assert_eq!(outcome, Outcome::Failure(Reason::Number));
}

#[test]
fn supertype_scan_uses_first_assignable_entry() {
    let outcome = Outcome::<(), _>::of_classified(|| Err(EndOfFile), &reasons(), Reason::Missing);
    assert_eq!(outcome, Outcome::Failure(Reason::Io));

    let outcome =
        Outcome::<(), _>::of_classified(|| Err(std::fmt::Error), &reasons(), Reason::Missing);
    assert_eq!(outcome, Outcome::Failure(Reason::Root));
}

#[test]
fn io_error_wrapping_resolves_to_inner_error() {
    let outcome = Outcome::<(), _>::of_classified(
        || Err(io::Error::other(IllegalArgument)),
        &reasons(),
        Reason::Missing,
    );
    assert_eq!(outcome, Outcome::Failure(Reason::Argument));

    let reasons = ReasonMap::new().with(ErrorClass::of::<IllegalArgument>(), "iae");
    let outcome = Outcome::<(), _>::of_classified(
        || Err(io::Error::new(io::ErrorKind::InvalidInput, IllegalArgument)),
        &reasons,
        "missing",
    );
    assert_eq!(outcome, Outcome::Failure("iae"));
}

#[test]
fn reinserted_class_keeps_new_subtypes() {
    let reasons = ReasonMap::new()
        .with(ErrorClass::of::<IoFailure>(), "first")
        .with(ErrorClass::of::<IoFailure>().extended_by::<EndOfFile>(), "second");

    let outcome = Outcome::<(), _>::of_classified(|| Err(EndOfFile), &reasons, "missing");
    assert_eq!(outcome, Outcome::Failure("second"));
}

#[test]
fn empty_mapping_uses_missing() {
    let outcome =
        Outcome::<(), _>::of_classified(|| Err(EndOfFile), &ReasonMap::new(), Reason::Missing);
    assert_eq!(outcome, Outcome::Failure(Reason::Missing));
}

#[test]
fn classified_success_composes() {
    let outcome = Outcome::of_classified(|| "21".parse::<i32>(), &reasons(), Reason::Missing)
        .map(|v| v * 2)
        .filter(|v| *v == 42, Reason::Missing)
        .fold(|_| -1, |v| v);
    assert_eq!(outcome, 42);
}

#[test]
fn unexpected_errors_become_reportable_reasons() {
    let write = || Err::<i32, _>(io::Error::other("disk full"));
    let outcome = Outcome::from_result(write().map_err(Unexpected::new));

    let reason = outcome.into_reason().expect("failure expected");
    assert_eq!(reason.synopsis(), Unexpected::SYNOPSIS);
    assert_eq!(reason.description(), "disk full");
    assert!(reason.report_issue());
}

#[test]
fn self_describing_failure_pipeline() {
    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("Order rejected.")]
    struct Rejected {
        order: u32,
    }

    impl FailureThrowable for Rejected {
        fn description(&self) -> String {
            format!("Order {} was rejected by the warehouse.", self.order)
        }

        fn report_issue(&self) -> bool {
            self.order == 0
        }
    }

    let place = |order: u32| {
        Outcome::of_failure(|| {
            if order % 2 == 0 {
                Ok(order)
            } else {
                Err(Rejected { order })
            }
        })
    };

    assert_eq!(place(2), Outcome::Success(2));

    let rejected = place(3);
    assert_eq!(
        rejected.reason().map(|r| (r.synopsis(), Describable::description(r))),
        Some((
            "Order rejected.".to_string(),
            "Order 3 was rejected by the warehouse.".to_string()
        ))
    );
    assert!(!rejected.reason().is_some_and(FailureReason::report_issue));

    let swapped = rejected.swap().map(|r| r.order);
    assert_eq!(swapped, Outcome::Success(3));
}

#[test]
fn try_combinators_catch_at_the_boundary() {
    let outcome = Outcome::<&str, &str>::success("12")
        .try_map(|s| s.parse::<i32>(), "unparsable")
        .try_peek(
            |v| {
                if *v > 10 {
                    Err(io::Error::other("too big"))
                } else {
                    Ok(())
                }
            },
            "too big",
        );
    assert_eq!(outcome, Outcome::Failure("too big"));

    let outcome = Outcome::<&str, &str>::success("x")
        .try_map(|s| s.parse::<i32>(), "unparsable")
        .try_peek(|_| Ok::<_, io::Error>(()), "never");
    assert_eq!(outcome, Outcome::Failure("unparsable"));
}

#[test]
fn unsafe_flatten_through_factory() {
    let nested: Outcome<Outcome<i32, i32>, i32> =
        Outcome::of(|| Ok::<_, io::Error>(Outcome::failure(21)), -1);
    assert_eq!(
        nested.unsafe_flatten::<i32, i32>(),
        Ok(Outcome::Failure(21))
    );
}
