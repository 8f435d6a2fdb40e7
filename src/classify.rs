//! Classification of raised errors into failure reasons.
//!
//! A [`ReasonMap`] associates [`ErrorClass`] keys with failure reasons. When
//! a computation raises an error, [`ReasonMap::classify`] resolves the
//! reason in a fixed precedence order:
//!
//! 1. the entry whose class is exactly the runtime type of the error's
//!    cause, if the error has one. For an [`std::io::Error`] the cause is
//!    the wrapped inner error (`get_ref()`), otherwise it is `source()`;
//! 2. the entry whose class is exactly the runtime type of the error;
//! 3. the first entry, in insertion order, whose class is assignable from
//!    the error.
//!
//! The map keeps insertion order, so step 3 is deterministic when several
//! classes accept the same error.
//!
//! Rust has no inheritance, so "assignable from" is declared explicitly:
//! a class built with [`ErrorClass::of`] accepts exactly one concrete type,
//! [`ErrorClass::extended_by`] adds subtypes, [`ErrorClass::family`] accepts
//! whatever its predicate accepts, and [`ErrorClass::any`] accepts every
//! error.
//!
//! # Example
//!
//! ```rust
//! use outcome::classify::{ErrorClass, ReasonMap};
//! use std::io;
//!
//! let reasons = ReasonMap::new()
//!     .with(ErrorClass::of::<io::Error>(), "io")
//!     .with(ErrorClass::any(), "anything");
//!
//! let io_err = io::Error::other("disk full");
//! assert_eq!(reasons.classify(&io_err), Some(&"io"));
//!
//! let fmt_err = std::fmt::Error;
//! assert_eq!(reasons.classify(&fmt_err), Some(&"anything"));
//! ```

use std::any::{type_name, TypeId};
use std::error::Error as StdError;
use std::io;
use std::fmt;

type Matcher = fn(&(dyn StdError + 'static)) -> bool;

fn is_exactly<E: StdError + 'static>(error: &(dyn StdError + 'static)) -> bool {
    error.is::<E>()
}

fn accepts_everything(_: &(dyn StdError + 'static)) -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ClassId {
    Type(TypeId),
    Named(&'static str),
}

/// A class of errors used as a key of a [`ReasonMap`].
#[derive(Clone)]
pub struct ErrorClass {
    id: ClassId,
    name: &'static str,
    exact: Option<Matcher>,
    assignable: Matcher,
    subtypes: Vec<Matcher>,
}

impl ErrorClass {
    /// The class of the concrete error type `E`.
    ///
    /// It matches exactly `E` and, unless extended, is assignable only from
    /// `E` itself.
    pub fn of<E: StdError + 'static>() -> Self {
        Self {
            id: ClassId::Type(TypeId::of::<E>()),
            name: type_name::<E>(),
            exact: Some(is_exactly::<E>),
            assignable: is_exactly::<E>,
            subtypes: Vec::new(),
        }
    }

    /// The root class, assignable from every error.
    ///
    /// It never matches exactly, so it only takes part in the assignability
    /// scan.
    pub fn any() -> Self {
        Self::family("dyn Error", accepts_everything)
    }

    /// A named class assignable from every error `predicate` accepts.
    ///
    /// Families never match exactly. Two families with the same name are
    /// the same key.
    ///
    /// ```rust
    /// use outcome::classify::ErrorClass;
    ///
    /// let numeric = ErrorClass::family("numeric", |e| {
    ///     e.is::<std::num::ParseIntError>() || e.is::<std::num::ParseFloatError>()
    /// });
    /// let err = "x".parse::<f64>().unwrap_err();
    /// assert!(numeric.is_assignable_from(&err));
    /// assert!(!numeric.matches_exactly(&err));
    /// ```
    pub fn family(name: &'static str, predicate: Matcher) -> Self {
        Self {
            id: ClassId::Named(name),
            name,
            exact: None,
            assignable: predicate,
            subtypes: Vec::new(),
        }
    }

    /// Declare `Sub` as a subtype, making this class assignable from it.
    ///
    /// ```rust
    /// use outcome::classify::ErrorClass;
    /// use std::io;
    ///
    /// let class = ErrorClass::of::<io::Error>().extended_by::<std::fmt::Error>();
    /// assert!(class.is_assignable_from(&std::fmt::Error));
    /// assert!(!class.matches_exactly(&std::fmt::Error));
    /// ```
    pub fn extended_by<Sub: StdError + 'static>(mut self) -> Self {
        self.subtypes.push(is_exactly::<Sub>);
        self
    }

    /// Human-readable name of the class.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `error`'s runtime type is exactly this class.
    pub fn matches_exactly(&self, error: &(dyn StdError + 'static)) -> bool {
        self.exact.is_some_and(|exact| exact(error))
    }

    /// Whether `error` is an instance of this class or of one of its
    /// declared subtypes.
    pub fn is_assignable_from(&self, error: &(dyn StdError + 'static)) -> bool {
        (self.assignable)(error) || self.subtypes.iter().any(|sub| sub(error))
    }
}

impl PartialEq for ErrorClass {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorClass {}

impl fmt::Debug for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorClass")
            .field("name", &self.name)
            .field("subtypes", &self.subtypes.len())
            .finish()
    }
}

/// An insertion-ordered mapping from error classes to failure reasons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReasonMap<F> {
    entries: Vec<(ErrorClass, F)>,
}

impl<F> ReasonMap<F> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Associate `reason` with `class`.
    ///
    /// Re-inserting a class replaces the stored class and its reason in
    /// place and returns the previous reason; the original position is kept.
    pub fn insert(&mut self, class: ErrorClass, reason: F) -> Option<F> {
        if let Some(index) = self.entries.iter().position(|(key, _)| *key == class) {
            let (_, previous) = std::mem::replace(&mut self.entries[index], (class, reason));
            return Some(previous);
        }
        self.entries.push((class, reason));
        None
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, class: ErrorClass, reason: F) -> Self {
        self.insert(class, reason);
        self
    }

    /// The reason stored for `class`.
    pub fn get(&self, class: &ErrorClass) -> Option<&F> {
        self.entries
            .iter()
            .find(|(key, _)| key == class)
            .map(|(_, reason)| reason)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ErrorClass, &F)> {
        self.entries.iter().map(|(class, reason)| (class, reason))
    }

    /// Resolve the reason for a raised error.
    ///
    /// Returns `None` when no entry applies, leaving the fallback to the
    /// caller.
    pub fn classify(&self, error: &(dyn StdError + 'static)) -> Option<&F> {
        cause_of(error)
            .and_then(|cause| self.exact(cause))
            .or_else(|| self.exact(error))
            .or_else(|| self.first_assignable(error))
    }

    fn exact(&self, error: &(dyn StdError + 'static)) -> Option<&F> {
        self.entries
            .iter()
            .find(|(class, _)| class.matches_exactly(error))
            .map(|(_, reason)| reason)
    }

    fn first_assignable(&self, error: &(dyn StdError + 'static)) -> Option<&F> {
        self.entries
            .iter()
            .find(|(class, _)| class.is_assignable_from(error))
            .map(|(_, reason)| reason)
    }
}

impl<F> Default for ReasonMap<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FromIterator<(ErrorClass, F)> for ReasonMap<F> {
    fn from_iter<I: IntoIterator<Item = (ErrorClass, F)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<F> Extend<(ErrorClass, F)> for ReasonMap<F> {
    fn extend<I: IntoIterator<Item = (ErrorClass, F)>>(&mut self, iter: I) {
        for (class, reason) in iter {
            self.insert(class, reason);
        }
    }
}

// `io::Error::source` skips the wrapped error and reports its source instead.
fn cause_of<'a>(error: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match error.downcast_ref::<io::Error>() {
        Some(io_error) => io_error
            .get_ref()
            .map(|inner| inner as &(dyn StdError + 'static)),
        None => error.source(),
    }
}
