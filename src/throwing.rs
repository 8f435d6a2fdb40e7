//! Capabilities for computations that may raise an error.
//!
//! A "throwing" computation is any closure returning `Result<_, E>`. Two
//! families of traits are provided:
//!
//! - [`ThrowingSupplier`], [`ThrowingFunction`] and [`ThrowingConsumer`] keep
//!   the declared error type `E`, so callers can act on it directly.
//! - [`AnyThrowingSupplier`], [`AnyThrowingFunction`] and
//!   [`AnyThrowingConsumer`] accept any error convertible into a
//!   [`Throwable`] and hand it back type-erased. The concrete type stays
//!   inspectable through [`Throwable::is`] and `downcast_ref`.
//!
//! Every trait is implemented for the matching closure shape, so plain
//! closures can be passed wherever a capability is expected.
//!
//! # Example
//!
//! ```rust
//! use outcome::throwing::{AnyThrowingFunction, ThrowingFunction};
//!
//! let parse = |s: &str| s.parse::<i32>();
//! assert_eq!(ThrowingFunction::apply(parse, "12"), Ok(12));
//!
//! let raised = AnyThrowingFunction::apply_any(parse, "twelve").unwrap_err();
//! assert!(raised.is::<std::num::ParseIntError>());
//! ```

/// A type-erased raised error.
///
/// Any `std::error::Error + Send + Sync + 'static` converts into it. The
/// concrete runtime type is preserved, its cause is reachable through
/// `source()`, and a backtrace is captured when enabled by the environment
/// (`RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`).
pub type Throwable = anyhow::Error;

/// A computation producing a `T` that may raise an `E`.
pub trait ThrowingSupplier<T, E> {
    /// Run the computation.
    fn get(self) -> Result<T, E>;
}

impl<C, T, E> ThrowingSupplier<T, E> for C
where
    C: FnOnce() -> Result<T, E>,
{
    #[inline]
    fn get(self) -> Result<T, E> {
        self()
    }
}

/// A function from `T` to `R` that may raise an `E`.
pub trait ThrowingFunction<T, R, E> {
    /// Apply the function.
    fn apply(self, input: T) -> Result<R, E>;
}

impl<C, T, R, E> ThrowingFunction<T, R, E> for C
where
    C: FnOnce(T) -> Result<R, E>,
{
    #[inline]
    fn apply(self, input: T) -> Result<R, E> {
        self(input)
    }
}

/// A side-effecting consumer of `T` that may raise an `E`.
pub trait ThrowingConsumer<T, E> {
    /// Consume the input.
    fn accept(self, input: T) -> Result<(), E>;
}

impl<C, T, E> ThrowingConsumer<T, E> for C
where
    C: FnOnce(T) -> Result<(), E>,
{
    #[inline]
    fn accept(self, input: T) -> Result<(), E> {
        self(input)
    }
}

/// A computation producing a `T` that may raise any error.
pub trait AnyThrowingSupplier<T> {
    /// Run the computation, erasing the error type.
    fn get_any(self) -> Result<T, Throwable>;
}

impl<C, T, E> AnyThrowingSupplier<T> for C
where
    C: FnOnce() -> Result<T, E>,
    E: Into<Throwable>,
{
    #[inline]
    fn get_any(self) -> Result<T, Throwable> {
        self().map_err(Into::into)
    }
}

/// A function from `T` to `R` that may raise any error.
pub trait AnyThrowingFunction<T, R> {
    /// Apply the function, erasing the error type.
    fn apply_any(self, input: T) -> Result<R, Throwable>;
}

impl<C, T, R, E> AnyThrowingFunction<T, R> for C
where
    C: FnOnce(T) -> Result<R, E>,
    E: Into<Throwable>,
{
    #[inline]
    fn apply_any(self, input: T) -> Result<R, Throwable> {
        self(input).map_err(Into::into)
    }
}

/// A side-effecting consumer of `T` that may raise any error.
pub trait AnyThrowingConsumer<T> {
    /// Consume the input, erasing the error type.
    fn accept_any(self, input: T) -> Result<(), Throwable>;
}

impl<C, T, E> AnyThrowingConsumer<T> for C
where
    C: FnOnce(T) -> Result<(), E>,
    E: Into<Throwable>,
{
    #[inline]
    fn accept_any(self, input: T) -> Result<(), Throwable> {
        self(input).map_err(Into::into)
    }
}

// Called wherever a raised error is turned into a failure value.
#[inline]
pub(crate) fn trace_caught(site: &'static str, error: &Throwable) {
    #[cfg(feature = "tracing")]
    tracing::debug!("{} caught an error and converted it to a failure: {}", site, error);
    #[cfg(not(feature = "tracing"))]
    let _ = (site, error);
}
