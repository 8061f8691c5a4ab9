//! An optional computed value with error information attached to it.
//!
//! [`Outcome`] carries a value, an error, or both. The error is the required
//! part when the value is not known: it explains why the result could not be
//! calculated. An outcome holding both is considered ill-calculated, but the
//! partially calculated value stays accessible.
//!
//! The outcome is successful if and only if no error is attached. The error
//! kind carries no semantics here — a collaborator may use any type,
//! including `bool`, and every attached error makes the outcome non-ok.
//!
//! ```
//! use sigvec::Outcome;
//!
//! enum DecodeError {
//!     NotEnoughData,
//! }
//!
//! let decoded: Outcome<u32, DecodeError> = Outcome::from_value(42);
//! if decoded.ok() {
//!     assert_eq!(*decoded.value().unwrap(), 42);
//! }
//! ```

use thiserror::Error;

/// Error returned when accessing a value that is not present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("accessed an outcome value that is not present")]
pub struct InvalidAccess;

/// A computed value, an error, or both. See the [module](self) docs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome<V, E> {
    value: Option<V>,
    error: Option<E>,
}

impl<V, E> Outcome<V, E> {
    /// Successful outcome holding a value.
    #[inline]
    pub fn from_value(value: V) -> Outcome<V, E> {
        Outcome {
            value: Some(value),
            error: None,
        }
    }

    /// Failed outcome holding only an error.
    #[inline]
    pub fn from_error(error: E) -> Outcome<V, E> {
        Outcome {
            value: None,
            error: Some(error),
        }
    }

    /// Ill-calculated outcome holding a partial value and the error that
    /// interrupted its calculation.
    #[inline]
    pub fn from_value_and_error(value: V, error: E) -> Outcome<V, E> {
        Outcome {
            value: Some(value),
            error: Some(error),
        }
    }

    /// True if and only if no error is attached.
    #[inline]
    pub fn ok(&self) -> bool {
        self.error.is_none()
    }

    /// True when a (possibly partial) value is present.
    #[inline]
    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the value, or [`InvalidAccess`] when it is absent.
    #[inline]
    pub fn value(&self) -> Result<&V, InvalidAccess> {
        self.value.as_ref().ok_or(InvalidAccess)
    }

    /// Take the value out, or [`InvalidAccess`] when it is absent.
    #[inline]
    pub fn into_value(self) -> Result<V, InvalidAccess> {
        self.value.ok_or(InvalidAccess)
    }

    /// Borrow the attached error, if any.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        self.error.as_ref()
    }

    /// Take the attached error out, if any.
    #[inline]
    pub fn into_error(self) -> Option<E> {
        self.error
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Outcome<V, E> {
        match result {
            Ok(value) => Outcome::from_value(value),
            Err(error) => Outcome::from_error(error),
        }
    }
}
