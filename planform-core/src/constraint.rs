//! Type-level numeric constraints with zero runtime cost.
//!
//! This module lets fixed parameters express invariants like "strictly
//! positive" at the type level, checked once at construction. A component
//! that accepts a `Constrained<Area, StrictlyPositive>` never needs to guard
//! against a zero or negative area again.
//!
//! # Provided Constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//!
//! The marker is used with the generic [`Constrained<T, C>`] wrapper, where
//! `C` is the marker type implementing [`Constraint<T>`]. It also provides an
//! associated [`new()`](StrictlyPositive::new) constructor for convenience.
//!
//! # Extending
//!
//! Custom numeric invariants are defined by implementing [`Constraint<T>`]
//! for a zero-sized marker type.

mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric
/// constraint, such as [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional
/// variants in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// Combine this with one of the provided marker types (such as
/// [`StrictlyPositive`]) or your own [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use planform_core::constraint::{Constrained, StrictlyPositive};
///
/// let area = Constrained::<_, StrictlyPositive>::new(1.4).unwrap();
/// assert_eq!(area.into_inner(), 1.4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
