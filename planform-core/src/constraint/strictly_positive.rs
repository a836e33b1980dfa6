use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than zero.
///
/// Planform uses this constraint for geometric quantities whose downstream
/// math divides by them, such as inlet capture, throat, and entrance areas.
///
/// A value constrained to be strictly positive can be constructed using
/// either the generic [`Constrained::new`] method or the convenient
/// [`StrictlyPositive::new`] associated function.
///
/// # Examples
///
/// Using with `f64`:
///
/// ```
/// use planform_core::constraint::{Constrained, StrictlyPositive};
///
/// // Generic constructor:
/// let a = Constrained::<_, StrictlyPositive>::new(0.8).unwrap();
/// assert_eq!(a.into_inner(), 0.8);
///
/// // Associated constructor:
/// let b = StrictlyPositive::new(2.5).unwrap();
/// assert_eq!(b.as_ref(), &2.5);
///
/// // Error cases:
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
///
/// Using with `uom::si::f64::Area`:
///
/// ```
/// use planform_core::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{area::square_meter, f64::Area};
///
/// let capture = StrictlyPositive::new(Area::new::<square_meter>(1.0)).unwrap();
/// assert_eq!(capture.as_ref().get::<square_meter>(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is greater
    /// than zero.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if less than zero.
    /// - [`ConstraintError::Zero`] if equal to zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: Zero + PartialOrd>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: Zero + PartialOrd> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            None => Err(ConstraintError::NotANumber),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Greater) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{area::square_meter, f64::Area};

    #[test]
    #[allow(clippy::float_cmp)]
    fn floats_valid() {
        assert!(Constrained::<f64, StrictlyPositive>::new(0.8).is_ok());
        assert!(StrictlyPositive::new(1e-12).is_ok());

        let a = StrictlyPositive::new(2.0).unwrap();
        assert_eq!(a.into_inner(), 2.0);
    }

    #[test]
    fn floats_out_of_range() {
        assert!(matches!(
            StrictlyPositive::new(-1.0),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(0.0),
            Err(ConstraintError::Zero)
        ));
    }

    #[test]
    fn floats_nan_is_not_a_number() {
        assert!(matches!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn uom_area_valid() {
        let area = StrictlyPositive::new(Area::new::<square_meter>(0.6)).unwrap();
        assert_eq!(area.into_inner().get::<square_meter>(), 0.6);
    }

    #[test]
    fn uom_area_out_of_range() {
        assert!(matches!(
            StrictlyPositive::new(Area::new::<square_meter>(-0.5)),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            StrictlyPositive::new(Area::new::<square_meter>(0.0)),
            Err(ConstraintError::Zero)
        ));
    }
}
