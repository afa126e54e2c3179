//! Fallible casts from quantity magnitudes to primitive types.
//!
//! [`Quantity::try_cast`](crate::Quantity::try_cast) narrows a magnitude to
//! any primitive numeric type, reporting failure as a [`CastError`] instead
//! of panicking. The non-numeric primitives (`bool`, `char`) also implement
//! [`FromMagnitude`], but always fail: a unit magnitude has no truth value or
//! character interpretation, and asking for one is a type error surfaced at
//! runtime.
//!
//! ```rust
//! use mensura_core::length::Pixels;
//! use mensura_core::CastError;
//!
//! let width = Pixels::new(1279.6);
//! assert_eq!(width.try_cast::<i32>(), Ok(1280));
//! assert!(matches!(width.try_cast::<bool>(), Err(CastError::NonNumeric { .. })));
//! ```

/// Error raised when a magnitude cannot be represented in the requested type.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum CastError {
    /// The target type does not carry numeric values at all.
    #[error("a unit magnitude cannot be cast to {target}")]
    NonNumeric {
        /// Name of the rejected target type.
        target: &'static str,
    },

    /// The magnitude is outside the target type's representable range, or is
    /// not finite.
    #[error("magnitude {value} is out of range for {target}")]
    OutOfRange {
        /// The offending magnitude.
        value: f64,
        /// Name of the target type.
        target: &'static str,
    },
}

/// Types a quantity magnitude can be asked to cast into.
///
/// Implemented for every primitive numeric type, plus `bool` and `char`
/// (which always return [`CastError::NonNumeric`]).
pub trait FromMagnitude: Sized {
    /// Converts a raw magnitude into `Self`.
    fn from_magnitude(value: f64) -> Result<Self, CastError>;
}

fn round_to_nearest(value: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        value.round()
    }
    #[cfg(not(feature = "std"))]
    {
        libm::round(value)
    }
}

impl FromMagnitude for f64 {
    #[inline]
    fn from_magnitude(value: f64) -> Result<Self, CastError> {
        Ok(value)
    }
}

impl FromMagnitude for f32 {
    #[inline]
    fn from_magnitude(value: f64) -> Result<Self, CastError> {
        Ok(value as f32)
    }
}

macro_rules! impl_from_magnitude_for_int {
    ($($int:ty),+ $(,)?) => {$(
        impl FromMagnitude for $int {
            fn from_magnitude(value: f64) -> Result<Self, CastError> {
                if !value.is_finite() {
                    return Err(CastError::OutOfRange {
                        value,
                        target: stringify!($int),
                    });
                }
                // Nearest integer, ties away from zero.
                let rounded = round_to_nearest(value);
                if rounded < <$int>::MIN as f64 || rounded > <$int>::MAX as f64 {
                    return Err(CastError::OutOfRange {
                        value,
                        target: stringify!($int),
                    });
                }
                Ok(rounded as $int)
            }
        }
    )+};
}

impl_from_magnitude_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! impl_from_magnitude_non_numeric {
    ($($ty:ty),+ $(,)?) => {$(
        impl FromMagnitude for $ty {
            fn from_magnitude(_value: f64) -> Result<Self, CastError> {
                Err(CastError::NonNumeric {
                    target: stringify!($ty),
                })
            }
        }
    )+};
}

impl_from_magnitude_non_numeric!(bool, char);
