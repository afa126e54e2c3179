//! Unit types and traits.

use crate::dimension::Dimension;
use core::fmt::Debug;

/// Trait implemented by every **unit** type.
///
/// * `RATIO` is the conversion factor from this unit to the *canonical scaling unit* of the same dimension.
///   Example: if millimetres are canonical (`Millimeter::RATIO == 1.0`), then inches use `Inch::RATIO == 25.4`
///   because `1 in = 25.4 mm`.
///
/// * `SYMBOL` is the printable string (e.g. `"mm"` or `"in"`).
///
/// * `Dim` ties the unit to its underlying [`Dimension`].
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types (this crate's built-in units are unit structs with no fields).
/// - `RATIO` should be finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Unit-to-canonical conversion factor.
    const RATIO: f64;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Printable symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;
}

/// Links a unit marker to the runtime kind discriminant of its family.
///
/// Families that expose a runtime unit enumeration (such as
/// [`length::LengthUnit`](crate::length::LengthUnit) or
/// [`time::TimeUnit`](crate::time::TimeUnit)) implement this for each of
/// their markers, which is what backs
/// [`Quantity::unit`](crate::Quantity::unit).
///
/// ```rust
/// use mensura_core::length::{LengthUnit, Millimeters};
///
/// let width = Millimeters::new(210.0);
/// assert_eq!(width.unit(), LengthUnit::Millimeter);
/// ```
pub trait Kinded: Unit {
    /// The family's runtime kind enumeration.
    type Kind: Copy + PartialEq + Debug + 'static;

    /// Discriminant naming this unit within its family.
    const KIND: Self::Kind;
}
