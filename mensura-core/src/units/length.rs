//! Display and print length units.
//!
//! The canonical scaling unit for this dimension is [`Millimeter`]
//! (`Millimeter::RATIO == 1.0`). The other units are the fixed-ratio display
//! and typography lengths a layout engine juggles when sizing for both screen
//! and paper:
//!
//! - **Inch**: exactly `25.4 mm`.
//! - **Point** (desktop-publishing point): `1/72 in`.
//! - **Pixel** (device-independent pixel): `1/96 in`.
//!
//! All ratios are exact by definition, so conversions between defined
//! multiples are bit-exact:
//!
//! ```rust
//! use mensura_core::length::{Inch, Millimeters};
//!
//! let mm = Millimeters::new(25.4);
//! assert_eq!(mm.to::<Inch>().value(), 1.0);
//! ```

use crate::{Dimension, Quantity, Unit};
use mensura_derive::Unit;

/// Dimension tag for length.
pub enum Length {}
impl Dimension for Length {}

/// Runtime discriminant for the length units of this module.
///
/// `Default` aliases [`LengthUnit::Millimeter`], the canonical scaling unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    /// Alias for [`LengthUnit::Millimeter`].
    Default,
    /// Millimetre.
    Millimeter,
    /// Inch (`25.4 mm`).
    Inch,
    /// Desktop-publishing point (`1/72 in`).
    Point,
    /// Device-independent pixel (`1/96 in`).
    Pixel,
}

impl LengthUnit {
    /// Millimetres per one of this unit.
    #[inline]
    pub const fn ratio(self) -> f64 {
        match self {
            LengthUnit::Default | LengthUnit::Millimeter => Millimeter::RATIO,
            LengthUnit::Inch => Inch::RATIO,
            LengthUnit::Point => Point::RATIO,
            LengthUnit::Pixel => Pixel::RATIO,
        }
    }

    /// Printable symbol for this unit.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Default | LengthUnit::Millimeter => Millimeter::SYMBOL,
            LengthUnit::Inch => Inch::SYMBOL,
            LengthUnit::Point => Point::SYMBOL,
            LengthUnit::Pixel => Pixel::SYMBOL,
        }
    }

    /// Converts a magnitude between any two length units.
    ///
    /// Pure: finite input never fails, non-finite input propagates per
    /// IEEE-754. Conversion onto the same scale is the identity.
    ///
    /// ```rust
    /// use mensura_core::length::LengthUnit;
    ///
    /// let mm = LengthUnit::convert(2.0, LengthUnit::Inch, LengthUnit::Millimeter);
    /// assert_eq!(mm, 50.8);
    /// ```
    #[inline]
    pub const fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
        if from.ratio() == to.ratio() {
            value
        } else {
            (value * from.ratio()) / to.ratio()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit markers
// ─────────────────────────────────────────────────────────────────────────────

/// Millimetre (canonical scaling unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", dimension = Length, ratio = 1.0, kind = LengthUnit::Millimeter)]
pub struct Millimeter;
/// A quantity measured in millimetres.
pub type Millimeters = Quantity<Millimeter>;
/// One millimetre.
pub const MM: Millimeters = Millimeters::new(1.0);

/// Inch (`25.4 mm` exactly).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", dimension = Length, ratio = 25.4, kind = LengthUnit::Inch)]
pub struct Inch;
/// A quantity measured in inches.
pub type Inches = Quantity<Inch>;
/// One inch.
pub const INCH: Inches = Inches::new(1.0);

/// Desktop-publishing point (`1/72 in`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pt", dimension = Length, ratio = 25.4 / 72.0, kind = LengthUnit::Point)]
pub struct Point;
/// A quantity measured in points.
pub type Points = Quantity<Point>;
/// One point.
pub const PT: Points = Points::new(1.0);

/// Device-independent pixel (`1/96 in`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "px", dimension = Length, ratio = 25.4 / 96.0, kind = LengthUnit::Pixel)]
pub struct Pixel;
/// A quantity measured in device-independent pixels.
pub type Pixels = Quantity<Pixel>;
/// One pixel.
pub const PX: Pixels = Pixels::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Named conversions
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_length_methods {
    ($($unit:ty),+ $(,)?) => {$(
        impl Quantity<$unit> {
            /// This length expressed in millimetres.
            #[inline]
            pub const fn to_millimeters(self) -> Millimeters {
                self.to::<Millimeter>()
            }

            /// This length expressed in inches.
            #[inline]
            pub const fn to_inches(self) -> Inches {
                self.to::<Inch>()
            }

            /// This length expressed in points.
            #[inline]
            pub const fn to_points(self) -> Points {
                self.to::<Point>()
            }

            /// This length expressed in device-independent pixels.
            #[inline]
            pub const fn to_pixels(self) -> Pixels {
                self.to::<Pixel>()
            }

            /// Magnitude of this length expressed in `unit`, as a bare number.
            ///
            /// Asking for the value's own unit returns the magnitude
            /// unchanged.
            ///
            /// ```rust
            /// use mensura_core::length::{Inches, LengthUnit};
            ///
            /// let i = Inches::new(2.0);
            /// assert_eq!(i.value_in(LengthUnit::Millimeter), 50.8);
            /// assert_eq!(i.value_in(LengthUnit::Inch), 2.0);
            /// ```
            #[inline]
            pub const fn value_in(self, unit: LengthUnit) -> f64 {
                if <$unit as Unit>::RATIO == unit.ratio() {
                    self.value()
                } else {
                    (self.value() * <$unit as Unit>::RATIO) / unit.ratio()
                }
            }
        }
    )+};
}

impl_length_methods!(Millimeter, Inch, Point, Pixel);

// Generate all bidirectional From implementations between length units.
crate::impl_unit_conversions!(Millimeter, Inch, Point, Pixel);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Defined-ratio exactness
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn one_inch_of_millimeters_is_one_inch() {
        let mm = Millimeters::new(25.4);
        assert_eq!(mm.to_inches().value(), 1.0);
    }

    #[test]
    fn one_point_of_millimeters_is_one_point() {
        let mm = Millimeters::new(25.4 / 72.0);
        assert_eq!(mm.to_points().value(), 1.0);
    }

    #[test]
    fn one_pixel_of_millimeters_is_one_pixel() {
        let mm = Millimeters::new(25.4 / 96.0);
        assert_eq!(mm.to_pixels().value(), 1.0);
    }

    #[test]
    fn inch_to_millimeter_exact() {
        let inch = Inches::new(1.0);
        assert_eq!(inch.to_millimeters().value(), 25.4);
    }

    #[test]
    fn inch_is_seventy_two_points() {
        let inch = Inches::new(1.0);
        assert_relative_eq!(inch.to_points().value(), 72.0, max_relative = 1e-12);
    }

    #[test]
    fn inch_is_ninety_six_pixels() {
        let inch = Inches::new(1.0);
        assert_relative_eq!(inch.to_pixels().value(), 96.0, max_relative = 1e-12);
    }

    #[test]
    fn point_to_pixel_ratio() {
        // 96 px per 72 pt
        let pt = Points::new(72.0);
        assert_relative_eq!(pt.to_pixels().value(), 96.0, max_relative = 1e-12);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Runtime conversion component
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn default_kind_aliases_millimeter() {
        assert_eq!(LengthUnit::Default.ratio(), LengthUnit::Millimeter.ratio());
        assert_eq!(
            LengthUnit::Default.symbol(),
            LengthUnit::Millimeter.symbol()
        );
        assert_eq!(
            LengthUnit::convert(10.0, LengthUnit::Default, LengthUnit::Inch),
            LengthUnit::convert(10.0, LengthUnit::Millimeter, LengthUnit::Inch)
        );
    }

    #[test]
    fn convert_matches_typed_conversion() {
        let typed = Pixels::new(96.0).to_millimeters().value();
        let raw = LengthUnit::convert(96.0, LengthUnit::Pixel, LengthUnit::Millimeter);
        assert_eq!(typed, raw);
    }

    #[test]
    fn convert_same_unit_is_identity() {
        let v = 0.1234567891011;
        assert_eq!(
            LengthUnit::convert(v, LengthUnit::Point, LengthUnit::Point),
            v
        );
    }

    #[test]
    fn convert_propagates_non_finite() {
        assert!(LengthUnit::convert(f64::NAN, LengthUnit::Inch, LengthUnit::Pixel).is_nan());
        assert_eq!(
            LengthUnit::convert(f64::INFINITY, LengthUnit::Inch, LengthUnit::Pixel),
            f64::INFINITY
        );
    }

    #[test]
    fn value_in_own_unit_is_identity() {
        let v = Inches::new(0.3);
        assert_eq!(v.value_in(LengthUnit::Inch), 0.3);
        let v = Pixels::new(1279.5);
        assert_eq!(v.value_in(LengthUnit::Pixel), 1279.5);
    }

    #[test]
    fn value_in_discards_the_unit() {
        let inch = Inches::new(1.0);
        assert_eq!(inch.value_in(LengthUnit::Millimeter), 25.4);
        assert_relative_eq!(
            inch.value_in(LengthUnit::Pixel),
            96.0,
            max_relative = 1e-12
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Kind introspection, arithmetic, ordering
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn unit_reports_the_runtime_kind() {
        assert_eq!(MM.unit(), LengthUnit::Millimeter);
        assert_eq!(INCH.unit(), LengthUnit::Inch);
        assert_eq!(PT.unit(), LengthUnit::Point);
        assert_eq!(PX.unit(), LengthUnit::Pixel);
    }

    #[test]
    fn mixed_addition_keeps_left_unit() {
        let sum = Inches::new(1.0) + Millimeters::new(25.4);
        assert_eq!(sum.unit(), LengthUnit::Inch);
        assert_eq!(sum.value(), 2.0);
    }

    #[test]
    fn mixed_subtraction_keeps_left_unit() {
        let diff = Millimeters::new(50.8) - Inches::new(1.0);
        assert_eq!(diff.unit(), LengthUnit::Millimeter);
        assert_eq!(diff.value(), 25.4);
    }

    #[test]
    fn ordering_is_consistent_across_units() {
        let a = Inches::new(1.0);
        let b = Millimeters::new(25.5);
        assert!(a < b);
        assert!(b > a);
        assert!(a.to_millimeters().value() < b.value());
    }

    #[test]
    fn equal_lengths_in_different_units_compare_equal() {
        assert_eq!(Inches::new(1.0), Millimeters::new(25.4));
        assert_eq!(Millimeters::new(25.4), Inches::new(1.0));
    }

    #[test]
    fn from_impls_route_through_the_hub() {
        let px: Pixels = Millimeters::new(25.4 / 96.0).into();
        assert_eq!(px.value(), 1.0);
        let mm = Millimeters::from(Inches::new(2.0));
        assert_eq!(mm.value(), 50.8);
    }

    #[test]
    fn display_prints_value_and_symbol() {
        assert_eq!(format!("{}", Millimeters::new(5.0)), "5 mm");
        assert_eq!(format!("{}", Points::new(-1.5)), "-1.5 pt");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_mm_inch(v in -1e6..1e6f64) {
            let original = Millimeters::new(v);
            let back = original.to_inches().to_millimeters();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_px_pt(v in -1e6..1e6f64) {
            let original = Pixels::new(v);
            let back = original.to_points().to_pixels();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_ordering_matches_hub_ordering(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let lhs = Inches::new(a);
            let rhs = Points::new(b);
            let hub_lhs = lhs.to_millimeters().value();
            let hub_rhs = rhs.to_millimeters().value();
            prop_assert_eq!(lhs < rhs, hub_lhs < hub_rhs);
        }

        #[test]
        fn prop_value_in_agrees_with_convert(v in -1e6..1e6f64) {
            let q = Points::new(v);
            prop_assert_eq!(
                q.value_in(LengthUnit::Pixel),
                LengthUnit::convert(v, LengthUnit::Point, LengthUnit::Pixel)
            );
        }
    }
}
