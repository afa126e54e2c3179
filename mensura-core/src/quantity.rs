//! Quantity type and its implementations.

use crate::cast::{CastError, FromMagnitude};
use crate::unit::{Kinded, Unit};
use core::cmp::Ordering;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity with a specific unit.
///
/// `Quantity<U>` wraps an `f64` value together with phantom type information
/// about its unit `U`. This enables compile-time dimensional analysis while
/// maintaining zero runtime cost.
///
/// Values are immutable: every conversion and arithmetic operation produces a
/// new quantity. Mixed-unit arithmetic and comparison are permitted within a
/// dimension, and the result always carries the **left** operand's unit; the
/// right operand is converted first.
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::{Inches, Millimeters};
///
/// let sum = Inches::new(1.0) + Millimeters::new(25.4);
/// assert_eq!(sum.value(), 2.0); // still inches
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quantity<U: Unit>(f64, PhantomData<U>);

impl<U: Unit> Quantity<U> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use mensura_core::length::Millimeters;
    /// assert!(Millimeters::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// The zero quantity.
    pub const ZERO: Self = Self::new(0.0);

    /// Smallest representable magnitude, expressed in this unit.
    ///
    /// Together with [`Quantity::MAX`] this bounds every value of the unit's
    /// family, since all units share the `f64` representation.
    pub const MIN: Self = Self::new(f64::MIN);

    /// Largest representable magnitude, expressed in this unit.
    pub const MAX: Self = Self::new(f64::MAX);

    /// Creates a new quantity with the given value.
    ///
    /// Construction never fails or validates; the magnitude is assumed to
    /// already be expressed in `U`.
    ///
    /// ```rust
    /// use mensura_core::time::Seconds;
    /// let t = Seconds::new(90.0);
    /// assert_eq!(t.value(), 90.0);
    /// ```
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the raw numeric value.
    ///
    /// ```rust
    /// use mensura_core::time::Seconds;
    /// let t = Seconds::new(2.5);
    /// assert_eq!(t.value(), 2.5);
    /// ```
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.0.abs())
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// The magnitude is scaled into the family's canonical unit and back out;
    /// conversion to the value's own scale is the identity. Non-finite
    /// magnitudes propagate per IEEE-754.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mensura_core::length::{Inch, Millimeters};
    ///
    /// let mm = Millimeters::new(25.4);
    /// let inches = mm.to::<Inch>();
    /// assert_eq!(inches.value(), 1.0);
    /// ```
    #[inline]
    pub const fn to<T: Unit<Dim = U::Dim>>(self) -> Quantity<T> {
        if U::RATIO == T::RATIO {
            Quantity::<T>::new(self.0)
        } else {
            Quantity::<T>::new((self.0 * U::RATIO) / T::RATIO)
        }
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// ```rust
    /// use mensura_core::length::Pixels;
    /// let a = Pixels::new(3.0);
    /// let b = Pixels::new(5.0);
    /// assert_eq!(a.min(b).value(), 3.0);
    /// ```
    #[inline]
    pub const fn min(&self, other: Quantity<U>) -> Quantity<U> {
        Quantity::<U>::new(self.value().min(other.value()))
    }

    /// Const addition of two same-unit quantities.
    #[inline]
    pub const fn add(&self, other: Quantity<U>) -> Quantity<U> {
        Quantity::<U>::new(self.value() + other.value())
    }

    /// Const subtraction of two same-unit quantities.
    #[inline]
    pub const fn sub(&self, other: Quantity<U>) -> Quantity<U> {
        Quantity::<U>::new(self.value() - other.value())
    }

    /// Const division of two same-unit quantities (magnitude-wise; returns the same unit).
    #[inline]
    pub const fn div(&self, other: Quantity<U>) -> Quantity<U> {
        Quantity::<U>::new(self.value() / other.value())
    }

    /// Const multiplication of two same-unit quantities (magnitude-wise; returns the same unit).
    #[inline]
    pub const fn mul(&self, other: Quantity<U>) -> Quantity<U> {
        Quantity::<U>::new(self.value() * other.value())
    }

    /// Casts the magnitude to a primitive type.
    ///
    /// Integer targets round to the nearest integer and range-check;
    /// non-numeric targets (`bool`, `char`) always fail with
    /// [`CastError::NonNumeric`]. The unit is discarded.
    ///
    /// ```rust
    /// use mensura_core::time::Milliseconds;
    ///
    /// let interval = Milliseconds::new(16.7);
    /// assert_eq!(interval.try_cast::<u64>(), Ok(17));
    /// ```
    #[inline]
    pub fn try_cast<T: FromMagnitude>(self) -> Result<T, CastError> {
        T::from_magnitude(self.0)
    }
}

impl<U: Kinded> Quantity<U> {
    /// Runtime discriminant of this value's unit.
    ///
    /// The kind is fixed by the type `U` and never changes after
    /// construction; this accessor merely reflects it for introspection and
    /// display decisions.
    ///
    /// ```rust
    /// use mensura_core::time::{Minutes, TimeUnit};
    /// assert_eq!(Minutes::new(5.0).unit(), TimeUnit::Minutes);
    /// ```
    #[inline]
    pub const fn unit(self) -> U::Kind {
        U::KIND
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────
//
// Binary operators accept any right-hand unit of the same dimension. The
// right operand is converted into the left operand's unit and the output
// keeps the left type; `Inches + Millimeters` is `Inches`.

impl<L: Unit, R: Unit<Dim = L::Dim>> Add<Quantity<R>> for Quantity<L> {
    type Output = Quantity<L>;
    #[inline]
    fn add(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.0 + rhs.to::<L>().value())
    }
}

impl<L: Unit, R: Unit<Dim = L::Dim>> AddAssign<Quantity<R>> for Quantity<L> {
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<R>) {
        self.0 += rhs.to::<L>().value();
    }
}

impl<L: Unit, R: Unit<Dim = L::Dim>> Sub<Quantity<R>> for Quantity<L> {
    type Output = Quantity<L>;
    #[inline]
    fn sub(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.0 - rhs.to::<L>().value())
    }
}

impl<L: Unit, R: Unit<Dim = L::Dim>> SubAssign<Quantity<R>> for Quantity<L> {
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<R>) {
        self.0 -= rhs.to::<L>().value();
    }
}

impl<L: Unit, R: Unit<Dim = L::Dim>> Mul<Quantity<R>> for Quantity<L> {
    type Output = Quantity<L>;
    #[inline]
    fn mul(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.0 * rhs.to::<L>().value())
    }
}

impl<L: Unit, R: Unit<Dim = L::Dim>> Div<Quantity<R>> for Quantity<L> {
    type Output = Quantity<L>;
    #[inline]
    fn div(self, rhs: Quantity<R>) -> Self::Output {
        Quantity::new(self.0 / rhs.to::<L>().value())
    }
}

impl<L: Unit, R: Unit<Dim = L::Dim>> DivAssign<Quantity<R>> for Quantity<L> {
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<R>) {
        self.0 /= rhs.to::<L>().value();
    }
}

// Raw-number arithmetic: the bare number is interpreted in the quantity's own
// unit. `q += 1.0` / `q -= 1.0` step by exactly one of the value's unit.

impl<U: Unit> Add<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.0 + rhs)
    }
}

impl<U: Unit> AddAssign<f64> for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        self.0 += rhs;
    }
}

impl<U: Unit> Sub<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.0 - rhs)
    }
}

impl<U: Unit> SubAssign<f64> for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        self.0 -= rhs;
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<U: Unit> Rem<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Self::new(self.0 % rhs)
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────
//
// One rule for `==` and `<` alike: the right operand is converted into the
// left operand's unit and magnitudes are compared. For same-type operands the
// conversion is the identity, so equality is bit-for-bit with no tolerance.

impl<L: Unit, R: Unit<Dim = L::Dim>> PartialEq<Quantity<R>> for Quantity<L> {
    #[inline]
    fn eq(&self, other: &Quantity<R>) -> bool {
        self.0 == other.to::<L>().value()
    }
}

impl<L: Unit, R: Unit<Dim = L::Dim>> PartialOrd<Quantity<R>> for Quantity<L> {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<R>) -> Option<Ordering> {
        self.0.partial_cmp(&other.to::<L>().value())
    }
}

impl<U: Unit> PartialEq<f64> for Quantity<U> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Numeric interop
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> From<f64> for Quantity<U> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl<U: Unit> From<Quantity<U>> for f64 {
    #[inline]
    fn from(quantity: Quantity<U>) -> f64 {
        quantity.value()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve unit
/// symbols in serialized data, e.g. for configuration files that a human
/// edits or for self-documenting layout exports.
///
/// # Examples
///
/// ```rust
/// use mensura_core::length::Millimeters;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct PageSetup {
///     #[serde(with = "mensura_core::serde_with_unit")]
///     margin: Millimeters,  // Serializes as {"value": 12.7, "unit": "mm"}
///
///     gutter: Millimeters,  // Serializes as 4.2 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a `Quantity<U>` as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 12.7, "unit": "mm"}
    /// ```
    pub fn serialize<U, S>(quantity: &Quantity<U>, serializer: S) -> Result<S::Ok, S::Error>
    where
        U: Unit,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("unit", U::SYMBOL)?;
        state.end()
    }

    /// Deserializes a `Quantity<U>` from a struct with `value` and optionally `unit` fields.
    ///
    /// The `unit` field is validated if present, but not required, so data
    /// written with the plain compact representation still loads.
    pub fn deserialize<'de, U, D>(deserializer: D) -> Result<Quantity<U>, D::Error>
    where
        U: Unit,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<U>(core::marker::PhantomData<U>);

        impl<'de, U: Unit> Visitor<'de> for QuantityVisitor<U> {
            type Value = Quantity<U>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<U>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut unit: Option<&'de str> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit_str) = unit {
                    if unit_str != U::SYMBOL {
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected '{}', found '{}'",
                            U::SYMBOL,
                            unit_str
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(core::marker::PhantomData),
        )
    }
}
