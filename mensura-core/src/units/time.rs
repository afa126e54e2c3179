//! Duration units.
//!
//! The canonical scaling unit for this dimension is [`Nanosecond`]
//! (`Nanosecond::RATIO == 1.0`): with nanoseconds as the hub, every ratio in
//! the family (`1, 1e3, 1e6, 1e9, 6e10`) is an exactly representable double,
//! so conversions between defined multiples are bit-exact. The SI *normal
//! form* is still seconds, exposed by [`Quantity::to_si`] and
//! [`TimeValue::to_si`].
//!
//! ```rust
//! use mensura_core::time::{Seconds, TimeUnit};
//!
//! let t = Seconds::new(90.0);
//! assert_eq!(t.to_minutes().value(), 1.5);
//! assert_eq!(t.to_nanoseconds().value(), 9e10);
//! assert_eq!(TimeUnit::best_display_unit(9e10), TimeUnit::Minutes);
//! ```

use crate::{Dimension, Quantity, Unit};
use mensura_derive::Unit;

/// Dimension tag for time.
pub enum Time {}
impl Dimension for Time {}

/// Runtime discriminant for the duration units of this module.
///
/// The discriminant values record each unit's relation to the second:
/// negative values are decimal exponents (`Nanoseconds = -9` ⇒ `1e-9 s`) and
/// positive values are whole-second multiples. [`TimeUnit::None`] and
/// [`TimeUnit::Auto`] are policy markers for formatting code, not measurable
/// units; they are never stored as a value's actual kind, and asking them for
/// a ratio or symbol panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i64)]
pub enum TimeUnit {
    /// No unit selected.
    None = 0,
    /// Nanoseconds (`1e-9 s`).
    Nanoseconds = -9,
    /// Microseconds (`1e-6 s`).
    Microseconds = -6,
    /// Milliseconds (`1e-3 s`).
    Milliseconds = -3,
    /// Seconds.
    Seconds = 1,
    /// Minutes (`60 s`).
    Minutes = 60,
    /// Pick the most readable unit for the magnitude at display time.
    Auto = 61,
}

impl TimeUnit {
    /// Nanoseconds per one of this unit.
    ///
    /// # Panics
    ///
    /// Panics for [`TimeUnit::None`] and [`TimeUnit::Auto`], which do not
    /// name a measurable unit.
    #[inline]
    pub const fn ratio(self) -> f64 {
        match self {
            TimeUnit::Nanoseconds => Nanosecond::RATIO,
            TimeUnit::Microseconds => Microsecond::RATIO,
            TimeUnit::Milliseconds => Millisecond::RATIO,
            TimeUnit::Seconds => Second::RATIO,
            TimeUnit::Minutes => Minute::RATIO,
            TimeUnit::None | TimeUnit::Auto => {
                panic!("TimeUnit::None and TimeUnit::Auto do not name a measurable unit")
            }
        }
    }

    /// Printable symbol for this unit.
    ///
    /// # Panics
    ///
    /// Panics for [`TimeUnit::None`] and [`TimeUnit::Auto`].
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => Nanosecond::SYMBOL,
            TimeUnit::Microseconds => Microsecond::SYMBOL,
            TimeUnit::Milliseconds => Millisecond::SYMBOL,
            TimeUnit::Seconds => Second::SYMBOL,
            TimeUnit::Minutes => Minute::SYMBOL,
            TimeUnit::None | TimeUnit::Auto => {
                panic!("TimeUnit::None and TimeUnit::Auto do not name a measurable unit")
            }
        }
    }

    /// Converts a magnitude between any two duration units.
    ///
    /// Pure: finite input never fails, non-finite input propagates per
    /// IEEE-754. Conversion onto the same scale is the identity.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is [`TimeUnit::None`] or [`TimeUnit::Auto`].
    #[inline]
    pub const fn convert(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
        if from.ratio() == to.ratio() {
            value
        } else {
            (value * from.ratio()) / to.ratio()
        }
    }

    /// Picks the unit in which a duration reads best.
    ///
    /// Given a magnitude in nanoseconds, returns the coarsest unit in which
    /// the magnitude's integer part is at least one, falling back to
    /// [`TimeUnit::Nanoseconds`] for zero, sub-nanosecond, and `NaN`
    /// magnitudes. The sign is ignored. Deterministic and pure; this is the
    /// resolution step behind [`TimeUnit::Auto`].
    ///
    /// ```rust
    /// use mensura_core::time::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::best_display_unit(999.0), TimeUnit::Nanoseconds);
    /// assert_eq!(TimeUnit::best_display_unit(1000.0), TimeUnit::Microseconds);
    /// ```
    pub fn best_display_unit(nanos: f64) -> TimeUnit {
        const COARSE_TO_FINE: [TimeUnit; 5] = [
            TimeUnit::Minutes,
            TimeUnit::Seconds,
            TimeUnit::Milliseconds,
            TimeUnit::Microseconds,
            TimeUnit::Nanoseconds,
        ];

        for unit in COARSE_TO_FINE {
            if (nanos / unit.ratio()).abs() >= 1.0 {
                return unit;
            }
        }
        TimeUnit::Nanoseconds
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit markers
// ─────────────────────────────────────────────────────────────────────────────

/// Nanosecond (canonical scaling unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ns", dimension = Time, ratio = 1.0, kind = TimeUnit::Nanoseconds)]
pub struct Nanosecond;
/// A duration measured in nanoseconds.
pub type Nanoseconds = Quantity<Nanosecond>;
/// One nanosecond.
pub const NANOSEC: Nanoseconds = Nanoseconds::new(1.0);

/// Microsecond (`1e3 ns`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µs", dimension = Time, ratio = 1e3, kind = TimeUnit::Microseconds)]
pub struct Microsecond;
/// A duration measured in microseconds.
pub type Microseconds = Quantity<Microsecond>;
/// One microsecond.
pub const MICROSEC: Microseconds = Microseconds::new(1.0);

/// Millisecond (`1e6 ns`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", dimension = Time, ratio = 1e6, kind = TimeUnit::Milliseconds)]
pub struct Millisecond;
/// A duration measured in milliseconds.
pub type Milliseconds = Quantity<Millisecond>;
/// One millisecond.
pub const MILLISEC: Milliseconds = Milliseconds::new(1.0);

/// Second (SI base unit, `1e9 ns`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", dimension = Time, ratio = 1e9, kind = TimeUnit::Seconds)]
pub struct Second;
/// A duration measured in seconds.
pub type Seconds = Quantity<Second>;
/// One second.
pub const SEC: Seconds = Seconds::new(1.0);

/// Minute (`60 s`, `6e10 ns`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", dimension = Time, ratio = 6e10, kind = TimeUnit::Minutes)]
pub struct Minute;
/// A duration measured in minutes.
pub type Minutes = Quantity<Minute>;
/// One minute.
pub const MIN: Minutes = Minutes::new(1.0);

// ─────────────────────────────────────────────────────────────────────────────
// Named conversions
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_time_methods {
    ($($unit:ty),+ $(,)?) => {$(
        impl Quantity<$unit> {
            /// This duration expressed in nanoseconds.
            #[inline]
            pub const fn to_nanoseconds(self) -> Nanoseconds {
                self.to::<Nanosecond>()
            }

            /// This duration expressed in microseconds.
            #[inline]
            pub const fn to_microseconds(self) -> Microseconds {
                self.to::<Microsecond>()
            }

            /// This duration expressed in milliseconds.
            #[inline]
            pub const fn to_milliseconds(self) -> Milliseconds {
                self.to::<Millisecond>()
            }

            /// This duration expressed in seconds.
            #[inline]
            pub const fn to_seconds(self) -> Seconds {
                self.to::<Second>()
            }

            /// This duration expressed in minutes.
            #[inline]
            pub const fn to_minutes(self) -> Minutes {
                self.to::<Minute>()
            }

            /// Normalizes to the SI unit of time.
            #[inline]
            pub const fn to_si(self) -> Seconds {
                self.to::<Second>()
            }

            /// Magnitude of this duration expressed in `unit`, as a bare
            /// number.
            ///
            /// Asking for the value's own unit returns the magnitude
            /// unchanged.
            ///
            /// # Panics
            ///
            /// Panics for [`TimeUnit::None`] and [`TimeUnit::Auto`].
            #[inline]
            pub const fn value_in(self, unit: TimeUnit) -> f64 {
                if <$unit as Unit>::RATIO == unit.ratio() {
                    self.value()
                } else {
                    (self.value() * <$unit as Unit>::RATIO) / unit.ratio()
                }
            }

            /// Unit in which this duration reads best, per
            /// [`TimeUnit::best_display_unit`].
            ///
            /// ```rust
            /// use mensura_core::time::{Milliseconds, TimeUnit};
            ///
            /// assert_eq!(Milliseconds::new(0.25).display_unit(), TimeUnit::Microseconds);
            /// ```
            #[inline]
            pub fn display_unit(self) -> TimeUnit {
                TimeUnit::best_display_unit(self.to::<Nanosecond>().value())
            }
        }
    )+};
}

impl_time_methods!(Nanosecond, Microsecond, Millisecond, Second, Minute);

// Generate all bidirectional From implementations between duration units.
crate::impl_unit_conversions!(Nanosecond, Microsecond, Millisecond, Second, Minute);

// ─────────────────────────────────────────────────────────────────────────────
// Runtime-kinded durations
// ─────────────────────────────────────────────────────────────────────────────

/// A duration whose unit is chosen at runtime rather than in the type system.
///
/// The five kinds form a closed set, matched exhaustively; there is no
/// fallthrough branch to reach. Use this where the unit is data — a column
/// read from configuration, a formatting decision — and the typed quantities
/// everywhere else. Comparison is by physical duration, via the SI normal
/// form:
///
/// ```rust
/// use mensura_core::time::TimeValue;
///
/// assert_eq!(TimeValue::Seconds(90.0), TimeValue::Minutes(1.5));
/// assert!(TimeValue::Milliseconds(1.0) < TimeValue::Seconds(1.0));
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeValue {
    /// Duration counted in nanoseconds.
    Nanoseconds(f64),
    /// Duration counted in microseconds.
    Microseconds(f64),
    /// Duration counted in milliseconds.
    Milliseconds(f64),
    /// Duration counted in seconds.
    Seconds(f64),
    /// Duration counted in minutes.
    Minutes(f64),
}

impl TimeValue {
    /// Builds a value of `unit` from a magnitude already expressed in that unit.
    ///
    /// # Panics
    ///
    /// Panics for [`TimeUnit::None`] and [`TimeUnit::Auto`], which cannot be
    /// stored as a value's kind.
    #[inline]
    pub const fn new(value: f64, unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Nanoseconds => TimeValue::Nanoseconds(value),
            TimeUnit::Microseconds => TimeValue::Microseconds(value),
            TimeUnit::Milliseconds => TimeValue::Milliseconds(value),
            TimeUnit::Seconds => TimeValue::Seconds(value),
            TimeUnit::Minutes => TimeValue::Minutes(value),
            TimeUnit::None | TimeUnit::Auto => {
                panic!("TimeUnit::None and TimeUnit::Auto cannot be stored as a value's unit")
            }
        }
    }

    /// The magnitude, in this value's own unit.
    #[inline]
    pub const fn value(self) -> f64 {
        match self {
            TimeValue::Nanoseconds(v)
            | TimeValue::Microseconds(v)
            | TimeValue::Milliseconds(v)
            | TimeValue::Seconds(v)
            | TimeValue::Minutes(v) => v,
        }
    }

    /// Runtime discriminant of this value's unit.
    #[inline]
    pub const fn unit(self) -> TimeUnit {
        match self {
            TimeValue::Nanoseconds(_) => TimeUnit::Nanoseconds,
            TimeValue::Microseconds(_) => TimeUnit::Microseconds,
            TimeValue::Milliseconds(_) => TimeUnit::Milliseconds,
            TimeValue::Seconds(_) => TimeUnit::Seconds,
            TimeValue::Minutes(_) => TimeUnit::Minutes,
        }
    }

    /// Re-expresses this duration in `unit`.
    ///
    /// # Panics
    ///
    /// Panics for [`TimeUnit::None`] and [`TimeUnit::Auto`].
    #[inline]
    pub const fn to_unit(self, unit: TimeUnit) -> TimeValue {
        TimeValue::new(TimeUnit::convert(self.value(), self.unit(), unit), unit)
    }

    /// Normalizes to the SI unit of time.
    #[inline]
    pub const fn to_si(self) -> Seconds {
        Seconds::new(TimeUnit::convert(
            self.value(),
            self.unit(),
            TimeUnit::Seconds,
        ))
    }

    /// Re-expresses this duration in the unit it reads best in, per
    /// [`TimeUnit::best_display_unit`].
    ///
    /// ```rust
    /// use mensura_core::time::{TimeUnit, TimeValue};
    ///
    /// let raw = TimeValue::Nanoseconds(9e10);
    /// assert_eq!(raw.normalize().unit(), TimeUnit::Minutes);
    /// assert_eq!(raw.normalize().value(), 1.5);
    /// ```
    #[inline]
    pub fn normalize(self) -> TimeValue {
        let nanos = TimeUnit::convert(self.value(), self.unit(), TimeUnit::Nanoseconds);
        self.to_unit(TimeUnit::best_display_unit(nanos))
    }
}

impl PartialEq for TimeValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_si().value() == other.to_si().value()
    }
}

impl PartialOrd for TimeValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.to_si().value().partial_cmp(&other.to_si().value())
    }
}

impl<U: Unit<Dim = Time>> PartialEq<Quantity<U>> for TimeValue {
    #[inline]
    fn eq(&self, other: &Quantity<U>) -> bool {
        self.to_si().value() == other.to::<Second>().value()
    }
}

impl<U: Unit<Dim = Time>> PartialEq<TimeValue> for Quantity<U> {
    #[inline]
    fn eq(&self, other: &TimeValue) -> bool {
        self.to::<Second>().value() == other.to_si().value()
    }
}

impl<U: Unit<Dim = Time>> PartialOrd<Quantity<U>> for TimeValue {
    #[inline]
    fn partial_cmp(&self, other: &Quantity<U>) -> Option<core::cmp::Ordering> {
        self.to_si().value().partial_cmp(&other.to::<Second>().value())
    }
}

impl<U: Unit<Dim = Time>> PartialOrd<TimeValue> for Quantity<U> {
    #[inline]
    fn partial_cmp(&self, other: &TimeValue) -> Option<core::cmp::Ordering> {
        self.to::<Second>().value().partial_cmp(&other.to_si().value())
    }
}

impl core::fmt::Display for TimeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.value(), self.unit().symbol())
    }
}

impl From<Nanoseconds> for TimeValue {
    #[inline]
    fn from(q: Nanoseconds) -> Self {
        TimeValue::Nanoseconds(q.value())
    }
}

impl From<Microseconds> for TimeValue {
    #[inline]
    fn from(q: Microseconds) -> Self {
        TimeValue::Microseconds(q.value())
    }
}

impl From<Milliseconds> for TimeValue {
    #[inline]
    fn from(q: Milliseconds) -> Self {
        TimeValue::Milliseconds(q.value())
    }
}

impl From<Seconds> for TimeValue {
    #[inline]
    fn from(q: Seconds) -> Self {
        TimeValue::Seconds(q.value())
    }
}

impl From<Minutes> for TimeValue {
    #[inline]
    fn from(q: Minutes) -> Self {
        TimeValue::Minutes(q.value())
    }
}

impl From<TimeValue> for Seconds {
    #[inline]
    fn from(value: TimeValue) -> Seconds {
        value.to_si()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Defined-ratio exactness
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn second_to_milliseconds_exact() {
        assert_eq!(Seconds::new(1.0).to_milliseconds().value(), 1000.0);
    }

    #[test]
    fn minute_to_seconds_exact() {
        assert_eq!(Minutes::new(1.0).to_seconds().value(), 60.0);
    }

    #[test]
    fn second_to_nanoseconds_exact() {
        assert_eq!(Seconds::new(1.0).to_nanoseconds().value(), 1_000_000_000.0);
    }

    #[test]
    fn ninety_seconds_is_one_and_a_half_minutes() {
        assert_eq!(Seconds::new(90.0).to_minutes().value(), 1.5);
    }

    #[test]
    fn thousand_nanoseconds_is_one_microsecond() {
        assert_eq!(Nanoseconds::new(1000.0).to_microseconds().value(), 1.0);
    }

    #[test]
    fn si_normal_form_is_seconds() {
        assert_eq!(Minutes::new(2.0).to_si().value(), 120.0);
        assert_eq!(Milliseconds::new(250.0).to_si().value(), 0.25);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Runtime conversion component
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn convert_matches_typed_conversion() {
        let typed = Minutes::new(0.5).to_milliseconds().value();
        let raw = TimeUnit::convert(0.5, TimeUnit::Minutes, TimeUnit::Milliseconds);
        assert_eq!(typed, raw);
        assert_eq!(raw, 30_000.0);
    }

    #[test]
    fn convert_same_unit_is_identity() {
        let v = 123.456789;
        assert_eq!(
            TimeUnit::convert(v, TimeUnit::Microseconds, TimeUnit::Microseconds),
            v
        );
    }

    #[test]
    fn value_in_own_unit_is_identity() {
        let t = Milliseconds::new(16.7);
        assert_eq!(t.value_in(TimeUnit::Milliseconds), 16.7);
    }

    #[test]
    fn value_in_discards_the_unit() {
        let t = Seconds::new(1.5);
        assert_eq!(t.value_in(TimeUnit::Milliseconds), 1500.0);
        assert_eq!(t.value_in(TimeUnit::Minutes), 0.025);
    }

    #[test]
    fn discriminants_follow_the_exponent_scheme() {
        assert_eq!(TimeUnit::None as i64, 0);
        assert_eq!(TimeUnit::Nanoseconds as i64, -9);
        assert_eq!(TimeUnit::Microseconds as i64, -6);
        assert_eq!(TimeUnit::Milliseconds as i64, -3);
        assert_eq!(TimeUnit::Seconds as i64, 1);
        assert_eq!(TimeUnit::Minutes as i64, 60);
    }

    #[test]
    #[should_panic(expected = "do not name a measurable unit")]
    fn ratio_of_none_panics() {
        let _ = TimeUnit::None.ratio();
    }

    #[test]
    #[should_panic(expected = "do not name a measurable unit")]
    fn symbol_of_auto_panics() {
        let _ = TimeUnit::Auto.symbol();
    }

    #[test]
    #[should_panic(expected = "do not name a measurable unit")]
    fn value_in_auto_panics() {
        let _ = Seconds::new(1.0).value_in(TimeUnit::Auto);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Display-unit policy
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn boundary_999_nanoseconds_stays_nanoseconds() {
        assert_eq!(TimeUnit::best_display_unit(999.0), TimeUnit::Nanoseconds);
    }

    #[test]
    fn boundary_1000_nanoseconds_becomes_microseconds() {
        assert_eq!(TimeUnit::best_display_unit(1000.0), TimeUnit::Microseconds);
    }

    #[test]
    fn zero_and_subnanosecond_fall_back_to_nanoseconds() {
        assert_eq!(TimeUnit::best_display_unit(0.0), TimeUnit::Nanoseconds);
        assert_eq!(TimeUnit::best_display_unit(0.5), TimeUnit::Nanoseconds);
        assert_eq!(TimeUnit::best_display_unit(f64::NAN), TimeUnit::Nanoseconds);
    }

    #[test]
    fn sign_does_not_change_the_display_unit() {
        assert_eq!(TimeUnit::best_display_unit(-1e9), TimeUnit::Seconds);
        assert_eq!(TimeUnit::best_display_unit(-999.0), TimeUnit::Nanoseconds);
    }

    #[test]
    fn coarsest_unit_wins() {
        assert_eq!(TimeUnit::best_display_unit(6e10), TimeUnit::Minutes);
        assert_eq!(TimeUnit::best_display_unit(5.9e10), TimeUnit::Seconds);
        assert_eq!(TimeUnit::best_display_unit(2.5e6), TimeUnit::Milliseconds);
    }

    #[test]
    fn display_unit_of_typed_quantities() {
        assert_eq!(Seconds::new(0.25).display_unit(), TimeUnit::Milliseconds);
        assert_eq!(Minutes::new(3.0).display_unit(), TimeUnit::Minutes);
        assert_eq!(Nanoseconds::new(12.0).display_unit(), TimeUnit::Nanoseconds);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Runtime-kinded durations
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn time_value_round_trips_kind_and_magnitude() {
        let v = TimeValue::new(16.7, TimeUnit::Milliseconds);
        assert_eq!(v.unit(), TimeUnit::Milliseconds);
        assert_eq!(v.value(), 16.7);
    }

    #[test]
    #[should_panic(expected = "cannot be stored")]
    fn time_value_refuses_auto() {
        let _ = TimeValue::new(1.0, TimeUnit::Auto);
    }

    #[test]
    fn time_value_to_unit_is_polymorphic() {
        let v = TimeValue::Seconds(90.0).to_unit(TimeUnit::Minutes);
        assert_eq!(v.unit(), TimeUnit::Minutes);
        assert_eq!(v.value(), 1.5);
    }

    #[test]
    fn time_value_equality_spans_kinds() {
        assert_eq!(TimeValue::Seconds(1.0), TimeValue::Milliseconds(1000.0));
        assert_ne!(TimeValue::Seconds(1.0), TimeValue::Milliseconds(999.0));
        assert!(TimeValue::Minutes(1.0) > TimeValue::Seconds(59.0));
    }

    #[test]
    fn time_value_compares_against_typed_quantities() {
        assert_eq!(TimeValue::Minutes(1.5), Seconds::new(90.0));
        assert_eq!(Seconds::new(90.0), TimeValue::Minutes(1.5));
        assert!(TimeValue::Seconds(1.0) < Minutes::new(1.0));
        assert!(Minutes::new(1.0) > TimeValue::Seconds(59.0));
    }

    #[test]
    fn time_value_to_si() {
        assert_eq!(TimeValue::Minutes(2.0).to_si().value(), 120.0);
        let s: Seconds = TimeValue::Milliseconds(1500.0).into();
        assert_eq!(s.value(), 1.5);
    }

    #[test]
    fn time_value_normalize_picks_readable_units() {
        let v = TimeValue::Nanoseconds(2.5e6).normalize();
        assert_eq!(v.unit(), TimeUnit::Milliseconds);
        assert_eq!(v.value(), 2.5);

        let tiny = TimeValue::Seconds(5e-10).normalize();
        assert_eq!(tiny.unit(), TimeUnit::Nanoseconds);
        assert_abs_diff_eq!(tiny.value(), 0.5, epsilon = 1e-15);
    }

    #[test]
    fn time_value_display() {
        assert_eq!(format!("{}", TimeValue::Minutes(12.0)), "12 min");
        assert_eq!(format!("{}", TimeValue::Microseconds(3.5)), "3.5 µs");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Typed quantities: arithmetic, ordering, display
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn mixed_addition_keeps_left_unit() {
        let sum = Seconds::new(1.0) + Milliseconds::new(500.0);
        assert_eq!(sum.unit(), TimeUnit::Seconds);
        assert_eq!(sum.value(), 1.5);
    }

    #[test]
    fn timer_interval_accumulation() {
        let mut deadline = Milliseconds::new(0.0);
        for _ in 0..3 {
            deadline += Seconds::new(0.1);
        }
        assert_abs_diff_eq!(deadline.value(), 300.0, epsilon = 1e-9);
    }

    #[test]
    fn ordering_is_consistent_across_units() {
        assert!(Milliseconds::new(999.0) < Seconds::new(1.0));
        assert!(Minutes::new(1.0) > Seconds::new(59.0));
        assert_eq!(Minutes::new(1.5), Seconds::new(90.0));
    }

    #[test]
    fn display_prints_value_and_symbol() {
        assert_eq!(format!("{}", Minutes::new(12.0)), "12 min");
        assert_eq!(format!("{}", Seconds::new(0.5)), "0.5 s");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_seconds_minutes(v in -1e6..1e6f64) {
            let original = Seconds::new(v);
            let back = original.to_minutes().to_seconds();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_roundtrip_nanos_minutes(v in -1e6..1e6f64) {
            let original = Nanoseconds::new(v);
            let back = original.to_minutes().to_nanoseconds();
            prop_assert!((back.value() - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn prop_time_value_agrees_with_typed(v in -1e6..1e6f64) {
            let typed = Milliseconds::new(v).to_seconds().value();
            let dynamic = TimeValue::Milliseconds(v).to_si().value();
            prop_assert_eq!(typed, dynamic);
        }

        #[test]
        fn prop_display_unit_magnitude_is_readable(v in 1.0..1e15f64) {
            let unit = TimeUnit::best_display_unit(v);
            let shown = (v / unit.ratio()).abs();
            prop_assert!(shown >= 1.0);
        }
    }
}
