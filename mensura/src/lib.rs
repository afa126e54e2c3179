//! Strongly typed display-length and duration units.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the
//! full API from `mensura-core`: two closed unit families and the machinery
//! to convert, compare, and format them.
//!
//! The core idea is: a value is always a `Quantity<U>`, where `U` is a
//! zero-sized type describing the unit. This keeps units at compile time with
//! no runtime overhead beyond an `f64`.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add millimetres to seconds).
//! - Makes unit conversion explicit and type-checked (`to::<TargetUnit>()`),
//!   with exact results for the defined ratio multiples.
//! - Mixed-unit arithmetic and ordering inside a family; the result always
//!   keeps the left operand's unit.
//! - Runtime unit dispatch where the unit is data, not a type:
//!   [`LengthUnit`], [`TimeUnit`], and the runtime-kinded [`TimeValue`].
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary unit algebra or derived units (`m/s`); the families are closed and flat.
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Calendar arithmetic: durations are spans, not timestamps.
//!
//! # Quick start
//!
//! Size something for print:
//!
//! ```rust
//! use mensura::{Millimeter, Pixels};
//!
//! let logical = Pixels::new(96.0);
//! let physical = logical.to::<Millimeter>();
//! assert_eq!(physical.value(), 25.4);
//! ```
//!
//! Pick a readable unit for a duration at display time:
//!
//! ```rust
//! use mensura::{TimeUnit, TimeValue};
//!
//! let elapsed = TimeValue::Nanoseconds(2.5e6).normalize();
//! assert_eq!(elapsed.unit(), TimeUnit::Milliseconds);
//! assert_eq!(format!("{elapsed}"), "2.5 ms");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use mensura::{Millimeters, Seconds};
//!
//! let d = Millimeters::new(1.0);
//! let t = Seconds::new(1.0);
//! let _ = d + t; // cannot add quantities of different dimensions
//! ```
//!
//! # Modules
//!
//! Units are grouped by dimension under modules (also re-exported at the crate root for convenience):
//!
//! - `mensura::length` (millimetres, inches, points, device-independent pixels)
//! - `mensura::time` (nanoseconds through minutes, plus [`TimeValue`])
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `mensura-core`.
//! - `serde`: enables `serde` support for quantities (serialized as the raw
//!   `f64`), the kind enumerations, and [`TimeValue`].
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! mensura = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Conversions and arithmetic never fail for valid numeric input; NaN and
//! infinities propagate per IEEE-754. Fallible magnitude casts return a
//! [`CastError`]; dispatching on the policy markers [`TimeUnit::None`] /
//! [`TimeUnit::Auto`] where a measurable unit is required panics, since the
//! unit sets are closed and such a dispatch is a programming error.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use mensura_core::*;

/// Derive macro used by `mensura-core` to define unit marker types.
///
/// This macro expands in terms of `crate::Unit` and `crate::Quantity`, so it is intended for use inside `mensura-core`
/// (or crates exposing the same crate-root API). Most users should not need this.
pub use mensura_derive::Unit;

pub use mensura_core::units::length;
pub use mensura_core::units::time;

pub use mensura_core::units::length::*;
pub use mensura_core::units::time::*;
