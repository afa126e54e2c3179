//! Core type system for strongly typed display-length and duration units.
//!
//! `mensura-core` provides a minimal, zero-cost units model:
//!
//! - A *unit* is a zero-sized marker type implementing [`Unit`].
//! - A value tagged with a unit is a [`Quantity<U>`], backed by an `f64`.
//! - Conversion is an explicit, type-checked scaling via [`Quantity::to`],
//!   routed through the family's canonical scaling unit.
//! - Each family also carries a runtime kind enumeration
//!   ([`length::LengthUnit`], [`time::TimeUnit`]) for the places where the
//!   unit is data rather than a type — column formats, display policies.
//!
//! Most users should depend on `mensura` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (length vs time).
//! - Zero runtime overhead for unit tags (phantom types only).
//! - Exact conversions between the defined unit multiples: the ratio tables
//!   are chosen so that e.g. `25.4 mm == 1 in` and `1 s == 1e9 ns` hold
//!   bit-for-bit, not merely within a tolerance.
//! - Mixed-unit arithmetic and comparison within a family, with the result
//!   always carried in the left operand's unit.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic (`Quantity` is `f64`).
//! - Derived units (`m/s`, `Hz`); the two families are closed and flat.
//! - Calendar time: a `Minutes` value is a duration, not a clock reading.
//!
//! # Quick start
//!
//! Convert between predefined units:
//!
//! ```rust
//! use mensura_core::length::{Millimeter, Pixels};
//!
//! let logical = Pixels::new(96.0);
//! let physical = logical.to::<Millimeter>();
//! assert_eq!(physical.value(), 25.4);
//! ```
//!
//! Mix units inside one family; the left operand's unit wins:
//!
//! ```rust
//! use mensura_core::time::{Milliseconds, Seconds};
//!
//! let frame = Milliseconds::new(500.0) + Seconds::new(1.0);
//! assert_eq!(frame.value(), 1500.0);
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `mensura-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! mensura-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity<U>` (serialized as the raw
//!   `f64`), the kind enumerations, and [`time::TimeValue`].
//!
//! # Panics and errors
//!
//! Conversions and arithmetic are pure `f64` computations; they never fail for
//! valid numeric input and follow IEEE-754 behavior (NaN and infinities
//! propagate). The two failure surfaces are deliberate and distinct:
//!
//! - [`Quantity::try_cast`] returns a [`CastError`] when a magnitude cannot be
//!   represented in the requested primitive type.
//! - Dispatching on [`time::TimeUnit::None`] or [`time::TimeUnit::Auto`] where
//!   a measurable unit is required panics: the unit sets are closed, so such a
//!   dispatch is a programming error, not a recoverable condition.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod cast;
mod dimension;
mod macros;
mod quantity;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use cast::{CastError, FromMagnitude};
pub use dimension::Dimension;
pub use quantity::Quantity;
pub use unit::{Kinded, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined unit modules (grouped by dimension)
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined unit modules (grouped by dimension).
///
/// These are defined in `mensura-core` so they can implement formatting and helper traits without running into Rust's
/// orphan rules.
pub mod units;

pub use units::length;
pub use units::time;
