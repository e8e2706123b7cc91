// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Spring curves, reveal fractions and animation progress are all `f32`,
//! so tests compare them with the `approx` macros instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for values that should match up to rounding.
pub const F32_EPSILON: f32 = 1e-6;
