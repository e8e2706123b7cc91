// SPDX-License-Identifier: MPL-2.0
//! Banner newtypes.
//!
//! This module provides type-safe wrappers for banner timing and appearance
//! values, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// AnimationDuration
// =============================================================================

/// Animation duration bounds, in milliseconds.
pub mod animation_duration_bounds {
    /// Minimum animation duration.
    pub const MIN_MS: u32 = 100;
    /// Maximum animation duration.
    pub const MAX_MS: u32 = 2_000;
    /// Default animation duration.
    pub const DEFAULT_MS: u32 = 400;
}

/// Length of a single entrance or exit animation (100 ms–2 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AnimationDuration(u32);

impl AnimationDuration {
    /// Creates a new animation duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u32) -> Self {
        Self(millis.clamp(
            animation_duration_bounds::MIN_MS,
            animation_duration_bounds::MAX_MS,
        ))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for AnimationDuration {
    fn default() -> Self {
        Self(animation_duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// AutoDismiss
// =============================================================================

/// Auto-dismiss delay bounds, in seconds.
pub mod auto_dismiss_bounds {
    /// Minimum delay.
    pub const MIN_SECS: u32 = 1;
    /// Maximum delay.
    pub const MAX_SECS: u32 = 60;
    /// Default delay.
    pub const DEFAULT_SECS: u32 = 3;
}

/// Delay after which a shown banner dismisses itself (1–60 s).
///
/// Used for persisted settings; code paths that build banners directly may
/// pass any [`Duration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoDismiss(u32);

impl AutoDismiss {
    /// Creates a new delay, clamping to the valid range.
    #[must_use]
    pub fn from_secs(secs: u32) -> Self {
        Self(secs.clamp(auto_dismiss_bounds::MIN_SECS, auto_dismiss_bounds::MAX_SECS))
    }

    #[must_use]
    pub fn secs(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(u64::from(self.0))
    }
}

impl Default for AutoDismiss {
    fn default() -> Self {
        Self(auto_dismiss_bounds::DEFAULT_SECS)
    }
}

// =============================================================================
// Opacity
// =============================================================================

/// Background opacity, guaranteed to be within `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Opacity(f32);

impl Opacity {
    /// Default banner background opacity.
    pub const DEFAULT: f32 = 0.95;

    /// Creates a new opacity, clamping to `0.0..=1.0`. NaN becomes opaque.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(1.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Opacity {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}
