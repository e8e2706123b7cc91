// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Animation**: Entrance/exit animation duration bounds
//! - **Auto-dismiss**: Delay before a banner hides itself
//! - **Gestures**: Which gestures dismiss a banner

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of an entrance or exit animation (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 400;

/// Minimum animation duration (in milliseconds).
pub const MIN_ANIMATION_DURATION_MS: u32 = 100;

/// Maximum animation duration (in milliseconds).
pub const MAX_ANIMATION_DURATION_MS: u32 = 2_000;

// ==========================================================================
// Auto-dismiss Defaults
// ==========================================================================

/// Default auto-dismiss delay when one is enabled (in seconds).
pub const DEFAULT_AUTO_DISMISS_SECS: u32 = 3;

/// Minimum auto-dismiss delay (in seconds).
pub const MIN_AUTO_DISMISS_SECS: u32 = 1;

/// Maximum auto-dismiss delay (in seconds).
pub const MAX_AUTO_DISMISS_SECS: u32 = 60;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Banners dismiss on tap unless configured otherwise.
pub const DEFAULT_DISMISSES_ON_TAP: bool = true;

/// Banners dismiss on swipe unless configured otherwise.
pub const DEFAULT_DISMISSES_ON_SWIPE: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Animation validation
    assert!(MIN_ANIMATION_DURATION_MS > 0);
    assert!(MAX_ANIMATION_DURATION_MS >= MIN_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS >= MIN_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ANIMATION_DURATION_MS <= MAX_ANIMATION_DURATION_MS);

    // Auto-dismiss validation
    assert!(MIN_AUTO_DISMISS_SECS > 0);
    assert!(MAX_AUTO_DISMISS_SECS >= MIN_AUTO_DISMISS_SECS);
    assert!(DEFAULT_AUTO_DISMISS_SECS >= MIN_AUTO_DISMISS_SECS);
    assert!(DEFAULT_AUTO_DISMISS_SECS <= MAX_AUTO_DISMISS_SECS);
};
