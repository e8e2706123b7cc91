// SPDX-License-Identifier: MPL-2.0
//! Lifecycle state as seen by callers.

/// Where a banner is in its lifecycle.
///
/// A banner starts `Hidden`, becomes `Showing` when its entrance animation
/// starts, goes back to `Hidden` when its exit animation starts and ends
/// `Gone` once it has been detached from its surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerState {
    /// Not attached, or on its way out.
    #[default]
    Hidden,
    /// Attached and visible (or sliding in).
    Showing,
    /// Detached for good.
    Gone,
}

impl BannerState {
    #[must_use]
    pub fn is_showing(self) -> bool {
        self == BannerState::Showing
    }

    #[must_use]
    pub fn is_gone(self) -> bool {
        self == BannerState::Gone
    }
}
