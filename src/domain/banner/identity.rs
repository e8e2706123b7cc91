// SPDX-License-Identifier: MPL-2.0
//! Identifiers for banners and the surfaces that host them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for a banner.
///
/// Identifiers are handed out in creation order, so sorting by id sorts by
/// creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BannerId(u64);

impl BannerId {
    /// Creates a new unique banner ID.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for BannerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BannerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "banner#{}", self.0)
    }
}

/// Opaque handle for a host surface (a window, a view, a layer).
///
/// The core never interprets the value; it only hands it back to the
/// layout port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Wraps a raw surface handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}
