// SPDX-License-Identifier: MPL-2.0
//! Host surface lookup port.

use crate::domain::banner::SurfaceId;

/// Finds the surface a banner attaches to when the caller names none.
pub trait SurfaceProvider {
    /// Returns the topmost visible surface, or `None` when nothing is
    /// currently on screen.
    fn active_surface(&self) -> Option<SurfaceId>;
}

impl SurfaceProvider for Option<SurfaceId> {
    fn active_surface(&self) -> Option<SurfaceId> {
        *self
    }
}
