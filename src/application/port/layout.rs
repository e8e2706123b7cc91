// SPDX-License-Identifier: MPL-2.0
//! Layout port.
//!
//! The core states where a banner should sit; the adapter turns that into
//! constraints, offsets or whatever its toolkit understands.

use crate::domain::banner::{BannerId, Edge, SurfaceId};

/// Distance a banner is pushed past its edge so its shadow clears the
/// visible area while hidden, and overlaps the edge while showing.
pub const SHADOW_INSET: f32 = 7.0;

/// Which of the two positions a banner should occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Fully outside the surface, just past its home edge.
    Hidden,
    /// Flush with its home edge, inside the surface.
    Showing,
}

/// A declarative placement request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    pub anchor: Anchor,
    pub edge: Edge,
    /// Offset applied past the home edge, see [`SHADOW_INSET`].
    pub inset: f32,
    /// Reserve room for a status bar above the content.
    pub status_bar_inset: bool,
}

/// Receives layout requests from the banner core.
///
/// Every lifecycle transition produces exactly one call here before any
/// animation is requested, so the adapter can lay out the new target
/// position first.
pub trait LayoutSink {
    /// Adds the banner to `surface`, anchored to `edge`.
    fn attach(&mut self, banner: BannerId, surface: SurfaceId, edge: Edge);

    /// Moves the banner's target position.
    fn place(&mut self, banner: BannerId, request: LayoutRequest);

    /// Removes the banner and all of its constraints from its surface.
    fn detach(&mut self, banner: BannerId);
}
