// SPDX-License-Identifier: MPL-2.0
//! In-memory layout adapter.
//!
//! Keeps the latest placement request of every attached banner. Renderers
//! read it to decide where to draw; tests read it to check what the core
//! asked for.

use crate::application::port::{Anchor, LayoutRequest, LayoutSink};
use crate::domain::banner::{BannerId, Edge, SurfaceId};
use std::collections::HashMap;

/// Where an attached banner lives and where it was last asked to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub surface: SurfaceId,
    pub edge: Edge,
    /// Latest request; `None` right after attaching.
    pub request: Option<LayoutRequest>,
}

impl Placement {
    /// Current target anchor; freshly attached banners sit hidden.
    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.request.map_or(Anchor::Hidden, |r| r.anchor)
    }
}

/// Records placements per banner.
#[derive(Debug, Clone, Default)]
pub struct LayoutBook {
    placements: HashMap<BannerId, Placement>,
    passes: usize,
}

impl LayoutBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn placement(&self, banner: BannerId) -> Option<&Placement> {
        self.placements.get(&banner)
    }

    #[must_use]
    pub fn is_attached(&self, banner: BannerId) -> bool {
        self.placements.contains_key(&banner)
    }

    /// Banners attached to `surface`, in no particular order.
    pub fn attached_to(&self, surface: SurfaceId) -> impl Iterator<Item = BannerId> + '_ {
        self.placements
            .iter()
            .filter(move |(_, p)| p.surface == surface)
            .map(|(id, _)| *id)
    }

    /// Number of layout passes performed (placements and detachments).
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl LayoutSink for LayoutBook {
    fn attach(&mut self, banner: BannerId, surface: SurfaceId, edge: Edge) {
        self.placements.insert(
            banner,
            Placement {
                surface,
                edge,
                request: None,
            },
        );
    }

    fn place(&mut self, banner: BannerId, request: LayoutRequest) {
        match self.placements.get_mut(&banner) {
            Some(placement) => {
                placement.request = Some(request);
                self.passes += 1;
            }
            None => tracing::warn!(banner = %banner, "layout request for a detached banner"),
        }
    }

    fn detach(&mut self, banner: BannerId) {
        if self.placements.remove(&banner).is_some() {
            self.passes += 1;
        }
    }
}
