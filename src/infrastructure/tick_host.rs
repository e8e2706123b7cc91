// SPDX-License-Identifier: MPL-2.0
//! Cooperative host driven by explicit ticks.
//!
//! Bundles a [`SurfaceStack`], a [`LayoutBook`] and a [`Timeline`]. The
//! owner calls [`TickHost::advance`] from its UI loop (or a test) and every
//! due animation completion and timer is delivered in order on the calling
//! thread.

use super::{LayoutBook, SurfaceStack, Timeline};
use crate::application::port::{BannerEvent, Platform};
use crate::banner::BannerManager;
use crate::domain::banner::SurfaceId;
use std::time::Duration;

/// Surface pushed by [`TickHost::with_surface`].
pub const DEFAULT_SURFACE: SurfaceId = SurfaceId::new(1);

#[derive(Debug, Default)]
pub struct TickHost {
    surfaces: SurfaceStack,
    layout: LayoutBook,
    timeline: Timeline,
}

impl TickHost {
    /// Creates a host without any surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host with one visible surface, [`DEFAULT_SURFACE`].
    #[must_use]
    pub fn with_surface() -> Self {
        let mut host = Self::default();
        host.surfaces.push(DEFAULT_SURFACE);
        host
    }

    #[must_use]
    pub fn surfaces(&self) -> &SurfaceStack {
        &self.surfaces
    }

    pub fn surfaces_mut(&mut self) -> &mut SurfaceStack {
        &mut self.surfaces
    }

    #[must_use]
    pub fn layout(&self) -> &LayoutBook {
        &self.layout
    }

    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.timeline.now()
    }

    /// Borrows the host as the ports of one lifecycle call.
    pub fn platform(&mut self) -> Platform<'_> {
        Platform::new(&self.surfaces, &mut self.layout, &mut self.timeline)
    }

    /// Moves the clock forward by `by`, handing every due event to
    /// `deliver`. Returns the number of events delivered.
    pub fn advance_with(
        &mut self,
        by: Duration,
        mut deliver: impl FnMut(BannerEvent, &mut Platform<'_>),
    ) -> usize {
        let target = self.timeline.now() + by;
        let mut delivered = 0;
        while let Some(event) = self.timeline.pop_due(target) {
            let mut platform = Platform::new(&self.surfaces, &mut self.layout, &mut self.timeline);
            deliver(event, &mut platform);
            delivered += 1;
        }
        self.timeline.settle(target);
        delivered
    }

    /// Moves the clock forward by `by`, routing every due event to `manager`.
    pub fn advance(&mut self, manager: &mut BannerManager, by: Duration) -> usize {
        self.advance_with(by, |event, platform| manager.handle_event(event, platform))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::{Banner, ShowOptions};
    use crate::domain::banner::BannerContent;

    #[test]
    fn with_surface_exposes_default_surface() {
        let host = TickHost::with_surface();
        assert_eq!(host.surfaces().active(), Some(DEFAULT_SURFACE));
        assert_eq!(host.now(), Duration::ZERO);
    }

    #[test]
    fn advance_moves_clock_even_without_events() {
        let mut host = TickHost::new();
        let mut manager = BannerManager::new();

        assert_eq!(host.advance(&mut manager, Duration::from_secs(2)), 0);
        assert_eq!(host.now(), Duration::from_secs(2));
    }

    #[test]
    fn events_scheduled_while_delivering_are_timed_from_their_cause() {
        let mut host = TickHost::with_surface();
        let mut manager = BannerManager::new();
        let banner = Banner::new(BannerContent::titled("t")).auto_dismiss(Duration::from_secs(1));
        manager.present(banner, &mut host.platform(), ShowOptions::default());

        // Entrance ends at 0.4 s, timer at 1.4 s, exit at 1.8 s.
        let delivered = host.advance(&mut manager, Duration::from_millis(1_800));

        assert_eq!(delivered, 3);
        assert!(manager.is_empty());
    }

    #[test]
    fn banners_show_on_the_surface_made_active_later() {
        let mut host = TickHost::new();
        let mut manager = BannerManager::new();
        let surface = SurfaceId::new(5);
        host.surfaces_mut().push(surface);

        let id = manager.present(
            Banner::new(BannerContent::titled("t")),
            &mut host.platform(),
            ShowOptions::default(),
        );

        assert_eq!(manager.get(id).and_then(Banner::surface), Some(surface));
    }
}
