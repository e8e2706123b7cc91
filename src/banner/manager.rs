// SPDX-License-Identifier: MPL-2.0
//! Banner registry.
//!
//! The `BannerManager` owns every banner registered through it, routes
//! gestures and scheduler events to them, and answers "what is on screen"
//! queries. It is an ordinary value: create one per surface owner and pass
//! it where it is needed.

use super::lifecycle::{Banner, ShowOptions};
use crate::application::port::{BannerEvent, Platform};
use crate::domain::banner::{BannerId, SwipeDirection};

/// What happens to a banner once it is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalPolicy {
    /// Drop the banner from the registry as soon as it is gone.
    #[default]
    RemoveOnGone,
    /// Keep gone banners until [`BannerManager::prune_gone`] is called.
    Retain,
}

/// Tracks banners and which of them are currently presented.
#[derive(Debug, Default)]
pub struct BannerManager {
    /// Registered banners, in creation order.
    banners: Vec<Banner>,
    policy: RemovalPolicy,
}

impl BannerManager {
    /// Creates an empty manager that forgets banners once they are gone.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty manager with the given removal policy.
    #[must_use]
    pub fn with_policy(policy: RemovalPolicy) -> Self {
        Self {
            banners: Vec::new(),
            policy,
        }
    }

    #[must_use]
    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// Adds a banner to the registry.
    ///
    /// Registering an id that is already tracked keeps the tracked banner.
    pub fn register(&mut self, banner: Banner) -> BannerId {
        let id = banner.id();
        if self.contains(id) {
            tracing::debug!(banner = %id, "banner already registered");
            return id;
        }
        // Ids grow with creation time, so this keeps creation order even
        // when banners are registered out of order.
        let position = self.banners.partition_point(|b| b.id() < id);
        self.banners.insert(position, banner);
        id
    }

    /// Registers a banner and shows it.
    ///
    /// A banner this call registered is dropped again when it could not be
    /// shown, so it never lingers as a hidden entry that cannot reach gone.
    pub fn present(
        &mut self,
        banner: Banner,
        platform: &mut Platform<'_>,
        options: ShowOptions,
    ) -> BannerId {
        let newly_registered = !self.contains(banner.id());
        let id = self.register(banner);
        self.show(id, platform, options);

        let unshown = self.get(id).is_some_and(|b| b.surface().is_none());
        if newly_registered && unshown {
            self.banners.retain(|b| b.id() != id);
            tracing::debug!(banner = %id, "unshown banner not kept in registry");
        }
        id
    }

    /// Shows a registered banner. Unknown ids are ignored.
    pub fn show(&mut self, id: BannerId, platform: &mut Platform<'_>, options: ShowOptions) {
        if let Some(banner) = self.find_mut(id) {
            banner.show(platform, options);
        } else {
            tracing::debug!(banner = %id, "show for unknown banner ignored");
        }
    }

    /// Starts dismissing a banner. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: BannerId, platform: &mut Platform<'_>) {
        if let Some(banner) = self.find_mut(id) {
            banner.dismiss(platform);
        }
    }

    /// Starts dismissing every presented banner.
    ///
    /// Returns immediately; banners become gone as their exit animations
    /// complete. Calling it again while they are leaving does nothing.
    pub fn dismiss_all(&mut self, platform: &mut Platform<'_>) {
        for banner in self.banners.iter_mut().filter(|b| b.state().is_showing()) {
            banner.dismiss(platform);
        }
    }

    /// Routes a tap to a banner.
    pub fn tap(&mut self, id: BannerId, platform: &mut Platform<'_>) {
        if let Some(banner) = self.find_mut(id) {
            banner.tap(platform);
        }
    }

    /// Routes a swipe to a banner.
    pub fn swipe(&mut self, id: BannerId, direction: SwipeDirection, platform: &mut Platform<'_>) {
        if let Some(banner) = self.find_mut(id) {
            banner.swipe(direction, platform);
        }
    }

    /// Routes a scheduler event to its banner and applies the removal policy.
    pub fn handle_event(&mut self, event: BannerEvent, platform: &mut Platform<'_>) {
        let id = event.banner();
        let Some(banner) = self.find_mut(id) else {
            tracing::debug!(banner = %id, "event for unknown banner ignored");
            return;
        };
        banner.handle_event(event, platform);
        let gone = banner.state().is_gone();

        if gone && self.policy == RemovalPolicy::RemoveOnGone {
            self.banners.retain(|b| b.id() != id);
            tracing::trace!(banner = %id, "gone banner removed from registry");
        }
    }

    /// Returns presented banners, in creation order.
    pub fn presented(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter().filter(|b| b.state().is_showing())
    }

    /// Returns whether any banner is presented.
    #[must_use]
    pub fn is_showing_any(&self) -> bool {
        self.presented().next().is_some()
    }

    /// Returns every tracked banner, whatever its state.
    pub fn banners(&self) -> impl Iterator<Item = &Banner> {
        self.banners.iter()
    }

    #[must_use]
    pub fn get(&self, id: BannerId) -> Option<&Banner> {
        self.banners.iter().find(|b| b.id() == id)
    }

    pub fn get_mut(&mut self, id: BannerId) -> Option<&mut Banner> {
        self.find_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: BannerId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.banners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }

    /// Drops gone banners, returning how many were removed.
    pub fn prune_gone(&mut self) -> usize {
        let before = self.banners.len();
        self.banners.retain(|b| !b.state().is_gone());
        before - self.banners.len()
    }

    fn find_mut(&mut self, id: BannerId) -> Option<&mut Banner> {
        self.banners.iter_mut().find(|b| b.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::banner::{BannerContent, BannerState, SurfaceId};
    use crate::infrastructure::TickHost;
    use std::time::Duration;

    const ANIMATION: Duration = Duration::from_millis(400);

    fn banner(title: &str) -> Banner {
        Banner::new(BannerContent::titled(title))
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = BannerManager::new();
        assert!(manager.is_empty());
        assert!(!manager.is_showing_any());
        assert_eq!(manager.presented().count(), 0);
        assert_eq!(manager.policy(), RemovalPolicy::RemoveOnGone);
    }

    #[test]
    fn register_is_idempotent_per_id() {
        let mut manager = BannerManager::new();
        let id = manager.register(banner("a"));
        assert_eq!(manager.len(), 1);
        assert!(manager.contains(id));

        // Showing again through the manager never duplicates the entry.
        let mut host = TickHost::with_surface();
        manager.show(id, &mut host.platform(), ShowOptions::default());
        manager.show(id, &mut host.platform(), ShowOptions::default());
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.presented().count(), 1);
    }

    #[test]
    fn register_keeps_creation_order() {
        let mut manager = BannerManager::new();
        let first = banner("first");
        let second = banner("second");
        let (first_id, second_id) = (first.id(), second.id());

        manager.register(second);
        manager.register(first);

        let ids: Vec<_> = manager.banners().map(Banner::id).collect();
        assert_eq!(ids, vec![first_id, second_id]);
    }

    #[test]
    fn registered_but_unshown_banner_is_not_presented() {
        let mut manager = BannerManager::new();
        manager.register(banner("idle"));
        assert!(!manager.is_showing_any());
    }

    #[test]
    fn present_shows_immediately() {
        let mut manager = BannerManager::new();
        let mut host = TickHost::with_surface();

        let id = manager.present(banner("a"), &mut host.platform(), ShowOptions::default());

        assert!(manager.is_showing_any());
        assert_eq!(manager.get(id).map(Banner::state), Some(BannerState::Showing));
    }

    #[test]
    fn present_without_surface_does_not_register() {
        let mut manager = BannerManager::new();
        let mut host = TickHost::new();

        let id = manager.present(banner("a"), &mut host.platform(), ShowOptions::default());

        assert!(!manager.contains(id));
        assert!(manager.is_empty());
        assert!(!manager.is_showing_any());
    }

    #[test]
    fn explicitly_registered_banner_survives_a_failed_show() {
        let mut manager = BannerManager::new();
        let mut host = TickHost::new();
        let id = manager.register(banner("waiting"));

        manager.show(id, &mut host.platform(), ShowOptions::default());
        assert!(manager.contains(id));

        host.surfaces_mut().push(SurfaceId::new(3));
        manager.show(id, &mut host.platform(), ShowOptions::default());
        assert!(manager.is_showing_any());
    }

    #[test]
    fn dismiss_all_with_nothing_presented_is_a_no_op() {
        let mut manager = BannerManager::new();
        let mut host = TickHost::with_surface();
        manager.register(banner("idle"));

        manager.dismiss_all(&mut host.platform());

        assert_eq!(host.timeline().pending_len(), 0);
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn dismiss_all_twice_starts_one_exit_per_banner() {
        let mut manager = BannerManager::new();
        let mut host = TickHost::with_surface();
        manager.present(banner("a"), &mut host.platform(), ShowOptions::default());
        manager.present(banner("b"), &mut host.platform(), ShowOptions::default());
        host.advance(&mut manager, ANIMATION);

        manager.dismiss_all(&mut host.platform());
        manager.dismiss_all(&mut host.platform());

        assert_eq!(host.timeline().pending_len(), 2);
        assert!(!manager.is_showing_any());
    }

    #[test]
    fn gone_banners_leave_the_registry_by_default() {
        let mut manager = BannerManager::new();
        let mut host = TickHost::with_surface();
        let id = manager.present(banner("a"), &mut host.platform(), ShowOptions::default());

        manager.dismiss(id, &mut host.platform());
        host.advance(&mut manager, ANIMATION);

        assert!(!manager.contains(id));
        assert!(manager.is_empty());
    }

    #[test]
    fn retain_policy_keeps_gone_banners_until_pruned() {
        let mut manager = BannerManager::with_policy(RemovalPolicy::Retain);
        let mut host = TickHost::with_surface();
        let gone = manager.present(banner("a"), &mut host.platform(), ShowOptions::default());
        let kept = manager.present(banner("b"), &mut host.platform(), ShowOptions::default());

        manager.dismiss(gone, &mut host.platform());
        host.advance(&mut manager, ANIMATION);

        assert_eq!(manager.get(gone).map(Banner::state), Some(BannerState::Gone));
        assert_eq!(manager.prune_gone(), 1);
        assert!(!manager.contains(gone));
        assert!(manager.contains(kept));
    }

    #[test]
    fn tap_and_swipe_route_to_the_right_banner() {
        let mut manager = BannerManager::new();
        let mut host = TickHost::with_surface();
        let tapped = manager.present(banner("a"), &mut host.platform(), ShowOptions::default());
        let swiped = manager.present(banner("b"), &mut host.platform(), ShowOptions::default());
        let untouched = manager.present(banner("c"), &mut host.platform(), ShowOptions::default());

        manager.tap(tapped, &mut host.platform());
        manager.swipe(swiped, SwipeDirection::Up, &mut host.platform());

        let presented: Vec<_> = manager.presented().map(Banner::id).collect();
        assert_eq!(presented, vec![untouched]);
    }

    #[test]
    fn events_for_unknown_banners_are_ignored() {
        let mut manager = BannerManager::new();
        let mut other = BannerManager::new();
        let mut host = TickHost::with_surface();
        other.present(banner("elsewhere"), &mut host.platform(), ShowOptions::default());

        host.advance(&mut manager, ANIMATION);

        assert!(manager.is_empty());
    }
}
