// SPDX-License-Identifier: MPL-2.0
use iced_banner::application::port::Platform;
use iced_banner::banner::{notice_channel, Banner, BannerManager, BannerNotice, ShowOptions};
use iced_banner::config::{self, Config, EdgeSetting, SpringinessSetting};
use iced_banner::domain::banner::{
    BannerContent, BannerState, Edge, SurfaceId, SwipeDirection,
};
use iced_banner::infrastructure::{LayoutBook, SurfaceStack, TickHost, TokioScheduler};
use std::time::Duration;
use tempfile::tempdir;

const ANIMATION: Duration = Duration::from_millis(400);

fn banner(title: &str) -> Banner {
    Banner::new(BannerContent::new(title, "integration"))
}

#[test]
fn manual_dismiss_before_auto_dismiss_notifies_once() {
    let mut host = TickHost::with_surface();
    let mut manager = BannerManager::new();
    let (listener, notices) = notice_channel(8);

    let id = manager.present(
        banner("auto").with_listener(listener),
        &mut host.platform(),
        ShowOptions::default().dismiss_after(Duration::from_secs(3)),
    );

    host.advance(&mut manager, Duration::from_secs(1));
    manager.dismiss(id, &mut host.platform());
    host.advance(&mut manager, Duration::from_secs(5));

    let received: Vec<_> = notices.try_iter().collect();
    assert_eq!(received, vec![BannerNotice::Dismissed(id)]);
    assert!(!manager.contains(id));
    assert_eq!(host.timeline().pending_len(), 0);
}

#[test]
fn auto_dismiss_is_timed_from_the_end_of_the_entrance() {
    let mut host = TickHost::with_surface();
    let mut manager = BannerManager::new();
    let id = manager.present(
        banner("timed"),
        &mut host.platform(),
        ShowOptions::default().dismiss_after(Duration::from_secs(3)),
    );

    // Entrance ends at 0.4s, so the timer fires at 3.4s.
    host.advance(&mut manager, Duration::from_millis(3_300));
    assert!(manager.is_showing_any());

    host.advance(&mut manager, Duration::from_millis(200));
    assert!(!manager.is_showing_any());
    assert!(manager.contains(id));

    host.advance(&mut manager, ANIMATION);
    assert!(!manager.contains(id));
}

#[test]
fn dismiss_all_hides_every_banner_in_creation_order() {
    let mut host = TickHost::with_surface();
    let mut manager = BannerManager::new();
    let first = manager.present(banner("first"), &mut host.platform(), ShowOptions::default());
    let second = manager.present(banner("second"), &mut host.platform(), ShowOptions::default());
    host.advance(&mut manager, ANIMATION);

    let presented: Vec<_> = manager.presented().map(Banner::id).collect();
    assert_eq!(presented, vec![first, second]);

    manager.dismiss_all(&mut host.platform());
    assert_eq!(manager.presented().count(), 0);
    host.advance(&mut manager, ANIMATION);

    assert!(manager.is_empty());
    assert!(!host.layout().is_attached(first));
    assert!(!host.layout().is_attached(second));
}

#[test]
fn is_showing_any_tracks_the_whole_lifecycle() {
    let mut host = TickHost::with_surface();
    let mut manager = BannerManager::new();
    assert!(!manager.is_showing_any());

    let id = manager.present(banner("a"), &mut host.platform(), ShowOptions::default());
    assert!(manager.is_showing_any());
    host.advance(&mut manager, ANIMATION);
    assert!(manager.is_showing_any());

    manager.dismiss(id, &mut host.platform());
    assert!(!manager.is_showing_any());
    host.advance(&mut manager, ANIMATION);
    assert!(!manager.is_showing_any());
}

#[test]
fn banner_without_surface_stays_hidden() {
    let mut host = TickHost::new();
    let mut banner = banner("nowhere");

    banner.show(&mut host.platform(), ShowOptions::default());

    assert_eq!(banner.state(), BannerState::Hidden);
    assert!(!host.layout().is_attached(banner.id()));
    assert_eq!(host.timeline().pending_len(), 0);
}

#[test]
fn banner_attaches_to_the_topmost_visible_surface() {
    let mut host = TickHost::new();
    let lower = SurfaceId::new(10);
    let upper = SurfaceId::new(11);
    host.surfaces_mut().push(lower);
    host.surfaces_mut().push(upper);
    host.surfaces_mut().set_visible(upper, false);

    let mut banner = banner("stacked");
    banner.show(&mut host.platform(), ShowOptions::default());

    assert_eq!(banner.surface(), Some(lower));
    assert_eq!(host.layout().attached_to(lower).count(), 1);
}

#[test]
fn tap_without_dismissal_keeps_banner_and_notifies_every_listener() {
    let mut host = TickHost::with_surface();
    let mut manager = BannerManager::new();
    let (first, first_rx) = notice_channel(4);
    let (second, second_rx) = notice_channel(4);
    let id = manager.present(
        banner("sticky")
            .dismisses_on_tap(false)
            .with_listener(first)
            .with_listener(second),
        &mut host.platform(),
        ShowOptions::default(),
    );
    host.advance(&mut manager, ANIMATION);

    manager.tap(id, &mut host.platform());

    assert!(manager.is_showing_any());
    assert_eq!(first_rx.try_recv().ok(), Some(BannerNotice::Tapped(id)));
    assert_eq!(second_rx.try_recv().ok(), Some(BannerNotice::Tapped(id)));
}

#[test]
fn only_swipes_toward_the_home_edge_dismiss() {
    let mut host = TickHost::with_surface();
    let mut manager = BannerManager::new();
    let id = manager.present(
        banner("bottom").edge(Edge::Bottom),
        &mut host.platform(),
        ShowOptions::default(),
    );
    host.advance(&mut manager, ANIMATION);

    manager.swipe(id, SwipeDirection::Up, &mut host.platform());
    assert!(manager.is_showing_any());

    manager.swipe(id, SwipeDirection::Down, &mut host.platform());
    assert!(!manager.is_showing_any());
}

#[test]
fn config_round_trip_drives_new_banners() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    let saved = Config {
        springiness: Some(SpringinessSetting::None),
        edge: Some(EdgeSetting::Bottom),
        auto_dismiss_secs: Some(4),
        dismisses_on_tap: Some(false),
        ..Config::default()
    };
    config::save_to_path(&saved, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config from path");
    let banner = banner("configured")
        .with_style(loaded.style())
        .with_behavior(loaded.behavior());

    assert_eq!(banner.style().edge, Edge::Bottom);
    assert!(!banner.behavior().dismisses_on_tap);
    assert_eq!(banner.behavior().auto_dismiss, Some(Duration::from_secs(4)));
}

#[tokio::test(start_paused = true)]
async fn tokio_scheduler_drives_a_full_lifecycle() {
    let mut surfaces = SurfaceStack::new();
    surfaces.push(SurfaceId::new(1));
    let mut layout = LayoutBook::new();
    let (mut scheduler, mut events) = TokioScheduler::new(tokio::runtime::Handle::current());
    let mut manager = BannerManager::new();
    let (listener, notices) = notice_channel(4);

    let id = manager.present(
        banner("async").with_listener(listener),
        &mut Platform::new(&surfaces, &mut layout, &mut scheduler),
        ShowOptions::default().dismiss_after(Duration::from_secs(1)),
    );

    while manager.contains(id) {
        let Some(event) = events.recv().await else {
            panic!("scheduler channel closed early");
        };
        manager.handle_event(event, &mut Platform::new(&surfaces, &mut layout, &mut scheduler));
    }

    assert_eq!(notices.try_recv().ok(), Some(BannerNotice::Dismissed(id)));
    assert!(!layout.is_attached(id));
    assert_eq!(scheduler.pending_timers(), 0);
}
