// SPDX-License-Identifier: MPL-2.0
//! The banner state machine.
//!
//! A banner moves through five internal phases. Callers only see the
//! coarser [`BannerState`]:
//!
//! | phase    | state   | meaning                              |
//! |----------|---------|--------------------------------------|
//! | Idle     | Hidden  | constructed, never shown             |
//! | Entering | Showing | entrance animation running           |
//! | Visible  | Showing | settled on screen                    |
//! | Exiting  | Hidden  | exit animation running               |
//! | Finished | Gone    | detached, listeners released         |
//!
//! State changes happen when an animation *starts*; animation completion
//! only moves between phases that share a state, except for the final
//! `Exiting -> Finished` step.

use super::listener::{BannerNotice, Listener};
use crate::application::port::layout::SHADOW_INSET;
use crate::application::port::{
    Anchor, AnimationPhase, AnimationRequest, AnimationTicket, BannerEvent, LayoutRequest,
    Platform, TimerToken,
};
use crate::domain::banner::{
    AnimationDuration, BannerContent, BannerId, BannerState, BannerStyle, Edge, Springiness,
    SurfaceId, SwipeDirection,
};
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Entering,
    Visible,
    Exiting,
    Finished,
}

impl Phase {
    fn state(self) -> BannerState {
        match self {
            Phase::Idle | Phase::Exiting => BannerState::Hidden,
            Phase::Entering | Phase::Visible => BannerState::Showing,
            Phase::Finished => BannerState::Gone,
        }
    }
}

/// How a banner reacts to time and gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    /// Dismiss when tapped. Defaults to `true`.
    pub dismisses_on_tap: bool,
    /// Dismiss when swiped toward its home edge. Defaults to `true`.
    pub dismisses_on_swipe: bool,
    /// Dismiss automatically this long after the entrance completes.
    pub auto_dismiss: Option<Duration>,
    pub animation_duration: AnimationDuration,
}

impl Default for Behavior {
    fn default() -> Self {
        Self {
            dismisses_on_tap: true,
            dismisses_on_swipe: true,
            auto_dismiss: None,
            animation_duration: AnimationDuration::default(),
        }
    }
}

/// Per-call options for [`Banner::show`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowOptions {
    /// Surface to attach to. Falls back to the active surface.
    pub surface: Option<SurfaceId>,
    /// Overrides [`Behavior::auto_dismiss`] for this showing.
    pub auto_dismiss: Option<Duration>,
}

impl ShowOptions {
    #[must_use]
    pub fn on(mut self, surface: SurfaceId) -> Self {
        self.surface = Some(surface);
        self
    }

    #[must_use]
    pub fn dismiss_after(mut self, delay: Duration) -> Self {
        self.auto_dismiss = Some(delay);
        self
    }
}

/// A transient notification and its lifecycle.
pub struct Banner {
    id: BannerId,
    content: BannerContent,
    style: BannerStyle,
    behavior: Behavior,
    phase: Phase,
    surface: Option<SurfaceId>,
    /// Auto-dismiss delay resolved when shown.
    auto_dismiss: Option<Duration>,
    /// The only animation whose completion this banner will act on.
    awaiting: Option<AnimationTicket>,
    /// The only timer whose expiry this banner will act on.
    timer: Option<TimerToken>,
    serial: u64,
    listeners: Vec<Box<dyn Listener + Send>>,
}

impl Banner {
    /// Creates a hidden banner with default style and behavior.
    pub fn new(content: BannerContent) -> Self {
        Self {
            id: BannerId::new(),
            content,
            style: BannerStyle::default(),
            behavior: Behavior::default(),
            phase: Phase::Idle,
            surface: None,
            auto_dismiss: None,
            awaiting: None,
            timer: None,
            serial: 0,
            listeners: Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Builder
    // ------------------------------------------------------------------

    #[must_use]
    pub fn with_style(mut self, style: BannerStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn springiness(mut self, springiness: Springiness) -> Self {
        self.style.springiness = springiness;
        self
    }

    #[must_use]
    pub fn edge(mut self, edge: Edge) -> Self {
        self.style.edge = edge;
        self
    }

    #[must_use]
    pub fn dismisses_on_tap(mut self, enabled: bool) -> Self {
        self.behavior.dismisses_on_tap = enabled;
        self
    }

    #[must_use]
    pub fn dismisses_on_swipe(mut self, enabled: bool) -> Self {
        self.behavior.dismisses_on_swipe = enabled;
        self
    }

    #[must_use]
    pub fn auto_dismiss(mut self, delay: Duration) -> Self {
        self.behavior.auto_dismiss = Some(delay);
        self
    }

    #[must_use]
    pub fn animation_duration(mut self, duration: AnimationDuration) -> Self {
        self.behavior.animation_duration = duration;
        self
    }

    /// Adds a listener for tap and dismiss notices.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Listener + Send + 'static) -> Self {
        self.subscribe(listener);
        self
    }

    /// Calls `f` for every tap received while showing.
    #[must_use]
    pub fn on_tap(self, mut f: impl FnMut(BannerId) + Send + 'static) -> Self {
        self.with_listener(move |notice: BannerNotice| {
            if let BannerNotice::Tapped(id) = notice {
                f(id);
            }
        })
    }

    /// Calls `f` once, after the banner has been detached.
    #[must_use]
    pub fn on_dismissed(self, mut f: impl FnMut(BannerId) + Send + 'static) -> Self {
        self.with_listener(move |notice: BannerNotice| {
            if let BannerNotice::Dismissed(id) = notice {
                f(id);
            }
        })
    }

    /// Adds a listener to a banner that may already be registered.
    ///
    /// Ignored once the banner is gone, since it will never notify again.
    pub fn subscribe(&mut self, listener: impl Listener + Send + 'static) {
        if self.phase == Phase::Finished {
            tracing::debug!(banner = %self.id, "subscribe on a gone banner ignored");
            return;
        }
        self.listeners.push(Box::new(listener));
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn id(&self) -> BannerId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> BannerState {
        self.phase.state()
    }

    #[must_use]
    pub fn content(&self) -> &BannerContent {
        &self.content
    }

    #[must_use]
    pub fn style(&self) -> &BannerStyle {
        &self.style
    }

    #[must_use]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    /// Surface the banner is attached to, if any.
    #[must_use]
    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    /// Returns whether an entrance or exit animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.awaiting.is_some()
    }

    /// Returns whether an auto-dismiss timer is pending.
    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Attaches the banner and starts its entrance.
    ///
    /// Only a never-shown banner can be shown; any other call is a no-op.
    /// When no surface is given and none is active the banner stays hidden
    /// and a warning is logged.
    pub fn show(&mut self, platform: &mut Platform<'_>, options: ShowOptions) {
        if self.phase != Phase::Idle {
            tracing::debug!(banner = %self.id, state = ?self.state(), "show ignored, banner already shown");
            return;
        }

        let Some(surface) = options
            .surface
            .or_else(|| platform.surfaces.active_surface())
        else {
            tracing::warn!(banner = %self.id, "could not find a host surface, banner not shown");
            return;
        };

        self.surface = Some(surface);
        self.auto_dismiss = options.auto_dismiss.or(self.behavior.auto_dismiss);

        platform.layout.attach(self.id, surface, self.style.edge);
        platform
            .layout
            .place(self.id, self.layout_request(Anchor::Hidden));

        self.transition(Phase::Entering, platform);
        self.request_animation(AnimationPhase::Entrance, platform);
    }

    /// Starts the exit animation.
    ///
    /// Cancels a pending auto-dismiss. A no-op unless the banner is showing.
    pub fn dismiss(&mut self, platform: &mut Platform<'_>) {
        if !matches!(self.phase, Phase::Entering | Phase::Visible) {
            tracing::debug!(banner = %self.id, state = ?self.state(), "dismiss ignored, banner not showing");
            return;
        }

        if let Some(token) = self.timer.take() {
            platform.scheduler.cancel(token);
        }

        self.transition(Phase::Exiting, platform);
        self.request_animation(AnimationPhase::Exit, platform);
    }

    /// Handles a tap on the banner.
    ///
    /// Tap listeners are notified for every tap while showing, whether or not
    /// the tap dismisses the banner.
    pub fn tap(&mut self, platform: &mut Platform<'_>) {
        if !self.state().is_showing() {
            tracing::debug!(banner = %self.id, "tap ignored, banner not showing");
            return;
        }
        if self.behavior.dismisses_on_tap {
            self.dismiss(platform);
        }
        self.notify(BannerNotice::Tapped(self.id));
    }

    /// Handles a swipe; only a swipe toward the home edge can dismiss.
    pub fn swipe(&mut self, direction: SwipeDirection, platform: &mut Platform<'_>) {
        if !self.state().is_showing() {
            return;
        }
        if self.behavior.dismisses_on_swipe && direction == self.style.edge.dismiss_direction() {
            self.dismiss(platform);
        }
    }

    /// Applies a completion reported by the scheduler.
    ///
    /// Events for other banners, superseded animations and cancelled timers
    /// are ignored.
    pub fn handle_event(&mut self, event: BannerEvent, platform: &mut Platform<'_>) {
        match event {
            BannerEvent::AnimationFinished(ticket) => {
                if self.awaiting != Some(ticket) {
                    tracing::debug!(banner = %self.id, phase = ?ticket.phase(), "stale animation completion ignored");
                    return;
                }
                self.awaiting = None;
                match ticket.phase() {
                    AnimationPhase::Entrance => self.entrance_finished(platform),
                    AnimationPhase::Exit => self.exit_finished(platform),
                }
            }
            BannerEvent::TimerElapsed(token) => {
                if self.timer != Some(token) {
                    tracing::debug!(banner = %self.id, "stale auto-dismiss timer ignored");
                    return;
                }
                self.timer = None;
                tracing::trace!(banner = %self.id, "auto-dismiss timer elapsed");
                self.dismiss(platform);
            }
        }
    }

    fn entrance_finished(&mut self, platform: &mut Platform<'_>) {
        self.phase = Phase::Visible;
        if let Some(delay) = self.auto_dismiss {
            let token = TimerToken::new(self.id, self.next_serial());
            self.timer = Some(token);
            platform.scheduler.schedule(delay, token);
        }
    }

    fn exit_finished(&mut self, platform: &mut Platform<'_>) {
        self.transition(Phase::Finished, platform);
        self.surface = None;
        self.notify(BannerNotice::Dismissed(self.id));
        self.listeners.clear();
    }

    /// Moves to `next` and lays the banner out for the new state.
    fn transition(&mut self, next: Phase, platform: &mut Platform<'_>) {
        tracing::trace!(banner = %self.id, from = ?self.phase, to = ?next, "banner transition");
        self.phase = next;
        match next {
            Phase::Entering => platform
                .layout
                .place(self.id, self.layout_request(Anchor::Showing)),
            Phase::Exiting => platform
                .layout
                .place(self.id, self.layout_request(Anchor::Hidden)),
            Phase::Finished => platform.layout.detach(self.id),
            Phase::Idle | Phase::Visible => {}
        }
    }

    fn request_animation(&mut self, phase: AnimationPhase, platform: &mut Platform<'_>) {
        let ticket = AnimationTicket::new(self.id, phase, self.next_serial());
        self.awaiting = Some(ticket);
        platform.scheduler.animate(AnimationRequest {
            ticket,
            duration: self.behavior.animation_duration.as_duration(),
            spring: self.style.springiness.spring_parameters(),
            edge: self.style.edge,
        });
    }

    fn layout_request(&self, anchor: Anchor) -> LayoutRequest {
        LayoutRequest {
            anchor,
            edge: self.style.edge,
            inset: SHADOW_INSET,
            status_bar_inset: self.style.adjusts_for_status_bar && self.style.edge == Edge::Top,
        }
    }

    fn notify(&mut self, notice: BannerNotice) {
        for listener in &mut self.listeners {
            listener.notify(notice);
        }
    }

    fn next_serial(&mut self) -> u64 {
        self.serial += 1;
        self.serial
    }
}

impl fmt::Debug for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Banner")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("content", &self.content)
            .field("surface", &self.surface)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
