// SPDX-License-Identifier: MPL-2.0
//! Animation and timer port.
//!
//! Requests go out through [`Scheduler`]; completions come back as
//! [`BannerEvent`] values that the host feeds into
//! [`BannerManager::handle_event`](crate::banner::BannerManager::handle_event)
//! on the thread owning the banners.

use crate::domain::banner::{BannerId, Edge, SpringParameters};
use std::time::Duration;

/// Which animation of a banner's lifecycle is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationPhase {
    Entrance,
    Exit,
}

/// Identifies one requested animation.
///
/// The banner only acts on the completion of the ticket it is waiting for,
/// so completions of superseded animations are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationTicket {
    banner: BannerId,
    phase: AnimationPhase,
    serial: u64,
}

impl AnimationTicket {
    pub(crate) fn new(banner: BannerId, phase: AnimationPhase, serial: u64) -> Self {
        Self {
            banner,
            phase,
            serial,
        }
    }

    #[must_use]
    pub fn banner(&self) -> BannerId {
        self.banner
    }

    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }
}

/// Identifies one scheduled auto-dismiss timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    banner: BannerId,
    serial: u64,
}

impl TimerToken {
    pub(crate) fn new(banner: BannerId, serial: u64) -> Self {
        Self { banner, serial }
    }

    #[must_use]
    pub fn banner(&self) -> BannerId {
        self.banner
    }
}

/// A spring animation toward the position last placed for the banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRequest {
    pub ticket: AnimationTicket,
    pub duration: Duration,
    pub spring: SpringParameters,
    pub edge: Edge,
}

/// Something the scheduler reports back to the banner core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerEvent {
    /// The animation identified by the ticket has finished.
    AnimationFinished(AnimationTicket),
    /// The timer identified by the token has elapsed.
    TimerElapsed(TimerToken),
}

impl BannerEvent {
    /// Banner the event is addressed to.
    #[must_use]
    pub fn banner(&self) -> BannerId {
        match self {
            BannerEvent::AnimationFinished(ticket) => ticket.banner(),
            BannerEvent::TimerElapsed(token) => token.banner(),
        }
    }
}

/// Runs animations and timers on behalf of the banner core.
pub trait Scheduler {
    /// Starts an animation; report [`BannerEvent::AnimationFinished`] with
    /// the request's ticket when it completes.
    fn animate(&mut self, request: AnimationRequest);

    /// Reports [`BannerEvent::TimerElapsed`] after `delay`.
    fn schedule(&mut self, delay: Duration, token: TimerToken);

    /// Drops a timer that has not fired yet. Schedulers that cannot cancel
    /// may ignore this; the core discards stale tokens anyway.
    fn cancel(&mut self, token: TimerToken) {
        let _ = token;
    }
}
