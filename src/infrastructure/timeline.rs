// SPDX-License-Identifier: MPL-2.0
//! Virtual-clock scheduler.
//!
//! Nothing happens on its own: the owner moves the clock forward and pulls
//! due events one at a time with [`Timeline::pop_due`]. The clock jumps to
//! each event's due time before it is returned, so anything scheduled while
//! handling it is timed from the right instant.

use crate::application::port::{AnimationRequest, BannerEvent, Scheduler, TimerToken};
use crate::domain::banner::BannerId;
use std::time::Duration;

#[derive(Debug, Clone, Copy)]
enum Job {
    Animation {
        request: AnimationRequest,
        started: Duration,
    },
    Timer(TimerToken),
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due: Duration,
    /// Breaks ties between jobs due at the same instant.
    seq: u64,
    job: Job,
}

impl Pending {
    fn event(&self) -> BannerEvent {
        match self.job {
            Job::Animation { request, .. } => BannerEvent::AnimationFinished(request.ticket),
            Job::Timer(token) => BannerEvent::TimerElapsed(token),
        }
    }
}

/// How far a running animation has come.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationProgress {
    pub request: AnimationRequest,
    /// Elapsed share of the duration, in `0.0..=1.0`.
    pub fraction: f32,
}

/// Animations and timers on a manually advanced clock.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    now: Duration,
    seq: u64,
    pending: Vec<Pending>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the timeline was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Removes and returns the earliest event due at or before `until`.
    pub fn pop_due(&mut self, until: Duration) -> Option<BannerEvent> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= until)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(index, _)| index)?;
        let pending = self.pending.swap_remove(index);
        self.now = self.now.max(pending.due);
        Some(pending.event())
    }

    /// Moves the clock to `until` without delivering anything.
    ///
    /// The clock never goes backwards.
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// When the next job is due, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Timers not yet fired or cancelled, earliest first.
    pub fn pending_timers(&self) -> impl Iterator<Item = TimerToken> + '_ {
        let mut timers: Vec<_> = self
            .pending
            .iter()
            .filter_map(|p| match p.job {
                Job::Timer(token) => Some((p.due, p.seq, token)),
                Job::Animation { .. } => None,
            })
            .collect();
        timers.sort_by_key(|(due, seq, _)| (*due, *seq));
        timers.into_iter().map(|(_, _, token)| token)
    }

    /// Most recently requested animation of `banner` that has not finished.
    #[must_use]
    pub fn latest_animation(&self, banner: BannerId) -> Option<AnimationRequest> {
        self.progress(banner).map(|p| p.request)
    }

    /// Progress of the most recently requested unfinished animation of
    /// `banner`.
    #[must_use]
    pub fn progress(&self, banner: BannerId) -> Option<AnimationProgress> {
        self.pending
            .iter()
            .filter_map(|p| match p.job {
                Job::Animation { request, started } if request.ticket.banner() == banner => {
                    Some((p.seq, request, started))
                }
                _ => None,
            })
            .max_by_key(|(seq, _, _)| *seq)
            .map(|(_, request, started)| {
                let elapsed = self.now.saturating_sub(started).as_secs_f32();
                let total = request.duration.as_secs_f32();
                let fraction = if total > 0.0 {
                    (elapsed / total).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                AnimationProgress { request, fraction }
            })
    }

    fn push(&mut self, due: Duration, job: Job) {
        self.seq += 1;
        self.pending.push(Pending {
            due,
            seq: self.seq,
            job,
        });
    }
}

impl Scheduler for Timeline {
    fn animate(&mut self, request: AnimationRequest) {
        let started = self.now;
        self.push(
            started + request.duration,
            Job::Animation { request, started },
        );
    }

    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.push(self.now + delay, Job::Timer(token));
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending
            .retain(|p| !matches!(p.job, Job::Timer(t) if t == token));
    }
}
