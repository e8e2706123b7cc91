// SPDX-License-Identifier: MPL-2.0
//! Wall-clock scheduler running on a tokio runtime.
//!
//! Animations and timers sleep on the runtime and report back through an
//! unbounded channel. The owner of the banners drains the receiver on its
//! own thread and feeds each event to
//! [`BannerManager::handle_event`](crate::banner::BannerManager::handle_event),
//! so banner state is only ever touched from that thread.

use crate::application::port::{AnimationRequest, BannerEvent, Scheduler, TimerToken};
use std::collections::HashMap;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Scheduler backed by `tokio::time::sleep`.
#[derive(Debug)]
pub struct TokioScheduler {
    runtime: Handle,
    tx: UnboundedSender<BannerEvent>,
    timers: HashMap<TimerToken, JoinHandle<()>>,
}

impl TokioScheduler {
    /// Creates a scheduler spawning on `runtime`, and the receiver its
    /// events arrive on.
    #[must_use]
    pub fn new(runtime: Handle) -> (Self, UnboundedReceiver<BannerEvent>) {
        let (tx, rx) = unbounded_channel();
        let scheduler = Self {
            runtime,
            tx,
            timers: HashMap::new(),
        };
        (scheduler, rx)
    }

    /// Creates a scheduler on the runtime of the calling context, if any.
    #[must_use]
    pub fn try_current() -> Option<(Self, UnboundedReceiver<BannerEvent>)> {
        Handle::try_current().ok().map(Self::new)
    }

    /// Number of timers that have neither fired nor been cancelled.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.values().filter(|h| !h.is_finished()).count()
    }

    fn deliver_after(&self, delay: Duration, event: BannerEvent) -> JoinHandle<()> {
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(event).is_err() {
                tracing::debug!(banner = %event.banner(), "banner event receiver dropped");
            }
        })
    }
}

impl Scheduler for TokioScheduler {
    fn animate(&mut self, request: AnimationRequest) {
        // Animations are never cancelled; their completion is simply
        // ignored once superseded.
        drop(self.deliver_after(
            request.duration,
            BannerEvent::AnimationFinished(request.ticket),
        ));
    }

    fn schedule(&mut self, delay: Duration, token: TimerToken) {
        self.timers.retain(|_, handle| !handle.is_finished());
        let handle = self.deliver_after(delay, BannerEvent::TimerElapsed(token));
        self.timers.insert(token, handle);
    }

    fn cancel(&mut self, token: TimerToken) {
        if let Some(handle) = self.timers.remove(&token) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        for (_, handle) in self.timers.drain() {
            handle.abort();
        }
    }
}
