// SPDX-License-Identifier: MPL-2.0
//! Observers of banner taps and dismissals.
//!
//! Any number of listeners may subscribe to the same banner; adding one never
//! replaces another.

use crate::domain::banner::BannerId;
use crossbeam_channel::{bounded, Receiver, Sender};

/// Something that happened to a banner that observers may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerNotice {
    /// The user tapped the banner while it was showing.
    Tapped(BannerId),
    /// The banner finished its exit animation and was detached.
    Dismissed(BannerId),
}

impl BannerNotice {
    #[must_use]
    pub fn banner(&self) -> BannerId {
        match self {
            BannerNotice::Tapped(id) | BannerNotice::Dismissed(id) => *id,
        }
    }
}

/// Receives [`BannerNotice`]s from a banner.
pub trait Listener {
    fn notify(&mut self, notice: BannerNotice);
}

impl<F> Listener for F
where
    F: FnMut(BannerNotice),
{
    fn notify(&mut self, notice: BannerNotice) {
        self(notice);
    }
}

/// Listener forwarding notices over a bounded channel.
///
/// Sending never blocks: when the channel is full the notice is dropped, so
/// a slow consumer cannot stall the UI thread.
#[derive(Debug, Clone)]
pub struct NoticeSender {
    tx: Sender<BannerNotice>,
}

impl Listener for NoticeSender {
    fn notify(&mut self, notice: BannerNotice) {
        if self.tx.try_send(notice).is_err() {
            tracing::debug!(banner = %notice.banner(), "notice channel full or closed, dropping notice");
        }
    }
}

/// Creates a listener/receiver pair holding up to `capacity` notices.
#[must_use]
pub fn notice_channel(capacity: usize) -> (NoticeSender, Receiver<BannerNotice>) {
    let (tx, rx) = bounded(capacity.max(1));
    (NoticeSender { tx }, rx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_listeners() {
        let mut seen = Vec::new();
        {
            let mut listener = |notice: BannerNotice| seen.push(notice);
            listener.notify(BannerNotice::Tapped(BannerId::new()));
        }
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn notice_sender_delivers_in_order() {
        let (mut sender, rx) = notice_channel(4);
        let id = BannerId::new();
        sender.notify(BannerNotice::Tapped(id));
        sender.notify(BannerNotice::Dismissed(id));

        assert_eq!(rx.try_recv(), Ok(BannerNotice::Tapped(id)));
        assert_eq!(rx.try_recv(), Ok(BannerNotice::Dismissed(id)));
    }

    #[test]
    fn notice_sender_drops_when_full() {
        let (mut sender, rx) = notice_channel(1);
        let id = BannerId::new();
        sender.notify(BannerNotice::Tapped(id));
        sender.notify(BannerNotice::Tapped(id));

        assert_eq!(rx.len(), 1);
    }

    #[test]
    fn notice_reports_its_banner() {
        let id = BannerId::new();
        assert_eq!(BannerNotice::Dismissed(id).banner(), id);
    }
}
