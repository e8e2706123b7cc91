// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle core.
//!
//! This module holds the state machine driving a single banner from
//! `Hidden` to `Showing` to `Gone`, and the registry tracking every banner
//! an application has shown.
//!
//! # Components
//!
//! - [`lifecycle`] - `Banner`, its behavior flags and show options
//! - [`manager`] - `BannerManager` registry with bulk dismissal and queries
//! - [`listener`] - `Listener` trait and channel sender for tap/dismiss notices
//!
//! # Usage
//!
//! ```ignore
//! use iced_banner::banner::{Banner, BannerManager, ShowOptions};
//! use iced_banner::domain::banner::BannerContent;
//!
//! let mut manager = BannerManager::new();
//! let banner = Banner::new(BannerContent::new("Saved", "All changes written"))
//!     .on_dismissed(|id| println!("{id} dismissed"));
//!
//! let id = manager.present(banner, &mut platform, ShowOptions::default());
//!
//! // Feed scheduler completions back on the UI thread
//! manager.handle_event(event, &mut platform);
//! ```
//!
//! # Threading
//!
//! Everything here runs on the thread that owns the surface. Schedulers
//! report completions as `BannerEvent`s; nothing calls back into a banner
//! from another thread.

mod lifecycle;
mod listener;
mod manager;

pub use lifecycle::{Banner, Behavior, ShowOptions};
pub use listener::{notice_channel, BannerNotice, Listener, NoticeSender};
pub use manager::{BannerManager, RemovalPolicy};
