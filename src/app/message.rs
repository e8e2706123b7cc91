// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::domain::banner::{BannerContent, Edge, Rgba, Springiness};
use crate::ui::banner_view;
use std::time::Instant;

/// Sample banners offered by the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Success,
    Warning,
    Info,
}

impl Sample {
    pub const ALL: [Sample; 3] = [Sample::Success, Sample::Warning, Sample::Info];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sample::Success => "Show success",
            Sample::Warning => "Show warning",
            Sample::Info => "Show info",
        }
    }

    /// Title and subtitle of the sample banner.
    #[must_use]
    pub fn content(self) -> BannerContent {
        match self {
            Sample::Success => BannerContent::new("Saved", "Your changes were written to disk."),
            Sample::Warning => BannerContent::new("Low battery", "Plug in soon to keep working."),
            Sample::Info => BannerContent::new("Notification", "Tap to dismiss, or swipe it away."),
        }
    }

    #[must_use]
    pub fn background(self) -> Rgba {
        match self {
            Sample::Success => Rgba::from_rgb8(48, 174, 51),
            Sample::Warning => Rgba::from_rgb8(255, 204, 51),
            Sample::Info => Rgba::from_rgb8(100, 150, 255),
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Show(Sample),
    DismissAll,
    Banner(banner_view::Message),
    /// Frame tick while banners are on screen.
    Tick(Instant),
}

/// Runtime flags passed from the command line. Each one overrides the
/// matching persisted setting.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub springiness: Option<Springiness>,
    pub auto_dismiss_secs: Option<u32>,
    pub edge: Option<Edge>,
}
