// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! The banner core never touches a window, a layout engine or a clock
//! directly. It talks to three ports, bundled per call in a [`Platform`]:
//!
//! - [`surface`]: finds the surface a banner attaches to
//! - [`layout`]: receives declarative attach/place/detach requests
//! - [`scheduler`]: runs animations and timers, reporting back with
//!   [`BannerEvent`]s
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles)
//! - Completion is reported by feeding events back into the core, never by
//!   calling into it from inside the port
//!
//! # Example
//!
//! ```ignore
//! use iced_banner::application::port::Platform;
//!
//! let mut platform = Platform::new(&surfaces, &mut layout, &mut scheduler);
//! manager.present(banner, &mut platform, ShowOptions::default());
//! ```

pub mod layout;
pub mod scheduler;
pub mod surface;

pub use layout::{Anchor, LayoutRequest, LayoutSink, SHADOW_INSET};
pub use scheduler::{AnimationPhase, AnimationRequest, AnimationTicket, BannerEvent, Scheduler, TimerToken};
pub use surface::SurfaceProvider;

/// The ports a banner needs for one lifecycle call.
///
/// Built fresh by the caller for each call so the core never keeps a
/// reference to host state between calls.
pub struct Platform<'a> {
    pub surfaces: &'a dyn SurfaceProvider,
    pub layout: &'a mut dyn LayoutSink,
    pub scheduler: &'a mut dyn Scheduler,
}

impl<'a> Platform<'a> {
    pub fn new(
        surfaces: &'a dyn SurfaceProvider,
        layout: &'a mut dyn LayoutSink,
        scheduler: &'a mut dyn Scheduler,
    ) -> Self {
        Self {
            surfaces,
            layout,
            scheduler,
        }
    }
}
