// SPDX-License-Identifier: MPL-2.0
//! Banner value objects.
//!
//! Everything a banner needs to describe itself without knowing which GUI
//! toolkit will eventually draw it: identity, content, style, the
//! springiness tiers and the lifecycle state seen by callers.

mod content;
mod identity;
mod newtypes;
mod springiness;
mod state;
mod style;

pub use content::{BannerContent, ImageRef};
pub use identity::{BannerId, SurfaceId};
pub use newtypes::{
    animation_duration_bounds, auto_dismiss_bounds, AnimationDuration, AutoDismiss, Opacity,
};
pub use springiness::{SpringParameters, Springiness};
pub use state::BannerState;
pub use style::{BannerStyle, Edge, Rgba, SwipeDirection};
