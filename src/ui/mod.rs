// SPDX-License-Identifier: MPL-2.0
//! iced rendering of banners.
//!
//! The lifecycle core only speaks in anchors, animation requests and
//! gestures. This module turns the recorded placements and running
//! animations of a [`crate::infrastructure::TickHost`] into widgets, and
//! raw pointer input back into taps and swipes.
//!
//! # Components
//!
//! - [`banner_view`] - Banner card and overlay widgets
//! - [`spring`] - Damped spring curve used by entrance animations
//! - [`gesture`] - Press/move/release tracking into taps and swipes
//! - [`design_tokens`] - Shared sizes, colors and shadows

pub mod banner_view;
pub mod design_tokens;
pub mod gesture;
pub mod spring;
