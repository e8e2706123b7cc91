// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core banner types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`banner`]: Banner value objects ([`BannerContent`](banner::BannerContent),
//!   [`BannerStyle`](banner::BannerStyle), [`Springiness`](banner::Springiness),
//!   [`AnimationDuration`](banner::AnimationDuration), [`Opacity`](banner::Opacity))

pub mod banner;
