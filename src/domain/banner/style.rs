// SPDX-License-Identifier: MPL-2.0
//! Visual style and placement of a banner.

use super::newtypes::Opacity;
use super::springiness::Springiness;

/// RGBA color with components in `0.0..=1.0`.
///
/// Kept toolkit-free; renderers convert it to their own color type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Builds a color from 8-bit channels.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        )
    }
}

/// Screen edge a banner slides in from and is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    #[default]
    Top,
    Bottom,
}

impl Edge {
    /// Swipe direction that pushes a banner back toward this edge.
    #[must_use]
    pub fn dismiss_direction(self) -> SwipeDirection {
        match self {
            Edge::Top => SwipeDirection::Up,
            Edge::Bottom => SwipeDirection::Down,
        }
    }
}

/// Direction of a discrete swipe gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

/// How a banner looks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BannerStyle {
    pub background: Rgba,
    pub text_color: Rgba,
    /// Opacity of the background (default 0.95).
    pub opacity: Opacity,
    pub has_shadow: bool,
    pub springiness: Springiness,
    pub edge: Edge,
    /// Pushes content below the status bar area when anchored to the top.
    pub adjusts_for_status_bar: bool,
}

impl Default for BannerStyle {
    fn default() -> Self {
        Self {
            background: Rgba::BLACK,
            text_color: Rgba::WHITE,
            opacity: Opacity::default(),
            has_shadow: true,
            springiness: Springiness::default(),
            edge: Edge::default(),
            adjusts_for_status_bar: true,
        }
    }
}
