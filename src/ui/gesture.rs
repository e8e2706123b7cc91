// SPDX-License-Identifier: MPL-2.0
//! Pointer tracking that turns press, move and release into gestures.
//!
//! iced's `mouse_area` reports presses without a position, so the tracker
//! remembers the last cursor position seen over each banner and measures
//! the drag from there.

use crate::domain::banner::{BannerId, SwipeDirection};
use iced::Point;

/// Drag distance, in logical pixels, below which a release counts as a tap.
pub const SWIPE_THRESHOLD: f32 = 24.0;

/// A completed gesture on one banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap(BannerId),
    Swipe(BannerId, SwipeDirection),
}

#[derive(Debug, Clone, Copy)]
struct Press {
    banner: BannerId,
    origin: Point,
}

/// Tracks at most one press at a time.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    cursor: Option<(BannerId, Point)>,
    press: Option<Press>,
}

impl GestureTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the cursor position over `banner`.
    pub fn moved(&mut self, banner: BannerId, position: Point) {
        self.cursor = Some((banner, position));
    }

    /// Starts a press on `banner` at the last known cursor position.
    pub fn pressed(&mut self, banner: BannerId) {
        let origin = match self.cursor {
            Some((over, position)) if over == banner => position,
            _ => Point::ORIGIN,
        };
        self.press = Some(Press { banner, origin });
    }

    /// Ends the press, returning the gesture it formed.
    ///
    /// A release over a different banner than the press, or without a press,
    /// yields nothing.
    pub fn released(&mut self, banner: BannerId) -> Option<Gesture> {
        let press = self.press.take()?;
        if press.banner != banner {
            return None;
        }
        let end = match self.cursor {
            Some((over, position)) if over == banner => position,
            _ => press.origin,
        };
        Some(classify(banner, end.x - press.origin.x, end.y - press.origin.y))
    }

    /// Whether a press is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }
}

fn classify(banner: BannerId, dx: f32, dy: f32) -> Gesture {
    if dx.abs() < SWIPE_THRESHOLD && dy.abs() < SWIPE_THRESHOLD {
        return Gesture::Tap(banner);
    }
    let direction = if dy.abs() >= dx.abs() {
        if dy < 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        }
    } else if dx < 0.0 {
        SwipeDirection::Left
    } else {
        SwipeDirection::Right
    };
    Gesture::Swipe(banner, direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(tracker: &mut GestureTracker, banner: BannerId, from: Point, to: Point) -> Option<Gesture> {
        tracker.moved(banner, from);
        tracker.pressed(banner);
        tracker.moved(banner, to);
        tracker.released(banner)
    }

    #[test]
    fn short_drag_is_a_tap() {
        let id = BannerId::new();
        let mut tracker = GestureTracker::new();
        let gesture = drag(&mut tracker, id, Point::new(50.0, 40.0), Point::new(55.0, 38.0));
        assert_eq!(gesture, Some(Gesture::Tap(id)));
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn vertical_drag_is_a_swipe() {
        let id = BannerId::new();
        let mut tracker = GestureTracker::new();
        let up = drag(&mut tracker, id, Point::new(50.0, 60.0), Point::new(52.0, 10.0));
        assert_eq!(up, Some(Gesture::Swipe(id, SwipeDirection::Up)));

        let down = drag(&mut tracker, id, Point::new(50.0, 10.0), Point::new(48.0, 70.0));
        assert_eq!(down, Some(Gesture::Swipe(id, SwipeDirection::Down)));
    }

    #[test]
    fn horizontal_drag_is_a_sideways_swipe() {
        let id = BannerId::new();
        let mut tracker = GestureTracker::new();
        let gesture = drag(&mut tracker, id, Point::new(200.0, 40.0), Point::new(100.0, 45.0));
        assert_eq!(gesture, Some(Gesture::Swipe(id, SwipeDirection::Left)));
    }

    #[test]
    fn release_without_press_yields_nothing() {
        let id = BannerId::new();
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.released(id), None);
    }

    #[test]
    fn release_over_another_banner_cancels_the_press() {
        let pressed = BannerId::new();
        let other = BannerId::new();
        let mut tracker = GestureTracker::new();
        tracker.pressed(pressed);
        assert_eq!(tracker.released(other), None);
        assert!(!tracker.is_pressed());
    }
}
