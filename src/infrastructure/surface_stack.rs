// SPDX-License-Identifier: MPL-2.0
//! Stack of host surfaces.
//!
//! Surfaces are kept in the order they were opened; the active one is the
//! most recently opened surface that is still visible.

use crate::application::port::SurfaceProvider;
use crate::domain::banner::SurfaceId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    id: SurfaceId,
    visible: bool,
}

/// Ordered collection of surfaces with visibility flags.
#[derive(Debug, Clone, Default)]
pub struct SurfaceStack {
    entries: Vec<Entry>,
}

impl SurfaceStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a visible surface on top. Pushing a known surface moves it to
    /// the top and makes it visible.
    pub fn push(&mut self, id: SurfaceId) {
        self.entries.retain(|e| e.id != id);
        self.entries.push(Entry { id, visible: true });
    }

    /// Shows or hides a surface. Returns `false` for unknown surfaces.
    pub fn set_visible(&mut self, id: SurfaceId, visible: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Removes a surface. Returns `false` for unknown surfaces.
    pub fn remove(&mut self, id: SurfaceId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Topmost visible surface.
    #[must_use]
    pub fn active(&self) -> Option<SurfaceId> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.visible)
            .map(|e| e.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SurfaceProvider for SurfaceStack {
    fn active_surface(&self) -> Option<SurfaceId> {
        self.active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_has_no_active_surface() {
        assert_eq!(SurfaceStack::new().active_surface(), None);
    }

    #[test]
    fn topmost_visible_surface_is_active() {
        let mut stack = SurfaceStack::new();
        stack.push(SurfaceId::new(1));
        stack.push(SurfaceId::new(2));
        assert_eq!(stack.active(), Some(SurfaceId::new(2)));

        stack.set_visible(SurfaceId::new(2), false);
        assert_eq!(stack.active(), Some(SurfaceId::new(1)));

        stack.set_visible(SurfaceId::new(1), false);
        assert_eq!(stack.active(), None);
    }

    #[test]
    fn push_moves_known_surface_to_top() {
        let mut stack = SurfaceStack::new();
        stack.push(SurfaceId::new(1));
        stack.push(SurfaceId::new(2));
        stack.push(SurfaceId::new(1));

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.active(), Some(SurfaceId::new(1)));
    }

    #[test]
    fn unknown_surfaces_are_reported() {
        let mut stack = SurfaceStack::new();
        assert!(!stack.set_visible(SurfaceId::new(7), true));
        assert!(!stack.remove(SurfaceId::new(7)));
    }
}
