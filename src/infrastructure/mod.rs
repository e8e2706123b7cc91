// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined
//! in `application::port`.
//!
//! # Available Adapters
//!
//! - [`surface_stack`]: ordered host surfaces (implements [`SurfaceProvider`])
//! - [`layout_book`]: records banner placements (implements [`LayoutSink`])
//! - [`timeline`]: virtual-clock animations and timers (implements [`Scheduler`])
//! - [`tick_host`]: the three above, driven forward by explicit ticks
//! - [`tokio_scheduler`]: wall-clock scheduler on a tokio runtime (implements [`Scheduler`])
//!
//! [`SurfaceProvider`]: crate::application::port::SurfaceProvider
//! [`LayoutSink`]: crate::application::port::LayoutSink
//! [`Scheduler`]: crate::application::port::Scheduler

pub mod layout_book;
pub mod surface_stack;
pub mod tick_host;
pub mod timeline;
pub mod tokio_scheduler;

// Re-export main types for convenience
pub use layout_book::{LayoutBook, Placement};
pub use surface_stack::SurfaceStack;
pub use tick_host::TickHost;
pub use timeline::{AnimationProgress, Timeline};
pub use tokio_scheduler::TokioScheduler;
