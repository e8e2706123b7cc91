// SPDX-License-Identifier: MPL-2.0
//! `iced_banner` shows transient notification banners that slide in from a
//! window edge, stay for a while, and slide away.
//!
//! The lifecycle core in [`banner`] is toolkit-free: it talks to the host
//! through the ports in [`application::port`]. Adapters in
//! [`infrastructure`] implement those ports, and [`ui`] renders banners
//! with iced.

#![doc(html_root_url = "https://docs.rs/iced_banner/0.1.0")]

pub mod app;
pub mod application;
pub mod banner;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
