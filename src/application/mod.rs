// SPDX-License-Identifier: MPL-2.0
//! Application layer - Ports the banner core drives.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The banner core talks to the host only through these ports

pub mod port;
