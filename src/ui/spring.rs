// SPDX-License-Identifier: MPL-2.0
//! Damped spring curve for banner entrances and exits.
//!
//! The curve maps elapsed time, normalized to `0.0..=1.0`, to travelled
//! distance where `0.0` is the start and `1.0` the target. Underdamped
//! springs pass the target and settle back; a damping ratio of one or more
//! approaches it without overshoot.

use crate::domain::banner::SpringParameters;

/// Natural frequency on normalized time; high enough that every tier has
/// settled to within a pixel by the end of the animation.
const NATURAL_FREQUENCY: f32 = 12.0;

/// Distance travelled at normalized time `t`.
#[must_use]
pub fn displacement(t: f32, spring: SpringParameters) -> f32 {
    if t.is_nan() || t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let omega = NATURAL_FREQUENCY;
    let velocity = spring.velocity;
    let zeta = spring.damping.max(0.0);

    if zeta >= 1.0 {
        // Critically damped
        let b = velocity - omega;
        1.0 + (-1.0 + b * t) * (-omega * t).exp()
    } else {
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let b = (velocity - zeta * omega) / damped;
        let envelope = (-zeta * omega * t).exp();
        1.0 + envelope * (-(damped * t).cos() + b * (damped * t).sin())
    }
}
