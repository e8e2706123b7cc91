// SPDX-License-Identifier: MPL-2.0
//! Springiness tiers for entrance and exit animations.

/// Damping ratio and initial velocity handed to the animation facility.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParameters {
    /// Damping ratio; `1.0` is critically damped (no overshoot).
    pub damping: f32,
    /// Initial velocity, in banner heights per second.
    pub velocity: f32,
}

/// How much a banner bounces when it slides in or out.
///
/// - `None`: slides in and settles without bouncing.
/// - `Slight`: bounces a little.
/// - `Heavy`: bounces a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Springiness {
    None,
    #[default]
    Slight,
    Heavy,
}

impl Springiness {
    /// All tiers, from calmest to bounciest.
    pub const ALL: [Springiness; 3] = [Springiness::None, Springiness::Slight, Springiness::Heavy];

    /// Returns the spring parameters for this tier.
    #[must_use]
    pub fn spring_parameters(self) -> SpringParameters {
        match self {
            Springiness::None => SpringParameters {
                damping: 1.0,
                velocity: 1.0,
            },
            Springiness::Slight => SpringParameters {
                damping: 0.7,
                velocity: 1.5,
            },
            Springiness::Heavy => SpringParameters {
                damping: 0.6,
                velocity: 2.0,
            },
        }
    }

    /// Returns whether animations with this tier overshoot their target.
    #[must_use]
    pub fn overshoots(self) -> bool {
        self.spring_parameters().damping < 1.0
    }

    /// Parses a tier name (`none`, `slight`, `heavy`), ignoring case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(Springiness::None),
            "slight" => Some(Springiness::Slight),
            "heavy" => Some(Springiness::Heavy),
            _ => None,
        }
    }

    /// Returns the lowercase tier name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Springiness::None => "none",
            Springiness::Slight => "slight",
            Springiness::Heavy => "heavy",
        }
    }
}
