// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Sizes, colors and shadows used by the banner widgets.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_banner::ui::design_tokens::{opacity, shadow};

assert_eq!(shadow::BANNER.color.a, opacity::SHADOW);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
}

// ============================================================================
// Opacity Levels
// ============================================================================

pub mod opacity {
    /// Shadow strength under a banner.
    pub const SHADOW: f32 = 0.5;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    /// Height of a banner card, excluding insets.
    pub const BANNER_HEIGHT: f32 = 80.0;
    pub const BANNER_IMAGE: f32 = 25.0;

    /// Room reserved above top banners for a status bar.
    pub const STATUS_BAR_HEIGHT: f32 = 20.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    pub const TITLE_SM: f32 = 17.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette, Color};
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Soft shadow all around the card.
    pub const BANNER: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector::ZERO,
        blur_radius: 4.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    assert!(sizing::BANNER_IMAGE < sizing::BANNER_HEIGHT);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::SM, spacing::XXS * 3.0);
    }

    #[test]
    fn banner_shadow_is_translucent_black() {
        assert_eq!(shadow::BANNER.color.r, 0.0);
        assert_eq!(shadow::BANNER.color.a, opacity::SHADOW);
    }
}
