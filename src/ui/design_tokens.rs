// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colors, spacing and sizes shared by the playground screen and the toast
overlay.

## Organization

- **Palette**: GoBarber base colors and toast tints
- **Opacity**: Alpha levels for disabled and secondary elements
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**, **Radius**, **Shadow**

## Examples

```
use gobarber::ui::design_tokens::{palette, opacity};
use iced::Color;

let disabled_orange = Color {
    a: opacity::DISABLED,
    ..palette::ORANGE_500
};
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_900: Color = Color::from_rgb(0.157, 0.149, 0.180); // #28262e
    pub const GRAY_800: Color = Color::from_rgb(0.192, 0.180, 0.220); // #312e38
    pub const GRAY_200: Color = Color::from_rgb(0.957, 0.929, 0.910); // #f4ede8
    pub const GRAY_100: Color = Color::from_rgb(0.976, 0.965, 0.957);

    // Brand
    pub const ORANGE_500: Color = Color::from_rgb(1.0, 0.565, 0.0); // #ff9000
    pub const ORANGE_700: Color = Color::from_rgb(0.8, 0.451, 0.0);

    // Toast tints: light background, dark accent
    pub const INFO_50: Color = Color::from_rgb(0.922, 0.973, 1.0); // #ebf8ff
    pub const INFO_700: Color = Color::from_rgb(0.192, 0.447, 0.718); // #3172b7
    pub const SUCCESS_50: Color = Color::from_rgb(0.902, 1.0, 0.980); // #e6fffa
    pub const SUCCESS_700: Color = Color::from_rgb(0.180, 0.396, 0.416); // #2e656a
    pub const ERROR_50: Color = Color::from_rgb(0.992, 0.871, 0.871); // #fddede
    pub const ERROR_700: Color = Color::from_rgb(0.773, 0.188, 0.188); // #c53030
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Hover/press wash behind icon buttons
    pub const HOVER: f32 = 0.08;
    /// Card shadow at full visibility
    pub const SHADOW: f32 = 0.2;
    /// Card outline relative to its accent
    pub const OUTLINE: f32 = 0.3;
    /// Disabled buttons
    pub const DISABLED: f32 = 0.5;
    /// Secondary text relative to its accent
    pub const SECONDARY_TEXT: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 18.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 56.0;
    pub const FORM_WIDTH: f32 = 340.0;
    pub const TOAST_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_LG: f32 = 24.0;

    /// Toast title, button labels
    pub const BODY_LG: f32 = 16.0;

    /// Toast description
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 2.0, y: 2.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XL > spacing::MD);

    assert!(opacity::HOVER > 0.0);
    assert!(opacity::SHADOW < opacity::OUTLINE);
    assert!(opacity::SECONDARY_TEXT < 1.0);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(border::WIDTH_SM > 0.0);
};
