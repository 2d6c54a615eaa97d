// SPDX-License-Identifier: MPL-2.0
//! Theme selection.

use crate::ui::design_tokens::palette;
use iced::theme::Palette;
use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Builds the Iced theme: GoBarber's dark purple-gray with orange accents,
    /// or a light variant of it.
    #[must_use]
    pub fn theme(self) -> Theme {
        let palette = if self.is_dark() {
            Palette {
                background: palette::GRAY_800,
                text: palette::GRAY_200,
                primary: palette::ORANGE_500,
                danger: palette::ERROR_700,
                ..Palette::DARK
            }
        } else {
            Palette {
                background: palette::GRAY_100,
                text: palette::GRAY_900,
                primary: palette::ORANGE_500,
                danger: palette::ERROR_700,
                ..Palette::LIGHT
            }
        };
        Theme::custom("GoBarber".to_string(), palette)
    }
}
