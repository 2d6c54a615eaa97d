// SPDX-License-Identifier: MPL-2.0
//! Embedded SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock` so every view reuses the same parsed tree. The
//! sources are stroke-only, so [`tinted`] can recolor them per toast kind.
//!
//! Icons use generic visual names describing the icon's appearance, not
//! the action context (e.g., `x_circle` not `close_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length};
use std::sync::OnceLock;

/// Defines an icon function returning a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(info, "info.svg", "Info icon: letter i inside a circle.");
define_icon!(
    check_circle,
    "check-circle.svg",
    "Check icon: tick mark leaving a circle."
);
define_icon!(
    alert_circle,
    "alert-circle.svg",
    "Alert icon: exclamation mark inside a circle."
);
define_icon!(x_circle, "x-circle.svg", "Close icon: cross inside a circle.");

/// Renders `handle` as a square icon of `size` pixels in the given color.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme, _status| svg::Style { color: Some(color) })
}
