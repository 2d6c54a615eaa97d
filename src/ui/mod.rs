// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`playground`] - Raises the GoBarber logon and sign-up toasts
//!
//! # Shared Infrastructure
//!
//! - [`toast`] - Toast notification system for user feedback
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod icons;
pub mod playground;
pub mod theming;
pub mod toast;
