// SPDX-License-Identifier: MPL-2.0
//! `gobarber` is the toast notification subsystem of the GoBarber client,
//! built with the Iced GUI framework.
//!
//! Toasts are added and removed through a [`ui::toast::Toaster`] handle
//! issued by a [`ui::toast::ToastProvider`]; the presenter animates them in,
//! expires them after a fixed delay and animates them out.

pub mod app;
pub mod error;
pub mod ui;
