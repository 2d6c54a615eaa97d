// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts are short-lived messages stacked in the top-right corner. They
//! slide in, stay for a fixed time (3s by default) unless the user closes
//! them, then slide out.
//!
//! # Components
//!
//! - [`message`] - `Toast` records, `NewToast` requests and `ToastKind`
//! - [`store`] - ordered collection of active toasts
//! - [`service`] - `ToastProvider` (owner) and `Toaster` (handle), the only
//!   mutation path
//! - [`presenter`] - per-toast display state, expiry timers and transitions
//! - [`animation`] - frames, easing and the `Animator` capability
//! - [`widget`] - Iced rendering of cards and the overlay
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::toast::{NewToast, Presenter, ToastProvider};
//!
//! let mut provider = ToastProvider::new();
//! let toaster = provider.toaster(); // hand clones to components
//!
//! toaster.add_toast(NewToast::error("Erro na autenticação"));
//!
//! // In the update loop
//! provider.flush();
//! presenter.sync(provider.store(), Instant::now());
//! presenter.tick(Instant::now(), &toaster);
//! ```

pub mod animation;
pub mod message;
pub mod presenter;
pub mod service;
pub mod store;
pub mod widget;

pub use animation::{Animator, Easing, Frame, Transition, Tween};
pub use message::{NewToast, Toast, ToastId, ToastKind};
pub use presenter::{ExpiryTimer, Phase, Presenter, ToastView, DEFAULT_DISPLAY_DURATION};
pub use service::{Change, ToastProvider, Toaster, Wakeup};
pub use store::Store;
pub use widget::Message as ToastMessage;
