// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and bounds for configuration constants.

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default time a toast stays on screen without interaction (milliseconds).
pub const DEFAULT_TOAST_DISPLAY_MS: u64 = 3000;

/// Minimum display time (milliseconds).
pub const MIN_TOAST_DISPLAY_MS: u64 = 500;

/// Maximum display time (milliseconds).
pub const MAX_TOAST_DISPLAY_MS: u64 = 60_000;

/// Default duration of the slide-in transition (milliseconds).
pub const DEFAULT_TOAST_ENTER_MS: u64 = 300;

/// Default duration of the slide-out transition (milliseconds).
pub const DEFAULT_TOAST_LEAVE_MS: u64 = 300;

/// Upper bound for both transitions (milliseconds).
pub const MAX_TOAST_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_TOAST_DISPLAY_MS <= DEFAULT_TOAST_DISPLAY_MS);
    assert!(DEFAULT_TOAST_DISPLAY_MS <= MAX_TOAST_DISPLAY_MS);
    assert!(DEFAULT_TOAST_ENTER_MS <= MAX_TOAST_TRANSITION_MS);
    assert!(DEFAULT_TOAST_LEAVE_MS <= MAX_TOAST_TRANSITION_MS);
};
