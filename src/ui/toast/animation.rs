// SPDX-License-Identifier: MPL-2.0
//! Enter/exit transitions for toast cards.
//!
//! An [`Animator`] turns a pair of [`Frame`]s into a [`Transition`] that is
//! sampled on each tick. Completion is observed by polling
//! [`Transition::is_complete`].

use std::time::{Duration, Instant};

/// Visual state of a card at one point in time.
///
/// `offset` is a fraction of the card width; negative values push the card
/// past the right edge of the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub offset: f32,
    pub opacity: f32,
}

impl Frame {
    /// Off-screen: shifted by 120% of its width, fully transparent.
    pub const HIDDEN: Frame = Frame {
        offset: -1.2,
        opacity: 0.0,
    };

    /// Resting position.
    pub const SHOWN: Frame = Frame {
        offset: 0.0,
        opacity: 1.0,
    };

    fn lerp(self, to: Frame, t: f32) -> Frame {
        Frame {
            offset: self.offset + (to.offset - self.offset) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOutCubic,
}

impl Easing {
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A running interpolation between two frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: Frame,
    to: Frame,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Transition {
    #[must_use]
    pub fn new(from: Frame, to: Frame, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn sample(&self, now: Instant) -> Frame {
        let t = self.easing.apply(self.progress(now));
        self.from.lerp(self.to, t)
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> Frame {
        self.to
    }
}

/// Capability to animate a card between two frames.
pub trait Animator {
    fn animate(&self, from: Frame, to: Frame, now: Instant) -> Transition;
}

/// Fixed-duration tween with one duration for entering and one for leaving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub enter: Duration,
    pub leave: Duration,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(enter: Duration, leave: Duration) -> Self {
        Self {
            enter,
            leave,
            easing: Easing::default(),
        }
    }

    /// Transitions that complete on the first tick.
    #[must_use]
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(Duration::from_millis(300), Duration::from_millis(300))
    }
}

impl Animator for Tween {
    fn animate(&self, from: Frame, to: Frame, now: Instant) -> Transition {
        // Heading towards full opacity means the card is entering.
        let duration = if to.opacity >= from.opacity {
            self.enter
        } else {
            self.leave
        };
        Transition::new(from, to, now, duration, self.easing)
    }
}
