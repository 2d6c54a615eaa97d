// SPDX-License-Identifier: MPL-2.0
//! Per-toast display state: mount/unmount transitions and auto-expiry.
//!
//! The presenter mirrors the store. Each active toast gets a [`ToastView`]
//! that moves through `Entering -> Visible -> Leaving` and is dropped once
//! its exit transition completes. A view keeps a copy of its record so it
//! can finish leaving after the store has already forgotten it.
//!
//! Every view arms an [`ExpiryTimer`] when it mounts. The timer lives inside
//! the view, so it is cancelled on every exit path: user dismissal and
//! external removal disarm it, and dropping the view drops it.

use super::animation::{Animator, Frame, Transition, Tween};
use super::message::{Toast, ToastId};
use super::service::Toaster;
use super::store::Store;
use std::time::{Duration, Instant};

/// How long a toast stays up without user interaction.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Visible,
    Leaving,
}

/// One-shot deadline owned by a view.
///
/// A delay too large to represent as an `Instant` never comes due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryTimer {
    deadline: Option<Instant>,
}

impl ExpiryTimer {
    #[must_use]
    pub fn start(now: Instant, after: Duration) -> Self {
        Self {
            deadline: now.checked_add(after),
        }
    }

    #[must_use]
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[derive(Debug, Clone)]
pub struct ToastView {
    toast: Toast,
    phase: Phase,
    transition: Transition,
    expiry: Option<ExpiryTimer>,
}

impl ToastView {
    fn mount(toast: Toast, animator: &impl Animator, display: Duration, now: Instant) -> Self {
        Self {
            toast,
            phase: Phase::Entering,
            transition: animator.animate(Frame::HIDDEN, Frame::SHOWN, now),
            expiry: Some(ExpiryTimer::start(now, display)),
        }
    }

    /// Starts the exit transition from wherever the card currently is.
    fn leave(&mut self, animator: &impl Animator, now: Instant) {
        let current = self.transition.sample(now);
        self.phase = Phase::Leaving;
        self.transition = animator.animate(current, Frame::HIDDEN, now);
        self.expiry = None;
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.toast.id()
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn frame(&self, now: Instant) -> Frame {
        self.transition.sample(now)
    }

    /// Returns the pending expiry, if the timer is still armed.
    #[must_use]
    pub fn expiry(&self) -> Option<ExpiryTimer> {
        self.expiry
    }
}

/// Display state for every toast on screen, including those still leaving.
#[derive(Debug)]
pub struct Presenter<A: Animator = Tween> {
    views: Vec<ToastView>,
    animator: A,
    display: Duration,
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new(Tween::default(), DEFAULT_DISPLAY_DURATION)
    }
}

impl<A: Animator> Presenter<A> {
    #[must_use]
    pub fn new(animator: A, display: Duration) -> Self {
        Self {
            views: Vec::new(),
            animator,
            display,
        }
    }

    /// Reconciles views with the store.
    ///
    /// New toasts are mounted at the end; views whose record is gone start
    /// leaving but keep their slot until the transition completes.
    pub fn sync(&mut self, store: &Store, now: Instant) {
        for view in &mut self.views {
            if view.phase != Phase::Leaving && !store.contains(view.id()) {
                view.leave(&self.animator, now);
            }
        }

        for toast in store.iter() {
            let mounted = self
                .views
                .iter()
                .any(|view| view.id() == toast.id() && view.phase != Phase::Leaving);
            if !mounted {
                self.views.push(ToastView::mount(
                    toast.clone(),
                    &self.animator,
                    self.display,
                    now,
                ));
            }
        }
    }

    /// Advances timers and transitions.
    ///
    /// Due expiry timers fire once each, requesting removal through
    /// `toaster`. Returns the number of timers that fired.
    pub fn tick(&mut self, now: Instant, toaster: &Toaster) -> usize {
        let mut fired = 0;

        for view in &mut self.views {
            if view.expiry.is_some_and(|timer| timer.is_due(now)) {
                view.expiry = None;
                tracing::debug!(id = %view.id(), "toast expired");
                toaster.remove_toast(view.id());
                fired += 1;
            }

            if view.phase == Phase::Entering && view.transition.is_complete(now) {
                view.phase = Phase::Visible;
            }
        }

        self.views.retain(|view| {
            let finished = view.phase == Phase::Leaving && view.transition.is_complete(now);
            if finished {
                tracing::debug!(id = %view.id(), "toast unmounted");
            }
            !finished
        });

        fired
    }

    /// Handles a click on a card's close button.
    ///
    /// The expiry timer is disarmed right away so it cannot fire between
    /// the dismissal and the next [`Presenter::sync`].
    pub fn dismiss(&mut self, id: ToastId, toaster: &Toaster) {
        if let Some(view) = self
            .views
            .iter_mut()
            .find(|view| view.id() == id && view.phase != Phase::Leaving)
        {
            view.expiry = None;
        }
        toaster.remove_toast(id);
    }

    pub fn views(&self) -> impl Iterator<Item = &ToastView> {
        self.views.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Returns whether any card is mid-transition.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.views
            .iter()
            .any(|view| matches!(view.phase, Phase::Entering | Phase::Leaving))
    }

    #[must_use]
    pub fn display_duration(&self) -> Duration {
        self.display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::service::{Change, ToastProvider};
    use crate::ui::toast::NewToast;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn setup() -> (ToastProvider, Toaster, Presenter, Instant) {
        let provider = ToastProvider::new();
        let toaster = provider.toaster();
        (provider, toaster, Presenter::default(), Instant::now())
    }

    /// Runs one update-loop step: apply commands, then reconcile.
    fn step(provider: &mut ToastProvider, presenter: &mut Presenter, now: Instant) -> Vec<Change> {
        let changes = provider.flush();
        presenter.sync(provider.store(), now);
        changes
    }

    #[test]
    fn mounted_view_enters_then_becomes_visible() {
        let (mut provider, toaster, mut presenter, t0) = setup();
        toaster.add_toast(NewToast::new("A"));
        step(&mut provider, &mut presenter, t0);

        let view = presenter.views().next().expect("view mounted");
        assert_eq!(view.phase(), Phase::Entering);
        assert_eq!(view.frame(t0), Frame::HIDDEN);

        presenter.tick(t0 + ms(300), &toaster);
        let view = presenter.views().next().expect("view still mounted");
        assert_eq!(view.phase(), Phase::Visible);
        assert_eq!(view.frame(t0 + ms(300)), Frame::SHOWN);
    }

    #[test]
    fn expiry_removes_toast_exactly_once() {
        let (mut provider, toaster, mut presenter, t0) = setup();
        toaster.add_toast(NewToast::new("A"));
        let changes = step(&mut provider, &mut presenter, t0);
        let [Change::Added(id)] = changes[..] else {
            panic!("unexpected changes: {changes:?}");
        };

        assert_eq!(presenter.tick(t0 + ms(2999), &toaster), 0);
        assert_eq!(presenter.tick(t0 + ms(3000), &toaster), 1);
        assert_eq!(
            step(&mut provider, &mut presenter, t0 + ms(3000)),
            vec![Change::Removed(id)]
        );

        assert_eq!(presenter.tick(t0 + ms(3100), &toaster), 0);
        assert!(step(&mut provider, &mut presenter, t0 + ms(3100)).is_empty());
        assert!(provider.store().is_empty());
    }

    #[test]
    fn dismissal_cancels_pending_expiry() {
        let (mut provider, toaster, mut presenter, t0) = setup();
        toaster.add_toast(NewToast::new("A"));
        step(&mut provider, &mut presenter, t0);
        let id = provider.store().ids().next().expect("toast stored");

        presenter.dismiss(id, &toaster);
        assert_eq!(
            step(&mut provider, &mut presenter, t0 + ms(500)),
            vec![Change::Removed(id)]
        );

        let view = presenter.views().next().expect("view is leaving");
        assert_eq!(view.phase(), Phase::Leaving);
        assert!(view.expiry().is_none());

        assert_eq!(presenter.tick(t0 + ms(3000), &toaster), 0);
        assert!(provider.flush().is_empty());
    }

    #[test]
    fn external_removal_disarms_timer_and_starts_leaving() {
        let (mut provider, toaster, mut presenter, t0) = setup();
        toaster.add_toast(NewToast::new("A"));
        step(&mut provider, &mut presenter, t0);
        let id = provider.store().ids().next().expect("toast stored");

        toaster.remove_toast(id);
        step(&mut provider, &mut presenter, t0 + ms(1000));

        let view = presenter.views().next().expect("view is leaving");
        assert_eq!(view.phase(), Phase::Leaving);
        assert!(view.expiry().is_none());
    }

    #[test]
    fn leaving_view_keeps_slot_until_transition_completes() {
        let (mut provider, toaster, mut presenter, t0) = setup();
        toaster.add_toast(NewToast::new("A"));
        toaster.add_toast(NewToast::new("B"));
        step(&mut provider, &mut presenter, t0);
        presenter.tick(t0 + ms(300), &toaster);
        let a = provider.store().ids().next().expect("A stored");

        presenter.dismiss(a, &toaster);
        step(&mut provider, &mut presenter, t0 + ms(1000));
        assert_eq!(provider.store().len(), 1);

        let titles: Vec<&str> = presenter.views().map(|v| v.toast().title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert!(presenter.is_animating());

        presenter.tick(t0 + ms(1150), &toaster);
        assert_eq!(presenter.views().count(), 2);

        presenter.tick(t0 + ms(1300), &toaster);
        let titles: Vec<&str> = presenter.views().map(|v| v.toast().title()).collect();
        assert_eq!(titles, vec!["B"]);
        assert!(!presenter.is_animating());
    }

    #[test]
    fn leaving_mid_entry_starts_from_current_frame() {
        let (mut provider, toaster, mut presenter, t0) = setup();
        toaster.add_toast(NewToast::new("A"));
        step(&mut provider, &mut presenter, t0);
        let id = provider.store().ids().next().expect("toast stored");

        let halfway = t0 + ms(150);
        let before = presenter.views().next().map(|v| v.frame(halfway));
        toaster.remove_toast(id);
        step(&mut provider, &mut presenter, halfway);

        let after = presenter.views().next().map(|v| v.frame(halfway));
        assert_eq!(before, after);
    }

    #[test]
    fn unrepresentable_display_duration_never_expires() {
        let mut provider = ToastProvider::new();
        let toaster = provider.toaster();
        let mut presenter = Presenter::new(Tween::default(), Duration::MAX);
        let t0 = Instant::now();

        toaster.add_toast(NewToast::new("A"));
        step(&mut provider, &mut presenter, t0);

        let view = presenter.views().next().expect("view mounted");
        assert_eq!(view.expiry().and_then(|timer| timer.deadline()), None);
        assert_eq!(presenter.tick(t0 + Duration::from_secs(86_400), &toaster), 0);
        assert_eq!(provider.store().len(), 1);
    }

    #[test]
    fn expiry_timer_is_due_at_its_deadline() {
        let t0 = Instant::now();
        let timer = ExpiryTimer::start(t0, ms(3000));

        assert_eq!(timer.deadline(), Some(t0 + ms(3000)));
        assert!(!timer.is_due(t0 + ms(2999)));
        assert!(timer.is_due(t0 + ms(3000)));
    }

    #[test]
    fn immediate_animator_unmounts_on_next_tick() {
        let mut provider = ToastProvider::new();
        let toaster = provider.toaster();
        let mut presenter = Presenter::new(Tween::immediate(), DEFAULT_DISPLAY_DURATION);
        let t0 = Instant::now();

        toaster.add_toast(NewToast::new("A"));
        provider.flush();
        presenter.sync(provider.store(), t0);
        presenter.tick(t0, &toaster);
        assert!(!presenter.is_animating());

        presenter.tick(t0 + DEFAULT_DISPLAY_DURATION, &toaster);
        provider.flush();
        presenter.sync(provider.store(), t0 + DEFAULT_DISPLAY_DURATION);
        presenter.tick(t0 + DEFAULT_DISPLAY_DURATION, &toaster);

        assert!(presenter.is_empty());
    }
}
