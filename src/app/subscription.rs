// SPDX-License-Identifier: MPL-2.0
//! Subscriptions feeding the update loop.

use super::Message;
use crate::ui::toast::{Animator, Presenter, Wakeup};
use iced::futures::{stream, Stream};
use iced::{time, Subscription};
use std::time::Duration;

/// Tick period while a card is sliding in or out.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Tick period while cards are only waiting for their expiry.
pub const IDLE_TICK: Duration = Duration::from_millis(100);

/// Picks the tick period for the current toast state, if any.
#[must_use]
pub fn tick_period<A: Animator>(presenter: &Presenter<A>) -> Option<Duration> {
    if presenter.is_animating() {
        Some(ANIMATION_TICK)
    } else if !presenter.is_empty() {
        Some(IDLE_TICK)
    } else {
        None
    }
}

/// Creates a periodic tick subscription for toast expiry and transitions.
pub fn create_tick_subscription<A: Animator>(presenter: &Presenter<A>) -> Subscription<Message> {
    match tick_period(presenter) {
        Some(period) => time::every(period).map(Message::Tick),
        None => Subscription::none(),
    }
}

/// Creates a subscription that wakes the update loop whenever a toast
/// handle enqueues a command, including while nothing is on screen.
pub fn create_toast_subscription(wakeup: Wakeup) -> Subscription<Message> {
    Subscription::run_with(wakeup, toast_commands)
}

fn toast_commands(wakeup: &Wakeup) -> impl Stream<Item = Message> {
    stream::unfold(wakeup.clone(), |wakeup| async move {
        wakeup.notified().await;
        Some((Message::ToastsPending, wakeup))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::{NewToast, ToastProvider, Tween, DEFAULT_DISPLAY_DURATION};
    use iced::futures::StreamExt;
    use std::time::Instant;

    #[test]
    fn no_tick_without_toasts() {
        assert_eq!(tick_period(&Presenter::default()), None);
    }

    #[test]
    fn fast_tick_while_animating_then_idle() {
        let mut provider = ToastProvider::new();
        let toaster = provider.toaster();
        let mut presenter = Presenter::default();
        let t0 = Instant::now();

        toaster.add_toast(NewToast::new("A"));
        provider.flush();
        presenter.sync(provider.store(), t0);
        assert_eq!(tick_period(&presenter), Some(ANIMATION_TICK));

        presenter.tick(t0 + Duration::from_millis(300), &toaster);
        assert_eq!(tick_period(&presenter), Some(IDLE_TICK));
    }

    #[test]
    fn reduced_motion_goes_straight_to_idle() {
        let mut provider = ToastProvider::new();
        let toaster = provider.toaster();
        let mut presenter = Presenter::new(Tween::immediate(), DEFAULT_DISPLAY_DURATION);
        let t0 = Instant::now();

        toaster.add_toast(NewToast::new("A"));
        provider.flush();
        presenter.sync(provider.store(), t0);
        presenter.tick(t0, &toaster);

        assert_eq!(tick_period(&presenter), Some(IDLE_TICK));
    }

    #[tokio::test(start_paused = true)]
    async fn toast_stream_yields_when_idle_handle_adds() {
        let provider = ToastProvider::new();
        assert_eq!(tick_period(&Presenter::default()), None);
        let mut commands = Box::pin(toast_commands(&provider.wakeup()));

        provider.toaster().add_toast(NewToast::info("externo"));

        let message = tokio::time::timeout(Duration::from_millis(50), commands.next())
            .await
            .expect("stream woke");
        assert!(matches!(message, Some(Message::ToastsPending)));
    }

    #[tokio::test(start_paused = true)]
    async fn toast_stream_coalesces_a_burst() {
        let provider = ToastProvider::new();
        let toaster = provider.toaster();
        let mut commands = Box::pin(toast_commands(&provider.wakeup()));

        toaster.add_toast(NewToast::new("A"));
        toaster.add_toast(NewToast::new("B"));
        assert!(commands.next().await.is_some());

        let again = tokio::time::timeout(Duration::from_millis(50), commands.next()).await;
        assert!(again.is_err());
    }
}
