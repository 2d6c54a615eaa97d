// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` owns the toast provider and presenter and injects a `Toaster`
//! into the playground screen. Every update ends by applying pending toast
//! commands and reconciling the presenter, so the overlay always reflects
//! the store as of the last message.

pub mod config;
pub mod logging;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::ui::playground;
use crate::ui::theming::ThemeMode;
use crate::ui::toast::{self, NewToast, Presenter, ToastMessage, ToastProvider, Toaster};
use iced::widget::Stack;
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state.
pub struct App {
    toasts: ToastProvider,
    presenter: Presenter,
    toaster: Toaster,
    playground: playground::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active_toasts", &self.toasts.store().len())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(&config::Config::default())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the application state from a loaded configuration.
    #[must_use]
    pub fn with_config(config: &config::Config) -> Self {
        let toasts = ToastProvider::new();
        let toaster = toasts.toaster();
        let presenter = Presenter::new(config.toasts.tween(), config.toasts.display_duration());

        Self {
            playground: playground::State::new(toasts.toaster()),
            toasts,
            presenter,
            toaster,
            theme_mode: config.general.theme_mode,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        tracing::debug!(?flags, "booting");
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        let mut app = Self::with_config(&config);

        if let Some(warning) = config_warning {
            app.toaster.add_toast(
                NewToast::error("Configuração inválida").description(warning),
            );
        }
        app.sync_toasts(Instant::now());

        tracing::info!(
            display_ms = app.presenter.display_duration().as_millis() as u64,
            "GoBarber started"
        );
        (app, Task::none())
    }

    /// Returns a handle for raising toasts from outside the update loop.
    ///
    /// Commands sent on it wake the loop through [`App::subscription`] and
    /// are applied on the resulting [`Message::ToastsPending`].
    #[must_use]
    pub fn toaster(&self) -> Toaster {
        self.toaster.clone()
    }

    #[must_use]
    pub fn toasts(&self) -> &toast::Store {
        self.toasts.store()
    }

    #[must_use]
    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn title(&self) -> String {
        String::from("GoBarber")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(&self.presenter),
            subscription::create_toast_subscription(self.toasts.wakeup()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut now = Instant::now();

        let task = match message {
            Message::Playground(message) => self
                .playground
                .update(message, self.toasts.store())
                .map(Message::Playground),
            Message::Toast(ToastMessage::Dismiss(id)) => {
                self.presenter.dismiss(id, &self.toaster);
                Task::none()
            }
            Message::Tick(instant) => {
                now = instant;
                self.presenter.tick(now, &self.toaster);
                Task::none()
            }
            Message::ToastsPending => Task::none(),
        };

        self.sync_toasts(now);
        task
    }

    /// Applies pending toast commands and reconciles the presenter.
    fn sync_toasts(&mut self, now: Instant) {
        let changes = self.toasts.flush();
        if !changes.is_empty() {
            self.presenter.sync(self.toasts.store(), now);
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let screen = self.playground.view().map(Message::Playground);
        let overlay = toast::widget::overlay(&self.presenter, Instant::now()).map(Message::Toast);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(screen)
            .push(overlay)
            .into()
    }
}
