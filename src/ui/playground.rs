// SPDX-License-Identifier: MPL-2.0
//! Playground screen that raises the toasts the GoBarber logon and sign-up
//! pages raise.
//!
//! The screen receives a [`Toaster`] when it is built and never touches the
//! store directly.

use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::toast::{NewToast, Store, Toaster};
use iced::widget::{button, container, text, Column, Container};
use iced::{alignment, Background, Border, Color, Element, Length, Task, Theme};
use std::time::Duration;

/// Simulated round trip of the logon request.
const SIGN_IN_LATENCY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Submit the logon form; the simulated request always fails.
    SubmitSignIn,
    /// The simulated logon request finished.
    SignInSettled,
    SignUpSucceeded,
    SignUpFailed,
    /// Raise a toast without a kind.
    Notice,
    DismissAll,
}

pub struct State {
    toaster: Toaster,
    signing_in: bool,
}

impl State {
    #[must_use]
    pub fn new(toaster: Toaster) -> Self {
        Self {
            toaster,
            signing_in: false,
        }
    }

    #[must_use]
    pub fn is_signing_in(&self) -> bool {
        self.signing_in
    }

    /// Handles a playground message. `active` is the current toast store,
    /// read to dismiss every toast.
    pub fn update(&mut self, message: Message, active: &Store) -> Task<Message> {
        match message {
            Message::SubmitSignIn => {
                if self.signing_in {
                    return Task::none();
                }
                self.signing_in = true;
                let toaster = self.toaster.clone();
                Task::perform(sign_in(toaster), |()| Message::SignInSettled)
            }
            Message::SignInSettled => {
                self.signing_in = false;
                Task::none()
            }
            Message::SignUpSucceeded => {
                self.toaster.add_toast(
                    NewToast::success("Cadastro realizado com sucesso!")
                        .description("Você já pode fazer seu logon no GoBarber"),
                );
                Task::none()
            }
            Message::SignUpFailed => {
                self.toaster.add_toast(
                    NewToast::error("Erro no cadastro")
                        .description("Ocorreu um erro ao fazer cadastro"),
                );
                Task::none()
            }
            Message::Notice => {
                self.toaster
                    .add_toast(NewToast::new("Agendamento em breve"));
                Task::none()
            }
            Message::DismissAll => {
                for id in active.ids() {
                    self.toaster.remove_toast(id);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sign_in_label = if self.signing_in {
            "Entrando..."
        } else {
            "Entrar"
        };

        let form = Column::new()
            .spacing(spacing::MD)
            .width(Length::Fixed(sizing::FORM_WIDTH))
            .align_x(alignment::Horizontal::Center)
            .push(text("Faça seu logon").size(typography::TITLE_LG))
            .push(primary_button(
                sign_in_label,
                (!self.signing_in).then_some(Message::SubmitSignIn),
            ))
            .push(primary_button("Criar conta", Some(Message::SignUpSucceeded)))
            .push(primary_button("Cadastro com erro", Some(Message::SignUpFailed)))
            .push(primary_button("Aviso", Some(Message::Notice)))
            .push(
                button(text("Fechar todos").size(typography::BODY))
                    .on_press(Message::DismissAll)
                    .style(button::text),
            );

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

/// Stands in for the logon request: waits, fails, and reports the failure
/// as an error toast from inside the task.
async fn sign_in(toaster: Toaster) {
    tokio::time::sleep(SIGN_IN_LATENCY).await;
    tracing::info!("sign-in rejected");
    toaster.add_toast(
        NewToast::error("Erro na autenticação")
            .description("Ocorreu um erro ao fazer login, cheque as credenciais."),
    );
}

fn primary_button(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(
        container(text(label).size(typography::BODY_LG))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .padding(spacing::MD)
    .on_press_maybe(on_press)
    .style(primary_button_style)
    .into()
}

fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::ORANGE_700,
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..palette::ORANGE_500
        },
        button::Status::Active => palette::ORANGE_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::GRAY_800,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::{ToastKind, ToastProvider};

    #[test]
    fn sign_up_messages_raise_toasts() {
        let mut provider = ToastProvider::new();
        let mut state = State::new(provider.toaster());

        let _ = state.update(Message::SignUpSucceeded, provider.store());
        let _ = state.update(Message::SignUpFailed, provider.store());
        provider.flush();

        let kinds: Vec<ToastKind> = provider.store().iter().map(|t| t.kind()).collect();
        assert_eq!(kinds, vec![ToastKind::Success, ToastKind::Error]);
    }

    #[test]
    fn notice_has_default_kind() {
        let mut provider = ToastProvider::new();
        let mut state = State::new(provider.toaster());

        let _ = state.update(Message::Notice, provider.store());
        provider.flush();

        assert_eq!(
            provider.store().iter().next().map(|t| t.kind()),
            Some(ToastKind::Info)
        );
    }

    #[test]
    fn dismiss_all_removes_every_toast() {
        let mut provider = ToastProvider::new();
        let mut state = State::new(provider.toaster());
        let _ = state.update(Message::Notice, provider.store());
        let _ = state.update(Message::SignUpFailed, provider.store());
        provider.flush();

        let _ = state.update(Message::DismissAll, provider.store());
        provider.flush();

        assert!(provider.store().is_empty());
    }

    #[test]
    fn sign_in_is_not_resubmitted_while_pending() {
        let provider = ToastProvider::new();
        let mut state = State::new(provider.toaster());

        let _ = state.update(Message::SubmitSignIn, provider.store());
        assert!(state.is_signing_in());
        let _ = state.update(Message::SignInSettled, provider.store());
        assert!(!state.is_signing_in());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_sign_in_raises_error_toast() {
        let mut provider = ToastProvider::new();
        sign_in(provider.toaster()).await;
        provider.flush();

        let toast = provider.store().iter().next().expect("error toast");
        assert_eq!(toast.kind(), ToastKind::Error);
        assert_eq!(toast.title(), "Erro na autenticação");
    }
}
