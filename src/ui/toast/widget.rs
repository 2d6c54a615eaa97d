// SPDX-License-Identifier: MPL-2.0
//! Rendering of toast cards and the overlay that stacks them.
//!
//! Cards are drawn from the presenter's views, so a card that is leaving is
//! still rendered (sliding out and fading) after its record was removed.

use super::animation::Frame;
use super::message::{Toast, ToastId, ToastKind};
use super::presenter::Presenter;
use super::Animator;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use crate::ui::icons;
use iced::font::{self, Font};
use iced::widget::svg::Handle;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Background, Color, Element, Length, Theme};
use std::time::Instant;

/// Messages emitted by toast cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The close button of a card was pressed.
    Dismiss(ToastId),
}

/// Returns the icon for a toast kind.
#[must_use]
pub fn kind_icon(kind: ToastKind) -> Handle {
    match kind {
        ToastKind::Info => icons::info(),
        ToastKind::Success => icons::check_circle(),
        ToastKind::Error => icons::alert_circle(),
    }
}

/// Multiplies the alpha channel of `color` by `factor`.
fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

/// Horizontal shift in pixels for a frame; positive moves the card right.
fn shift_px(frame: Frame) -> f32 {
    (-frame.offset * sizing::TOAST_WIDTH).max(0.0)
}

/// Renders a single card at the given animation frame.
pub fn card<'a>(toast: &'a Toast, frame: Frame) -> Element<'a, Message> {
    let kind = toast.kind();
    let accent = faded(kind.accent(), frame.opacity);
    let background = faded(kind.background(), frame.opacity);

    let icon = icons::tinted(kind_icon(kind), sizing::ICON_MD, accent);

    let mut body = Column::new().spacing(spacing::XXS).width(Length::Fill).push(
        text(toast.title())
            .size(typography::BODY_LG)
            .font(Font {
                weight: font::Weight::Bold,
                ..Font::DEFAULT
            })
            .color(accent),
    );
    if let Some(description) = toast.description() {
        body = body.push(
            text(description)
                .size(typography::BODY)
                .color(faded(accent, opacity::SECONDARY_TEXT)),
        );
    }

    let dismiss = button(icons::tinted(icons::x_circle(), sizing::ICON_SM, accent))
        .on_press(Message::Dismiss(toast.id()))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [icon] [title / description] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(if toast.description().is_some() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Center
        })
        .push(icon)
        .push(body)
        .push(dismiss);

    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::MD)
        .style(move |_theme: &Theme| card_style(background, accent, frame.opacity));

    // Slide by padding a fixed-width clip so leaving cards keep their slot.
    Container::new(
        Row::new()
            .push(Space::new().width(Length::Fixed(shift_px(frame))))
            .push(card),
    )
    .width(Length::Fixed(sizing::TOAST_WIDTH))
    .clip(true)
    .into()
}

/// Renders every card of `presenter`, stacked top-right.
pub fn overlay<'a, A: Animator>(presenter: &'a Presenter<A>, now: Instant) -> Element<'a, Message> {
    if presenter.is_empty() {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    }

    let cards = presenter
        .views()
        .map(|view| card(view.toast(), view.frame(now)));

    Container::new(
        Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Right)
    .align_y(alignment::Vertical::Top)
    .padding(spacing::XL)
    .into()
}

fn card_style(background: Color, accent: Color, visibility: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(background)),
        border: iced::Border {
            color: faded(accent, opacity::OUTLINE),
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, opacity::SHADOW * visibility),
            ..shadow::MD
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

fn dismiss_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(faded(palette::BLACK, opacity::HOVER)))
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: Color::TRANSPARENT,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
