//! Toast stack in the bottom-right corner.

use email_composer_core::{Notifications, Toast, ToastKind};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets::{self, palette};

/// Renders all visible toasts, oldest on top.
pub fn view_toasts(notifications: &Notifications) -> Element<'_, Message> {
    let cards = notifications
        .iter()
        .fold(column![].spacing(8), |col, toast| col.push(view_toast(toast)));

    container(cards)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(24)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}

fn view_toast(toast: &Toast) -> Element<'_, Message> {
    let p = palette::current();

    let icon_color = match toast.kind {
        ToastKind::Success => p.accent_green,
        ToastKind::Error => p.accent_red,
        ToastKind::Info => p.text_muted,
    };
    let icon = match toast.kind {
        ToastKind::Success => "✓",
        ToastKind::Error => "!",
        ToastKind::Info => "i",
    };

    let dismiss = button(text("×").size(14))
        .padding([0, 6])
        .style(widgets::chip_remove_button_style)
        .on_press(Message::DismissToast(toast.id));

    let content = row![
        text(icon).size(14).color(icon_color),
        text(&toast.message).size(14).width(Length::Fill),
        dismiss,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .width(Length::Fixed(320.0))
        .padding([12, 16])
        .style(widgets::toast_style(toast.kind))
        .into()
}
