//! Landing page with the "New Email" entry point.

use iced::widget::{Space, button, center, column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::style::widgets::{self, palette};

/// Renders the landing page.
pub fn view_landing() -> Element<'static, Message> {
    let p = palette::current();

    let heading = text("Email Composer").size(36).color(p.text_primary);
    let subtitle = text("Craft and send beautiful emails to your customers with ease.")
        .size(16)
        .color(p.text_muted);

    let new_email = button(text("New Email").size(14))
        .padding([10, 20])
        .style(widgets::primary_button_style)
        .on_press(Message::OpenComposer);

    let content = column![
        heading,
        subtitle,
        Space::new().height(Length::Fixed(16.0)),
        new_email,
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(center(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(widgets::page_style)
        .into()
}
