//! View components for the application.

mod composer;
mod landing;
mod recipients;
mod toast;

use email_composer_core::Composer;
use iced::widget::{center, container, mouse_area, opaque, stack, text_editor};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::widgets;

pub use composer::view_composer;
pub use landing::view_landing;
pub use toast::view_toasts;

/// Renders the whole window: landing page, the dialog when open, and toasts.
pub fn view_app<'a>(
    composer: &'a Composer,
    description: &'a text_editor::Content,
) -> Element<'a, Message> {
    let mut layers = stack![view_landing()]
        .width(Length::Fill)
        .height(Length::Fill);

    if composer.is_open() {
        // Clicks on the backdrop are swallowed; the dialog closes via Cancel or Escape.
        let backdrop = container(center(view_composer(composer, description)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(widgets::backdrop_style);
        layers = layers.push(opaque(mouse_area(backdrop).on_press(Message::Ignored)));
    }

    if !composer.notifications().is_empty() {
        layers = layers.push(view_toasts(composer.notifications()));
    }

    layers.into()
}
