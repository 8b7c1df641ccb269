//! Compose dialog.

use email_composer_core::{Composer, Field};
use iced::widget::{
    Space, button, column, container, row, scrollable, text, text_editor, text_input,
};
use iced::{Alignment, Element, Length};

use super::recipients::view_recipients;
use crate::message::{ComposerMessage, Message};
use crate::style::widgets::{self, palette};

const DIALOG_WIDTH: f32 = 560.0;
const DESCRIPTION_HEIGHT: f32 = 128.0;

/// Renders the compose dialog card.
pub fn view_composer<'a>(
    composer: &'a Composer,
    description: &'a text_editor::Content,
) -> Element<'a, Message> {
    let p = palette::current();

    let header = column![
        text("Compose New Email").size(20).color(p.text_primary),
        text("Fill in the details below to send an email to your customers.")
            .size(14)
            .color(p.text_muted),
    ]
    .spacing(6);

    // Subject
    let subject = text_input("e.g. Exciting News!", &composer.form().subject)
        .on_input(|s| Message::Composer(ComposerMessage::SubjectChanged(s)))
        .on_submit(Message::Composer(ComposerMessage::Submit))
        .padding(10)
        .size(14)
        .style(widgets::field_input_style);

    // Description
    let body = text_editor(description)
        .placeholder("Start writing your email content here...")
        .on_action(|action| Message::Composer(ComposerMessage::DescriptionEdited(action)))
        .padding(10)
        .size(14)
        .height(Length::Fixed(DESCRIPTION_HEIGHT));

    // Recipients
    let load_all = if composer.is_loading_all() {
        button(text("Loading...").size(13)).style(widgets::outline_button_style)
    } else {
        button(text("Load All Customers").size(13))
            .style(widgets::outline_button_style)
            .on_press(Message::Composer(ComposerMessage::LoadAll))
    }
    .padding([6, 12]);

    let recipients_label = row![
        label("Destination Emails"),
        Space::new().width(Length::Fill),
        load_all,
    ]
    .align_y(Alignment::Center);

    let form = column![
        field(
            label("Subject"),
            subject.into(),
            composer.error_for(Field::Subject).map(|e| e.message()),
        ),
        field(
            label("Description"),
            body.into(),
            composer.error_for(Field::Description).map(|e| e.message()),
        ),
        field(
            recipients_label.into(),
            view_recipients(&composer.form().destination_emails, composer.autocomplete()),
            composer
                .error_for(Field::DestinationEmails)
                .map(|e| e.message()),
        ),
    ]
    .spacing(16);

    // Footer
    let cancel = button(text("Cancel").size(14))
        .padding([10, 20])
        .style(widgets::ghost_button_style)
        .on_press(Message::Composer(ComposerMessage::Cancel));

    let send = if composer.is_submitting() {
        button(text("Sending...").size(14)).style(widgets::primary_button_style)
    } else {
        button(text("Send Email").size(14))
            .style(widgets::primary_button_style)
            .on_press(Message::Composer(ComposerMessage::Submit))
    }
    .padding([10, 20]);

    let footer = row![Space::new().width(Length::Fill), cancel, send].spacing(8);

    let content = column![header, scrollable(form).style(widgets::scrollable_style), footer]
        .spacing(24)
        .padding(24);

    container(content)
        .width(Length::Fixed(DIALOG_WIDTH))
        .style(widgets::dialog_style)
        .into()
}

fn label(title: &str) -> Element<'_, Message> {
    text(title)
        .size(14)
        .color(palette::current().text_primary)
        .into()
}

/// Stacks a label, its input and an optional error line.
fn field<'a>(
    label: Element<'a, Message>,
    input: Element<'a, Message>,
    error: Option<&'static str>,
) -> Element<'a, Message> {
    let mut col = column![label, input].spacing(6);
    if let Some(message) = error {
        col = col.push(text(message).size(12).color(palette::current().accent_red));
    }
    col.into()
}
