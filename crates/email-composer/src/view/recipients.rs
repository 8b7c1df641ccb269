//! Destination emails field: chips, search input and suggestion popover.

use email_composer_core::{Autocomplete, Customer, Recipients};
use iced::widget::{button, column, container, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length};

use crate::message::{ComposerMessage, Message};
use crate::style::widgets::{self, palette};

const POPOVER_MAX_HEIGHT: f32 = 240.0;

/// Renders the recipient field with its popover underneath.
pub fn view_recipients<'a>(
    selected: &'a Recipients,
    autocomplete: &'a Autocomplete,
) -> Element<'a, Message> {
    let chips = selected
        .iter()
        .fold(row![].spacing(6), |chips, email| chips.push(view_chip(email)));

    let search = text_input("Search or type email...", autocomplete.input())
        .on_input(|s| Message::Composer(ComposerMessage::SearchChanged(s)))
        .padding([6, 4])
        .size(14)
        .width(Length::Fill)
        .style(widgets::bare_input_style);

    let field = container(
        column![chips.wrap().vertical_spacing(6), search]
            .spacing(4)
            .width(Length::Fill),
    )
    .padding([6, 8])
    .width(Length::Fill)
    .style(widgets::recipient_field_style);

    if autocomplete.is_popover_open() || autocomplete.is_loading() {
        column![field, view_popover(autocomplete)]
            .spacing(4)
            .into()
    } else {
        field.into()
    }
}

fn view_chip(email: &str) -> Element<'_, Message> {
    let remove = button(text("×").size(12))
        .padding([0, 5])
        .style(widgets::chip_remove_button_style)
        .on_press(Message::Composer(ComposerMessage::RemoveRecipient(
            email.to_string(),
        )));

    container(
        row![text(email).size(12), remove]
            .spacing(4)
            .align_y(Alignment::Center),
    )
    .padding([2, 8])
    .style(widgets::chip_style)
    .into()
}

fn view_popover(autocomplete: &Autocomplete) -> Element<'_, Message> {
    let p = palette::current();

    let body: Element<'_, Message> = if autocomplete.is_loading() {
        text("Loading...").size(13).color(p.text_muted).into()
    } else if autocomplete.suggestions().is_empty() {
        text("No results found.").size(13).color(p.text_muted).into()
    } else {
        let rows = autocomplete
            .suggestions()
            .iter()
            .fold(column![].spacing(2), |col, customer| {
                col.push(view_suggestion(customer))
            });
        scrollable(rows)
            .height(Length::Shrink)
            .style(widgets::scrollable_style)
            .into()
    };

    container(body)
        .padding(6)
        .width(Length::Fill)
        .max_height(POPOVER_MAX_HEIGHT)
        .style(widgets::popover_style)
        .into()
}

fn view_suggestion(customer: &Customer) -> Element<'_, Message> {
    let p = palette::current();

    let label = column![
        text(&customer.name).size(14),
        text(&customer.email).size(12).color(p.text_muted),
    ]
    .spacing(2);

    button(label)
        .padding([6, 8])
        .width(Length::Fill)
        .style(widgets::suggestion_button_style)
        .on_press(Message::Composer(ComposerMessage::SelectSuggestion(
            customer.email.clone(),
        )))
        .into()
}
