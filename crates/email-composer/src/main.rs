//! Email Composer - pick customer recipients, write a message, submit.
//!
//! Built with Rust and the iced GUI framework.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod message;
mod style;
mod view;

use std::time::Duration;

use anyhow::Context;
use email_composer_core::{
    Composer, ComposerConfig, Customer, CustomerClient, ThemePreference, Toast, ToastKind,
};
use iced::keyboard::{self, Key, Modifiers};
use iced::widget::text_editor;
use iced::{Element, Subscription, Task, Theme};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use message::{ComposerMessage, KeyboardAction, Message};
use style::widgets::palette::{self, ThemeMode};

fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "email_composer=debug,email_composer_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Email Composer");

    iced::application(EmailComposer::new, EmailComposer::update, EmailComposer::view)
        .title("Email Composer")
        .theme(EmailComposer::theme)
        .subscription(EmailComposer::subscription)
        .run()
}

/// Main application state.
struct EmailComposer {
    /// Active configuration.
    config: ComposerConfig,
    /// Lookup client, absent if it could not be built.
    client: Option<CustomerClient>,
    /// Dialog, form and toast state.
    composer: Composer,
    /// Multi-line description buffer, mirrored into the form on every edit.
    description: text_editor::Content,
    /// Current theme mode (light/dark).
    theme_mode: ThemeMode,
}

impl EmailComposer {
    /// Create new application instance.
    fn new() -> (Self, Task<Message>) {
        let config = ComposerConfig::default();
        let app = Self {
            client: build_client(&config),
            composer: Composer::from_config(&config),
            description: text_editor::Content::new(),
            theme_mode: theme_mode(config.theme),
            config,
        };
        app.apply_theme();
        (app, Task::perform(load_config(), Message::ConfigLoaded))
    }

    /// Applies the current theme mode to the global palette.
    fn apply_theme(&self) {
        palette::set_theme(self.theme_mode);
    }

    /// Update state based on message.
    #[allow(clippy::needless_pass_by_value)]
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ConfigLoaded(result) => match result {
                Ok(config) => {
                    info!(url = %config.lookup_url, theme = ?config.theme, "Config loaded");
                    self.client = build_client(&config);
                    if !self.composer.is_open() {
                        self.composer = Composer::from_config(&config);
                    }
                    self.theme_mode = theme_mode(config.theme);
                    self.apply_theme();
                    self.config = config;
                }
                Err(e) => {
                    warn!("Failed to load config, using defaults: {}", e);
                }
            },
            Message::OpenComposer => {
                self.open_composer();
            }
            Message::Composer(msg) => {
                return self.handle_composer(msg);
            }
            Message::DismissToast(id) => {
                self.composer.dismiss_toast(id);
            }
            Message::KeyPressed(action) => {
                return self.handle_keyboard_action(action);
            }
            Message::Ignored => {}
        }
        Task::none()
    }

    fn open_composer(&mut self) {
        if !self.composer.is_open() {
            self.description = text_editor::Content::new();
            self.composer.open();
        }
    }

    /// Handle keyboard shortcut actions.
    fn handle_keyboard_action(&mut self, action: KeyboardAction) -> Task<Message> {
        match action {
            KeyboardAction::ComposeNew => {
                self.open_composer();
            }
            KeyboardAction::Send => {
                if self.composer.is_open() {
                    return Task::done(Message::Composer(ComposerMessage::Submit));
                }
            }
            KeyboardAction::Cancel => {
                if self.composer.autocomplete().is_popover_open() {
                    self.composer.close_popover();
                } else if self.composer.is_open() {
                    return Task::done(Message::Composer(ComposerMessage::Cancel));
                }
            }
        }
        Task::none()
    }

    /// Handle compose dialog messages.
    fn handle_composer(&mut self, msg: ComposerMessage) -> Task<Message> {
        match msg {
            ComposerMessage::SubjectChanged(subject) => {
                self.composer.set_subject(subject);
            }
            ComposerMessage::DescriptionEdited(action) => {
                let is_edit = action.is_edit();
                self.description.perform(action);
                if is_edit {
                    self.composer.set_description(self.description.text());
                }
            }
            ComposerMessage::SearchChanged(text) => {
                let ticket = self.composer.search_changed(text);
                let elapsed = self.composer.autocomplete().debouncer().elapsed(ticket);
                return Task::perform(elapsed, |ticket| {
                    Message::Composer(ComposerMessage::DebounceElapsed(ticket))
                });
            }
            ComposerMessage::DebounceElapsed(ticket) => {
                if let Some(request) = self.composer.debounce_elapsed(ticket) {
                    let generation = request.generation;
                    return Task::perform(fetch_customers(self.client.clone()), move |result| {
                        Message::Composer(ComposerMessage::SuggestionsLoaded(generation, result))
                    });
                }
            }
            ComposerMessage::SuggestionsLoaded(generation, result) => {
                self.composer.suggestions_loaded(generation, result);
            }
            ComposerMessage::SelectSuggestion(email) => {
                self.composer.select_suggestion(&email);
            }
            ComposerMessage::RemoveRecipient(email) => {
                self.composer.remove_recipient(&email);
            }
            ComposerMessage::LoadAll => {
                if self.composer.begin_load_all() {
                    let session = self.composer.session();
                    return Task::perform(fetch_customers(self.client.clone()), move |result| {
                        Message::Composer(ComposerMessage::AllLoaded(session, result))
                    });
                }
            }
            ComposerMessage::AllLoaded(session, result) => {
                if let Some(id) = self.composer.load_all_completed(session, result) {
                    return self.toast_shown(id);
                }
            }
            ComposerMessage::Submit => {
                if let Some(draft) = self.composer.begin_submit() {
                    let session = self.composer.session();
                    let delay = self.config.submit_delay();
                    return Task::perform(
                        email_composer_core::simulate_delivery(draft, delay),
                        move |()| Message::Composer(ComposerMessage::Submitted(session)),
                    );
                }
            }
            ComposerMessage::Submitted(session) => {
                info!("Email sent successfully");
                if session == self.composer.session() {
                    self.description = text_editor::Content::new();
                }
                let id = self.composer.submit_completed(session);
                return self.toast_shown(id);
            }
            ComposerMessage::Cancel => {
                self.composer.close();
                self.description = text_editor::Content::new();
            }
        }
        Task::none()
    }

    /// Schedules dismissal of a freshly shown toast, mirroring it to the
    /// desktop if enabled.
    fn toast_shown(&self, id: u64) -> Task<Message> {
        let duration = self.config.toast_duration();
        let dismiss = Task::perform(tokio::time::sleep(duration), move |()| {
            Message::DismissToast(id)
        });

        let toast = self.composer.notifications().get(id).cloned();
        match toast {
            Some(toast) if self.config.desktop_notifications => Task::batch([
                dismiss,
                Task::perform(notify_desktop(toast, duration), |()| Message::Ignored),
            ]),
            _ => dismiss,
        }
    }

    /// Render current state as UI.
    fn view(&self) -> Element<'_, Message> {
        view::view_app(&self.composer, &self.description)
    }

    /// Maps the palette mode onto iced's built-in theme for widgets we don't
    /// style by hand (the description editor).
    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    /// Subscribe to keyboard events for shortcuts.
    #[allow(clippy::unused_self)] // Required signature for iced subscription
    fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| {
            if let keyboard::Event::KeyPressed { key, modifiers, .. } = event {
                handle_key_press(key, modifiers).unwrap_or(Message::Ignored)
            } else {
                Message::Ignored
            }
        })
    }
}

/// Handle keyboard shortcuts and return appropriate message.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<Message> {
    let ctrl = modifiers.command(); // Ctrl on Linux/Windows, Cmd on macOS

    match key {
        // Ctrl+N: Open composer
        Key::Character(c) if ctrl && c.as_str() == "n" => {
            Some(Message::KeyPressed(KeyboardAction::ComposeNew))
        }
        // Ctrl+Enter: Send
        Key::Named(keyboard::key::Named::Enter) if ctrl => {
            Some(Message::KeyPressed(KeyboardAction::Send))
        }
        // Escape: Cancel
        Key::Named(keyboard::key::Named::Escape) => {
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        }
        _ => None,
    }
}

const fn theme_mode(preference: ThemePreference) -> ThemeMode {
    match preference {
        ThemePreference::Light => ThemeMode::Light,
        ThemePreference::Dark => ThemeMode::Dark,
    }
}

fn build_client(config: &ComposerConfig) -> Option<CustomerClient> {
    match CustomerClient::from_config(config) {
        Ok(client) => Some(client),
        Err(e) => {
            error!("Failed to create lookup client: {}", e);
            None
        }
    }
}

/// Load configuration from file and environment.
async fn load_config() -> Result<ComposerConfig, String> {
    tokio::task::spawn_blocking(ComposerConfig::load)
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| e.to_string())
}

/// Fetch the full customer list.
async fn fetch_customers(client: Option<CustomerClient>) -> Result<Vec<Customer>, String> {
    let client = client.ok_or("Customer lookup is unavailable")?;
    client.fetch_all().await.map_err(|e| e.to_string())
}

/// Mirror a toast as a desktop notification.
async fn notify_desktop(toast: Toast, duration: Duration) {
    let result = tokio::task::spawn_blocking(move || show_notification(&toast, duration)).await;
    match result {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!("Desktop notification failed: {e:#}"),
        Err(e) => warn!("Desktop notification task failed: {e}"),
    }
}

fn show_notification(toast: &Toast, duration: Duration) -> anyhow::Result<()> {
    let summary = match toast.kind {
        ToastKind::Error => "Email Composer - Error",
        ToastKind::Success | ToastKind::Info => "Email Composer",
    };
    notify_rust::Notification::new()
        .summary(summary)
        .body(&toast.message)
        .timeout(notification_timeout(duration))
        .show()
        .context("failed to show notification")?;
    Ok(())
}

/// Desktop notification timeout matching the in-window toast duration.
fn notification_timeout(duration: Duration) -> notify_rust::Timeout {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    notify_rust::Timeout::Milliseconds(millis)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cancels() {
        let msg = handle_key_press(
            Key::Named(keyboard::key::Named::Escape),
            Modifiers::empty(),
        );
        assert!(matches!(
            msg,
            Some(Message::KeyPressed(KeyboardAction::Cancel))
        ));
    }

    #[test]
    fn test_plain_enter_is_not_a_shortcut() {
        let msg = handle_key_press(Key::Named(keyboard::key::Named::Enter), Modifiers::empty());
        assert!(msg.is_none());
    }

    #[test]
    fn test_theme_mapping() {
        assert_eq!(theme_mode(ThemePreference::Light), ThemeMode::Light);
        assert_eq!(theme_mode(ThemePreference::Dark), ThemeMode::Dark);
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_ctrl_enter_sends() {
        let msg = handle_key_press(Key::Named(keyboard::key::Named::Enter), Modifiers::CTRL);
        assert!(matches!(msg, Some(Message::KeyPressed(KeyboardAction::Send))));
    }

    #[tokio::test]
    async fn test_fetch_without_client_fails() {
        let err = fetch_customers(None).await.unwrap_err();
        assert_eq!(err, "Customer lookup is unavailable");
    }

    #[test]
    fn test_notification_timeout_follows_toast_duration() {
        assert_eq!(
            notification_timeout(Duration::from_secs(7)),
            notify_rust::Timeout::Milliseconds(7000)
        );
        assert_eq!(
            notification_timeout(Duration::from_secs(u64::MAX)),
            notify_rust::Timeout::Milliseconds(u32::MAX)
        );
    }
}
