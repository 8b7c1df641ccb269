//! # email-composer-core
//!
//! Core logic for the Email Composer, independent of any GUI toolkit.
//!
//! This crate provides:
//! - **Customer lookup** - HTTP client for the customer email endpoint
//! - **Debounce** - ticket-based quiet-period tracking for search input
//! - **Autocomplete** - client-side filtering and stale-response protection
//! - **Form validation** - subject, description and recipient rules
//! - **Composer state** - dialog flags, submit and bulk-load handling
//! - **Notifications** - toast queue
//! - **Configuration** - file and environment driven settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod autocomplete;
pub mod composer;
pub mod config;
pub mod customer;
pub mod debounce;
mod error;
pub mod form;
pub mod notification;
pub mod recipients;

pub use autocomplete::{Autocomplete, LookupRequest, filter_suggestions};
pub use composer::{
    Composer, LOAD_FAILED_MESSAGE, LOADED_ALL_MESSAGE, SENT_MESSAGE, simulate_delivery,
};
pub use config::{ComposerConfig, DEFAULT_LOOKUP_URL, ThemePreference};
pub use customer::{Customer, CustomerClient};
pub use debounce::{Debouncer, Ticket};
pub use error::{Error, Result};
pub use form::{ComposeForm, EmailDraft, Field, FieldError, ValidationResult, is_valid_email};
pub use notification::{Notifications, Toast, ToastKind};
pub use recipients::Recipients;
