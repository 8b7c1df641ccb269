//! Widget styles with shadows and rounded corners.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

// Re-export radius constants
pub use shadows::radius;

// Re-export container styles
pub use containers::{
    backdrop_style, chip_style, dialog_style, page_style, popover_style, recipient_field_style,
    toast_style,
};

// Re-export button styles
pub use buttons::{
    chip_remove_button_style, ghost_button_style, outline_button_style, primary_button_style,
    suggestion_button_style,
};

// Re-export input styles
pub use inputs::{bare_input_style, field_input_style, scrollable_style};
