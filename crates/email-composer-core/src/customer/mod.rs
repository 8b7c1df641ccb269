//! Customer records and the remote lookup client.

mod client;
mod model;

pub use client::CustomerClient;
pub use model::Customer;
