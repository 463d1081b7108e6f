//! Metadata provider backed by the Hugging Face hub API.

mod client;
mod provider;

pub use provider::HubProvider;
