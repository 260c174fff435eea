//! Configuration module for the coindeck application.

mod api;

pub use api::{API, ApiConfig};
