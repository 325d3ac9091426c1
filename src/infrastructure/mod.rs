//! Browser-facing adapters: the HTTP client, its wire format and console logging.

pub mod console;
pub mod dto;
pub mod http;

pub use console::*;
pub use http::*;
