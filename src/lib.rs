use wasm_bindgen::prelude::*;

use crate::config::AppConfig;

pub mod macros;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod global_state;
pub mod infrastructure;
pub mod presentation;

/// `<meta name="forecast-api-base-url" content="...">` in the host page.
pub const BASE_URL_META: &str = "forecast-api-base-url";

/// Browser entry point: logging, configuration, then mount.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    domain::logging::init_logger(Box::new(infrastructure::ConsoleLogger::for_build()));
    domain::logging::init_time_provider(Box::new(infrastructure::BrowserTimeProvider));

    let mut config = AppConfig::from_build_env();
    if let Some(url) = page_base_url() {
        config = config.with_api_base_url(&url);
    }

    crate::log_info!(
        domain::logging::LogComponent::Presentation("Initialize"),
        "🚀 Stock forecast client initialized"
    );

    app::mount(config);
}

fn page_base_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document
        .query_selector(&format!("meta[name=\"{}\"]", BASE_URL_META))
        .ok()??;
    meta.get_attribute("content").filter(|url| !url.trim().is_empty())
}
