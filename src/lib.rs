use wasm_bindgen::prelude::*;

use crate::domain::logging::{self, LogComponent, LogLevel, get_logger};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod lifecycle;
pub mod presentation;

/// Install panic hook, console logger and browser clock when the module loads.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    logging::init_logger(Box::new(infrastructure::services::ConsoleLogger::new()));
    logging::init_time_provider(Box::new(infrastructure::services::BrowserTimeProvider::new()));
    logging::set_min_level(if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        "🧦 SockShop catalog module initialized",
    );
}
