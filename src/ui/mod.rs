// User interface components
pub mod app;
pub mod app_input;
pub mod config;
pub mod styles;
pub mod ui_panels;
pub mod ui_price_table;
pub mod ui_render;
pub mod ui_text;
pub mod utils;

// Re-export main app
pub use app::DeckApp;
pub use config::UI_CONFIG;
