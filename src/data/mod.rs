// Content loading and saving
pub mod content;
pub mod json_file;
pub mod pre_main;

// Re-export commonly used types
pub use content::{ContentSource, EmbeddedContent, PresentationContent};
pub use pre_main::fetch_content;
