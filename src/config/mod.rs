//! Configuration module for the presentation.

pub mod brand;
pub mod layout;
pub mod navigation;

mod debug; // Private: files use crate::config::DEBUG_FLAGS, not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use brand::{BRAND, LOGO_PATH};
pub use layout::LAYOUT;
pub use navigation::NAVIGATION;
