// Domain types and pure presentation logic (no egui here)
pub mod deck;
pub mod navigation;
pub mod price_table;
pub mod slide;
pub mod validation;

// Re-export commonly used types
pub use deck::Deck;
pub use navigation::{Cursor, NavAction, SwipeTracker, classify_swipe};
pub use price_table::{PriceTable, format_currency};
pub use slide::{ContentItem, Emphasis, Slide, SlideIcon};
pub use validation::{SlideDefect, find_defects, validate_slides};
