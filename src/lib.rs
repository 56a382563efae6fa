#![allow(clippy::collapsible_if)]

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod layout;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use data::{PresentationContent, fetch_content};
pub use domain::{Cursor, Deck, NavAction, PriceTable, Slide, validate_slides};
pub use layout::{FitDriver, FitState};
pub use ui::DeckApp;
pub use utils::app_time;

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load the slides from this JSON file instead of the built-in deck
    #[arg(long, value_name = "PATH")]
    pub deck: Option<PathBuf>,

    /// Load the price comparison from this JSON file instead of the built-in table
    #[arg(long, value_name = "PATH")]
    pub prices: Option<PathBuf>,

    /// Slide to open first (1-based); clamped to the deck length
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub start_slide: Option<u32>,

    /// Print content defects and exit instead of opening the presentation
    #[arg(long, default_value_t = false)]
    pub check: bool,
}

impl Cli {
    /// 0-based index of the first slide to show.
    pub fn start_index(&self) -> usize {
        self.start_slide
            .map(|n| n.saturating_sub(1) as usize)
            .unwrap_or(0)
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(
    cc: &eframe::CreationContext,
    content: PresentationContent,
    start_index: usize,
) -> Box<dyn eframe::App> {
    Box::new(ui::DeckApp::new(cc, content, start_index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_slide_is_one_based() {
        let args = Cli::try_parse_from(["pitch-deck", "--start-slide", "3"]).unwrap();
        assert_eq!(args.start_index(), 2);

        let args = Cli::try_parse_from(["pitch-deck"]).unwrap();
        assert_eq!(args.start_index(), 0);
        assert!(!args.check);
    }

    #[test]
    fn start_slide_zero_is_rejected() {
        assert!(Cli::try_parse_from(["pitch-deck", "--start-slide", "0"]).is_err());
    }

    #[test]
    fn content_paths_are_optional() {
        let args =
            Cli::try_parse_from(["pitch-deck", "--deck", "deck.json", "--check"]).unwrap();
        assert_eq!(args.deck, Some(PathBuf::from("deck.json")));
        assert_eq!(args.prices, None);
        assert!(args.check);
    }
}
