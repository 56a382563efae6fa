// Content loading that runs in main before egui starts up

use crate::Cli;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::data::content::{ContentSource, EmbeddedContent, PresentationContent, load_from_sources};

#[cfg(not(target_arch = "wasm32"))]
use crate::data::content::FileContent;

/// Loads the deck and price table, preferring files named on the command line
/// and falling back to the embedded assets. Never fails: with every source
/// broken the presentation starts empty and validation reports it.
pub fn fetch_content(args: &Cli) -> (PresentationContent, &'static str) {
    #[cfg(not(target_arch = "wasm32"))]
    let sources: Vec<Box<dyn ContentSource>> = if args.deck.is_some() || args.prices.is_some() {
        vec![
            Box::new(FileContent {
                deck_path: args.deck.clone(),
                prices_path: args.prices.clone(),
            }),
            Box::new(EmbeddedContent),
        ]
    } else {
        vec![Box::new(EmbeddedContent)]
    };

    #[cfg(target_arch = "wasm32")]
    let sources: Vec<Box<dyn ContentSource>> = {
        let _ = args;
        vec![Box::new(EmbeddedContent)]
    };

    let (content, signature) = match load_from_sources(&sources) {
        Ok(loaded) => loaded,
        Err(e) => {
            log::error!("⚠️  {:#}. Starting with an empty presentation.", e);
            (PresentationContent::default(), "Empty")
        }
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_content_loading {
        log::info!(
            "Loaded {} slides and {} price sections using: {}.",
            content.deck.len(),
            content.prices.sections.len(),
            signature
        );
    }
    (content, signature)
}
