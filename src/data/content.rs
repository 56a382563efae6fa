use anyhow::{Context, Result, anyhow};

use crate::domain::{Deck, PriceTable};

#[cfg(not(target_arch = "wasm32"))]
use crate::data::json_file::load_json;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

const EMBEDDED_DECK_JSON: &str = include_str!("../../assets/deck.json");
const EMBEDDED_PRICE_TABLE_JSON: &str = include_str!("../../assets/price_table.json");

/// Everything the presentation shows, loaded once before the UI starts.
#[derive(Debug, Clone, Default)]
pub struct PresentationContent {
    pub deck: Deck,
    pub prices: PriceTable,
}

pub trait ContentSource {
    // Either produce the content OR return an anyhow::Error
    fn load_content(&self) -> Result<PresentationContent>;

    /// A unique identifier for this source (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Content compiled into the binary from `assets/`.
pub struct EmbeddedContent;

impl EmbeddedContent {
    pub fn deck() -> Result<Deck> {
        serde_json::from_str(EMBEDDED_DECK_JSON).context("Failed to parse embedded deck")
    }

    pub fn prices() -> Result<PriceTable> {
        serde_json::from_str(EMBEDDED_PRICE_TABLE_JSON)
            .context("Failed to parse embedded price table")
    }
}

impl ContentSource for EmbeddedContent {
    fn signature(&self) -> &'static str {
        "Embedded content"
    }

    fn load_content(&self) -> Result<PresentationContent> {
        Ok(PresentationContent {
            deck: Self::deck()?,
            prices: Self::prices()?,
        })
    }
}

/// Content read from files given on the command line.
/// A part without a path, or whose file fails to load, comes from the
/// embedded assets; the other part keeps its file.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileContent {
    pub deck_path: Option<PathBuf>,
    pub prices_path: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl ContentSource for FileContent {
    fn signature(&self) -> &'static str {
        "Content files"
    }

    fn load_content(&self) -> Result<PresentationContent> {
        let deck = load_part(self.deck_path.as_ref(), "deck", EmbeddedContent::deck)?;
        let prices = load_part(
            self.prices_path.as_ref(),
            "price table",
            EmbeddedContent::prices,
        )?;
        Ok(PresentationContent { deck, prices })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_part<T: serde::de::DeserializeOwned>(
    path: Option<&PathBuf>,
    part: &str,
    embedded: fn() -> Result<T>,
) -> Result<T> {
    let Some(path) = path else {
        return embedded();
    };
    match load_json(path) {
        Ok(value) => Ok(value),
        Err(e) => {
            log::error!("Failed to load {} file, using the embedded one: {:#}", part, e);
            embedded()
        }
    }
}

/// Tries each source in order and returns the first that loads.
pub fn load_from_sources(
    sources: &[Box<dyn ContentSource>],
) -> Result<(PresentationContent, &'static str)> {
    for source in sources {
        match source.load_content() {
            Ok(content) => return Ok((content, source.signature())),
            Err(e) => {
                log::error!("Failed to load {}: {:#}", source.signature(), e);
                // Continue to the next source
            }
        }
    }
    Err(anyhow!("All content sources failed"))
}
