use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Reads a JSON content file (deck or price table).
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).context(format!("Failed to open content file: {:?}", path))?;
    let reader = BufReader::new(file);
    let value = serde_json::from_reader(reader)
        .context(format!("Failed to parse content file: {:?}", path))?;
    Ok(value)
}

/// Writes `value` as pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .context(format!("Failed to write JSON to: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContentItem, Deck, Slide, SlideIcon};

    #[test]
    fn deck_survives_a_trip_through_disk() {
        let deck = Deck {
            title: "Propuesta".to_string(),
            subtitle: "Frente 12".to_string(),
            slides: vec![Slide::new(
                "Atentamente",
                SlideIcon::Check,
                vec![ContentItem::plain("Alfa Conectores y Habilitado")],
            )
            .with_cta()],
        };
        let path = std::env::temp_dir()
            .join(format!("pitch_deck_json_{}", std::process::id()))
            .join("deck.json");

        save_json(&path, &deck).unwrap();
        let loaded: Deck = load_json(&path).unwrap();
        assert_eq!(loaded, deck);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = load_json::<Deck>(Path::new("no/such/deck.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("no/such/deck.json"));
    }
}
