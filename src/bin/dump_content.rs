use anyhow::{Context, Result};
use clap::Parser;
use pitch_deck::data::EmbeddedContent;
use pitch_deck::data::json_file::save_json;
use std::path::{Path, PathBuf};

/// Writes the built-in deck and price table as editable JSON.
/// Pass the edited files back with `pitch-deck --deck <dir>/deck.json --prices <dir>/price_table.json`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory that receives deck.json and price_table.json
    #[arg(default_value = "content", value_name = "DIR")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();
    dump_content(&args.out_dir)
}

fn dump_content(out_dir: &Path) -> Result<()> {
    let deck = EmbeddedContent::deck()?;
    let prices = EmbeddedContent::prices()?;

    let deck_path = out_dir.join("deck.json");
    save_json(&deck_path, &deck)
        .with_context(|| format!("Failed to write deck to {:?}", deck_path))?;
    log::info!("✅ {} slides written to {:?}", deck.len(), deck_path);

    let prices_path = out_dir.join("price_table.json");
    save_json(&prices_path, &prices)
        .with_context(|| format!("Failed to write price table to {:?}", prices_path))?;
    log::info!(
        "✅ {} price sections written to {:?}",
        prices.sections.len(),
        prices_path
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn output_directory_defaults_to_content() {
        let args = Args::try_parse_from(["dump_content"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("content"));

        let args = Args::try_parse_from(["dump_content", "edited"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("edited"));
    }

    #[test]
    fn help_is_not_taken_as_a_directory() {
        let err = Args::try_parse_from(["dump_content", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = Args::try_parse_from(["dump_content", "--out", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn writes_both_files() {
        let dir = std::env::temp_dir().join(format!("pitch_deck_dump_{}", std::process::id()));
        dump_content(&dir).unwrap();

        assert!(dir.join("deck.json").is_file());
        assert!(dir.join("price_table.json").is_file());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
