use eframe::egui::{Color32, Context, Image, Visuals};

use crate::config::{BRAND, LOGO_PATH};
use crate::domain::{Emphasis, SlideIcon};
use crate::ui::config::UI_CONFIG;

const LOGO_BYTES: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/logo-color.png"
));

/// The brand logo, embedded at compile time so native and WASM builds
/// show the same asset without a file server.
pub fn logo_image() -> Image<'static> {
    Image::from_bytes(format!("bytes://{}", LOGO_PATH), LOGO_BYTES)
}

/// Glyph drawn before a slide title.
pub fn icon_glyph(icon: SlideIcon) -> &'static str {
    match icon {
        SlideIcon::Table => "📋",
        SlideIcon::Truck => "🚚",
        SlideIcon::Alert => "⚠",
        SlideIcon::Wrench => "🔧",
        SlideIcon::Check => "✔",
        SlideIcon::Shield => "🛡",
    }
}

/// Glyph and colour for a decorated bullet.
pub fn emphasis_marker(kind: Emphasis) -> (&'static str, Color32) {
    match kind {
        Emphasis::Problem => ("⚠", UI_CONFIG.colors.problem),
        Emphasis::Positive => ("✔", UI_CONFIG.colors.positive),
        Emphasis::Preventive => ("🛡", UI_CONFIG.colors.preventive),
    }
}

/// Sets up the light brand theme for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.panel_fill = UI_CONFIG.colors.page_background;
    visuals.window_fill = UI_CONFIG.colors.card_fill;
    visuals.hyperlink_color = BRAND.colors.primary;

    // Outline buttons in brand orange
    visuals.widgets.inactive.bg_stroke.color = BRAND.colors.primary;
    visuals.widgets.inactive.bg_stroke.width = 1.0;
    visuals.widgets.inactive.fg_stroke.color = BRAND.colors.dark;
    visuals.widgets.hovered.bg_stroke.color = BRAND.colors.primary;
    visuals.widgets.active.bg_stroke.color = BRAND.colors.primary;

    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn logo_asset_is_a_png() {
        assert!(LOGO_PATH.ends_with(".png"));
        assert_eq!(&LOGO_BYTES[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn every_icon_and_emphasis_has_a_glyph() {
        for icon in SlideIcon::iter() {
            assert!(!icon_glyph(icon).is_empty(), "{icon}");
        }
        for kind in Emphasis::iter() {
            assert!(!emphasis_marker(kind).0.is_empty(), "{kind}");
        }
    }
}
