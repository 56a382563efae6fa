//! Brand identity: colours, logo and outbound link.

use eframe::egui::Color32;

/// Path of the logo asset, relative to the crate root.
/// The bytes are embedded at compile time (see `ui::utils::logo_image`).
pub const LOGO_PATH: &str = "assets/logo-color.png";

pub struct BrandColors {
    /// ALFA orange
    pub primary: Color32,
    /// Dark gray used for body text
    pub dark: Color32,
    /// Mid gray used for secondary text
    pub mid: Color32,
}

pub struct BrandConfig {
    pub colors: BrandColors,
    pub company_name: &'static str,
    pub site_label: &'static str,
    pub site_url: &'static str,
    /// Suffix of the footer line, after the copyright year and company name
    pub footer_suffix: &'static str,
    /// Watermark opacity (0.0 = invisible, 1.0 = fully opaque)
    pub watermark_opacity: f32,
    pub watermark_width: f32,
    pub header_logo_height: f32,
}

pub const BRAND: BrandConfig = BrandConfig {
    colors: BrandColors {
        primary: Color32::from_rgb(0xf3, 0x6e, 0x21),
        dark: Color32::from_rgb(0x30, 0x30, 0x30),
        mid: Color32::from_rgb(0x6b, 0x72, 0x80),
    },
    company_name: "ALFA Conectores y Habilitado",
    site_label: "alfacyh.mx",
    site_url: "https://alfacyh.mx/",
    footer_suffix: "Frente 12 – Tren México-Querétaro",
    watermark_opacity: 0.05,
    watermark_width: 360.0,
    header_logo_height: 40.0,
};
