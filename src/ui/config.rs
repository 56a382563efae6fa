use eframe::egui::Color32;

use crate::config::BRAND;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub page_background: Color32,
    pub header_background: Color32,
    pub card_fill: Color32,
    pub card_border: Color32,
    pub heading: Color32,
    pub body: Color32,
    pub subdued: Color32,
    pub validation_error: Color32,
    pub problem: Color32,
    pub positive: Color32,
    pub preventive: Color32,
    pub bullet: Color32,
    pub table_header_fill: Color32,
    pub table_highlight_fill: Color32,
}

/// Base sizes, multiplied by the fit scale when the slide is drawn
#[derive(Clone, Copy)]
pub struct UiSizes {
    pub slide_title: f32,
    pub slide_body: f32,
    pub card_padding: f32,
    pub card_corner_radius: u8,
    pub card_border_width: f32,
    pub bullet_spacing: f32,
    pub page_title: f32,
    pub page_subtitle: f32,
    /// Matches a 2xl container: controls never spread wider than this
    pub controls_max_width: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sizes: UiSizes,
    /// Below this viewport width the watermark is hidden
    pub watermark_min_viewport_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        page_background: Color32::from_rgb(0xf8, 0xfa, 0xfc),
        header_background: Color32::WHITE,
        card_fill: Color32::WHITE,
        card_border: BRAND.colors.primary,
        heading: BRAND.colors.dark,
        body: BRAND.colors.dark,
        subdued: BRAND.colors.mid,
        validation_error: Color32::from_rgb(0xdc, 0x26, 0x26),
        problem: Color32::from_rgb(0xdc, 0x26, 0x26),
        positive: Color32::from_rgb(0x16, 0xa3, 0x4a),
        preventive: BRAND.colors.primary,
        bullet: BRAND.colors.primary,
        table_header_fill: Color32::from_rgb(0xe5, 0xe7, 0xeb),
        table_highlight_fill: Color32::from_rgb(0xfe, 0xf9, 0xc3),
    },
    sizes: UiSizes {
        slide_title: 24.0,
        slide_body: 18.0,
        card_padding: 32.0,
        card_corner_radius: 16,
        card_border_width: 2.0,
        bullet_spacing: 12.0,
        page_title: 28.0,
        page_subtitle: 15.0,
        controls_max_width: 672.0,
    },
    watermark_min_viewport_width: 640.0,
};
