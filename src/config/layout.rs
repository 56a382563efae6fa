//! Adaptive slide-fit configuration

use std::time::Duration;

/// Configuration for the slide-fit procedure
pub struct LayoutConfig {
    /// Ascending container widths (px) tried before shrinking the slide
    pub width_presets_px: &'static [f32],
    /// Preset used when the presentation starts (1024 px)
    pub initial_width_index: usize,
    /// Vertical space reserved for header, title, controls and footer
    pub chrome_reserve_px: f32,
    /// Hard floor for the available height, whatever the viewport
    pub min_available_height_px: f32,
    /// Breathing room subtracted before computing the shrink factor
    pub scale_margin_px: f32,
    /// Wait this long after a cursor change or resize before measuring,
    /// so the slide-in transition has settled
    pub settle_delay: Duration,
    /// Slide-in transition length
    pub transition: Duration,
    /// Vertical offset the slide rises from during the transition
    pub transition_rise_px: f32,
}

pub const LAYOUT: LayoutConfig = LayoutConfig {
    width_presets_px: &[
        640.0, 768.0, 896.0, 1024.0, 1152.0, 1280.0, 1440.0, 1536.0, 1728.0, 1920.0,
    ],
    initial_width_index: 3,
    chrome_reserve_px: 180.0,
    min_available_height_px: 320.0,
    scale_margin_px: 8.0,
    settle_delay: Duration::from_millis(60),
    transition: Duration::from_millis(450),
    transition_rise_px: 24.0,
};
