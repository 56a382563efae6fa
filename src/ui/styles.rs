use eframe::egui::{Color32, CornerRadius, Frame, Margin, RichText, Ui};

use crate::ui::config::UI_CONFIG;

/// Extension trait to add semantic styling methods directly to `egui::Ui`.
pub trait UiStyleExt {
    /// Renders small, mid-gray text (counter, footer, subtitles).
    fn label_subdued(&mut self, text: impl Into<String>);

    /// Renders the large page title above the slide.
    fn label_page_title(&mut self, text: impl Into<String>);

    /// Renders a small red line (validation defects).
    fn label_error(&mut self, text: impl Into<String>);

    /// Renders a bold white title on a coloured strip.
    fn label_strip(&mut self, text: impl Into<String>, fill: Color32);
}

impl UiStyleExt for Ui {
    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
    }

    fn label_page_title(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(UI_CONFIG.sizes.page_title)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    }

    fn label_error(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .size(12.0)
                .color(UI_CONFIG.colors.validation_error),
        );
    }

    fn label_strip(&mut self, text: impl Into<String>, fill: Color32) {
        Frame::new()
            .fill(fill)
            .inner_margin(Margin::same(8))
            .corner_radius(CornerRadius::same(8))
            .show(self, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(text).strong().color(Color32::WHITE));
            });
    }
}
