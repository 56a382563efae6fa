use eframe::egui::{Align, Layout, RichText, Sides, Ui, Vec2};

use crate::config::BRAND;
use crate::domain::NavAction;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::utils::logo_image;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEvent {
    TogglePriceTable,
}

/// Brand bar: logo on the left, price table toggle and site link on the right
pub struct HeaderPanel {
    price_table_open: bool,
}

impl HeaderPanel {
    pub fn new(price_table_open: bool) -> Self {
        Self { price_table_open }
    }
}

impl Panel for HeaderPanel {
    type Event = HeaderEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();
        ui.horizontal(|ui| {
            ui.add(
                logo_image()
                    .max_height(BRAND.header_logo_height)
                    .alt_text(UI_TEXT.logo_alt),
            );

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.hyperlink_to(
                    RichText::new(BRAND.site_label).strong(),
                    BRAND.site_url,
                );
                if ui
                    .selectable_label(self.price_table_open, UI_TEXT.button_price_table)
                    .clicked()
                {
                    events.push(HeaderEvent::TogglePriceTable);
                }
            });
        });
        events
    }
}

/// Slide counter plus the four navigation buttons
pub struct ControlsPanel {
    counter_label: String,
}

impl ControlsPanel {
    pub fn new(counter_label: String) -> Self {
        Self { counter_label }
    }
}

impl Panel for ControlsPanel {
    type Event = NavAction;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(&self.counter_label)
                    .strong()
                    .color(UI_CONFIG.colors.subdued),
            );
        });

        let width = ui.available_width().min(UI_CONFIG.sizes.controls_max_width);
        let margin = (ui.available_width() - width) / 2.0;
        ui.horizontal(|ui| {
            ui.add_space(margin);
            ui.allocate_ui(Vec2::new(width, ui.spacing().interact_size.y), |ui| {
                let (back, forward) = Sides::new().show(
                    ui,
                    |ui| {
                        let mut clicked = Vec::new();
                        if ui.button(UI_TEXT.button_first).clicked() {
                            clicked.push(NavAction::First);
                        }
                        if ui.button(UI_TEXT.button_previous).clicked() {
                            clicked.push(NavAction::Previous);
                        }
                        clicked
                    },
                    |ui| {
                        // Right side is laid out right-to-left
                        let mut clicked = Vec::new();
                        if ui.button(UI_TEXT.button_last).clicked() {
                            clicked.push(NavAction::Last);
                        }
                        if ui.button(UI_TEXT.button_next).clicked() {
                            clicked.push(NavAction::Next);
                        }
                        clicked
                    },
                );
                events.extend(back);
                events.extend(forward);
            });
        });

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_navigation && !events.is_empty() {
            log::info!("Navigation buttons clicked: {:?}", events);
        }
        events
    }
}

/// Footer line under the presentation
pub fn footer_line(year: i32) -> String {
    format!("© {} {} • {}", year, BRAND.company_name, BRAND.footer_suffix)
}

pub fn render_footer(ui: &mut Ui, year: i32) {
    ui.vertical_centered(|ui| {
        ui.label_subdued(footer_line(year));
    });
}
