use eframe::egui::{Align, Grid, Layout, RichText, ScrollArea, Ui};

use crate::config::BRAND;
use crate::domain::price_table::{PriceSection, PriceTable, Vendor};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

/// Renders the three-section price comparison. Read-only: no events.
pub fn render_price_table(ui: &mut Ui, table: &PriceTable) {
    ScrollArea::both().id_salt("price_table").show(ui, |ui| {
        for section in &table.sections {
            render_section(ui, section, &table.vendors);
            ui.add_space(16.0);
        }
    });
}

fn render_section(ui: &mut Ui, section: &PriceSection, vendors: &[Vendor]) {
    ui.label_strip(&section.title, BRAND.colors.primary);

    Grid::new(("price_section", section.title.as_str()))
        .striped(true)
        .num_columns(vendors.len() * 2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for vendor in vendors {
                ui.label(header_text(&vendor.name, vendor.highlight));
                ui.label(header_text(
                    &format!("{} {}", UI_TEXT.price_unit_prefix, vendor.name),
                    vendor.highlight,
                ));
            }
            ui.end_row();

            for row in &section.rows {
                for (i, vendor) in vendors.iter().enumerate() {
                    let offer = row.offer(i);
                    ui.label(cell_text(offer.item_label(), vendor.highlight));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(cell_text(&offer.price_label(), vendor.highlight));
                    });
                }
                ui.end_row();
            }
        });
}

fn header_text(text: &str, highlight: bool) -> RichText {
    let text = RichText::new(text.to_uppercase())
        .small()
        .strong()
        .color(UI_CONFIG.colors.body);
    if highlight {
        text.background_color(UI_CONFIG.colors.table_highlight_fill)
    } else {
        text.background_color(UI_CONFIG.colors.table_header_fill)
    }
}

fn cell_text(text: &str, highlight: bool) -> RichText {
    let text = RichText::new(text).small().color(UI_CONFIG.colors.body);
    if highlight {
        text.strong()
            .background_color(UI_CONFIG.colors.table_highlight_fill)
    } else {
        text
    }
}
