use chrono::Datelike;
use eframe::egui::{
    Align, Button, CentralPanel, Color32, Context, CornerRadius, FontId, Frame, Layout, Margin,
    OpenUrl, Pos2, Rect, RichText, Stroke, TextFormat, TopBottomPanel, Ui, UiBuilder, Vec2,
    Window, text::LayoutJob,
};

use crate::config::{BRAND, LAYOUT};
use crate::domain::{ContentItem, Slide};
use crate::layout::FitState;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_panels::{ControlsPanel, HeaderEvent, HeaderPanel, Panel, render_footer};
use crate::ui::ui_price_table::render_price_table;
use crate::ui::utils::{emphasis_marker, icon_glyph, logo_image};
use crate::utils::app_time::{AppInstant, progress};

use super::app::DeckApp;

impl DeckApp {
    pub(super) fn render_header_panel(&mut self, ctx: &Context) {
        let header_frame = Frame::new()
            .fill(UI_CONFIG.colors.header_background)
            .inner_margin(Margin::symmetric(16, 12));
        let events = TopBottomPanel::top("brand_header")
            .frame(header_frame)
            .show(ctx, |ui| HeaderPanel::new(self.show_price_table).render(ui))
            .inner;

        for event in events {
            match event {
                HeaderEvent::TogglePriceTable => {
                    self.show_price_table = !self.show_price_table;
                }
            }
        }
    }

    pub(super) fn render_footer_panel(&mut self, ctx: &Context) {
        let footer_frame = Frame::new().inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("footer")
            .frame(footer_frame)
            .show_separator_line(false)
            .show(ctx, |ui| render_footer(ui, chrono::Local::now().year()));
    }

    /// Draws title, banner, slide and controls. Returns the slide card height
    /// drawn this frame, or `None` when no card was drawn.
    pub(super) fn render_central_panel(&mut self, ctx: &Context, now: AppInstant) -> Option<f32> {
        let mut card_height = None;
        let mut actions = Vec::new();

        CentralPanel::default().show(ctx, |ui| {
            render_watermark(ui);

            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label_page_title(&self.deck.title);
                ui.label(
                    RichText::new(&self.deck.subtitle)
                        .size(UI_CONFIG.sizes.page_subtitle)
                        .color(UI_CONFIG.colors.subdued),
                );
                if !self.validation_errors.is_empty() {
                    ui.add_space(4.0);
                    ui.label_error(self.validation_errors.join(UI_TEXT.validation_separator));
                }
            });
            ui.add_space(12.0);

            match self.deck.slide(self.cursor.index()) {
                Some(slide) => {
                    let t = progress(self.slide_shown_at, now, LAYOUT.transition);
                    if t < 1.0 {
                        ctx.request_repaint();
                    }
                    card_height = Some(render_slide_area(ui, slide, self.fit.state(), t));
                }
                None => {
                    ui.vertical_centered(|ui| {
                        ui.label_subdued(UI_TEXT.empty_deck_notice);
                    });
                }
            }

            ui.add_space(20.0);
            actions = ControlsPanel::new(self.cursor.counter_label()).render(ui);
        });

        for action in actions {
            self.navigate(action, "button");
        }
        card_height
    }

    pub(super) fn render_price_table_window(&mut self, ctx: &Context) {
        let mut open = self.show_price_table;
        Window::new(UI_TEXT.price_table_title)
            .open(&mut open)
            .default_width(900.0)
            .vscroll(true)
            .show(ctx, |ui| render_price_table(ui, &self.prices));
        self.show_price_table = open;
    }
}

/// Low-opacity logo in the bottom-right corner, hidden on narrow viewports.
fn render_watermark(ui: &Ui) {
    let area = ui.max_rect();
    if area.width() < UI_CONFIG.watermark_min_viewport_width {
        return;
    }
    let width = BRAND.watermark_width;
    let rect = Rect::from_min_size(
        Pos2::new(area.right() - width + 24.0, area.bottom() - width / 3.0 + 24.0),
        Vec2::new(width, width / 3.0),
    );
    let alpha = (255.0 * BRAND.watermark_opacity).round() as u8;
    logo_image()
        .tint(Color32::from_white_alpha(alpha))
        .paint_at(ui, rect);
}

/// Centres a column of the current preset width and draws the card in it,
/// rising and fading in while `t` goes from 0 to 1.
fn render_slide_area(ui: &mut Ui, slide: &Slide, fit: FitState, t: f32) -> f32 {
    let eased = 1.0 - (1.0 - t) * (1.0 - t);
    let available = ui.available_rect_before_wrap();
    let width = fit.max_width().min(available.width());
    let column = Rect::from_min_size(
        Pos2::new(available.center().x - width / 2.0, available.top()),
        Vec2::new(width, available.height()),
    );

    ui.scope_builder(
        UiBuilder::new()
            .max_rect(column)
            .layout(Layout::top_down(Align::Center)),
        |ui| {
            ui.multiply_opacity(eased);
            ui.add_space(LAYOUT.transition_rise_px * (1.0 - eased));
            render_slide_card(ui, slide, fit.scale)
        },
    )
    .inner
}

/// The slide card itself: icon and title, bullets, optional call to action.
/// Every size is multiplied by `scale`. Returns the card height.
fn render_slide_card(ui: &mut Ui, slide: &Slide, scale: f32) -> f32 {
    let sizes = UI_CONFIG.sizes;
    let padding = (sizes.card_padding * scale).round().clamp(0.0, 127.0) as i8;

    let response = Frame::new()
        .fill(UI_CONFIG.colors.card_fill)
        .stroke(Stroke::new(sizes.card_border_width, UI_CONFIG.colors.card_border))
        .corner_radius(CornerRadius::same(sizes.card_corner_radius))
        .inner_margin(Margin::same(padding))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing.y = sizes.bullet_spacing * scale;

            ui.vertical_centered(|ui| {
                ui.label(title_job(slide, sizes.slide_title * scale, ui.available_width()));
            });
            ui.add_space(sizes.bullet_spacing * scale);

            for item in &slide.content {
                ui.label(bullet_job(item, sizes.slide_body * scale, ui.available_width()));
            }

            if slide.cta {
                ui.add_space(sizes.bullet_spacing * scale);
                ui.vertical_centered(|ui| {
                    let button = Button::new(
                        RichText::new(UI_TEXT.cta_label)
                            .size(sizes.slide_body * scale)
                            .strong()
                            .color(Color32::WHITE),
                    )
                    .fill(BRAND.colors.primary);
                    if ui.add(button).clicked() {
                        ui.ctx().open_url(OpenUrl::new_tab(BRAND.site_url));
                    }
                });
            }
        })
        .response;

    response.rect.height()
}

fn title_job(slide: &Slide, size: f32, wrap_width: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;
    job.halign = Align::Center;

    if let Some(icon) = slide.icon {
        job.append(
            icon_glyph(icon),
            0.0,
            TextFormat::simple(FontId::proportional(size), BRAND.colors.primary),
        );
    }
    job.append(
        &slide.title,
        if slide.icon.is_some() { size * 0.4 } else { 0.0 },
        TextFormat::simple(FontId::proportional(size), UI_CONFIG.colors.heading),
    );
    job
}

fn bullet_job(item: &ContentItem, size: f32, wrap_width: f32) -> LayoutJob {
    let mut job = LayoutJob::default();
    job.wrap.max_width = wrap_width;

    let (marker, marker_color) = match item.emphasis() {
        Some(kind) => emphasis_marker(kind),
        None => ("●", UI_CONFIG.colors.bullet),
    };
    job.append(
        marker,
        0.0,
        TextFormat::simple(FontId::proportional(size * 0.8), marker_color),
    );
    job.append(
        item.text(),
        size * 0.5,
        TextFormat::simple(FontId::proportional(size), UI_CONFIG.colors.body),
    );
    job
}
