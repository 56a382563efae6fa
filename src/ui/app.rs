use eframe::{Frame, egui};

use crate::data::PresentationContent;
use crate::domain::{Cursor, Deck, NavAction, PriceTable, SwipeTracker, validate_slides};
use crate::layout::FitDriver;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::{AppInstant, now};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// The presentation view.
///
/// Content is fixed at construction. The cursor, the fit state and the
/// price-table toggle are the only things that change while it runs.
pub struct DeckApp {
    pub(super) deck: Deck,
    pub(super) prices: PriceTable,
    /// Computed once: the content never changes after startup
    pub(super) validation_errors: Vec<String>,

    pub(super) cursor: Cursor,
    pub(super) fit: FitDriver,
    pub(super) swipe: SwipeTracker,
    /// Viewport size seen last frame, to detect resizes
    pub(super) last_viewport: Option<egui::Vec2>,
    /// When the current slide appeared (drives the slide-in transition)
    pub(super) slide_shown_at: AppInstant,

    pub(super) show_price_table: bool,
}

impl DeckApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        content: PresentationContent,
        start_index: usize,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        setup_custom_visuals(&cc.egui_ctx);
        Self::from_content(content, start_index)
    }

    /// Builds the view state without an egui context.
    pub fn from_content(content: PresentationContent, start_index: usize) -> Self {
        let PresentationContent { deck, prices } = content;

        let validation_errors = validate_slides(&deck.slides);
        if !validation_errors.is_empty() {
            log::warn!(
                "⚠️  {} content defect(s) found; rendering anyway",
                validation_errors.len()
            );
        }
        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_validation {
            for defect in &validation_errors {
                log::warn!("⚠️  Content defect: {}", defect);
            }
        }
        let cursor = Cursor::starting_at(deck.len(), start_index);

        Self {
            deck,
            prices,
            validation_errors,
            cursor,
            fit: FitDriver::default(),
            swipe: SwipeTracker::default(),
            last_viewport: None,
            slide_shown_at: now(),
            show_price_table: false,
        }
    }

    pub fn current_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn validation_errors(&self) -> &[String] {
        &self.validation_errors
    }

    /// Moves the cursor; a real move restarts the transition and schedules a fit pass.
    pub(super) fn navigate(&mut self, action: NavAction, trigger: &str) {
        let from = self.cursor.index();
        if !self.cursor.apply(action) {
            return;
        }

        let at = now();
        self.slide_shown_at = at;
        self.fit.invalidate(at);

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_navigation {
            log::info!(
                "[nav] {} via {}: slide {} -> {}",
                action,
                trigger,
                from + 1,
                self.cursor.index() + 1
            );
        }
        #[cfg(not(debug_assertions))]
        let _ = (from, trigger);
    }

    /// First frame and every viewport change trigger a fit pass.
    fn track_viewport(&mut self, ctx: &egui::Context, at: AppInstant) {
        let viewport = ctx.screen_rect().size();
        match self.last_viewport {
            None => self.fit.invalidate(at),
            Some(previous) if previous != viewport => self.fit.on_resize(at),
            Some(_) => {}
        }
        self.last_viewport = Some(viewport);
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let at = now();
        self.track_viewport(ctx, at);

        self.handle_global_shortcuts(ctx);
        self.handle_touch_input(ctx);

        if let Some(wait) = self.fit.before_render(at) {
            ctx.request_repaint_after(wait);
        }

        self.render_header_panel(ctx);
        self.render_footer_panel(ctx);
        let card_height = self.render_central_panel(ctx, at);
        self.render_price_table_window(ctx);

        let viewport_height = ctx.screen_rect().height();
        if let Some(outcome) = self.fit.after_render(viewport_height, card_height, at) {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_fit_passes {
                log::info!(
                    "[fit] slide {}: {} (card {:?}px, viewport {}px)",
                    self.cursor.index() + 1,
                    outcome,
                    card_height,
                    viewport_height
                );
            }
            #[cfg(not(debug_assertions))]
            let _ = outcome;
            ctx.request_repaint();
        }
    }
}
