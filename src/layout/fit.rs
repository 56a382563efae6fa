use std::fmt;
use std::time::Duration;

use crate::config::LAYOUT;
use crate::utils::app_time::AppInstant;

/// Vertical budget for the slide card in a viewport of the given height.
pub fn available_height(viewport_height: f32) -> f32 {
    (viewport_height - LAYOUT.chrome_reserve_px).max(LAYOUT.min_available_height_px)
}

/// Uniform shrink factor that brings `measured_height` inside the budget.
/// Never above 1; a non-finite or non-positive result falls back to 1.
pub fn shrink_scale(available_height: f32, measured_height: f32) -> f32 {
    let scale = ((available_height - LAYOUT.scale_margin_px) / measured_height).min(1.0);
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        1.0
    }
}

/// What a fit pass decided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitOutcome {
    /// Content is within budget; nothing changed
    Fits,
    /// Container widened by one preset; needs a re-measure
    Widened { width_index: usize },
    /// Widest preset reached and still overflowing
    Scaled(f32),
    /// Nothing measurable yet; retried on the next trigger
    Skipped,
}

impl fmt::Display for FitOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitOutcome::Fits => write!(f, "fits"),
            FitOutcome::Widened { width_index } => write!(
                f,
                "widened to {}px",
                LAYOUT.width_presets_px[*width_index]
            ),
            FitOutcome::Scaled(scale) => write!(f, "scaled to {:.3}", scale),
            FitOutcome::Skipped => write!(f, "skipped (not measured yet)"),
        }
    }
}

/// Width preset and scale applied to the slide card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitState {
    pub width_index: usize,
    pub scale: f32,
}

impl Default for FitState {
    fn default() -> Self {
        Self {
            width_index: LAYOUT.initial_width_index.min(Self::last_index()),
            scale: 1.0,
        }
    }
}

impl FitState {
    fn last_index() -> usize {
        LAYOUT.width_presets_px.len().saturating_sub(1)
    }

    pub fn max_width(&self) -> f32 {
        LAYOUT.width_presets_px[self.width_index]
    }

    pub fn can_widen(&self) -> bool {
        self.width_index < Self::last_index()
    }

    /// Step 1 of every pass: measure the slide unscaled.
    pub fn reset_scale(&mut self) {
        self.scale = 1.0;
    }

    /// Decides a pass from the natural (unscaled) card height.
    /// Widens by exactly one preset per pass; only shrinks once at the widest.
    pub fn evaluate(&mut self, viewport_height: f32, natural_height: Option<f32>) -> FitOutcome {
        let Some(natural_height) = natural_height else {
            return FitOutcome::Skipped;
        };

        let available = available_height(viewport_height);
        if natural_height <= available {
            return FitOutcome::Fits;
        }

        if self.can_widen() {
            self.width_index += 1;
            return FitOutcome::Widened {
                width_index: self.width_index,
            };
        }

        self.scale = shrink_scale(available, natural_height);
        FitOutcome::Scaled(self.scale)
    }

    /// Re-measure after a widening step. Shrinks only if that step reached
    /// the widest preset and the content still overflows.
    pub fn recheck_after_widen(
        &mut self,
        viewport_height: f32,
        measured_height: Option<f32>,
    ) -> FitOutcome {
        let Some(measured_height) = measured_height else {
            return FitOutcome::Skipped;
        };

        let available = available_height(viewport_height);
        if measured_height > available && !self.can_widen() {
            self.scale = shrink_scale(available, measured_height);
            return FitOutcome::Scaled(self.scale);
        }
        FitOutcome::Fits
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FitPhase {
    Idle,
    /// Waiting for the slide transition to settle
    Settling { due: AppInstant },
    /// Scale was reset; the next rendered frame gives the natural height
    Measuring,
    /// Width was increased; the next rendered frame gives the new height
    Rechecking,
}

/// Runs fit passes across frames.
///
/// Call `before_render` at the top of a frame, render the card with `state()`,
/// then report the card height with `after_render`. A newer trigger
/// supersedes a pass in flight.
#[derive(Debug, Clone)]
pub struct FitDriver {
    state: FitState,
    phase: FitPhase,
}

impl Default for FitDriver {
    fn default() -> Self {
        Self {
            state: FitState::default(),
            phase: FitPhase::Idle,
        }
    }
}

impl FitDriver {
    pub fn state(&self) -> FitState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.phase == FitPhase::Idle
    }

    /// Cursor changed: schedule a pass once the transition has settled.
    pub fn invalidate(&mut self, now: AppInstant) {
        self.phase = FitPhase::Settling {
            due: now + LAYOUT.settle_delay,
        };
    }

    /// Viewport changed: drop the shrink factor and re-fit.
    /// The width preset is kept; widening decisions persist across resizes.
    pub fn on_resize(&mut self, now: AppInstant) {
        self.state.reset_scale();
        self.invalidate(now);
    }

    /// Starts a due pass. Returns how long until the pending pass is due,
    /// so the caller can ask for a repaint then.
    pub fn before_render(&mut self, now: AppInstant) -> Option<Duration> {
        match self.phase {
            FitPhase::Settling { due } if now >= due => {
                self.state.reset_scale();
                self.phase = FitPhase::Measuring;
                Some(Duration::ZERO)
            }
            FitPhase::Settling { due } => Some(due - now),
            FitPhase::Measuring | FitPhase::Rechecking => Some(Duration::ZERO),
            FitPhase::Idle => None,
        }
    }

    /// Feeds the card height rendered this frame (`None` if the card was not drawn).
    pub fn after_render(
        &mut self,
        viewport_height: f32,
        measured_height: Option<f32>,
        now: AppInstant,
    ) -> Option<FitOutcome> {
        match self.phase {
            FitPhase::Measuring => {
                let outcome = self.state.evaluate(viewport_height, measured_height);
                self.phase = match outcome {
                    FitOutcome::Widened { .. } => FitPhase::Rechecking,
                    _ => FitPhase::Idle,
                };
                Some(outcome)
            }
            FitPhase::Rechecking => {
                let outcome = self
                    .state
                    .recheck_after_widen(viewport_height, measured_height);
                // The new width is itself a trigger for another pass
                self.invalidate(now);
                Some(outcome)
            }
            FitPhase::Idle | FitPhase::Settling { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::app_time::now;

    const VIEWPORT: f32 = 900.0; // available = 720

    fn at_max() -> FitState {
        FitState {
            width_index: LAYOUT.width_presets_px.len() - 1,
            scale: 1.0,
        }
    }

    #[test]
    fn available_height_reserves_chrome_with_a_floor() {
        assert_eq!(available_height(900.0), 720.0);
        assert_eq!(available_height(400.0), 320.0);
        assert_eq!(available_height(0.0), 320.0);
    }

    #[test]
    fn fitting_content_changes_nothing() {
        let mut state = FitState {
            width_index: 5,
            scale: 0.8,
        };
        let before = state;

        assert_eq!(state.evaluate(VIEWPORT, Some(720.0)), FitOutcome::Fits);
        assert_eq!(state, before);
        assert_eq!(state.evaluate(VIEWPORT, Some(100.0)), FitOutcome::Fits);
        assert_eq!(state, before);
    }

    #[test]
    fn overflow_widens_exactly_one_step() {
        let mut state = FitState::default();
        assert_eq!(state.width_index, 3);

        let outcome = state.evaluate(VIEWPORT, Some(5_000.0));
        assert_eq!(outcome, FitOutcome::Widened { width_index: 4 });
        assert_eq!(state.width_index, 4);
        assert_eq!(state.scale, 1.0);
    }

    #[test]
    fn overflow_at_widest_preset_shrinks() {
        let mut state = at_max();
        let outcome = state.evaluate(VIEWPORT, Some(1_424.0));

        // (720 - 8) / 1424
        assert_eq!(outcome, FitOutcome::Scaled(0.5));
        assert_eq!(state.scale, 0.5);
        assert_eq!(state.width_index, LAYOUT.width_presets_px.len() - 1);
    }

    #[test]
    fn shrink_scale_is_clamped_to_one() {
        // Barely overflowing: the quotient would exceed 1
        assert_eq!(shrink_scale(720.0, 500.0), 1.0);
        let scale = shrink_scale(720.0, 721.0);
        assert!(scale > 0.0 && scale <= 1.0);
    }

    #[test]
    fn degenerate_measurements_fall_back_to_one() {
        assert_eq!(shrink_scale(720.0, 0.0), 1.0);
        assert_eq!(shrink_scale(720.0, f32::NAN), 1.0);
        assert_eq!(shrink_scale(720.0, f32::INFINITY), 1.0);
        assert_eq!(shrink_scale(720.0, -10.0), 1.0);
    }

    #[test]
    fn unmeasured_card_skips_the_pass() {
        let mut state = FitState::default();
        assert_eq!(state.evaluate(VIEWPORT, None), FitOutcome::Skipped);
        assert_eq!(state, FitState::default());
    }

    #[test]
    fn recheck_only_shrinks_at_the_widest_preset() {
        let mut state = FitState {
            width_index: 6,
            scale: 1.0,
        };
        assert_eq!(state.recheck_after_widen(VIEWPORT, Some(2_000.0)), FitOutcome::Fits);
        assert_eq!(state.scale, 1.0);

        let mut state = at_max();
        assert!(matches!(
            state.recheck_after_widen(VIEWPORT, Some(2_000.0)),
            FitOutcome::Scaled(_)
        ));
        assert!(state.scale < 1.0);
    }

    #[test]
    fn driver_waits_for_the_settle_delay() {
        let start = now();
        let mut driver = FitDriver::default();
        assert!(driver.is_idle());
        assert_eq!(driver.before_render(start), None);

        driver.invalidate(start);
        assert_eq!(driver.before_render(start), Some(LAYOUT.settle_delay));
        // Still settling: reports are ignored
        assert_eq!(driver.after_render(VIEWPORT, Some(5_000.0), start), None);

        let due = start + LAYOUT.settle_delay;
        assert_eq!(driver.before_render(due), Some(Duration::ZERO));
        assert_eq!(
            driver.after_render(VIEWPORT, Some(100.0), due),
            Some(FitOutcome::Fits)
        );
        assert!(driver.is_idle());
    }

    #[test]
    fn driver_widens_one_step_per_pass_until_it_fits() {
        let mut t = now();
        let mut driver = FitDriver::default();
        driver.invalidate(t);

        // Pass 1: overflow -> widen to index 4, then re-measure
        t += LAYOUT.settle_delay;
        driver.before_render(t);
        assert_eq!(
            driver.after_render(VIEWPORT, Some(900.0), t),
            Some(FitOutcome::Widened { width_index: 4 })
        );
        assert_eq!(driver.state().width_index, 4);
        assert_eq!(driver.after_render(VIEWPORT, Some(800.0), t), Some(FitOutcome::Fits));

        // The width change scheduled pass 2: still overflowing -> index 5
        assert!(!driver.is_idle());
        t += LAYOUT.settle_delay;
        driver.before_render(t);
        assert_eq!(
            driver.after_render(VIEWPORT, Some(800.0), t),
            Some(FitOutcome::Widened { width_index: 5 })
        );
        driver.after_render(VIEWPORT, Some(700.0), t);

        // Pass 3: fits now, driver goes idle
        t += LAYOUT.settle_delay;
        driver.before_render(t);
        assert_eq!(driver.after_render(VIEWPORT, Some(700.0), t), Some(FitOutcome::Fits));
        assert!(driver.is_idle());
        assert_eq!(driver.state().width_index, 5);
    }

    #[test]
    fn resize_resets_scale_but_keeps_width() {
        let t = now();
        let mut driver = FitDriver {
            state: FitState {
                width_index: 8,
                scale: 0.6,
            },
            phase: FitPhase::Idle,
        };

        driver.on_resize(t);
        assert_eq!(driver.state().scale, 1.0);
        assert_eq!(driver.state().width_index, 8);
        assert!(!driver.is_idle());
    }

    #[test]
    fn newer_trigger_supersedes_a_pass_in_flight() {
        let t = now();
        let mut driver = FitDriver::default();
        driver.invalidate(t);
        driver.before_render(t + LAYOUT.settle_delay);

        // Cursor moved again before the measurement arrived
        let later = t + LAYOUT.settle_delay;
        driver.invalidate(later);
        assert_eq!(driver.after_render(VIEWPORT, Some(5_000.0), later), None);
        assert_eq!(driver.state().width_index, LAYOUT.initial_width_index);
    }
}
