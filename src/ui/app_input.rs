use eframe::egui::{Context, Event, Key, TouchPhase};

use crate::domain::NavAction;

use super::app::DeckApp;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Keyboard bindings for deck navigation
pub fn key_action(key: Key) -> Option<NavAction> {
    match key {
        Key::ArrowRight => Some(NavAction::Next),
        Key::ArrowLeft => Some(NavAction::Previous),
        Key::Home => Some(NavAction::First),
        Key::End => Some(NavAction::Last),
        _ => None,
    }
}

impl DeckApp {
    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        let mut actions = Vec::new();
        let mut toggle_prices = false;
        let mut close_prices = false;

        ctx.input(|i| {
            for key in [Key::ArrowRight, Key::ArrowLeft, Key::Home, Key::End] {
                if i.key_pressed(key) {
                    actions.extend(key_action(key));
                }
            }

            // 'P'rice table toggle
            if i.key_pressed(Key::P) {
                toggle_prices = true;
            }
            if i.key_pressed(Key::Escape) {
                close_prices = true;
            }
        });

        for action in actions {
            self.navigate(action, "keyboard");
        }
        if toggle_prices {
            self.show_price_table = !self.show_price_table;
        } else if close_prices {
            self.show_price_table = false;
        }
    }

    /// Horizontal swipes: the travel between touch start and touch end
    /// decides the direction.
    pub(super) fn handle_touch_input(&mut self, ctx: &Context) {
        let mut actions = Vec::new();

        ctx.input(|i| {
            for event in &i.events {
                let Event::Touch { phase, pos, .. } = event else {
                    continue;
                };
                match phase {
                    TouchPhase::Start => self.swipe.touch_start(pos.x),
                    TouchPhase::End => {
                        let action = self.swipe.touch_end(pos.x);
                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_touch {
                            log::info!("[touch] end at x={:.1} -> {:?}", pos.x, action);
                        }
                        actions.extend(action);
                    }
                    TouchPhase::Cancel => self.swipe.cancel(),
                    TouchPhase::Move => {}
                }
            }
        });

        for action in actions {
            self.navigate(action, "swipe");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_home_end_map_to_actions() {
        assert_eq!(key_action(Key::ArrowRight), Some(NavAction::Next));
        assert_eq!(key_action(Key::ArrowLeft), Some(NavAction::Previous));
        assert_eq!(key_action(Key::Home), Some(NavAction::First));
        assert_eq!(key_action(Key::End), Some(NavAction::Last));
        assert_eq!(key_action(Key::Space), None);
    }
}
