use std::fmt;

use crate::config::NAVIGATION;

/// A request to move through the deck, whatever input produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
    First,
    Last,
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::Next => write!(f, "next"),
            NavAction::Previous => write!(f, "previous"),
            NavAction::First => write!(f, "first"),
            NavAction::Last => write!(f, "last"),
        }
    }
}

/// Index of the slide on screen, always in `[0, len)` for a non-empty deck.
///
/// `next` and `previous` wrap around. With an empty deck every move is a
/// no-op and the index stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    len: usize,
}

impl Cursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Starts at `index`, clamped to the last slide.
    pub fn starting_at(len: usize, index: usize) -> Self {
        Self {
            index: index.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// "current / total" as shown under the slide.
    pub fn counter_label(&self) -> String {
        if self.len == 0 {
            return "0 / 0".to_string();
        }
        format!("{} / {}", self.index + 1, self.len)
    }

    /// Applies `action`; returns true when the index moved.
    pub fn apply(&mut self, action: NavAction) -> bool {
        match action {
            NavAction::Next => self.next(),
            NavAction::Previous => self.previous(),
            NavAction::First => self.go_to_first(),
            NavAction::Last => self.go_to_last(),
        }
    }

    pub fn next(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.set((self.index + 1) % self.len)
    }

    pub fn previous(&mut self) -> bool {
        if self.len == 0 {
            return false;
        }
        self.set((self.index + self.len - 1) % self.len)
    }

    pub fn go_to_first(&mut self) -> bool {
        self.set(0)
    }

    pub fn go_to_last(&mut self) -> bool {
        self.set(self.len.saturating_sub(1))
    }

    fn set(&mut self, index: usize) -> bool {
        let changed = self.index != index;
        self.index = index;
        changed
    }
}

/// Maps the horizontal travel of a touch (end x minus start x) to an action.
/// A leftward swipe advances, a rightward one goes back; travel that does not
/// exceed the threshold is ignored.
pub fn classify_swipe(delta_x: f32) -> Option<NavAction> {
    let threshold = NAVIGATION.swipe_threshold_px;
    if delta_x < -threshold {
        Some(NavAction::Next)
    } else if delta_x > threshold {
        Some(NavAction::Previous)
    } else {
        None
    }
}

/// Remembers where the current touch started.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn touch_start(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. A touch end without a matching start is ignored.
    pub fn touch_end(&mut self, x: f32) -> Option<NavAction> {
        let start_x = self.start_x.take()?;
        classify_swipe(x - start_x)
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_n_times_returns_to_start() {
        for len in 1..=12 {
            for start in 0..len {
                let mut cursor = Cursor::starting_at(len, start);
                for _ in 0..len {
                    cursor.next();
                }
                assert_eq!(cursor.index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        for len in 1..=12 {
            for start in 0..len {
                let mut cursor = Cursor::starting_at(len, start);
                cursor.next();
                cursor.previous();
                assert_eq!(cursor.index(), start, "len={len} start={start}");
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut cursor = Cursor::starting_at(11, 10);
        assert!(cursor.next());
        assert_eq!(cursor.index(), 0);

        assert!(cursor.previous());
        assert_eq!(cursor.index(), 10);
    }

    #[test]
    fn first_and_last() {
        let mut cursor = Cursor::starting_at(5, 2);
        cursor.apply(NavAction::Last);
        assert_eq!(cursor.index(), 4);
        cursor.apply(NavAction::First);
        assert_eq!(cursor.index(), 0);

        // Already there: reported as unchanged
        assert!(!cursor.go_to_first());
    }

    #[test]
    fn single_slide_never_moves() {
        let mut cursor = Cursor::new(1);
        assert!(!cursor.next());
        assert!(!cursor.previous());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.counter_label(), "1 / 1");
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut cursor = Cursor::new(0);
        assert!(!cursor.next());
        assert!(!cursor.previous());
        assert!(!cursor.go_to_last());
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.counter_label(), "0 / 0");
    }

    #[test]
    fn start_index_is_clamped() {
        assert_eq!(Cursor::starting_at(4, 99).index(), 3);
        assert_eq!(Cursor::starting_at(0, 5).index(), 0);
    }

    #[test]
    fn swipe_threshold_is_exclusive() {
        assert_eq!(classify_swipe(-41.0), Some(NavAction::Next));
        assert_eq!(classify_swipe(-39.0), None);
        assert_eq!(classify_swipe(-40.0), None);
        assert_eq!(classify_swipe(41.0), Some(NavAction::Previous));
        assert_eq!(classify_swipe(39.0), None);
        assert_eq!(classify_swipe(40.0), None);
    }

    #[test]
    fn tracker_measures_from_touch_start() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(200.0), Some(NavAction::Next));

        // The start was consumed by the previous end
        assert_eq!(tracker.touch_end(500.0), None);

        tracker.touch_start(100.0);
        tracker.cancel();
        assert_eq!(tracker.touch_end(300.0), None);
    }
}
