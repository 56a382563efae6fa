//! Input handling configuration

pub struct NavigationConfig {
    /// Minimum horizontal travel (logical px) between touch start and touch end
    /// for the gesture to count as a swipe. Travel equal to the threshold is ignored.
    pub swipe_threshold_px: f32,
}

pub const NAVIGATION: NavigationConfig = NavigationConfig {
    swipe_threshold_px: 40.0,
};
