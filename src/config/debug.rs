//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet. Every use site is further gated by `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit a line per cursor change (trigger, old and new index).
    pub print_navigation: bool,
    /// Emit the outcome of every fit pass (fits / widened / scaled / skipped).
    pub print_fit_passes: bool,
    /// Emit validation defects found at startup.
    pub print_validation: bool,
    /// Emit swipe gestures, including ones below the threshold.
    pub print_touch: bool,
    /// Emit content loading details (source, slide count).
    pub print_content_loading: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_navigation: false,
    print_fit_passes: false,
    print_validation: false,
    print_touch: false,
    print_content_loading: false,
};
