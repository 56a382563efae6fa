// Clock used for the fit settle delay and the slide transition.
// std::time::Instant panics on wasm32, so the browser build goes through web_time.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub type AppInstant = std::time::Instant;

#[cfg(target_arch = "wasm32")]
pub type AppInstant = web_time::Instant;

pub fn now() -> AppInstant {
    AppInstant::now()
}

/// Fraction of `length` elapsed since `start`, clamped to `[0, 1]`.
pub fn progress(start: AppInstant, at: AppInstant, length: Duration) -> f32 {
    if length.is_zero() {
        return 1.0;
    }
    let elapsed = at.saturating_duration_since(start);
    (elapsed.as_secs_f32() / length.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        let start = now();
        let length = Duration::from_millis(400);

        assert_eq!(progress(start, start, length), 0.0);
        assert!((progress(start, start + Duration::from_millis(100), length) - 0.25).abs() < 1e-6);
        assert_eq!(progress(start, start + Duration::from_secs(5), length), 1.0);
        assert_eq!(progress(start, start, Duration::ZERO), 1.0);
    }
}
