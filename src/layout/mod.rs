// Adaptive slide-fit: widen first, shrink as a last resort
pub mod fit;

pub use fit::{FitDriver, FitOutcome, FitState, available_height, shrink_scale};
