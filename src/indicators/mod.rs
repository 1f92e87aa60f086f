pub mod bundle;
pub mod math;

pub mod momentum;
pub mod structure;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use bundle::{compute_indicators, overall_signal};
