pub mod support_resistance;

pub use support_resistance::{calculate_support_resistance, calculate_support_resistance_with};
