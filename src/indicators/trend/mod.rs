pub mod ema;
pub mod sar;
pub mod sma;

pub use ema::{calculate_ema, calculate_emas, check_ema_cross};
pub use sar::{calculate_sar, calculate_sar_with};
pub use sma::{calculate_sma, calculate_smas};
