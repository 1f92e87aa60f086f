pub mod cci;
pub mod macd;
pub mod rsi;
pub mod stochastic;
pub mod williams_r;

pub use cci::{calculate_cci, calculate_cci_default};
pub use macd::{calculate_macd, calculate_macd_default};
pub use rsi::{calculate_rsi, calculate_rsi_default};
pub use stochastic::{calculate_stochastic, calculate_stochastic_default};
pub use williams_r::{calculate_williams_r, calculate_williams_r_default};
