pub mod dedup;
pub mod limiter;
pub mod ttl;

pub use dedup::InflightDedup;
pub use limiter::FixedWindowLimiter;
pub use ttl::{ttl_for, TtlCache};
