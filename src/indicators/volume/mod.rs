pub mod obv;

pub use obv::calculate_obv;
