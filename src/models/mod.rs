pub mod compliance;
pub mod indicators;
pub mod market;
pub mod scan;
