pub mod screening;

pub use screening::{full_screen, quick_check};
