pub mod engine;
pub mod filters;
pub mod universe;

pub use engine::Scanner;
pub use universe::UniverseSelector;
