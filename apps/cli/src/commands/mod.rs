//! Subcommand implementations.

pub mod cards;
pub mod study;
pub mod suggest;

pub use cards::{add, categories, delete, edit, list, show};
pub use study::study;
pub use suggest::suggest;
