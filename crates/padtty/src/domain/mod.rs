pub mod entry;
pub mod input;
pub mod language;
