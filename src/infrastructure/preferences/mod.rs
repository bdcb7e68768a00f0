//! Preference store adapters

mod json_file;
mod memory;

pub use json_file::JsonFilePreferences;
pub use memory::MemoryPreferences;
