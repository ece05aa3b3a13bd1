//! Data models for the application.

mod note;

pub use note::Note;
