mod home;
pub use home::{HomeView, HomeViewProps};
pub(crate) use home::STYLES;

mod notes_placeholder;
pub use notes_placeholder::NotesPlaceholder;
