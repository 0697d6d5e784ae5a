//! UI Components
//!
//! Reusable UI components for the web client.

mod category_creator;
mod header;
mod note_card;
mod note_form;
mod note_list;
mod note_modal;
mod search_bar;
mod toast;
mod toolbar;

pub use category_creator::CategoryCreator;
pub use header::Header;
pub use note_card::NoteCard;
pub use note_form::NoteForm;
pub use note_list::NoteList;
pub use note_modal::NoteModal;
pub use search_bar::SearchBar;
pub use toast::ToastStack;
pub use toolbar::Toolbar;
