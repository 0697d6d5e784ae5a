use kbase_core::api::{HttpBackend, NotesBackend};
use kbase_core::util::normalize_text_option;

use crate::commands::common::{format_note_lines, note_to_list_item, print_json, NoteListItem};
use crate::error::CliError;

pub async fn run_list(
    backend: &HttpBackend,
    category: Option<String>,
    favorites: bool,
    as_json: bool,
) -> Result<(), CliError> {
    let category = normalize_text_option(category);
    let notes = if favorites {
        backend.list_favorites().await?
    } else {
        backend.list_notes(category.as_deref()).await?
    };

    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        print_json(&json_items)?;
    } else if notes.is_empty() {
        println!("No notes found");
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
    }

    Ok(())
}
