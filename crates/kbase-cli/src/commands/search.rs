use kbase_core::api::{HttpBackend, NotesBackend};
use kbase_core::util::pluralize;

use crate::commands::common::{
    format_note_lines, normalize_search_query, note_to_list_item, print_json, NoteListItem,
};
use crate::error::CliError;

pub async fn run_search(backend: &HttpBackend, query: &str, as_json: bool) -> Result<(), CliError> {
    let normalized_query = normalize_search_query(query)?;
    let notes = backend.search(&normalized_query).await?;

    if as_json {
        let json_items = notes
            .iter()
            .map(note_to_list_item)
            .collect::<Vec<NoteListItem>>();
        print_json(&json_items)?;
    } else {
        for line in format_note_lines(&notes) {
            println!("{line}");
        }
        println!(
            "Found {}",
            pluralize(notes.len() as u64, "note", "notes")
        );
    }

    Ok(())
}
