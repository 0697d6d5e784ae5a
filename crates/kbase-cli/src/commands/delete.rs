use kbase_core::api::{HttpBackend, NotesBackend};

use crate::commands::common::{confirm, parse_note_id};
use crate::error::CliError;

pub async fn run_delete(backend: &HttpBackend, id: &str, skip_confirm: bool) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;

    if !skip_confirm {
        let note = backend.get_note(note_id).await?;
        if !confirm(&format!("Delete note {} \"{}\"?", note.id, note.title))? {
            println!("Cancelled");
            return Ok(());
        }
    }

    backend.delete_note(note_id).await?;
    tracing::info!("Deleted note {}", note_id);
    println!("{note_id}");
    Ok(())
}
