use kbase_core::api::{HttpBackend, NotesBackend};

use crate::commands::common::parse_note_id;
use crate::error::CliError;

pub async fn run_favorite(backend: &HttpBackend, id: &str) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let toggle = backend.toggle_favorite(note_id).await?;
    if toggle.is_favorite {
        println!("Added note {note_id} to favorites");
    } else {
        println!("Removed note {note_id} from favorites");
    }
    Ok(())
}
