use kbase_core::api::{HttpBackend, NotesBackend};

use crate::commands::common::{parse_note_id, print_json, render_note};
use crate::error::CliError;

pub async fn run_show(backend: &HttpBackend, id: &str, as_json: bool) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let note = backend.get_note(note_id).await?;

    if as_json {
        print_json(&note)?;
    } else {
        println!("{}", render_note(&note));
    }
    Ok(())
}
