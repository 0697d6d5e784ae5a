use kbase_core::api::{HttpBackend, NotesBackend};

use crate::commands::common::{build_draft, capture_editor_input_with_initial, parse_note_id};
use crate::error::CliError;

/// Field overrides from the command line; all `None` means "open the editor".
#[derive(Debug, Default)]
pub struct NoteEdits {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

impl NoteEdits {
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.tags.is_none()
    }
}

pub async fn run_edit(backend: &HttpBackend, id: &str, edits: NoteEdits) -> Result<(), CliError> {
    let note_id = parse_note_id(id)?;
    let note = backend.get_note(note_id).await?;

    let content = if edits.is_empty() {
        let Some(edited_content) = capture_editor_input_with_initial(&note.content)? else {
            return Err(CliError::EmptyEditedContent);
        };
        if edited_content == note.content {
            println!("{}", note.id);
            return Ok(());
        }
        edited_content
    } else {
        edits.content.unwrap_or_else(|| note.content.clone())
    };

    let title = edits.title.unwrap_or_else(|| note.title.clone());
    let category = edits.category.unwrap_or_else(|| note.category.clone());
    let tags = edits.tags.or_else(|| note.tags.clone());
    let draft = build_draft(&title, &content, Some(&category), tags.as_deref())?;

    let updated = backend.update_note(note.id, &draft).await?;
    tracing::info!("Updated note {}", updated.id);
    println!("{}", updated.id);
    Ok(())
}
