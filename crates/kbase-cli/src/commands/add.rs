use kbase_core::api::{HttpBackend, NotesBackend};

use crate::commands::common::{build_draft, resolve_note_content};
use crate::error::CliError;

pub async fn run_add(
    backend: &HttpBackend,
    title: &str,
    content_parts: &[String],
    category: Option<&str>,
    tags: Option<&str>,
) -> Result<(), CliError> {
    let content = resolve_note_content(content_parts)?;
    let draft = build_draft(title, &content, category, tags)?;

    let note = backend.create_note(&draft).await?;
    tracing::info!("Created note {}", note.id);
    println!("{}", note.id);
    Ok(())
}
