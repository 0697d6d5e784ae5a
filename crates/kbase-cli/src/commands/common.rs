use std::env;
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use kbase_core::api::HttpBackend;
use kbase_core::config::ClientConfig;
use kbase_core::models::{
    format_date, generate_summary, Category, Note, NoteDraft, NoteId, SUMMARY_MAX_CHARS,
};
use kbase_core::util::ellipsize;
use kbase_core::validation::NoteForm;
use serde::Serialize;

use crate::error::CliError;

pub const API_URL_ENV: &str = "KBASE_API_URL";

#[derive(Debug, Serialize)]
pub struct NoteListItem {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryListItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub color: String,
}

/// Resolve the API location from the flag, then the environment.
pub fn resolve_client_config(
    cli_api_url: Option<String>,
    env_api_url: Option<String>,
) -> Result<ClientConfig, CliError> {
    Ok(ClientConfig::resolve([cli_api_url, env_api_url])?)
}

pub fn connect(cli_api_url: Option<String>) -> Result<HttpBackend, CliError> {
    let config = resolve_client_config(cli_api_url, env::var(API_URL_ENV).ok())?;
    tracing::debug!("Using notes API at {}", config.api_base_url);
    Ok(HttpBackend::new(&config)?)
}

pub fn format_note_lines(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .map(|note| {
            let marker = if note.is_favorite { "*" } else { " " };
            let title = ellipsize(&collapse_whitespace(&note.title), 37);
            let date = format_date(note.last_updated());
            format!(
                "{:>6} {marker} {title:<40}  {:<14}  {date}",
                note.id.get(),
                note.category
            )
        })
        .collect()
}

pub fn format_category_lines(categories: &[Category]) -> Vec<String> {
    categories
        .iter()
        .map(|category| match category.description.as_deref() {
            Some(description) => format!(
                "{:>6}  {:<20}  {}  {description}",
                category.id, category.name, category.color
            ),
            None => format!("{:>6}  {:<20}  {}", category.id, category.name, category.color),
        })
        .collect()
}

/// Full multi-line rendering for `kb show`.
pub fn render_note(note: &Note) -> String {
    let mut lines = vec![
        format!("#{} {}", note.id, note.title),
        format!(
            "Category: {}{}",
            note.category,
            if note.is_favorite { "  (favorite)" } else { "" }
        ),
        format!("Created:  {}", format_date(note.created_at)),
    ];
    if let Some(updated_at) = note.updated_at {
        lines.push(format!("Updated:  {}", format_date(updated_at)));
    }
    let tags = note.tag_list();
    if !tags.is_empty() {
        let rendered = tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(format!("Tags:     {rendered}"));
    }
    lines.push(String::new());
    lines.push(note.content.clone());
    lines.join("\n")
}

pub fn note_to_list_item(note: &Note) -> NoteListItem {
    NoteListItem {
        id: note.id.get(),
        title: note.title.clone(),
        summary: note_preview(note),
        category: note.category.clone(),
        tags: note.tag_list(),
        is_favorite: note.is_favorite,
        updated_at: note.last_updated().to_rfc3339(),
    }
}

/// Stored summary, or the excerpt the service would generate for this content.
pub fn note_preview(note: &Note) -> String {
    note.summary
        .as_deref()
        .map(str::trim)
        .filter(|summary| !summary.is_empty())
        .map_or_else(
            || generate_summary(note.content.trim(), SUMMARY_MAX_CHARS),
            ToString::to_string,
        )
}

pub fn category_to_list_item(category: &Category) -> CategoryListItem {
    CategoryListItem {
        id: category.id,
        name: category.name.clone(),
        description: category.description.clone(),
        color: category.color.clone(),
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run the same checks as the web form before anything is sent.
pub fn build_draft(
    title: &str,
    content: &str,
    category: Option<&str>,
    tags: Option<&str>,
) -> Result<NoteDraft, CliError> {
    let form = NoteForm {
        title: title.to_string(),
        content: content.to_string(),
        category: category.unwrap_or_default().to_string(),
        tags: tags.unwrap_or_default().to_string(),
    };
    Ok(form.validate().map_err(kbase_core::Error::Validation)?)
}

pub fn parse_note_id(id: &str) -> Result<NoteId, CliError> {
    id.parse::<NoteId>()
        .map_err(|_| CliError::InvalidNoteId(id.trim().to_string()))
}

pub fn resolve_note_content(content_parts: &[String]) -> Result<String, CliError> {
    if let Some(content) = normalize_content(&content_parts.join(" ")) {
        return Ok(content);
    }

    if let Some(content) = read_piped_stdin()? {
        return Ok(content);
    }

    if let Some(content) = capture_editor_input_with_initial("")? {
        return Ok(content);
    }

    Err(CliError::EmptyContent)
}

pub fn normalize_content(content: &str) -> Option<String> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn normalize_search_query(query: &str) -> Result<String, CliError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        Err(CliError::EmptySearchQuery)
    } else {
        Ok(trimmed.to_string())
    }
}

pub fn read_piped_stdin() -> Result<Option<String>, CliError> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(normalize_content(&buffer))
}

/// Ask `question [y/N]` on the terminal.
///
/// Without a terminal there is nobody to ask, so the caller must pass `--yes`.
pub fn confirm(question: &str) -> Result<bool, CliError> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        return Err(CliError::ConfirmationRequired);
    }

    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    stdin.lock().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

pub fn capture_editor_input_with_initial(
    initial_content: &str,
) -> Result<Option<String>, CliError> {
    let editor = preferred_editor();
    let temp_file = create_temp_note_file_path();
    std::fs::write(&temp_file, initial_content)?;

    let launch_result = launch_editor(&editor, &temp_file);
    let note_content = std::fs::read_to_string(&temp_file)?;
    let _ = std::fs::remove_file(&temp_file);

    launch_result?;
    Ok(normalize_content(&note_content))
}

pub fn launch_editor(editor: &str, file_path: &Path) -> Result<(), CliError> {
    match Command::new(editor).arg(file_path).status() {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => Err(CliError::EditorFailed(format!(
            "`{editor}` exited with status {status}"
        ))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            // EDITOR may carry arguments, e.g. "code --wait"
            let mut parts = editor.split_whitespace();
            let Some(program) = parts.next() else {
                return Err(CliError::EditorFailed("empty EDITOR command".into()));
            };

            let status = Command::new(program).args(parts).arg(file_path).status()?;
            if status.success() {
                Ok(())
            } else {
                Err(CliError::EditorFailed(format!(
                    "`{editor}` exited with status {status}"
                )))
            }
        }
        Err(err) => Err(CliError::Io(err)),
    }
}

pub fn preferred_editor() -> String {
    env::var("VISUAL")
        .or_else(|_| env::var("EDITOR"))
        .unwrap_or_else(|_| default_editor().to_string())
}

pub const fn default_editor() -> &'static str {
    if cfg!(windows) {
        "notepad"
    } else {
        "vi"
    }
}

pub fn create_temp_note_file_path() -> PathBuf {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_nanos());
    env::temp_dir().join(format!("kbase-note-{}-{now}.md", std::process::id()))
}
