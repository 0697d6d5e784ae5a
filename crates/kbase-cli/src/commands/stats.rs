use kbase_core::api::{HttpBackend, NotesBackend};

use crate::commands::common::print_json;
use crate::error::CliError;

pub async fn run_stats(backend: &HttpBackend, as_json: bool) -> Result<(), CliError> {
    let stats = backend.stats().await?;

    if as_json {
        print_json(&stats)?;
    } else {
        println!("{}", stats.notes_label());
        println!("{}", stats.categories_label());
        println!("{} favorite", stats.favorite_notes);
        println!("{} created in the last 7 days", stats.recent_notes);
    }
    Ok(())
}
