use kbase_core::api::{HttpBackend, NotesBackend};
use kbase_core::models::CategoryDraft;

use crate::cli::CategoryCommands;
use crate::commands::common::{category_to_list_item, format_category_lines, print_json};
use crate::error::CliError;

pub async fn run_categories(
    backend: &HttpBackend,
    command: CategoryCommands,
) -> Result<(), CliError> {
    match command {
        CategoryCommands::List { json } => {
            let categories = backend.list_categories().await?;
            if json {
                let items = categories
                    .iter()
                    .map(category_to_list_item)
                    .collect::<Vec<_>>();
                print_json(&items)?;
            } else {
                for line in format_category_lines(&categories) {
                    println!("{line}");
                }
            }
        }
        CategoryCommands::Add {
            name,
            description,
            color,
        } => {
            let draft = category_draft(&name)?
                .with_description(description)
                .with_color(color);
            let category = backend.create_category(&draft).await?;
            tracing::info!("Created category {}", category.name);
            println!("{}", category.id);
        }
        CategoryCommands::Rename { id, name } => {
            let draft = category_draft(&name)?;
            let category = backend.update_category(id, &draft).await?;
            println!("{}", category.id);
        }
        CategoryCommands::Delete { id } => {
            backend.delete_category(id).await?;
            println!("{id}");
        }
    }
    Ok(())
}

pub fn category_draft(name: &str) -> Result<CategoryDraft, CliError> {
    CategoryDraft::named(name).ok_or(CliError::EmptyCategoryName)
}
