pub mod add;
pub mod categories;
pub mod common;
pub mod completions;
pub mod delete;
pub mod edit;
pub mod favorite;
pub mod list;
pub mod search;
pub mod show;
pub mod stats;
