//! Custom hooks

mod shortcuts;

pub use shortcuts::use_global_shortcuts;
