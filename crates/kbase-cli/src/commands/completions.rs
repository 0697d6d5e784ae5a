use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, shells};

use crate::cli::{Cli, CompletionShell};
use crate::error::CliError;

pub const BIN_NAME: &str = "kb";

pub fn run_completions(shell: CompletionShell, output_path: Option<&Path>) -> Result<(), CliError> {
    let script = render_completions(shell);

    if let Some(path) = output_path {
        std::fs::write(path, &script)?;
        println!("{}", path.display());
    } else {
        io::stdout().write_all(&script)?;
    }

    Ok(())
}

pub fn render_completions(shell: CompletionShell) -> Vec<u8> {
    let mut command = Cli::command();
    let mut script = Vec::new();
    match shell {
        CompletionShell::Bash => generate(shells::Bash, &mut command, BIN_NAME, &mut script),
        CompletionShell::Zsh => generate(shells::Zsh, &mut command, BIN_NAME, &mut script),
        CompletionShell::Fish => generate(shells::Fish, &mut command, BIN_NAME, &mut script),
        CompletionShell::PowerShell => {
            generate(shells::PowerShell, &mut command, BIN_NAME, &mut script);
        }
    }
    script
}
