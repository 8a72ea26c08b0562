//! The `completion` command: shell completion script generation.

use anyhow::Result;
use clap::CommandFactory as _;

use crate::cli::{Cli, CompletionOpts};

/// Run the completion command, writing the script to stdout.
///
/// # Errors
///
/// Infallible today; returns `Result` for uniformity with the other
/// commands.
pub fn run(opts: &CompletionOpts) -> Result<()> {
    clap_complete::generate(
        opts.shell,
        &mut Cli::command(),
        "termrig",
        &mut std::io::stdout(),
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn generates_zsh_completions_into_buffer() {
        let mut buf = Vec::new();
        clap_complete::generate(
            clap_complete::Shell::Zsh,
            &mut Cli::command(),
            "termrig",
            &mut buf,
        );
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("termrig"));
    }
}
