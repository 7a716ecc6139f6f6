use std::io::{self, Write};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        write_completions(self.shell, &mut io::stdout().lock())
    }
}

/// Write the completion script for `shell`, covering every subcommand.
fn write_completions(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_cover_subcommands() {
        let mut out = Vec::new();
        write_completions(Shell::Bash, &mut out).unwrap();

        let script = String::from_utf8(out).unwrap();
        for word in ["anvil", "generate", "check", "--fields", "--model", "--force"] {
            assert!(script.contains(word), "missing {word}");
        }
    }
}
