use clap::Args;
use eyre::Result;

use super::SchemaArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = self.schema.load();
        let report = ops::check(&file);
        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
