use clap::Args;
use eyre::Result;

use super::SchemaArgs;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub schema: SchemaArgs,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let file = self.schema.load();
        ops::list(&file).render(&mut TerminalOutput::new());
        Ok(())
    }
}
