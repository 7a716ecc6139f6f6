use clap::Args;
use eyre::{Context, Result};

use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct FieldsCommand {
    /// Fields in compact notation
    pub spec: String,
}

impl FieldsCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::fields(&self.spec).wrap_err("Invalid field list")?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
