use std::path::PathBuf;

use anvil_codegen::{Delegate, GenerateOptions, GenerateRequest};
use clap::Args;
use eyre::Result;

use super::SchemaArgs;
use crate::{
    providers::{ModelFile, NoDriverDatabase},
    reports::TerminalOutput,
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Generator key or aggregate name (e.g. model, scaffold)
    pub what: String,

    /// Entity to generate for (e.g. Order)
    pub entity: String,

    /// Fields in compact notation, e.g. "name:string, paid_at:timestamp:nullable"
    #[arg(long)]
    pub fields: Option<String>,

    /// Read fields from the database configured in the schema
    #[arg(long)]
    pub database: bool,

    /// Read fields from a model description
    #[arg(long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,

    #[command(flatten)]
    pub schema: SchemaArgs,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load();
        let request = GenerateRequest::new(&self.what, &self.entity).with_options(GenerateOptions {
            fields: self.fields.clone(),
            database: self.database,
            model: self.model.clone(),
            force: self.force,
        });

        let mut database = NoDriverDatabase::default();
        let mut model = ModelFile::default();
        let mut output = TerminalOutput::new();
        let success = Delegate::new(&schema, self.schema.project(), &mut database, &mut model)
            .run(&request, &mut output)?;

        if !success {
            std::process::exit(1);
        }
        Ok(())
    }
}
