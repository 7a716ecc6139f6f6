mod check;
mod completions;
mod fields;
mod generate;
mod list;

use std::path::{Path, PathBuf};

use anvil_schema::SchemaFile;
use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fields::FieldsCommand;
use generate::GenerateCommand;
use list::ListCommand;

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for anvil_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "anvil")]
#[command(version)]
#[command(about = "Scaffold source files from a generation schema")]
pub(crate) struct Cli {
    /// Show debug logs (overridden by ANVIL_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Fields(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate files for an entity from a generator or aggregate
    Generate(GenerateCommand),

    /// List generators and aggregates defined by the schema
    List(ListCommand),

    /// Validate the schema without generating anything
    Check(CheckCommand),

    /// Normalize a compact field list
    Fields(FieldsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Where the schema and the project live.
#[derive(Args)]
pub struct SchemaArgs {
    /// Path to a schema file (.json or .toml); defaults to the built-in hexagonal schema
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project directory generated files are written to
    #[arg(long, default_value = ".")]
    pub project: PathBuf,
}

impl SchemaArgs {
    /// Load the schema, exiting with a diagnostic on failure.
    pub fn load(&self) -> SchemaFile {
        SchemaFile::open_or_builtin(self.config.as_deref(), &self.project).unwrap_or_exit()
    }

    pub fn project(&self) -> &Path {
        &self.project
    }
}
