//! migrun - Entry Point
//!
//! Diagnostics for capability discovery: shows which version table layout
//! the configured type filter resolves to and which types are registered.

use clap::{Parser, Subcommand};
use migrun_application::list_exported_types;
use migrun_infrastructure::config::ConfigLoader;
use migrun_infrastructure::di::init_app;
use migrun_infrastructure::logging::init_logging;

/// Command line interface for migrun
#[derive(Parser, Debug)]
#[command(name = "migrun")]
#[command(about = "migrun - Migration runner capability discovery")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Command {
    /// Resolve and print the version table layout (default)
    VersionTable,
    /// List the exported types registered at link time
    Types,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    match cli.command.unwrap_or(Command::VersionTable) {
        Command::VersionTable => {
            let context = init_app(config);
            let meta = context.version_table()?;
            println!("schema:            {}", meta.schema_name());
            println!("table:             {}", meta.table_name());
            println!("version column:    {}", meta.column_name());
            println!("unique index:      {}", meta.unique_index_name());
            println!("applied on column: {}", meta.applied_on_column_name());
            println!("description:       {}", meta.description_column_name());
            println!("owns schema:       {}", meta.owns_schema());
            println!("primary key:       {}", meta.create_with_primary_key());
        }
        Command::Types => {
            for (module, type_name) in list_exported_types() {
                println!("{module}\t{type_name}");
            }
        }
    }

    Ok(())
}
