//! schemamd cli interface

use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::Formatter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Change the work directory
    ///
    /// Can be specified multiple times. Note that all
    /// paths on the way to the final path must exist.
    ///
    /// This is equivalent to running { cd <directory>; schemamd ... }
    #[clap(short = 'C', long = "directory", global(true))]
    pub directory: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the schema of a resource, data source or provider as markdown
    ///
    /// Reads the output of `providers schema -json` from stdin unless --input-file is given
    Render(RenderCommand),

    /// Render the documentation of a provider function
    #[command(alias = "fn")]
    Function(FunctionCommand),

    /// List everything a provider schema document contains
    #[command(alias = "ls")]
    List(ListCommand),
}

#[derive(Parser, Debug)]
pub struct RenderCommand {
    #[clap(flatten)]
    pub input: InputArgs,

    /// What kind of schema NAME refers to
    #[arg(short = 'k', long = "kind", default_value_t)]
    pub kind: SchemaKind,

    /// Leave out a field, given as dot separated path (e.g. metadata.namespace)
    #[clap(long = "hide")]
    pub hide: Vec<String>,

    /// Leave out the usual bookkeeping fields (id, kind, metadata.namespace, metadata.revision)
    #[clap(long = "default-hidden")]
    pub default_hidden: bool,

    /// Repeat Required/Optional/Read-only inside each bullet
    #[clap(long = "status-qualifiers")]
    pub status_qualifiers: bool,

    /// Input is a single schema instead of a provider schema document
    #[clap(long = "bare", conflicts_with("provider"))]
    pub bare: bool,

    /// Name of the resource or data source, not needed for --kind provider or --bare
    pub name: Option<String>,
}

#[derive(Parser, Debug)]
pub struct FunctionCommand {
    #[clap(flatten)]
    pub input: InputArgs,

    /// Function name
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct ListCommand {
    #[clap(flatten)]
    pub input: InputArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser, Debug)]
pub struct InputArgs {
    /// Load schema document from a file
    #[clap(short = 'f', long = "input-file")]
    pub file: Option<PathBuf>,

    /// Provider address, required when the document describes more than one provider
    #[clap(short = 'p', long = "provider")]
    pub provider: Option<String>,
}

#[derive(Parser, Debug)]
pub struct OutputArgs {
    #[arg(short = 'F', long = "output-format", default_value_t)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Default, Debug, PartialEq, Eq)]
pub enum SchemaKind {
    #[default]
    Resource,
    DataSource,
    Provider,
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaKind::Resource => f.write_str("resource"),
            SchemaKind::DataSource => f.write_str("data-source"),
            SchemaKind::Provider => f.write_str("provider"),
        }
    }
}

#[derive(ValueEnum, Clone, Default, Debug)]
pub enum OutputFormat {
    Json,
    #[default]
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => f.write_str("json"),
            OutputFormat::Yaml => f.write_str("yaml"),
        }
    }
}
