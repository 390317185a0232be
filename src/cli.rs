use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stack-audit",
    version,
    about = "Software tool portfolio cost and redundancy audit CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file used instead of ./stack-audit.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a tool portfolio read from a JSON audit request
    Audit(AuditCommand),
    /// List the tools offered by the configured catalog
    Catalog(CatalogCommand),
    /// Show the redundancy patterns used for detection
    Patterns,
}

#[derive(Args)]
pub struct AuditCommand {
    /// Audit request JSON file, or `-` for stdin
    pub input: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Skip the text-generation service and use templated recommendations
    #[arg(long)]
    pub offline: bool,
    /// Do not persist the lead and assessment
    #[arg(long)]
    pub no_store: bool,
}

#[derive(Args)]
pub struct CatalogCommand {
    /// Catalog JSON file; overrides catalog.path from config
    #[arg(long)]
    pub path: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
