mod audit;
mod catalog;
mod cli;
mod config;
mod error;
mod llm;
mod report;
mod store;
mod types;

use crate::audit::format_amount;
use crate::audit::patterns::PatternCatalog;
use crate::catalog::{FileCatalog, ToolCatalog};
use crate::error::{AuditError, Result};
use crate::store::FileStore;
use crate::types::audit::AuditRequest;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const REDUNDANCIES: i32 = 1;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("stack_audit={level},reqwest=warn")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn read_request(input: &Path) -> Result<AuditRequest> {
    let raw = if input.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !input.exists() {
            return Err(AuditError::InputNotFound(input.display().to_string()));
        }
        std::fs::read_to_string(input)?
    };
    AuditRequest::from_json(&raw)
}

fn run(cli: cli::Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;

    match cli.command {
        cli::Commands::Audit(cmd) => {
            let request = read_request(&cmd.input)?;
            request.validate()?;

            let patterns = PatternCatalog::with_extra(&loaded.patterns);
            let generator = llm::build_generator(&loaded.generator, cmd.offline);
            let result = audit::run_audit(&request.input, &patterns, generator.as_ref())?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&result, output_format)?;
            println!("{rendered}");

            if let Some(email) = &request.email {
                if loaded.store.enabled && !cmd.no_store {
                    let store = FileStore::new(cwd.join(&loaded.store.dir));
                    if let Some(id) =
                        store::persist_best_effort(&store, email, &request.input, &result)
                    {
                        eprintln!("assessment saved: {id}");
                    }
                }
            }

            if result.redundancies.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::REDUNDANCIES)
            }
        }
        cli::Commands::Catalog(cmd) => {
            let path = cmd
                .path
                .or(loaded.catalog.path)
                .map(|path| cwd.join(path));
            let tools = FileCatalog::new(path).list_tools();

            if tools.is_empty() {
                println!("catalog: no tools available");
                return Ok(exit_code::SUCCESS);
            }

            println!("catalog: {} tools", tools.len());
            for (category, members) in catalog::group_by_category(&tools) {
                println!("{category}:");
                for tool in members {
                    match &tool.subcategory {
                        Some(subcategory) => println!(
                            "- {} [{}] (${}/month)",
                            tool.name,
                            subcategory,
                            format_amount(tool.avg_monthly_cost)
                        ),
                        None => println!(
                            "- {} (${}/month)",
                            tool.name,
                            format_amount(tool.avg_monthly_cost)
                        ),
                    }
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Patterns => {
            let patterns = PatternCatalog::with_extra(&loaded.patterns);
            println!("patterns:");
            for group in patterns.groups() {
                println!("- {}: {}", group.category, group.names.join(", "));
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            if e.is_validation() {
                std::process::exit(exit_code::INVALID_INPUT);
            }
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
