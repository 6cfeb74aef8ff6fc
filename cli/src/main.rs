//! CLI entrypoint for toolgate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use toolgate_application::{
    HandleChatUseCase, ReconcileParams, ResultStreamWriter, ToolCatalogPort, ToolRegistry,
};
use toolgate_domain::{Message, OutputFormat, RequestContext, SessionId, repair_transcript};
use toolgate_infrastructure::{
    ConfigLoader, FileConfig, JsonlStreamWriter, OfflineInference, builtin_registry,
    load_transcript, save_transcript,
};
use toolgate_presentation::{
    Cli, Command, ConsoleFormatter, FailurePolicyArg, ToolListing, TranscriptReport,
};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    info!("Starting toolgate");

    let Some(command) = cli.command else {
        bail!("A command is required. Run `toolgate --help` for usage.");
    };

    let registry = Arc::new(builtin_registry()?);

    match command {
        Command::Tools => {
            print_tools(&registry, format);
        }
        Command::Repair { transcript, write } => {
            let messages = load_transcript(&transcript)?;
            let outcome = repair_transcript(messages);
            info!(repaired = outcome.repaired.len(), "Repaired transcript");

            if let Some(path) = write {
                save_transcript(&path, &outcome.messages)?;
            }
            print_transcript(&outcome.messages, &outcome.repaired, &[], format);
        }
        Command::Reconcile {
            transcript,
            session,
            failure_policy,
            events_file,
            write,
        } => {
            let messages = load_transcript(&transcript)?;
            let params = reconcile_params(&config, failure_policy);
            let writer = stream_writer(&config, events_file)?;

            let ctx = match SessionId::parse(session) {
                Ok(session) => RequestContext::new(session),
                Err(e) => {
                    warn!(error = %e, "Invalid session id, treating request as anonymous");
                    RequestContext::anonymous()
                }
            };

            let use_case =
                HandleChatUseCase::new(Arc::clone(&registry), Arc::new(OfflineInference::new()))
                    .with_params(params);
            let output = use_case
                .execute(ctx, messages, writer.as_ref())
                .await
                .with_context(|| format!("Failed to reconcile {}", transcript.display()))?;

            if let Some(path) = write {
                save_transcript(&path, &output.messages)?;
            }
            print_transcript(&output.messages, &output.repaired, &output.resolved, format);
        }
    }

    Ok(())
}

/// Install the tracing subscriber; verbosity picks the default filter
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Could not create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

fn reconcile_params(
    config: &FileConfig,
    failure_policy: Option<FailurePolicyArg>,
) -> ReconcileParams {
    let params = config.reconcile.to_params();
    match failure_policy {
        Some(policy) => params.with_failure_policy(policy.into()),
        None => params,
    }
}

fn stream_writer(
    config: &FileConfig,
    events_file: Option<PathBuf>,
) -> Result<Box<dyn ResultStreamWriter>> {
    match events_file.or_else(|| config.stream.events_file.clone()) {
        Some(path) => {
            let writer = JsonlStreamWriter::new(&path)
                .ok_or_else(|| anyhow!("Could not open events file {}", path.display()))?;
            Ok(Box::new(writer))
        }
        None => Ok(Box::new(JsonlStreamWriter::stderr())),
    }
}

fn print_tools(registry: &ToolRegistry, format: OutputFormat) {
    let tools: Vec<ToolListing> = registry
        .tool_spec()
        .all()
        .map(|def| ToolListing {
            name: def.name.clone(),
            description: def.description.clone(),
            requires_confirmation: registry.requires_confirmation(&def.name),
            has_execution: registry.execution_table().has_executor(&def.name),
        })
        .collect();

    let stats = registry.stats();
    info!(
        total = stats.total_tools,
        confirmation_required = stats.confirmation_required,
        "Listing tools"
    );

    println!(
        "{}",
        ConsoleFormatter::format_tools(&tools, format == OutputFormat::Json)
    );
}

fn print_transcript(
    messages: &[Message],
    repaired: &[String],
    resolved: &[String],
    format: OutputFormat,
) {
    let output = match format {
        OutputFormat::Summary => ConsoleFormatter::format_summary(&TranscriptReport {
            messages,
            repaired,
            resolved,
        }),
        OutputFormat::Json => ConsoleFormatter::format_json(messages),
    };

    println!("{}", output);
}
