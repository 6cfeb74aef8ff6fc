//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toolgate_application::FailurePolicy;

/// Output format for reconciled transcripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per message and tool invocation
    Summary,
    /// The transcript as JSON
    Json,
}

impl From<OutputFormat> for toolgate_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Executor failure policy override
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicyArg {
    /// Failing tools resolve to an error string
    Isolate,
    /// The first failing tool fails the whole run
    Abort,
}

impl From<FailurePolicyArg> for FailurePolicy {
    fn from(arg: FailurePolicyArg) -> Self {
        match arg {
            FailurePolicyArg::Isolate => FailurePolicy::Isolate,
            FailurePolicyArg::Abort => FailurePolicy::Abort,
        }
    }
}

/// CLI arguments for toolgate
#[derive(Parser, Debug)]
#[command(name = "toolgate")]
#[command(author, version, about = "Human-approval gate for LLM tool calls")]
#[command(long_about = r#"
Toolgate reconciles chat transcripts in which confirmation-required tool
calls were approved or denied by a human.

Approved calls are executed, denied calls resolve to an error message, and
each resolved call is reported as a `tool_result` event on the result stream.

Configuration files are loaded from (in priority order):
1. TOOLGATE_* environment variables
2. --config <path>     Explicit config file
3. ./toolgate.toml     Project-level config
4. ~/.config/toolgate/config.toml   Global config

Example:
  toolgate reconcile chat.json
  toolgate -o json reconcile chat.json --write reconciled.json
  toolgate repair chat.json
  toolgate tools
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Repair a transcript and resolve approved or denied tool calls
    Reconcile {
        /// JSON transcript (message array or `{ "messages": [...] }`)
        transcript: PathBuf,

        /// Session the request belongs to
        #[arg(long, default_value = "local")]
        session: String,

        /// Executor failure policy (overrides [reconcile] failure_policy)
        #[arg(long, value_enum)]
        failure_policy: Option<FailurePolicyArg>,

        /// JSONL file for result events (overrides [stream] events_file)
        #[arg(long, value_name = "PATH")]
        events_file: Option<PathBuf>,

        /// Save the reconciled transcript to this file
        #[arg(long, value_name = "PATH")]
        write: Option<PathBuf>,
    },

    /// Rewrite tool calls left stuck by a crashed execution
    Repair {
        /// JSON transcript (message array or `{ "messages": [...] }`)
        transcript: PathBuf,

        /// Save the repaired transcript to this file
        #[arg(long, value_name = "PATH")]
        write: Option<PathBuf>,
    },

    /// List registered tools and whether they require confirmation
    Tools,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reconcile() {
        let cli = Cli::try_parse_from([
            "toolgate",
            "-vv",
            "reconcile",
            "chat.json",
            "--session",
            "abc",
            "--failure-policy",
            "abort",
            "-o",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        match cli.command {
            Some(Command::Reconcile {
                transcript,
                session,
                failure_policy,
                ..
            }) => {
                assert_eq!(transcript, PathBuf::from("chat.json"));
                assert_eq!(session, "abc");
                assert_eq!(failure_policy, Some(FailurePolicyArg::Abort));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_reconcile_defaults() {
        let cli = Cli::try_parse_from(["toolgate", "reconcile", "chat.json"]).unwrap();
        assert!(cli.output.is_none());
        match cli.command {
            Some(Command::Reconcile {
                session,
                failure_policy,
                events_file,
                write,
                ..
            }) => {
                assert_eq!(session, "local");
                assert!(failure_policy.is_none());
                assert!(events_file.is_none());
                assert!(write.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::try_parse_from(["toolgate", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            toolgate_domain::OutputFormat::from(OutputFormat::Json),
            toolgate_domain::OutputFormat::Json
        );
        assert_eq!(FailurePolicy::from(FailurePolicyArg::Isolate), FailurePolicy::Isolate);
    }
}
