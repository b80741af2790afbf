//! PAI CLI
//!
//! Drives the memory files and thinking scaffolds from a shell, or acts as a
//! JSON tool runner for a host agent.

use clap::{Parser, Subcommand};
use pai::commands::{self, CommandOutput};
use pai::think::StatusIndicator;
use pai::tools::{self, MemoryAction, MemoryArgs};
use pai::{MemoryFile, ModeSelection, PaiConfig, ThinkRequest, Thinker};
use std::io::{self, Read};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// PAI - persistent memory and structured thinking
#[derive(Parser, Debug)]
#[command(name = "pai")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output: debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read or write a memory file
    Memory {
        #[arg(value_enum)]
        action: ActionArg,

        /// preferences, learnings or context
        file: MemoryFile,

        /// Content for append and replace
        #[arg(trailing_var_arg = true)]
        content: Vec<String>,
    },

    /// Build a thinking scaffold for a problem
    Think {
        /// council, red_team, first_principles, be_creative or auto
        #[arg(short, long, default_value = "auto")]
        mode: ModeSelection,

        /// Additional context
        #[arg(short, long)]
        context: Option<String>,

        /// What needs thinking about
        #[arg(trailing_var_arg = true, required = true)]
        problem: Vec<String>,
    },

    /// Run a slash command, e.g. `/council should we split the crate`
    #[command(name = "command")]
    Slash {
        #[arg(trailing_var_arg = true, required = true)]
        line: Vec<String>,
    },

    /// Run a tool with JSON arguments (read from stdin when omitted)
    Tool {
        #[arg(value_enum)]
        name: ToolArg,

        /// JSON arguments
        args: Option<String>,
    },

    /// Print tool registration metadata as JSON
    Tools,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ActionArg {
    Read,
    Append,
    Replace,
}

impl From<ActionArg> for MemoryAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Read => MemoryAction::Read,
            ActionArg::Append => MemoryAction::Append,
            ActionArg::Replace => MemoryAction::Replace,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ToolArg {
    Memory,
    Think,
}

/// Reports status changes through the log
struct LogStatus;

impl StatusIndicator for LogStatus {
    fn set_status(&self, key: &str, text: Option<&str>) {
        match text {
            Some(text) => info!("[{}] {}", key, text),
            None => info!("[{}] done", key),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = PaiConfig::from_home()?.with_verbose(cli.verbose);

    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Memory directory: {:?}", config.memory_dir);
    let thinker = Thinker::new(config.memory_store());

    match cli.command {
        Commands::Memory {
            action,
            file,
            content,
        } => {
            let args = MemoryArgs {
                action: action.into(),
                file,
                content: (!content.is_empty()).then(|| content.join(" ")),
            };
            let output = tools::run_memory(thinker.store(), &args).await;
            finish(&output.text, output.is_error)
        }
        Commands::Think {
            mode,
            context,
            problem,
        } => {
            let request = ThinkRequest {
                problem: problem.join(" "),
                mode: Some(mode),
                context,
            };
            let response = thinker.think(&request, &LogStatus).await?;
            info!("Resolved mode: {}", response.resolved_mode);
            println!("{}", response.text);
            Ok(())
        }
        Commands::Slash { line } => {
            let output = commands::run_line(&thinker, &line.join(" "), &LogStatus).await?;
            finish(output.text(), matches!(output, CommandOutput::Usage(_)))
        }
        Commands::Tool { name, args } => {
            let raw = match args {
                Some(raw) => raw,
                None => {
                    let mut raw = String::new();
                    io::stdin().read_to_string(&mut raw)?;
                    raw
                }
            };
            let args: serde_json::Value = serde_json::from_str(&raw)?;
            let output = match name {
                ToolArg::Memory => tools::memory_tool(thinker.store(), args).await,
                ToolArg::Think => tools::think_tool(&thinker, args, &LogStatus).await?,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Commands::Tools => {
            let specs = [tools::memory_tool_spec(), tools::think_tool_spec()];
            println!("{}", serde_json::to_string_pretty(&specs)?);
            Ok(())
        }
    }
}

/// Print user-facing text; error text goes to stderr with a failing exit code
fn finish(text: &str, is_error: bool) -> anyhow::Result<()> {
    if is_error {
        anyhow::bail!("{}", text);
    }
    println!("{}", text);
    Ok(())
}
