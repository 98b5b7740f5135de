//! reactivate: personalized recovery plans in the terminal.
//!
//! Runs the interactive TUI by default; `plan` prints a plan without it.

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use reactivate::{
    cli::{self, PlanFormat, PlanRequest},
    config::{self, AppConfig, ConfigOverrides, THEME_NAMES},
};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "reactivate")]
#[command(version)]
#[command(about = "Personalized recovery plans for athletes", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Start the interactive assessment
    reactivate

    # Start with a light theme and a faster timer for demos
    reactivate run --theme light --tick-ms 200

    # Print a plan for sore legs after a hard session
    reactivate plan --intensity 8 --pain legs --equipment \"foam roller\"

    # Machine-readable plan
    reactivate plan --intensity 4 --format json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "REACTIVATE_CONFIG")]
    config: Option<PathBuf>,

    /// Write logs to a file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Arguments for the `run` subcommand
#[derive(Args, Default)]
struct RunArgs {
    /// Color theme
    #[arg(long, value_parser = clap::builder::PossibleValuesParser::new(THEME_NAMES.iter().copied()))]
    theme: Option<String>,

    /// Starting position of the intensity slider
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=10))]
    intensity: Option<u8>,

    /// Milliseconds per timer second (speeds up demos)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    tick_ms: Option<u64>,

    /// Hide the key hint footer
    #[arg(long)]
    no_footer: bool,
}

/// Arguments for the `plan` subcommand
#[derive(Args)]
struct PlanArgs {
    /// Today's training intensity (1-10); defaults to the configured value
    #[arg(short, long, allow_negative_numbers = true)]
    intensity: Option<i64>,

    /// Sore body area (repeatable or comma-separated)
    #[arg(short, long = "pain", value_delimiter = ',')]
    pain: Vec<String>,

    /// Available equipment (repeatable or comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    equipment: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = PlanFormat::Text)]
    format: PlanFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive assessment (default)
    Run(RunArgs),

    /// Generate a recovery plan and print it
    Plan(PlanArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .reactivate.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default()));

    init_logging(
        cli.verbose,
        cli.quiet,
        cli.log_file.as_ref(),
        matches!(command, Commands::Run(_)),
    )?;

    if let Some(path) = cli.config.as_deref() {
        if !path.exists() {
            tracing::warn!("Config file {} not found; using defaults", path.display());
        }
    }

    match command {
        Commands::Run(args) => {
            let overrides = run_overrides(&args);
            let (config, loaded_from) =
                AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
            if let Some(path) = &loaded_from {
                tracing::info!("Using config from {}", path.display());
            }
            cli::run_interactive(&config, args.theme.as_deref())
        }

        Commands::Plan(args) => {
            let (config, _) = config::load_or_default(cli.config.as_deref());
            cli::check_config(&config)?;
            let request = PlanRequest {
                intensity: args.intensity,
                pain_areas: args.pain,
                equipment: args.equipment,
            };
            cli::run_plan(&config, &request, args.format, &mut io::stdout().lock())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "reactivate", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::search_paths() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".reactivate.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}

/// Command-line settings to apply over the file.
fn run_overrides(args: &RunArgs) -> ConfigOverrides {
    ConfigOverrides {
        default_intensity: args.intensity,
        theme: args.theme.clone(),
        tick_interval_ms: args.tick_ms,
        show_footer: args.no_footer.then_some(false),
    }
}

/// Initialize tracing.
///
/// The TUI owns the terminal, so without a log file it only reports warnings.
fn init_logging(
    verbose: bool,
    quiet: bool,
    log_file: Option<&PathBuf>,
    interactive: bool,
) -> Result<()> {
    let log_level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else if log_file.is_some() && interactive {
        "info"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
    Ok(())
}
