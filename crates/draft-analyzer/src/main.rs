use camino::Utf8PathBuf;
use clap::builder::{styling::AnsiColor, Styles};
use clap::ColorChoice;
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use commands::{
    analyze_draft, list_heroes, reset_config, set_data_path, show_config, AnalyzeDraftArgs,
    ListHeroesArgs,
};
use miette::{IntoDiagnostic, Result};

mod commands;
mod errors;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding heroes.json, normalized_heroes.json and howdoiplay_json/
    #[arg(short, long, global = true)]
    data_path: Option<Utf8PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search heroes by name, id or alias
    Heroes {
        /// Text to search for; lists every hero when omitted
        query: Option<String>,
    },
    /// Show tips, item suggestions and counters for a draft
    Analyze {
        /// Hero on your team (repeatable, up to 5)
        #[arg(short, long)]
        ally: Vec<String>,

        /// Hero on the enemy team (repeatable, up to 5)
        #[arg(short, long)]
        enemy: Vec<String>,

        /// Maximum lines shown per panel (default: 5, or 3 for counter tips)
        #[arg(short, long)]
        max_bullets: Option<usize>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage draft-analyzer configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the hero data directory
    SetDataPath {
        /// Path to the data directory
        path: String,
    },
    /// Reset configuration to defaults
    Reset,
}

fn parse_args() -> Result<Args> {
    // Configure colored/styled help output
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Blue.on_default());

    let matches = Args::command()
        .styles(styles)
        .color(ColorChoice::Auto)
        .get_matches();

    Args::from_arg_matches(&matches).into_diagnostic()
}

/// Logs go to stderr so `analyze --json` output stays clean. `RUST_LOG` overrides the config.
fn init_logging(level: Option<&str>) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.unwrap_or("warn").into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cfg = utils::config::load_config();
    init_logging(cfg.log_level.as_deref());

    let args = parse_args()?;
    let data_path = cfg.resolve_data_path(args.data_path);
    tracing::debug!("Using data directory {}", data_path);

    match args.command {
        Commands::Heroes { query } => list_heroes(ListHeroesArgs { data_path, query }),
        Commands::Analyze {
            ally,
            enemy,
            max_bullets,
            json,
        } => analyze_draft(AnalyzeDraftArgs {
            data_path,
            ally,
            enemy,
            max_bullets: max_bullets.or(cfg.max_bullets),
            json,
        }),
        Commands::Config { action } => match action {
            ConfigAction::Show => show_config(),
            ConfigAction::SetDataPath { path } => set_data_path(path),
            ConfigAction::Reset => reset_config(),
        },
    }
}
