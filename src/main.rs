use clap::{Parser, Subcommand};
use keytravel::error::{KeyTravelError, KtResult};
use keytravel::geometry::KeyboardDefinition;
use std::fs;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, short, long, default_value = "keyboard_layout.json")]
    keyboard: String,

    /// Text sample to optimise for
    #[arg(global = true, short, long)]
    text: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search for a layout with minimal finger travel
    Search(cmd::search::SearchArgs),
    /// Score a fixed character assignment
    Score(cmd::score::ScoreArgs),
    /// List the finger labels accepted in layout files
    Fingers,
}

fn load_inputs(keyboard: &str, text: Option<&str>) -> KtResult<(KeyboardDefinition, String)> {
    info!("📂 Loading Keyboard: {}", keyboard);
    let def = KeyboardDefinition::load_from_file(keyboard)?;

    let text_path = text.ok_or_else(|| {
        KeyTravelError::Config("--text <FILE> is required for this command".to_string())
    })?;
    info!("📄 Loading Text: {}", text_path);
    let text = fs::read_to_string(text_path)?;

    Ok((def, text))
}

fn run(cli: Cli) -> KtResult<()> {
    match cli.command {
        Commands::Fingers => {
            reports::print_finger_list();
            Ok(())
        }
        Commands::Search(args) => {
            let (def, text) = load_inputs(&cli.keyboard, cli.text.as_deref())?;
            cmd::search::run(args, &def, &text)
        }
        Commands::Score(args) => {
            let (def, text) = load_inputs(&cli.keyboard, cli.text.as_deref())?;
            cmd::score::run(args, &def, &text)
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = run(cli) {
        error!("❌ {}", e);
        process::exit(1);
    }
}
