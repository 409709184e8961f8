use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};
use log::info;

use term_2048::config::GameConfig;
use term_2048::session::Session;
use term_2048::terminal::TerminalFrontend;

#[derive(Debug, Parser)]
#[command(name = "term-2048", version, about = "Play 2048 in the terminal")]
struct Args {
    /// JSON config file; flags below override its values
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Number of rows
    #[arg(long)]
    height: Option<usize>,

    /// Number of columns
    #[arg(long)]
    width: Option<usize>,

    /// Tile value that wins the game
    #[arg(long)]
    win: Option<u32>,

    /// Seed for tile spawns (reproducible games)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here instead of stderr (RUST_LOG sets the level)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = load_config(&args)?;
    info!("starting with {:?}", config);

    let mut session = Session::from_config(&config);
    let mut frontend = TerminalFrontend::open().context("could not take over the terminal")?;
    session.run(&mut frontend)?;
    Ok(())
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let mut builder = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create log file {}", path.display()))?;
            let mut b = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
            b.target(Target::Pipe(Box::new(file)));
            b
        }
        // the board owns the screen, keep stderr quiet unless asked
        None => env_logger::Builder::from_env(Env::default().default_filter_or("warn")),
    };
    builder.init();
    Ok(())
}

fn load_config(args: &Args) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_path(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(h) = args.height { config.height = h; }
    if let Some(w) = args.width { config.width = w; }
    if let Some(win) = args.win { config.win_value = win; }
    if args.seed.is_some() { config.seed = args.seed; }
    config.validate()?;
    Ok(config)
}
