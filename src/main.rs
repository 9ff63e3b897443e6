use std::path::PathBuf;

use clap::Parser;

use lu::app::App;
use lu::config::Config;
use lu::content::ContentSource;
use lu::error::{AppError, AppResult};
use lu::logging::init_file_logging;
use lu::nav::{
    FileStore, MemoryStore, PositionStore, Screen, decode_position, encode_position,
    restore_screen,
};

/// A memory journal for the terminal: an intro, one chapter per era, and a
/// question at the end.
#[derive(Debug, Parser)]
#[command(name = "lu", version, about)]
struct Cli {
    /// Journal content file (TOML).
    journal: PathBuf,

    /// Open at a shared position such as "step=chapter&id=2".
    #[arg(long, value_name = "POSITION")]
    at: Option<String>,

    /// Keep the position in memory only.
    #[arg(long)]
    no_persist: bool,

    /// Where the position is remembered between launches.
    #[arg(long, value_name = "PATH")]
    state_file: Option<PathBuf>,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the position the journal would open at, then exit.
    #[arg(long)]
    print_position: bool,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let config = load_config(cli.config.as_ref())?;
    if let Some(log_path) = config.log_path()
        && let Err(err) = init_file_logging(&log_path)
    {
        // The journal still opens without a log file.
        eprintln!("{}", logging_unavailable(&err));
    }

    let content = ContentSource::open(&cli.journal)?;
    let store = open_store(&cli, &config);

    if cli.print_position {
        println!("{}", encode_position(resolve_start(&cli, store.as_ref())));
        return Ok(());
    }

    let start_at = cli.at.as_deref().map(decode_position);

    let mut app = App::new(content, config, store, start_at)?;
    app.run().await?;
    println!("{}", app.position());
    Ok(())
}

fn load_config(explicit: Option<&PathBuf>) -> AppResult<Config> {
    match explicit {
        Some(path) if !path.is_file() => Err(AppError::invalid_argument(format!(
            "config file not found: {}",
            path.display()
        ))),
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn open_store(cli: &Cli, config: &Config) -> Box<dyn PositionStore> {
    if cli.no_persist || !config.session.persist {
        return Box::new(MemoryStore::new());
    }
    match cli.state_file.clone().or_else(|| config.state_path()) {
        Some(path) => Box::new(FileStore::new(path)),
        None => Box::new(MemoryStore::new()),
    }
}

fn logging_unavailable(err: &AppError) -> String {
    format!("lu: logging disabled: {err}")
}

fn resolve_start(cli: &Cli, store: &dyn PositionStore) -> Screen {
    cli.at
        .as_deref()
        .map(decode_position)
        .unwrap_or_else(|| restore_screen(store))
}
