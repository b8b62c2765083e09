use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use wack_a_mole::game::{GameConfig, GameEngine};
use wack_a_mole::modes::PlayMode;
use wack_a_mole::score::{FileStore, HighScoreStore, MemoryStore, ScoreLedger};
use wack_a_mole::session::GameSession;
use wack_a_mole::telemetry;

#[derive(Parser)]
#[command(name = "wack-a-mole")]
#[command(version, about = "Whack the mole before the clock runs out")]
struct Cli {
    /// What to do
    #[arg(long, default_value = "play")]
    mode: Mode,

    /// Round length in seconds
    #[arg(long)]
    round_length: Option<u32>,

    /// How often the mole moves, in milliseconds (700-1000)
    #[arg(long)]
    mole_interval_ms: Option<u64>,

    /// TOML file with game settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the high score record
    #[arg(long, env = "WACK_A_MOLE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Append logs to this file
    #[arg(long, env = "WACK_A_MOLE_LOG")]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play in the terminal
    Play,
    /// Print the stored high score
    HighScore,
    /// Set the stored high score back to zero
    ResetHighScore,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_toml_file(path)?,
            None => GameConfig::default(),
        };

        if let Some(secs) = self.round_length {
            config.round_length_secs = secs;
        }
        if let Some(ms) = self.mole_interval_ms {
            config.mole_interval_ms = ms;
        }

        config
            .validate()
            .map_err(|msg| anyhow!("Invalid game config: {msg}"))?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.log_file.as_deref())?;

    match cli.mode {
        Mode::Play => {
            let config = cli.game_config()?;
            let ledger = if cli.no_persist {
                ScoreLedger::open(MemoryStore::new())
            } else {
                ScoreLedger::open(FileStore::in_dir(&cli.data_dir))
            };

            let session = GameSession::new(GameEngine::new(config), ledger);
            let mut play_mode = PlayMode::new(session);
            play_mode.run().await?;
        }
        Mode::HighScore => {
            let store = FileStore::in_dir(&cli.data_dir);
            println!("{}", store.load()?);
        }
        Mode::ResetHighScore => {
            let mut store = FileStore::in_dir(&cli.data_dir);
            store.reset()?;
            println!("High score reset ({:?})", store.path());
        }
    }

    Ok(())
}
