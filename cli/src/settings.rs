use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use sweep_core::{CellCount, Coord, Difficulty, GameConfig};
use web_time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(version, about = "Minesweeper in the terminal", long_about = None)]
pub struct Args {
    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,

    /// Mine preset on the standard 20x30 board: easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Override the number of rows
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Override the number of columns
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Override the number of mines
    #[arg(short, long)]
    pub mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// TOML file with defaults, command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Same knobs as the command line, read from a TOML file.
#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileSettings {
    pub difficulty: Option<Difficulty>,
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
    pub seed: Option<u64>,
}

impl FileSettings {
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid settings file")
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub config: GameConfig,
    pub seed: u64,
}

impl Settings {
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                FileSettings::parse(&text)?
            }
            None => FileSettings::default(),
        };
        Self::layered(args, &file, clock_seed())
    }

    /// Flags over file over the difficulty preset, `fallback_seed` when neither names a seed.
    pub fn layered(args: &Args, file: &FileSettings, fallback_seed: u64) -> Result<Self> {
        let preset = args
            .difficulty
            .or(file.difficulty)
            .unwrap_or_default()
            .config();
        let rows = args.rows.or(file.rows).unwrap_or(preset.size.0);
        let cols = args.cols.or(file.cols).unwrap_or(preset.size.1);
        let mines = args.mines.or(file.mines).unwrap_or(preset.mines);
        let config = GameConfig::new_checked((rows, cols), mines)
            .context("Invalid board configuration")?;
        let seed = args.seed.or(file.seed).unwrap_or(fallback_seed);
        Ok(Self { config, seed })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
