use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use sweep_core::{Board, SeededRng, Session, Stopwatch};

use command::{Command, USAGE};
use settings::{Args, Settings};

mod command;
mod render;
mod settings;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let settings = Settings::resolve(&args)?;
    log::info!(
        "{}x{} board with {} mines, seed {}",
        settings.config.size.0,
        settings.config.size.1,
        settings.config.mines,
        settings.seed
    );

    let board = Board::with_config(settings.config, SeededRng::new(settings.seed))
        .context("Could not set up the board")?;
    play(Session::new(board, Stopwatch::new()))
}

fn play(mut session: Session<Stopwatch>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    draw(&mut stdout, &session)?;
    writeln!(stdout, "{USAGE}")?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Reveal(coords)) => {
                let outcome = session.reveal(coords);
                log::debug!("reveal {:?}: {:?}", coords, outcome);
            }
            Ok(Command::Flag(coords)) => {
                let outcome = session.toggle_flag(coords);
                log::debug!("flag {:?}: {:?}", coords, outcome);
            }
            Err(err) => {
                writeln!(stdout, "{err:#}\n{USAGE}")?;
                continue;
            }
        }

        draw(&mut stdout, &session)?;
        if session.board().is_finished() {
            break;
        }
    }
    Ok(())
}

fn draw(out: &mut impl Write, session: &Session<Stopwatch>) -> Result<()> {
    let board = session.board();
    write!(out, "{}", render::render_board(board))?;
    writeln!(
        out,
        "{}",
        render::status_line(board, session.timer().elapsed_secs())
    )?;
    out.flush()?;
    Ok(())
}
