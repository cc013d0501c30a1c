use anyhow::{Context, Result, anyhow, bail};
use std::str::FromStr;
use sweep_core::{Coord, Coord2};

pub const USAGE: &str = "commands: r <row> <col> to reveal, f <row> <col> to toggle a flag, q to quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(|| anyhow!("empty command"))?;
        let command = match verb.to_ascii_lowercase().as_str() {
            "q" | "quit" => Self::Quit,
            "r" | "reveal" => Self::Reveal(parse_coords(&mut words)?),
            "f" | "flag" => Self::Flag(parse_coords(&mut words)?),
            other => bail!("unknown command {other:?}"),
        };
        if let Some(extra) = words.next() {
            bail!("unexpected {extra:?} after command");
        }
        Ok(command)
    }
}

fn parse_coords<'a>(words: &mut impl Iterator<Item = &'a str>) -> Result<Coord2> {
    let mut next = |name: &str| -> Result<Coord> {
        let word = words.next().ok_or_else(|| anyhow!("missing {name}"))?;
        word.parse().with_context(|| format!("invalid {name} {word:?}"))
    };
    let row = next("row")?;
    let col = next("column")?;
    Ok((row, col))
}
