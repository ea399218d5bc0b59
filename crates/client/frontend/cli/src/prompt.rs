//! Pre-game questions: player name and play mode.
use std::io::Write;

use anyhow::Result;
use runtime::PlayMode;

use crate::console::ConsoleInput;

pub(crate) const DEFAULT_PLAYER_NAME: &str = "Anonymous Hunter";

/// Name to greet, falling back to [`DEFAULT_PLAYER_NAME`] for blank input.
pub(crate) fn player_name(answer: Option<&str>) -> String {
    match answer.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_PLAYER_NAME.to_string(),
    }
}

/// `Some(true)` for yes, `Some(false)` for no, `None` when the answer is unclear.
pub(crate) fn parse_auto_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub(crate) async fn ask_player_name<W: Write>(
    out: &mut W,
    console: &mut ConsoleInput,
) -> Result<String> {
    write!(out, "Enter your name, brave bee hunter: ")?;
    out.flush()?;

    let answer = console.next_line().await;
    let name = player_name(answer.as_deref());

    write!(out, "Welcome, {name}!\n\n")?;
    out.flush()?;
    Ok(name)
}

/// Asks until the player answers yes or no. End of input picks manual mode.
pub(crate) async fn ask_play_mode<W: Write>(
    out: &mut W,
    console: &mut ConsoleInput,
) -> Result<PlayMode> {
    loop {
        write!(out, "Do you want the game to run automatically? (y/n): ")?;
        out.flush()?;

        let Some(answer) = console.next_line().await else {
            writeln!(out)?;
            return Ok(announce(out, PlayMode::Manual)?);
        };

        match parse_auto_answer(&answer) {
            Some(auto) => return Ok(announce(out, PlayMode::from_auto(auto))?),
            None => writeln!(out, "Please enter 'y' or 'n'.")?,
        }
    }
}

fn announce<W: Write>(out: &mut W, mode: PlayMode) -> std::io::Result<PlayMode> {
    match mode {
        PlayMode::Auto => {
            writeln!(out, "Auto mode activated. Sit back and watch the bees battle!")?
        }
        PlayMode::Manual => {
            writeln!(out, "Manual mode activated. You'll need to type 'hit' to attack.")?
        }
    }
    out.flush()?;
    Ok(mode)
}
