//! Plain-text screens drawn with crossterm.
use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use client_frontend_core::{GameOverSummary, HiveSummary, MessageLevel, MessageLog, StatusFrame};
use game_core::GameOutcome;

const RULE: &str = "===================================================";

pub(crate) struct Screen<W: Write> {
    out: W,
    /// Skip cursor and clear sequences, e.g. when the output is not a terminal.
    plain: bool,
}

impl<W: Write> Screen<W> {
    pub(crate) fn new(out: W) -> Self {
        Self { out, plain: false }
    }

    pub(crate) fn plain(out: W) -> Self {
        Self { out, plain: true }
    }

    pub(crate) fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub(crate) fn into_inner(self) -> W {
        self.out
    }

    pub(crate) fn clear(&mut self) -> io::Result<()> {
        if !self.plain {
            queue!(self.out, MoveTo(0, 0), Clear(ClearType::All))?;
        }
        Ok(())
    }

    pub(crate) fn banner(&mut self) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "       Welcome to Bees in the Trap!")?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Status header followed by the most recent log lines.
    pub(crate) fn interface(
        &mut self,
        name: &str,
        frame: &StatusFrame,
        log: &MessageLog,
    ) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Player: {name}")?;
        writeln!(
            self.out,
            "Health: {}/{}",
            frame.player_health, frame.max_health
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Bees remaining:")?;
        self.hive(&frame.hive)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "GAME LOG:")?;
        for entry in log.iter() {
            match entry.level {
                MessageLevel::Info => writeln!(self.out, "{}", entry.text)?,
                MessageLevel::Warning => writeln!(self.out, "! {}", entry.text)?,
            }
        }
        self.out.flush()
    }

    pub(crate) fn game_over(&mut self, name: &str, summary: &GameOverSummary) -> io::Result<()> {
        self.clear()?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "                     GAME OVER")?;
        writeln!(self.out, "{RULE}")?;
        match summary.outcome {
            Some(GameOutcome::PlayerWon) => {
                writeln!(self.out, "Congratulations {name}! You defeated the hive!")?
            }
            Some(GameOutcome::PlayerLost) => {
                writeln!(self.out, "Sorry {name}, you were defeated by the hive!")?
            }
            None => {}
        }
        writeln!(self.out)?;
        writeln!(self.out, "Final Stats for {name}:")?;
        writeln!(
            self.out,
            "Health remaining: {}/{}",
            summary.player_health, summary.max_health
        )?;
        writeln!(self.out, "Bee Stings: {}", summary.bee_stings)?;
        writeln!(self.out, "Player Hits: {}", summary.player_hits)?;
        if !summary.hive.is_empty() {
            writeln!(self.out, "Bees remaining:")?;
            self.hive(&summary.hive)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "{RULE}")?;
        writeln!(self.out, "Thanks for playing!")?;
        write!(self.out, "Press Enter to exit...")?;
        self.out.flush()
    }

    pub(crate) fn interrupted(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Game interrupted! Shutting down...")?;
        self.out.flush()
    }

    fn hive(&mut self, hive: &HiveSummary) -> io::Result<()> {
        if hive.is_empty() {
            return writeln!(self.out, "  (none)");
        }
        for group in hive.groups() {
            writeln!(self.out, "  {group}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client_frontend_core::BeeGroup;
    use game_core::{BeeKind, GameEvent, Hive};

    fn rendered(draw: impl FnOnce(&mut Screen<Vec<u8>>) -> io::Result<()>) -> String {
        let mut screen = Screen::plain(Vec::new());
        draw(&mut screen).unwrap();
        String::from_utf8(screen.into_inner()).unwrap()
    }

    fn frame() -> StatusFrame {
        StatusFrame {
            player_health: 88,
            max_health: 100,
            hive: HiveSummary::from_hive(&Hive::new()),
        }
    }

    #[test]
    fn interface_lists_status_then_log() {
        let mut log = MessageLog::new(5);
        log.push_event(&GameEvent::Miss);
        log.push_event(&GameEvent::InvalidCommand {
            input: "run".into(),
        });

        let text = rendered(|screen| screen.interface("Ada", &frame(), &log));

        let health = text.find("Health: 88/100").unwrap();
        let header = text.find("GAME LOG:").unwrap();
        let warning = text.find("! Invalid command! 'run'").unwrap();
        let rules: Vec<_> = text.match_indices(RULE).map(|(at, _)| at).collect();
        assert!(text.starts_with(&format!("{RULE}\nPlayer: Ada")));
        assert_eq!(rules.len(), 2);
        assert!(health < rules[1] && rules[1] < header && header < warning);
        assert!(text.contains("  (none)"));
    }

    #[test]
    fn game_over_reports_win_and_stats() {
        let summary = GameOverSummary {
            outcome: Some(GameOutcome::PlayerWon),
            player_health: 42,
            max_health: 100,
            bee_stings: 6,
            player_hits: 19,
            hive: HiveSummary::default(),
        };

        let text = rendered(|screen| screen.game_over("Ada", &summary));

        assert!(text.contains("Congratulations Ada! You defeated the hive!"));
        assert!(text.contains("Health remaining: 42/100"));
        assert!(text.contains("Bee Stings: 6"));
        assert!(text.contains("Player Hits: 19"));
        assert!(!text.contains("Bees remaining:"));
        assert!(text.ends_with("Press Enter to exit..."));
    }

    #[test]
    fn defeat_lists_surviving_bees() {
        let hive = HiveSummary::from_hive(&Hive::from_bees([game_core::Bee::new(
            BeeKind::Worker,
            30,
            0.0,
        )]));
        let summary = GameOverSummary {
            outcome: Some(GameOutcome::PlayerLost),
            player_health: -3,
            max_health: 100,
            bee_stings: 20,
            player_hits: 4,
            hive,
        };

        let text = rendered(|screen| screen.game_over("Ada", &summary));

        let expected = BeeGroup {
            kind: BeeKind::Worker,
            healths: vec![30],
        };
        assert!(text.contains("Sorry Ada, you were defeated by the hive!"));
        assert!(text.contains(&format!("  {expected}")));
    }

    #[test]
    fn game_over_replaces_the_last_frame() {
        let summary = GameOverSummary {
            outcome: Some(GameOutcome::PlayerWon),
            player_health: 1,
            max_health: 100,
            bee_stings: 0,
            player_hits: 1,
            hive: HiveSummary::default(),
        };
        let mut screen = Screen::new(Vec::new());
        screen.game_over("Ada", &summary).unwrap();

        let text = String::from_utf8(screen.into_inner()).unwrap();
        let cleared = text.find("\x1b[").unwrap();
        assert!(cleared < text.find("GAME OVER").unwrap());
        assert_eq!(text.matches(RULE).count(), 3);
    }

    #[test]
    fn terminal_screens_start_with_clear_sequence() {
        let mut screen = Screen::new(Vec::new());
        screen.banner().unwrap();
        let bytes = screen.into_inner();
        assert!(bytes.starts_with(b"\x1b["));
        assert!(String::from_utf8(bytes).unwrap().contains("Welcome to Bees in the Trap!"));
    }
}
