use rand::Rng;

use crate::combat;
use crate::event::GameEvent;
use crate::state::{Combatant, StrikeFate, TurnOwner};

use super::{GameEngine, TurnError, TurnReport};

/// Turn resolution methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Resolves a player attack without touching the turn owner.
    ///
    /// Draw order: the hit/miss roll first, then (on a hit) the target index.
    pub fn take_player_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnReport, TurnError> {
        let empty = TurnError::EmptyHive {
            turn: TurnOwner::Player,
        };
        if self.state.hive.is_empty() {
            return Err(empty);
        }

        let mut report = TurnReport::new(TurnOwner::Player);

        if !self.state.player.roll_attack(rng) {
            report.push(GameEvent::Miss);
            return Ok(report);
        }

        self.state.player_hits += 1;
        let index = combat::pick_target(self.state.hive.len(), rng).ok_or(empty.clone())?;
        let strike = self.state.hive.strike(index).ok_or(empty)?;

        report.push(GameEvent::DirectHit {
            damage: strike.damage,
            kind: strike.kind,
        });
        match strike.fate {
            StrikeFate::Survived => {}
            StrikeFate::Killed => report.push(GameEvent::Killed { kind: strike.kind }),
            StrikeFate::ColonyCollapsed => report.push(GameEvent::ColonyCollapsed),
        }

        Ok(report)
    }

    /// Resolves a sting attempt by one random bee without touching the turn owner.
    ///
    /// Draw order: the attacker index first, then the attacker's hit/miss roll.
    pub fn take_hive_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<TurnReport, TurnError> {
        let empty = TurnError::EmptyHive {
            turn: TurnOwner::Hive,
        };
        let index = combat::pick_target(self.state.hive.len(), rng).ok_or(empty.clone())?;
        let bee = self.state.hive.get(index).ok_or(empty)?;
        let kind = bee.kind();

        let mut report = TurnReport::new(TurnOwner::Hive);
        match bee.attack(rng) {
            Some(damage) => {
                self.state.player.sting(damage);
                self.state.bee_stings += 1;
                report.push(GameEvent::Stung { damage, kind });
            }
            None => report.push(GameEvent::Buzzed { kind }),
        }

        Ok(report)
    }
}
