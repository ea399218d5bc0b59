//! View-model snapshots derived from [`runtime::SessionSnapshot`].
use std::fmt;

use game_core::{BeeKind, Combatant, GameOutcome, Hive};
use runtime::SessionSnapshot;
use strum::IntoEnumIterator;

/// Live bees of one kind, in hive order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeeGroup {
    pub kind: BeeKind,
    pub healths: Vec<i32>,
}

impl BeeGroup {
    pub fn count(&self) -> usize {
        self.healths.len()
    }
}

impl fmt::Display for BeeGroup {
    /// `Kind: count [h1, h2, ...]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [", self.kind, self.count())?;
        for (i, health) in self.healths.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{health}")?;
        }
        write!(f, "]")
    }
}

/// Remaining bees grouped by kind in the fixed order Queen, Worker, Drone.
///
/// Kinds with no live bees are left out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HiveSummary {
    groups: Vec<BeeGroup>,
}

impl HiveSummary {
    pub fn from_hive(hive: &Hive) -> Self {
        let groups = BeeKind::iter()
            .map(|kind| BeeGroup {
                kind,
                healths: hive
                    .iter()
                    .filter(|bee| bee.kind() == kind)
                    .map(|bee| bee.health())
                    .collect(),
            })
            .filter(|group| group.count() > 0)
            .collect();
        Self { groups }
    }

    pub fn groups(&self) -> &[BeeGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(BeeGroup::count).sum()
    }
}

/// Header shown above the game log.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusFrame {
    pub player_health: i32,
    pub max_health: i32,
    pub hive: HiveSummary,
}

impl StatusFrame {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        Self {
            player_health: snapshot.player_health(),
            max_health: snapshot.player().max_health(),
            hive: HiveSummary::from_hive(snapshot.hive()),
        }
    }
}

/// End-of-game statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct GameOverSummary {
    pub outcome: Option<GameOutcome>,
    pub player_health: i32,
    pub max_health: i32,
    pub bee_stings: u32,
    pub player_hits: u32,
    pub hive: HiveSummary,
}

impl GameOverSummary {
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        Self {
            outcome: snapshot.outcome(),
            player_health: snapshot.player_health(),
            max_health: snapshot.player().max_health(),
            bee_stings: snapshot.bee_stings(),
            player_hits: snapshot.player_hits(),
            hive: HiveSummary::from_hive(snapshot.hive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Bee, GameState, Player};

    fn bee(kind: BeeKind, health: i32) -> Bee {
        Bee::new(kind, health, 0.0)
    }

    #[test]
    fn groups_follow_queen_worker_drone_order() {
        let hive = Hive::from_bees([
            bee(BeeKind::Drone, 60),
            bee(BeeKind::Worker, 75),
            bee(BeeKind::Drone, 30),
            bee(BeeKind::Queen, 100),
            bee(BeeKind::Worker, 50),
        ]);

        let summary = HiveSummary::from_hive(&hive);
        let lines: Vec<_> = summary.groups().iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            vec!["Queen: 1 [100]", "Worker: 2 [75, 50]", "Drone: 2 [60, 30]"]
        );
        assert_eq!(summary.total(), 5);
    }

    #[test]
    fn missing_kinds_are_skipped() {
        let hive = Hive::from_bees([bee(BeeKind::Drone, 5)]);
        let summary = HiveSummary::from_hive(&hive);
        assert_eq!(summary.groups().len(), 1);
        assert_eq!(summary.groups()[0].kind, BeeKind::Drone);
        assert!(HiveSummary::from_hive(&Hive::new()).is_empty());
    }

    #[test]
    fn game_over_summary_reads_snapshot() {
        let mut state = GameState::new(Player::new(40, 0.0), Hive::from_bees([bee(BeeKind::Worker, 9)]));
        state.player.sting(45);
        state.bee_stings = 3;
        state.player_hits = 7;

        let summary = GameOverSummary::from_snapshot(&SessionSnapshot::new(1, state));

        assert_eq!(summary.outcome, Some(GameOutcome::PlayerLost));
        assert_eq!(summary.player_health, -5);
        assert_eq!(summary.max_health, 40);
        assert_eq!(summary.bee_stings, 3);
        assert_eq!(summary.player_hits, 7);
        assert_eq!(summary.hive.total(), 1);
    }
}
