use crate::config::GameConfig;

use super::{Bee, BeeKind, Combatant};

/// Unordered collection of live bees.
///
/// Only live bees are held: a bee that dies from a strike is removed in the
/// same call, and a dead Queen takes the whole hive with her.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Hive {
    bees: Vec<Bee>,
}

/// What happened to the bee on the receiving end of a strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrikeFate {
    Survived,
    /// The bee died and was removed.
    Killed,
    /// The Queen died and the hive was cleared.
    ColonyCollapsed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StrikeOutcome {
    pub kind: BeeKind,
    pub damage: i32,
    pub fate: StrikeFate,
}

impl Hive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a hive from pre-made bees, dropping any that are already dead.
    pub fn from_bees(bees: impl IntoIterator<Item = Bee>) -> Self {
        Self {
            bees: bees.into_iter().filter(|bee| !bee.is_dead()).collect(),
        }
    }

    /// Spawns workers, then drones, then queens, as configured.
    pub fn spawn(config: &GameConfig) -> Self {
        let bees = [BeeKind::Worker, BeeKind::Drone, BeeKind::Queen]
            .into_iter()
            .flat_map(|kind| {
                let stats = config.bees(kind);
                (0..stats.amount).map(move |_| Bee::spawn(kind, stats, config.bee_miss_chance))
            });
        Self::from_bees(bees)
    }

    pub fn len(&self) -> usize {
        self.bees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bees.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Bee> {
        self.bees.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bee> {
        self.bees.iter()
    }

    pub fn count(&self, kind: BeeKind) -> usize {
        self.bees.iter().filter(|bee| bee.kind() == kind).count()
    }

    /// Clears every member regardless of health.
    pub fn collapse(&mut self) {
        self.bees.clear();
    }

    /// Strikes the bee at `index` and enforces the live-only invariant.
    ///
    /// Returns `None` if `index` is out of range.
    pub fn strike(&mut self, index: usize) -> Option<StrikeOutcome> {
        let bee = self.bees.get_mut(index)?;
        let damage = bee.hit();
        let kind = bee.kind();

        let fate = if !bee.is_dead() {
            StrikeFate::Survived
        } else if kind.is_leader() {
            self.collapse();
            StrikeFate::ColonyCollapsed
        } else {
            self.bees.swap_remove(index);
            StrikeFate::Killed
        };

        Some(StrikeOutcome { kind, damage, fate })
    }
}

impl<'a> IntoIterator for &'a Hive {
    type Item = &'a Bee;
    type IntoIter = std::slice::Iter<'a, Bee>;

    fn into_iter(self) -> Self::IntoIter {
        self.bees.iter()
    }
}
