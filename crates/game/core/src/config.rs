use crate::state::BeeKind;

/// Session configuration snapshot used to spawn the player and the hive.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub player: PlayerStats,
    /// Miss chance shared by every bee in the hive.
    pub bee_miss_chance: f64,
    pub queen: BeeStats,
    pub worker: BeeStats,
    pub drone: BeeStats,
    /// Seed for the session random stream. `None` lets the runtime pick one.
    pub seed: Option<u64>,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;
    pub const DEFAULT_PLAYER_MISS_CHANCE: f64 = 0.1;
    pub const DEFAULT_BEE_MISS_CHANCE: f64 = 0.2;

    pub const DEFAULT_QUEEN: BeeStats = BeeStats::new(1, 100, 10, 10);
    pub const DEFAULT_WORKER: BeeStats = BeeStats::new(5, 75, 5, 25);
    pub const DEFAULT_DRONE: BeeStats = BeeStats::new(25, 60, 1, 30);

    pub fn new() -> Self {
        Self {
            player: PlayerStats {
                health: Self::DEFAULT_PLAYER_HEALTH,
                miss_chance: Self::DEFAULT_PLAYER_MISS_CHANCE,
            },
            bee_miss_chance: Self::DEFAULT_BEE_MISS_CHANCE,
            queen: Self::DEFAULT_QUEEN,
            worker: Self::DEFAULT_WORKER,
            drone: Self::DEFAULT_DRONE,
            seed: None,
        }
    }

    /// A config with a player and no bees at all; tests add the kinds they need.
    pub fn empty_hive(player: PlayerStats) -> Self {
        Self {
            player,
            bee_miss_chance: 0.0,
            queen: BeeStats::NONE,
            worker: BeeStats::NONE,
            drone: BeeStats::NONE,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bee_miss_chance(mut self, miss_chance: f64) -> Self {
        self.bee_miss_chance = miss_chance;
        self
    }

    pub fn with_bees(mut self, kind: BeeKind, stats: BeeStats) -> Self {
        *self.bees_mut(kind) = stats;
        self
    }

    /// Stats for a given bee kind.
    pub fn bees(&self, kind: BeeKind) -> &BeeStats {
        match kind {
            BeeKind::Queen => &self.queen,
            BeeKind::Worker => &self.worker,
            BeeKind::Drone => &self.drone,
        }
    }

    pub fn bees_mut(&mut self, kind: BeeKind) -> &mut BeeStats {
        match kind {
            BeeKind::Queen => &mut self.queen,
            BeeKind::Worker => &mut self.worker,
            BeeKind::Drone => &mut self.drone,
        }
    }

    /// Total number of bees the hive starts with.
    pub fn hive_size(&self) -> usize {
        [&self.queen, &self.worker, &self.drone]
            .iter()
            .map(|stats| stats.amount as usize)
            .sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerStats {
    pub health: i32,
    pub miss_chance: f64,
}

impl PlayerStats {
    pub const fn new(health: i32, miss_chance: f64) -> Self {
        Self {
            health,
            miss_chance,
        }
    }
}

/// Per-kind spawn parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeeStats {
    /// How many bees of this kind the hive spawns with.
    pub amount: u32,
    pub health: i32,
    /// Damage dealt to the player on a successful sting.
    pub attack_damage: i32,
    /// Damage the bee itself loses when the player strikes it.
    pub hit_damage: i32,
}

impl BeeStats {
    pub const NONE: Self = Self::new(0, 0, 0, 0);

    pub const fn new(amount: u32, health: i32, attack_damage: i32, hit_damage: i32) -> Self {
        Self {
            amount,
            health,
            attack_damage,
            hit_damage,
        }
    }
}
