use rand::Rng;

use crate::combat;
use crate::config::BeeStats;

use super::BeeKind;

/// Shared shape of everything that fights: health plus a miss chance.
pub trait Combatant {
    fn health(&self) -> i32;

    /// Probability in `[0, 1]` that an attack roll fails.
    fn miss_chance(&self) -> f64;

    /// Dead iff health is at or below zero. Health is never clamped.
    fn is_dead(&self) -> bool {
        self.health() <= 0
    }

    /// Draws once from `rng` and reports whether the attack lands.
    fn roll_attack<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        combat::roll_hit(self.miss_chance(), rng)
    }
}

/// The human (or automated) hunter.
///
/// The player has no attack power of its own: a landed strike costs the bee
/// its own `hit_damage`.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    health: i32,
    max_health: i32,
    miss_chance: f64,
}

impl Player {
    pub fn new(health: i32, miss_chance: f64) -> Self {
        Self {
            health,
            max_health: health,
            miss_chance,
        }
    }

    /// Starting health, for `current/max` displays.
    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    /// Applies a sting. Health may drop below zero.
    pub fn sting(&mut self, damage: i32) {
        self.health -= damage;
    }
}

impl Combatant for Player {
    fn health(&self) -> i32 {
        self.health
    }

    fn miss_chance(&self) -> f64 {
        self.miss_chance
    }
}

/// A single member of the hive.
#[derive(Clone, Debug, PartialEq)]
pub struct Bee {
    kind: BeeKind,
    health: i32,
    attack_damage: i32,
    hit_damage: i32,
    miss_chance: f64,
}

impl Bee {
    /// Creates a bee with no attack or hit damage; chain the `with_*` setters.
    pub fn new(kind: BeeKind, health: i32, miss_chance: f64) -> Self {
        Self {
            kind,
            health,
            attack_damage: 0,
            hit_damage: 0,
            miss_chance,
        }
    }

    /// Spawns a bee from its kind's configured stats.
    pub fn spawn(kind: BeeKind, stats: &BeeStats, miss_chance: f64) -> Self {
        Self::new(kind, stats.health, miss_chance)
            .with_attack_damage(stats.attack_damage)
            .with_hit_damage(stats.hit_damage)
    }

    pub fn with_attack_damage(mut self, attack_damage: i32) -> Self {
        self.attack_damage = attack_damage;
        self
    }

    pub fn with_hit_damage(mut self, hit_damage: i32) -> Self {
        self.hit_damage = hit_damage;
        self
    }

    pub fn kind(&self) -> BeeKind {
        self.kind
    }

    pub fn attack_damage(&self) -> i32 {
        self.attack_damage
    }

    pub fn hit_damage(&self) -> i32 {
        self.hit_damage
    }

    /// Takes a strike from the player and returns the damage lost.
    pub fn hit(&mut self) -> i32 {
        self.health -= self.hit_damage;
        self.hit_damage
    }

    /// Rolls a sting against the player; `Some(damage)` if it lands.
    pub fn attack<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<i32> {
        self.roll_attack(rng).then_some(self.attack_damage)
    }
}

impl Combatant for Bee {
    fn health(&self) -> i32 {
        self.health
    }

    fn miss_chance(&self) -> f64 {
        self.miss_chance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn player_with_zero_miss_chance_always_hits() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let player = Player::new(20, 0.0);
        assert!((0..1_000).all(|_| player.roll_attack(&mut rng)));
    }

    #[test]
    fn player_with_full_miss_chance_always_misses() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let player = Player::new(20, 1.0);
        assert!((0..1_000).all(|_| !player.roll_attack(&mut rng)));
    }

    #[test]
    fn stings_accumulate() {
        let mut player = Player::new(20, 0.0);
        player.sting(5);
        assert_eq!(player.health(), 15);
        player.sting(7);
        player.sting(3);
        assert_eq!(player.health(), 5);
        assert_eq!(player.max_health(), 20);
    }

    #[test]
    fn player_death_boundaries() {
        assert!(!Player::new(10, 0.0).is_dead());
        assert!(Player::new(0, 0.0).is_dead());
        assert!(Player::new(-5, 0.0).is_dead());
    }

    #[test]
    fn bee_attack_respects_miss_chance_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let always_hits = Bee::new(BeeKind::Worker, 10, 0.0).with_attack_damage(5);
        assert_eq!(always_hits.attack(&mut rng), Some(5));

        let always_misses = Bee::new(BeeKind::Worker, 10, 1.0).with_attack_damage(5);
        assert_eq!(always_misses.attack(&mut rng), None);
    }

    #[test]
    fn bee_loses_its_own_hit_damage() {
        let mut bee = Bee::new(BeeKind::Worker, 10, 0.0).with_hit_damage(3);
        assert_eq!(bee.hit(), 3);
        assert_eq!(bee.health(), 7);
    }

    #[test]
    fn bee_health_goes_negative() {
        let mut bee = Bee::new(BeeKind::Drone, 2, 0.0).with_hit_damage(30);
        bee.hit();
        assert_eq!(bee.health(), -28);
        assert!(bee.is_dead());
    }

    #[test]
    fn bee_death_boundaries() {
        assert!(!Bee::new(BeeKind::Worker, 5, 0.0).is_dead());
        assert!(Bee::new(BeeKind::Worker, 0, 0.0).is_dead());
        assert!(Bee::new(BeeKind::Worker, -2, 0.0).is_dead());
    }

    #[test]
    fn spawn_copies_kind_stats() {
        let bee = Bee::spawn(BeeKind::Queen, &BeeStats::new(1, 100, 10, 15), 0.2);
        assert_eq!(bee.kind(), BeeKind::Queen);
        assert_eq!(bee.health(), 100);
        assert_eq!(bee.attack_damage(), 10);
        assert_eq!(bee.hit_damage(), 15);
        assert_eq!(bee.miss_chance(), 0.2);
    }
}
