//! Hit checks and target selection.

use rand::Rng;

/// Draws a uniform value in `[0, 1)`.
pub fn draw_unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..1.0)
}

/// Rolls an attack against `miss_chance`.
///
/// The attack fails iff the draw is strictly less than `miss_chance`, so a
/// miss chance of `0.0` never fails and `1.0` always fails.
pub fn roll_hit<R: Rng + ?Sized>(miss_chance: f64, rng: &mut R) -> bool {
    draw_unit(rng) >= miss_chance
}

/// Picks a uniform index in `[0, len)`, or `None` when there is nothing to pick.
///
/// Does not touch `rng` when `len` is zero.
pub fn pick_target<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Option<usize> {
    (len > 0).then(|| rng.gen_range(0..len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn draws_stay_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let draw = draw_unit(&mut rng);
            assert!((0.0..1.0).contains(&draw));
        }
    }

    #[test]
    fn miss_chance_bounds_are_deterministic() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            assert!(roll_hit(0.0, &mut rng));
            assert!(!roll_hit(1.0, &mut rng));
        }
    }

    #[test]
    fn pick_target_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1_000 {
            let index = pick_target(5, &mut rng).unwrap();
            assert!(index < 5);
        }
        assert_eq!(pick_target(1, &mut rng), Some(0));
    }

    #[test]
    fn empty_pick_leaves_stream_untouched() {
        let mut a = ChaCha8Rng::seed_from_u64(9);
        let mut b = ChaCha8Rng::seed_from_u64(9);
        assert_eq!(pick_target(0, &mut a), None);
        assert_eq!(draw_unit(&mut a), draw_unit(&mut b));
    }

    #[test]
    fn same_seed_same_rolls() {
        let mut a = ChaCha8Rng::seed_from_u64(12345);
        let mut b = ChaCha8Rng::seed_from_u64(12345);
        let rolls_a: Vec<_> = (0..64).map(|_| roll_hit(0.5, &mut a)).collect();
        let rolls_b: Vec<_> = (0..64).map(|_| roll_hit(0.5, &mut b)).collect();
        assert_eq!(rolls_a, rolls_b);
    }
}
