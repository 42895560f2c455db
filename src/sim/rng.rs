//! Randomness sources for adversary turns and bonus placement
//!
//! The simulation only ever asks for an index below some bound. Play uses a
//! seeded PCG stream; tests and replays feed exact picks.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::Direction;

/// Source of uniform picks
pub trait RandomSource {
    /// Uniform index in `0..len`. Returns 0 when `len` is 0.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform cardinal direction
    fn pick_direction(&mut self) -> Direction {
        Direction::ALL[self.pick_index(Direction::ALL.len()) % Direction::ALL.len()]
    }
}

/// Seeded PCG32 stream
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: Pcg32,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRng {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// Replays a fixed list of picks, each reduced modulo the requested bound.
/// Once the list runs out every pick is 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    /// Picks not consumed yet
    pub fn remaining(&self) -> usize {
        self.picks.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.picks.pop_front().unwrap_or(0) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = SeededRng::new(12345);
        let mut b = SeededRng::new(12345);
        for _ in 0..100 {
            assert_eq!(a.pick_index(203), b.pick_index(203));
        }
    }

    #[test]
    fn test_seeded_stays_in_bounds() {
        let mut rng = SeededRng::new(7);
        for len in 1..50 {
            assert!(rng.pick_index(len) < len);
        }
        assert_eq!(rng.pick_index(0), 0);
    }

    #[test]
    fn test_seeded_covers_all_directions() {
        let mut rng = SeededRng::new(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let dir = rng.pick_direction();
            let idx = Direction::ALL.iter().position(|&d| d == dir).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_scripted_replays_in_order() {
        let mut rng = ScriptedRandom::new([3, 0, 5]);
        assert_eq!(rng.pick_direction(), Direction::Right);
        assert_eq!(rng.pick_direction(), Direction::Up);
        assert_eq!(rng.pick_index(4), 1);
        assert_eq!(rng.remaining(), 0);
        assert_eq!(rng.pick_index(10), 0);
    }
}
