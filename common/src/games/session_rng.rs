use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one element out of a set of equally good candidates.
pub trait TieBreaker {
    /// `candidates` is never empty.
    fn pick(&mut self, candidates: &[usize]) -> usize;
}

/// Seeded once per process and reused for every decision.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl TieBreaker for SessionRng {
    fn pick(&mut self, candidates: &[usize]) -> usize {
        candidates[self.random_range(0..candidates.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_picks() {
        let candidates = [0, 2, 4, 6, 8];
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        for _ in 0..32 {
            assert_eq!(a.pick(&candidates), b.pick(&candidates));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_pick_stays_in_candidates_and_covers_them() {
        let candidates = [1, 3, 5];
        let mut rng = SessionRng::new(42);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let picked = rng.pick(&candidates);
            let position = candidates.iter().position(|&c| c == picked);
            assert!(position.is_some(), "picked {} outside candidates", picked);
            seen[position.unwrap()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_pick_is_uniform() {
        let candidates = [1, 3, 5];
        let mut rng = SessionRng::new(2024);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            let picked = rng.pick(&candidates);
            counts[candidates.iter().position(|&c| c == picked).unwrap()] += 1;
        }
        for count in counts {
            assert!((850..=1150).contains(&count), "skewed counts {:?}", counts);
        }
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = SessionRng::from_random();
        assert_eq!(rng.pick(&[4]), 4);
    }
}
