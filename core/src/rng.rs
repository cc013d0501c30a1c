use rand::rngs::SmallRng;

/// Source of uniformly distributed positions for mine placement.
pub trait MineRng {
    /// Uniform integer in `[0, bound)`, `bound` is never zero.
    fn uniform(&mut self, bound: usize) -> usize;
}

impl<R: MineRng + ?Sized> MineRng for &mut R {
    fn uniform(&mut self, bound: usize) -> usize {
        (**self).uniform(bound)
    }
}

/// Reproducible generator, the same seed always yields the same layout.
#[derive(Clone, Debug)]
pub struct SeededRng {
    seed: u64,
    rng: SmallRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineRng for SeededRng {
    fn uniform(&mut self, bound: usize) -> usize {
        use rand::prelude::*;

        self.rng.random_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        let xs: Vec<_> = (0..32).map(|_| a.uniform(600)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.uniform(600)).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn stays_below_bound() {
        let mut rng = SeededRng::new(7);
        assert!((0..1000).all(|_| rng.uniform(5) < 5));
        assert_eq!(rng.uniform(1), 0);
    }
}
