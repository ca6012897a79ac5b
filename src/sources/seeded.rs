use std::sync::Mutex;

use crate::sources::traits::UniformSource;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Reproducible source: two instances built from the same seed produce the
/// same sequence of draws.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // A poisoned lock still holds a usable generator.
        let mut guard = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

impl UniformSource for SeededSource {
    fn next_int(&self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            return min;
        }
        self.with_rng(|rng| rng.random_range(min..max_exclusive))
    }

    fn next_real(&self) -> f64 {
        self.with_rng(|rng| rng.random::<f64>())
    }

    fn fill_bytes(&self, buf: &mut [u8]) {
        self.with_rng(|rng| rng.fill_bytes(buf));
    }
}
