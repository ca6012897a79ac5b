use crate::sources::traits::UniformSource;
use rand::{Rng, RngCore};

/// Source backed by the thread-local `rand::rng()` generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl UniformSource for ThreadRngSource {
    fn next_int(&self, min: i32, max_exclusive: i32) -> i32 {
        if max_exclusive <= min {
            return min;
        }
        rand::rng().random_range(min..max_exclusive)
    }

    fn next_real(&self) -> f64 {
        rand::rng().random::<f64>()
    }

    fn fill_bytes(&self, buf: &mut [u8]) {
        rand::rng().fill_bytes(buf);
    }
}
