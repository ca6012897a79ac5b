pub mod seeded;
pub mod thread_rng;
pub mod traits;

pub use seeded::SeededSource;
pub use thread_rng::ThreadRngSource;
pub use traits::UniformSource;

#[cfg(test)]
pub use traits::MockUniformSource;
