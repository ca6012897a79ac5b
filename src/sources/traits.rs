/// Uniformly distributed draws consumed by the value generator.
#[cfg_attr(test, mockall::automock)]
pub trait UniformSource: Send + Sync {
    /// Integer in `[min, max_exclusive)`. An empty range yields `min`.
    fn next_int(&self, min: i32, max_exclusive: i32) -> i32;

    /// Real number in `[0, 1)`.
    fn next_real(&self) -> f64;

    fn fill_bytes(&self, buf: &mut [u8]);
}

impl<T: UniformSource + ?Sized> UniformSource for Box<T> {
    fn next_int(&self, min: i32, max_exclusive: i32) -> i32 {
        (**self).next_int(min, max_exclusive)
    }

    fn next_real(&self) -> f64 {
        (**self).next_real()
    }

    fn fill_bytes(&self, buf: &mut [u8]) {
        (**self).fill_bytes(buf)
    }
}
