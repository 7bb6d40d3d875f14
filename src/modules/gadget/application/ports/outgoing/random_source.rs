/// Source of the randomness behind default codenames and success
/// probabilities.
pub trait RandomSource: Send + Sync {
    /// Uniform in `0..upper`. `upper` is never zero.
    fn index(&self, upper: usize) -> usize;

    /// Uniform in `[0, 1)`.
    fn unit(&self) -> f64;
}
