use rand::Rng;

/// Source of the two random choices a quiz needs: the answer index and the option order.
pub trait RandomSource {
    /// Returns an index uniformly drawn from `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// Fisher-Yates: walks from the last slot down to 1, swapping slot `i` with a random `j` in `0..=i`.
pub fn shuffle<T>(items: &mut [T], source: &mut impl RandomSource) {
    for i in (1..items.len()).rev() {
        let j = source.pick_index(i + 1);
        items.swap(i, j);
    }
}
