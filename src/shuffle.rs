//! Random permutations for dealing the deck.

use alloc::vec::Vec;

use rand::Rng;

/// Returns the integers `0..n` in uniformly random order.
///
/// Runs an in-place Fisher–Yates shuffle from the last position down to 1,
/// swapping each position with a uniformly chosen earlier-or-equal one.
///
/// # Example
///
/// ```
/// use concentration::shuffle::shuffle;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut order = shuffle(5, &mut rng);
/// order.sort_unstable();
/// assert_eq!(order, vec![0, 1, 2, 3, 4]);
/// ```
pub fn shuffle<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();

    for index in (1..n).rev() {
        let swap_with = rng.random_range(0..=index);
        order.swap(index, swap_with);
    }

    order
}
