use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws `len` independent cell states, each alive with probability `fill_rate`.
///
/// `seed` - random seed (if `None`, then random seed is generated)
pub fn random_states(len: usize, fill_rate: f64, seed: Option<u64>) -> Vec<bool> {
    let mut rng = if let Some(x) = seed {
        ChaCha8Rng::seed_from_u64(x)
    } else {
        ChaCha8Rng::from_entropy()
    };
    (0..len).map(|_| rng.gen_bool(fill_rate)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_states() {
        assert_eq!(
            random_states(100, 0.3, Some(7)),
            random_states(100, 0.3, Some(7))
        );
    }

    #[test]
    fn extreme_rates() {
        assert!(random_states(50, 0.0, Some(1)).iter().all(|&x| !x));
        assert!(random_states(50, 1.0, Some(1)).iter().all(|&x| x));
    }
}
