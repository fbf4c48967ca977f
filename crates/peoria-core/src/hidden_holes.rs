use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::{HALF_COUNT, HOLE_COUNT, HoleIndex, STANDARD_NEW_PEORIA_HOLES};

/// Hidden holes drawn from each half.
pub const HIDDEN_PER_HALF: usize = 6;

/// Draw 12 hidden holes, 6 from each half, sorted ascending.
pub fn generate_random_hidden_holes() -> Vec<HoleIndex> {
    generate_hidden_holes_with(&mut rand::rng())
}

/// Same as [`generate_random_hidden_holes`], reproducible from `seed`.
pub fn generate_hidden_holes_seeded(seed: u64) -> Vec<HoleIndex> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_hidden_holes_with(&mut rng)
}

/// The customary fixed layout, 0-based and sorted.
pub fn standard_hidden_holes() -> Vec<HoleIndex> {
    let mut holes: Vec<HoleIndex> = STANDARD_NEW_PEORIA_HOLES
        .iter()
        .map(|&number| HoleIndex::from(number) - 1)
        .collect();
    holes.sort_unstable();
    holes
}

/// Draw hidden holes using the caller's random source.
///
/// Each half is shuffled independently and its first six holes kept.
pub fn generate_hidden_holes_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<HoleIndex> {
    let mut out_holes: Vec<HoleIndex> = (0..HALF_COUNT).collect();
    let mut in_holes: Vec<HoleIndex> = (HALF_COUNT..HOLE_COUNT).collect();
    out_holes.shuffle(rng);
    in_holes.shuffle(rng);

    let mut selected: Vec<HoleIndex> = out_holes
        .into_iter()
        .take(HIDDEN_PER_HALF)
        .chain(in_holes.into_iter().take(HIDDEN_PER_HALF))
        .collect();
    selected.sort_unstable();
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_balanced(holes: &[HoleIndex]) {
        assert_eq!(holes.len(), 2 * HIDDEN_PER_HALF);
        assert!(holes.windows(2).all(|w| w[0] < w[1]), "not strictly ascending: {holes:?}");
        assert!(holes.iter().all(|&h| h < HOLE_COUNT));
        assert_eq!(holes.iter().filter(|&&h| h < HALF_COUNT).count(), HIDDEN_PER_HALF);
        assert_eq!(holes.iter().filter(|&&h| h >= HALF_COUNT).count(), HIDDEN_PER_HALF);
    }

    #[test]
    fn standard_layout_is_the_default_selection() {
        // Five OUT holes and seven IN holes, unlike a random draw.
        let holes = standard_hidden_holes();
        assert_eq!(holes, crate::config::DEFAULT_HIDDEN_HOLES);
        assert_eq!(holes.iter().filter(|&&h| h < HALF_COUNT).count(), 5);
    }

    #[test]
    fn random_selection_is_balanced() {
        for _ in 0..50 {
            assert_balanced(&generate_random_hidden_holes());
        }
    }

    #[test]
    fn same_seed_same_holes() {
        assert_eq!(generate_hidden_holes_seeded(7), generate_hidden_holes_seeded(7));
    }

    #[test]
    fn seeds_cover_every_hole() {
        let mut seen = [false; HOLE_COUNT];
        for seed in 0..200 {
            for hole in generate_hidden_holes_seeded(seed) {
                seen[hole] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn injected_rng_is_used() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(generate_hidden_holes_with(&mut a), generate_hidden_holes_with(&mut b));
        // A second draw from the same generator continues its stream.
        assert_eq!(generate_hidden_holes_with(&mut a), generate_hidden_holes_with(&mut b));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn every_seed_gives_balanced_holes(seed in any::<u64>()) {
                let holes = generate_hidden_holes_seeded(seed);
                prop_assert_eq!(holes.len(), 12);
                prop_assert!(holes.windows(2).all(|w| w[0] < w[1]));
                prop_assert_eq!(holes.iter().filter(|&&h| h < HALF_COUNT).count(), 6);
                prop_assert!(holes.iter().all(|&h| h < HOLE_COUNT));
            }
        }
    }
}
