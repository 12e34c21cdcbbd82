use proptest::prelude::*;
use torus_life::topology::{neighbors, wrap_offset, NEIGHBOR_OFFSETS};
use torus_life::MIN_DISTINCT_SIDE;

fn side_and_index() -> impl Strategy<Value = (usize, usize)> {
    (MIN_DISTINCT_SIDE..64usize).prop_flat_map(|xbase| (Just(xbase), 0..xbase * xbase))
}

proptest! {
    #[test]
    fn eight_distinct_neighbors_in_range((xbase, index) in side_and_index()) {
        let mut ns = neighbors(index, xbase).to_vec();
        prop_assert!(ns.iter().all(|&i| i < xbase * xbase));
        prop_assert!(!ns.contains(&index));
        ns.sort_unstable();
        ns.dedup();
        prop_assert_eq!(ns.len(), 8);
    }

    #[test]
    fn neighborhood_is_symmetric((xbase, index) in side_and_index()) {
        for n in neighbors(index, xbase) {
            prop_assert!(neighbors(n, xbase).contains(&index));
        }
    }

    #[test]
    fn directions_agree_with_offsets((xbase, index) in side_and_index()) {
        let expected = NEIGHBOR_OFFSETS.map(|(dr, dc)| wrap_offset(index, xbase, dr, dc));
        prop_assert_eq!(neighbors(index, xbase), expected);
    }
}

#[test]
fn exhaustive_small_sides() {
    for xbase in 1..MIN_DISTINCT_SIDE {
        for index in 0..xbase * xbase {
            let ns = neighbors(index, xbase);
            assert!(ns.iter().all(|&i| i < xbase * xbase), "xbase={} index={}", xbase, index);
        }
    }
}
