use std::collections::HashSet;

use index_mask::{convert, ErrorKind, MaskError};
use proptest::prelude::*;

fn batch_strategy() -> impl Strategy<Value = (Vec<Vec<u64>>, u64)> {
    (1u64..64).prop_flat_map(|length| {
        (prop::collection::vec(prop::collection::vec(0..length, 0..16), 0..12), Just(length))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn shape_matches_input((batch, length) in batch_strategy()) {
        let masks = convert(&batch, length).unwrap();
        prop_assert_eq!(masks.len(), batch.len());
        for mask in &masks {
            prop_assert_eq!(mask.len() as u64, length);
        }
    }

    #[test]
    fn true_exactly_at_listed_positions((batch, length) in batch_strategy()) {
        let masks = convert(&batch, length).unwrap();
        for (set, mask) in batch.iter().zip(&masks) {
            let listed: HashSet<u64> = set.iter().copied().collect();
            for p in 0..length {
                prop_assert_eq!(mask[p as usize], listed.contains(&p));
            }
        }
    }

    #[test]
    fn duplicates_do_not_change_masks((batch, length) in batch_strategy()) {
        let doubled: Vec<Vec<u64>> = batch
            .iter()
            .map(|s| s.iter().flat_map(|&v| [v, v]).collect())
            .collect();
        prop_assert_eq!(convert(&batch, length).unwrap(), convert(&doubled, length).unwrap());
    }

    #[test]
    fn order_is_preserved((batch, length) in batch_strategy()) {
        let masks = convert(&batch, length).unwrap();

        let reversed: Vec<Vec<u64>> = batch.iter().rev().cloned().collect();
        let mut expected = masks.clone();
        expected.reverse();
        prop_assert_eq!(convert(&reversed, length).unwrap(), expected);

        let shuffled: Vec<Vec<u64>> = batch
            .iter()
            .map(|s| {
                let mut s = s.clone();
                s.reverse();
                s.sort_unstable_by(|a, b| b.cmp(a));
                s
            })
            .collect();
        prop_assert_eq!(convert(&shuffled, length).unwrap(), masks);
    }

    #[test]
    fn out_of_range_fails(
        (mut batch, length) in batch_strategy(),
        excess in 0u64..1000,
        pos in any::<prop::sample::Index>(),
    ) {
        let bad = length + excess;
        if batch.is_empty() {
            batch.push(Vec::new());
        }
        let set = pos.index(batch.len());
        batch[set].push(bad);
        let element = batch[set].len() - 1;
        let err = convert(&batch, length).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Range);
        prop_assert_eq!(err.set_position(), Some(set));
        prop_assert_eq!(err, MaskError::Range { set, element, value: bad as i128, length });
    }

    #[test]
    fn empty_batch_yields_empty_result(length in any::<u32>()) {
        let batch: Vec<Vec<u64>> = Vec::new();
        prop_assert!(convert(&batch, length as u64).unwrap().is_empty());
    }
}

#[test]
fn zero_length_with_empty_set() {
    let masks = convert(&[Vec::<u64>::new()], 0).unwrap();
    assert_eq!(masks.len(), 1);
    assert!(masks[0].is_empty());
}
