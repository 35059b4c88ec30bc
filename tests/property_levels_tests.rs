use proptest::prelude::*;
use scope_chart::core::{Level, dedup_levels};

// Small value range so runs of equal levels are common.
fn breakpoints() -> impl Strategy<Value = Vec<Level>> {
    prop::collection::vec((0i64..4, 1usize..5), 0..24).prop_map(|steps| {
        let mut index = 0;
        steps
            .into_iter()
            .map(|(value, gap)| {
                let level = Level::new(value * 11, index);
                index += gap;
                level
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn dedup_keeps_head_and_tail(levels in breakpoints()) {
        let deduped = dedup_levels(levels.clone());
        prop_assert_eq!(deduped.first(), levels.first());
        prop_assert_eq!(deduped.last(), levels.last());
        prop_assert!(deduped.len() <= levels.len());
    }

    #[test]
    fn dedup_leaves_no_adjacent_equal_values(levels in breakpoints()) {
        let deduped = dedup_levels(levels);
        if deduped.len() > 2 {
            prop_assert!(deduped.windows(2).all(|pair| pair[0].value != pair[1].value));
        }
    }

    #[test]
    fn trailing_pair_differs_unless_only_head_and_tail_remain(levels in breakpoints()) {
        let deduped = dedup_levels(levels);
        if let [.., before_tail, tail] = deduped.as_slice() {
            prop_assert!(deduped.len() == 2 || before_tail.value != tail.value);
        }
    }

    #[test]
    fn dedup_output_is_an_ordered_subset(levels in breakpoints()) {
        let deduped = dedup_levels(levels.clone());
        prop_assert!(deduped.windows(2).all(|pair| pair[0].index < pair[1].index));
        prop_assert!(deduped.iter().all(|level| levels.contains(level)));
    }
}
