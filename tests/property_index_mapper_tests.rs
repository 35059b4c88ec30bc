use proptest::prelude::*;
use scope_chart::core::{Column, IndexRange, TimeRange, map_time_range_to_indexes};

fn linear_scan(columns: &[Column], range: TimeRange) -> IndexRange {
    let last = columns.len() - 1;
    let mut from = 0;
    for (index, column) in columns.iter().enumerate().skip(1) {
        if column.time <= range.from {
            from = index;
        } else {
            break;
        }
    }
    let mut to = last;
    for index in (1..last).rev() {
        if columns[index].time >= range.to {
            to = index;
        } else {
            break;
        }
    }
    IndexRange::new(from, to.max(from))
}

fn sorted_columns() -> impl Strategy<Value = Vec<Column>> {
    prop::collection::vec(1i64..1_000, 3..64).prop_map(|steps| {
        let mut time = 0;
        steps
            .into_iter()
            .map(|step| {
                time += step;
                Column::new(time, 0)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn index_bounds_stay_ordered_and_in_range(
        columns in sorted_columns(),
        from_factor in -0.2f64..1.2,
        width_factor in 0.0f64..1.4
    ) {
        let first = columns[0].time;
        let span = columns[columns.len() - 1].time - first;
        let from = first + (span as f64 * from_factor) as i64;
        let to = from + (span as f64 * width_factor) as i64;

        let range = map_time_range_to_indexes(&columns, TimeRange::new(from, to));
        prop_assert!(range.from <= range.to);
        prop_assert!(range.to < columns.len());
    }

    #[test]
    fn binary_search_matches_linear_scan(
        columns in sorted_columns(),
        from_factor in 0.0f64..1.0,
        width_factor in 0.0f64..1.0
    ) {
        let first = columns[0].time;
        let span = columns[columns.len() - 1].time - first;
        let from = first + (span as f64 * from_factor) as i64;
        let to = (from + (span as f64 * width_factor) as i64).min(first + span);
        let range = TimeRange::new(from, to);

        prop_assert_eq!(
            map_time_range_to_indexes(&columns, range),
            linear_scan(&columns, range)
        );
    }
}
