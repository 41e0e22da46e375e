use proptest::prelude::*;
use toucan::classify::{classify, Column};
use toucan::normalize::normalize;
use toucan::record::JobRecord;
use toucan::sort::{sort_by_date, SortDirection};

fn dated(id: i64, date: Option<&str>) -> JobRecord {
    JobRecord::new(id, "Acme", "Engineer", "Applied", date)
}

fn sorted_ids(mut records: Vec<JobRecord>, direction: SortDirection) -> Vec<i64> {
    sort_by_date(&mut records, direction);
    records.iter().map(|record| record.id).collect()
}

#[test]
fn classify_examples() {
    assert_eq!(classify("Interviewing"), Column::Interview);
    assert_eq!(classify("Offer Extended"), Column::Offer);
    assert_eq!(classify(""), Column::Applied);
    assert_eq!(classify("Applied"), Column::Applied);
}

#[test]
fn normalize_examples() {
    assert_eq!(normalize("Acme Corp."), "acme");
    assert_eq!(normalize(""), "");
}

#[test]
fn undated_sorts_after_dated_for_newest() {
    let records = vec![dated(1, None), dated(2, Some("2024-01-01"))];
    assert_eq!(sorted_ids(records, SortDirection::Newest), vec![2, 1]);
}

#[test]
fn undated_sorts_after_dated_for_oldest() {
    let records = vec![dated(1, None), dated(2, Some("2024-01-01"))];
    assert_eq!(sorted_ids(records, SortDirection::Oldest), vec![2, 1]);
}

#[test]
fn malformed_dates_behave_like_missing() {
    let records = vec![
        dated(1, Some("yesterday")),
        dated(2, None),
        dated(3, Some("2023-12-31")),
    ];
    assert_eq!(sorted_ids(records.clone(), SortDirection::Newest), vec![3, 1, 2]);
    assert_eq!(sorted_ids(records, SortDirection::Oldest), vec![3, 1, 2]);
}

#[test]
fn flipping_direction_reverses_a_distinct_pair() {
    let records = vec![dated(1, Some("2024-06-01")), dated(2, Some("2023-06-01"))];
    let newest = sorted_ids(records.clone(), SortDirection::Newest);
    let mut oldest = sorted_ids(records, SortDirection::Oldest);
    oldest.reverse();
    assert_eq!(newest, vec![1, 2]);
    assert_eq!(newest, oldest);
}

proptest! {
    #[test]
    fn classify_is_total_and_deterministic(status in ".{0,30}") {
        let first = classify(&status);
        prop_assert!(Column::ALL.contains(&first));
        prop_assert_eq!(classify(&status), first);
    }

    #[test]
    fn normalize_is_idempotent(company in ".{0,40}") {
        let once = normalize(&company);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn equal_dates_keep_input_order(count in 1usize..12, newest in any::<bool>()) {
        let records: Vec<JobRecord> = (0..count as i64)
            .map(|id| dated(id, if id % 2 == 0 { Some("2024-01-01") } else { None }))
            .collect();
        let direction = if newest { SortDirection::Newest } else { SortDirection::Oldest };
        let ids = sorted_ids(records, direction);

        let expected: Vec<i64> = (0..count as i64)
            .filter(|id| id % 2 == 0)
            .chain((0..count as i64).filter(|id| id % 2 == 1))
            .collect();
        prop_assert_eq!(ids, expected);
    }
}
