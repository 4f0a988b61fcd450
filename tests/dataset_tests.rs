use chrono::NaiveDate;
use timeline_rs::TimelineError;
use timeline_rs::core::{DisasterCategory, EventDataset, EventRecord};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn sample_records() -> Vec<EventRecord> {
    vec![
        EventRecord::new(
            DisasterCategory::Flooding,
            50.0,
            date(2005, 8, 29),
            "Katrina",
        ),
        EventRecord::new(
            DisasterCategory::Flooding,
            10.0,
            date(2005, 3, 1),
            "Spring Flood",
        ),
        EventRecord::new(
            DisasterCategory::SevereStorm,
            30.0,
            date(2010, 5, 2),
            "Derecho",
        ),
        EventRecord::new(
            DisasterCategory::TropicalCyclone,
            80.0,
            date(2010, 9, 13),
            "Igor",
        ),
    ]
}

#[test]
fn build_computes_full_dataset_aggregates() {
    let dataset = EventDataset::build(sample_records()).expect("valid dataset");

    assert_eq!(dataset.max_year(), 2010);
    assert_eq!(dataset.years_descending(), &[2010, 2005]);
    assert_eq!(dataset.magnitude_range(), (10.0, 80.0));
    assert_eq!(dataset.max_magnitude_in(2005), Some(50.0));
    assert_eq!(dataset.max_magnitude_in(2010), Some(80.0));
    assert_eq!(dataset.max_magnitude_in(1999), None);
}

#[test]
fn build_counts_categories_in_first_appearance_order() {
    let dataset = EventDataset::build(sample_records()).expect("valid dataset");

    let counts: Vec<(DisasterCategory, usize)> = dataset
        .category_counts()
        .iter()
        .map(|(&category, &count)| (category, count))
        .collect();

    assert_eq!(
        counts,
        vec![
            (DisasterCategory::Flooding, 2),
            (DisasterCategory::SevereStorm, 1),
            (DisasterCategory::TropicalCyclone, 1),
        ]
    );
}

#[test]
fn build_rejects_negative_magnitude() {
    let records = vec![EventRecord::new(
        DisasterCategory::Flooding,
        -1.0,
        date(2005, 8, 29),
        "Bad",
    )];

    let result = EventDataset::build(records);
    assert!(matches!(
        result,
        Err(TimelineError::MalformedRecord { .. })
    ));
}

#[test]
fn build_rejects_non_finite_magnitude() {
    let records = vec![EventRecord::new(
        DisasterCategory::Flooding,
        f64::NAN,
        date(2005, 8, 29),
        "Bad",
    )];

    assert!(EventDataset::build(records).is_err());
}

#[test]
fn build_rejects_year_date_mismatch() {
    let mut record = EventRecord::new(
        DisasterCategory::Flooding,
        50.0,
        date(2005, 8, 29),
        "Katrina",
    );
    record.year = 2006;

    let result = EventDataset::build(vec![record]);
    assert!(matches!(
        result,
        Err(TimelineError::MalformedRecord { .. })
    ));
}

#[test]
fn build_rejects_empty_input() {
    assert!(EventDataset::build(Vec::new()).is_err());
}

#[test]
fn empty_filter_returns_every_record() {
    let dataset = EventDataset::build(sample_records()).expect("valid dataset");

    let visible = dataset.filtered_by(&[]);
    assert_eq!(visible.len(), dataset.len());
}

#[test]
fn non_empty_filter_returns_only_matching_subset() {
    let dataset = EventDataset::build(sample_records()).expect("valid dataset");

    let visible = dataset.filtered_by(&[DisasterCategory::Flooding]);
    assert_eq!(visible.len(), 2);
    assert!(
        visible
            .iter()
            .all(|record| record.category == DisasterCategory::Flooding)
    );
}

#[test]
fn filter_never_invents_or_duplicates_records() {
    let dataset = EventDataset::build(sample_records()).expect("valid dataset");

    let visible = dataset.filtered_by(&[
        DisasterCategory::Flooding,
        DisasterCategory::SevereStorm,
        DisasterCategory::TropicalCyclone,
    ]);
    assert_eq!(visible.len(), dataset.len());

    for record in &visible {
        let occurrences = dataset
            .records()
            .iter()
            .filter(|candidate| candidate == record)
            .count();
        assert_eq!(occurrences, 1);
    }
}
