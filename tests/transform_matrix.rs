use bookdash::color::OfficePalette;
use bookdash::models::BookingsPayload;
use bookdash::transform::{bar_matrix, parse_month_label};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn payload(entries: &[(&str, &[(&str, u64)])]) -> BookingsPayload {
    let mut map = BTreeMap::new();
    for (hotel, months) in entries {
        let inner: BTreeMap<String, u64> = months
            .iter()
            .map(|(month, count)| (month.to_string(), *count))
            .collect();
        map.insert(hotel.to_string(), inner);
    }
    BookingsPayload(map)
}

#[test]
fn month_axis_is_sorted_union() {
    let payload = payload(&[
        ("Hotel A", &[("2024-03", 1)]),
        ("Hotel B", &[("2023-11", 2), ("2024-03", 4)]),
    ]);
    let mut palette = OfficePalette::default();
    let matrix = bar_matrix(&payload, &mut palette).unwrap();
    assert_eq!(matrix.months, vec!["2023-11", "2024-03"]);
    assert_eq!(matrix.datasets.len(), 2);
}

#[test]
fn absent_pairs_are_zero() {
    let payload = payload(&[
        ("Hotel A", &[("2024-01", 3)]),
        ("Hotel B", &[("2024-02", 5)]),
    ]);
    let mut palette = OfficePalette::default();
    let matrix = bar_matrix(&payload, &mut palette).unwrap();

    assert_eq!(matrix.hotels, vec!["Hotel A", "Hotel B"]);
    assert_eq!(matrix.months, vec!["2024-01", "2024-02"]);
    assert_eq!(matrix.datasets[0].label, "2024-01");
    assert_eq!(matrix.datasets[0].values, vec![3, 0]);
    assert_eq!(matrix.datasets[1].label, "2024-02");
    assert_eq!(matrix.datasets[1].values, vec![0, 5]);
}

#[test]
fn hotel_axis_is_alphabetical_regardless_of_wire_order() {
    // BTreeMap sorts on insert; mirror what a shuffled backend would send
    let payload = payload(&[
        ("Seaside", &[("2024-01", 1)]),
        ("Grand", &[("2024-01", 2)]),
        ("Azure", &[("2024-01", 3)]),
    ]);
    let mut palette = OfficePalette::default();
    let matrix = bar_matrix(&payload, &mut palette).unwrap();
    assert_eq!(matrix.hotels, vec!["Azure", "Grand", "Seaside"]);
    assert_eq!(matrix.datasets[0].values, vec![3, 2, 1]);
}

#[test]
fn strftime_month_labels_sort_chronologically() {
    // The backend's "%B %Y" form
    let payload = payload(&[
        ("Hotel A", &[("January 2022", 3), ("March 2022", 1)]),
        ("Hotel B", &[("December 2021", 2)]),
    ]);
    let mut palette = OfficePalette::default();
    let matrix = bar_matrix(&payload, &mut palette).unwrap();
    assert_eq!(
        matrix.months,
        vec!["December 2021", "January 2022", "March 2022"]
    );
    assert_eq!(matrix.datasets[0].values, vec![0, 2]);
    assert_eq!(matrix.datasets[1].values, vec![3, 0]);
}

#[test]
fn month_label_forms() {
    let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    assert_eq!(parse_month_label("2024-03").unwrap(), march);
    assert_eq!(parse_month_label("March 2024").unwrap(), march);
    assert_eq!(
        parse_month_label("2024-03-05").unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    );
    assert!(parse_month_label("soon").is_err());
}

#[test]
fn each_month_gets_its_own_color() {
    let payload = payload(&[(
        "Hotel A",
        &[("2024-01", 1), ("2024-02", 2), ("2024-03", 3)],
    )]);
    let mut palette = OfficePalette::default();
    let matrix = bar_matrix(&payload, &mut palette).unwrap();
    assert_ne!(matrix.datasets[0].color, matrix.datasets[1].color);
    assert_ne!(matrix.datasets[1].color, matrix.datasets[2].color);
}
