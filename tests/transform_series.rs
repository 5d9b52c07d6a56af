use bookdash::color::{LINE_FILL, OfficePalette};
use bookdash::models::TrendPayload;
use bookdash::transform::{format_day, line_datasets, local_day};
use chrono::NaiveDate;

fn sample_payload() -> TrendPayload {
    TrendPayload(vec![
        (
            "Zeta Lodge".into(),
            vec![
                (1_700_000_000_000, 120.5),
                (1_700_086_400_000, 99.0),
                // duplicate timestamp must survive untouched
                (1_700_086_400_000, 99.0),
            ],
        ),
        ("Alpha Inn".into(), vec![(1_700_000_000_000, 50.0)]),
        ("Empty Hotel".into(), vec![]),
    ])
}

#[test]
fn one_dataset_per_entity_in_payload_order() {
    let mut palette = OfficePalette::default();
    let datasets = line_datasets(&sample_payload(), &mut palette).unwrap();
    let labels: Vec<&str> = datasets.iter().map(|d| d.label.as_str()).collect();
    assert_eq!(labels, vec!["Zeta Lodge", "Alpha Inn", "Empty Hotel"]);
}

#[test]
fn point_counts_match_input_exactly() {
    let mut palette = OfficePalette::default();
    let datasets = line_datasets(&sample_payload(), &mut palette).unwrap();
    assert_eq!(datasets[0].points.len(), 3);
    assert_eq!(datasets[1].points.len(), 1);
    assert_eq!(datasets[2].points.len(), 0);
    // no dedup: the repeated pair is two identical points
    assert_eq!(datasets[0].points[1], datasets[0].points[2]);
}

#[test]
fn day_formatting_is_zero_padded() {
    assert_eq!(
        format_day(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
        "2024-03-05"
    );
    assert_eq!(
        format_day(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
        "2024-12-31"
    );
}

#[test]
fn points_carry_local_calendar_dates() {
    let payload = TrendPayload(vec![("Hotel A".into(), vec![(1_710_000_000_000, 120.5)])]);
    let mut palette = OfficePalette::default();
    let datasets = line_datasets(&payload, &mut palette).unwrap();
    assert_eq!(datasets.len(), 1);
    assert_eq!(datasets[0].label, "Hotel A");
    let point = &datasets[0].points[0];
    assert_eq!(point.y, 120.5);
    // the x value is the timestamp truncated to the local calendar date
    assert_eq!(point.x, format_day(local_day(1_710_000_000_000).unwrap()));
}

#[test]
fn colors_come_from_palette_and_fill_is_fixed() {
    let mut palette = OfficePalette::default();
    let datasets = line_datasets(&sample_payload(), &mut palette).unwrap();
    assert_ne!(datasets[0].border, datasets[1].border);
    for ds in &datasets {
        assert_eq!(ds.fill, LINE_FILL);
    }

    // same fixed palette, same colors
    let mut again = OfficePalette::default();
    let datasets2 = line_datasets(&sample_payload(), &mut again).unwrap();
    assert_eq!(datasets, datasets2);
}

#[test]
fn out_of_range_timestamp_is_an_error() {
    let payload = TrendPayload(vec![("Hotel A".into(), vec![(i64::MAX, 1.0)])]);
    let mut palette = OfficePalette::default();
    assert!(line_datasets(&payload, &mut palette).is_err());
}
