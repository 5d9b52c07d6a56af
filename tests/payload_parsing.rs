use bookdash::models::{BookingsResponse, TrendPayload, TrendResponse};

#[test]
fn parse_trend_response_preserves_order() {
    // Document order is deliberately non-alphabetical; dataset order must
    // follow it, not re-sort.
    let sample = r#"
    {
      "chartDim": {
        "Zeta Lodge": [[1710000000000, 120.5], [1710086400000, 99.0]],
        "Alpha Inn": [[1710000000000, 50.0]]
      },
      "labels": []
    }
    "#;

    let resp: TrendResponse = serde_json::from_str(sample).unwrap();
    let payload = resp.chart_dim;
    assert_eq!(payload.len(), 2);
    let labels: Vec<&str> = payload.iter().map(|(hotel, _)| hotel.as_str()).collect();
    assert_eq!(labels, vec!["Zeta Lodge", "Alpha Inn"]);
    assert_eq!(payload.0[0].1, vec![(1710000000000, 120.5), (1710086400000, 99.0)]);
    assert_eq!(payload.0[1].1, vec![(1710000000000, 50.0)]);
}

#[test]
fn trend_payload_serializes_in_order() {
    let payload = TrendPayload(vec![
        ("Zeta Lodge".into(), vec![(1710000000000, 1.0)]),
        ("Alpha Inn".into(), vec![]),
    ]);
    let s = serde_json::to_string(&payload).unwrap();
    let zeta = s.find("Zeta Lodge").unwrap();
    let alpha = s.find("Alpha Inn").unwrap();
    assert!(zeta < alpha, "serialization must keep entry order: {s}");
}

#[test]
fn parse_bookings_response_sorts_hotels() {
    let sample = r#"
    {
      "chartData": {
        "Hotel B": {"2024-02": 5},
        "Hotel A": {"2024-01": 3}
      }
    }
    "#;

    let resp: BookingsResponse = serde_json::from_str(sample).unwrap();
    let payload = resp.chart_data;
    let hotels: Vec<&String> = payload.hotels().collect();
    assert_eq!(hotels, vec!["Hotel A", "Hotel B"]);
    assert_eq!(payload.0["Hotel B"]["2024-02"], 5);
}

#[test]
fn empty_payloads_parse() {
    let resp: TrendResponse = serde_json::from_str(r#"{"chartDim": {}}"#).unwrap();
    assert!(resp.chart_dim.is_empty());

    let resp: BookingsResponse = serde_json::from_str(r#"{"chartData": {}}"#).unwrap();
    assert!(resp.chart_data.is_empty());
}
