use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Which chart the dashboard is showing. Maps 1:1 onto the backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Revenue over time, one line per hotel.
    RevenueTrend,
    /// Booking counts per month, grouped bars per hotel.
    BookingsByMonth,
}

impl ChartKind {
    /// Human-facing chart name, used in captions and error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChartKind::RevenueTrend => "Amount Incoming",
            ChartKind::BookingsByMonth => "Bookings By Month",
        }
    }

    /// Backend path serving this chart's payload.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ChartKind::RevenueTrend => "/trend_chart",
            ChartKind::BookingsByMonth => "/bookings_by_month",
        }
    }
}

/// Raw revenue observation: unix timestamp in milliseconds plus amount.
pub type RawPoint = (i64, f64);

/// Per-hotel revenue time series, in the order the backend emitted them.
///
/// The wire form is a JSON object, but its key order is meaningful (it is the
/// dataset order of the rendered chart), so a plain `HashMap`/`BTreeMap` would
/// lose information. The custom deserializer below keeps document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendPayload(pub Vec<(String, Vec<RawPoint>)>);

impl TrendPayload {
    pub fn iter(&self) -> impl Iterator<Item = &(String, Vec<RawPoint>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for TrendPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PayloadVisitor;

        impl<'de> Visitor<'de> for PayloadVisitor {
            type Value = TrendPayload;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "a map from hotel label to a list of [timestamp, amount] pairs")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((hotel, points)) = map.next_entry::<String, Vec<RawPoint>>()? {
                    entries.push((hotel, points));
                }
                Ok(TrendPayload(entries))
            }
        }

        deserializer.deserialize_map(PayloadVisitor)
    }
}

impl Serialize for TrendPayload {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (hotel, points) in &self.0 {
            map.serialize_entry(hotel, points)?;
        }
        map.end()
    }
}

/// Nested hotel -> month label -> booking count map.
///
/// Hotels sort alphabetically via the `BTreeMap`, so the bar chart's hotel
/// axis does not depend on backend emission order. Missing (hotel, month)
/// pairs mean zero bookings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingsPayload(pub BTreeMap<String, BTreeMap<String, u64>>);

impl BookingsPayload {
    pub fn hotels(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Response body of `POST /trend_chart`. Extra fields (the backend also sends
/// an empty `labels` array) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendResponse {
    #[serde(rename = "chartDim")]
    pub chart_dim: TrendPayload,
}

/// Response body of `POST /bookings_by_month`.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingsResponse {
    #[serde(rename = "chartData")]
    pub chart_data: BookingsPayload,
}
