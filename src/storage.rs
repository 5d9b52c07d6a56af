use crate::transform::{BarMatrix, LineDataset};
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save the revenue line datasets as tidy CSV (one row = one observation).
pub fn save_trend_csv<P: AsRef<Path>>(datasets: &[LineDataset], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("hotel", "date", "amount"))?;
    for ds in datasets {
        for p in &ds.points {
            wtr.serialize((&ds.label, &p.x, p.y))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save the revenue line datasets as pretty JSON.
pub fn save_trend_json<P: AsRef<Path>>(datasets: &[LineDataset], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(datasets)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

/// Save the bookings matrix as dense CSV: one row per (hotel, month), zeros
/// included.
pub fn save_bookings_csv<P: AsRef<Path>>(matrix: &BarMatrix, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("hotel", "month", "bookings"))?;
    for (h, hotel) in matrix.hotels.iter().enumerate() {
        for ds in &matrix.datasets {
            wtr.serialize((hotel, &ds.label, ds.values[h]))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save the bookings matrix as pretty JSON.
pub fn save_bookings_json<P: AsRef<Path>>(matrix: &BarMatrix, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(matrix)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OfficePalette;
    use crate::models::{BookingsPayload, TrendPayload};
    use crate::transform::{bar_matrix, line_datasets};
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    #[test]
    fn write_trend_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("trend.csv");
        let jsonp = dir.path().join("trend.json");
        let payload = TrendPayload(vec![(
            "Hotel A".into(),
            vec![(1_700_000_000_000, 120.5), (1_700_086_400_000, 99.0)],
        )]);
        let mut palette = OfficePalette::default();
        let datasets = line_datasets(&payload, &mut palette).unwrap();
        save_trend_csv(&datasets, &csvp).unwrap();
        save_trend_json(&datasets, &jsonp).unwrap();
        let csv_text = std::fs::read_to_string(&csvp).unwrap();
        assert!(csv_text.starts_with("hotel,date,amount"));
        assert_eq!(csv_text.lines().count(), 3);
        assert!(jsonp.exists());
    }

    #[test]
    fn write_bookings_csv_includes_zeros() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("bookings.csv");
        let mut map = BTreeMap::new();
        map.insert(
            "Hotel A".to_string(),
            BTreeMap::from([("2024-01".to_string(), 3u64)]),
        );
        map.insert(
            "Hotel B".to_string(),
            BTreeMap::from([("2024-02".to_string(), 5u64)]),
        );
        let mut palette = OfficePalette::default();
        let matrix = bar_matrix(&BookingsPayload(map), &mut palette).unwrap();
        save_bookings_csv(&matrix, &csvp).unwrap();
        let text = std::fs::read_to_string(&csvp).unwrap();
        // 2 hotels x 2 months + header
        assert_eq!(text.lines().count(), 5);
        assert!(text.contains("Hotel A,2024-02,0"));
        assert!(text.contains("Hotel B,2024-02,5"));
    }
}
