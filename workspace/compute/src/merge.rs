use chrono::NaiveDate;
use model::{IntervalPoint, SeriesPoint};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// One row of the results chart. Every field except the timestamp may be
/// absent: a row exists as soon as any input series has a value there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartRow {
    pub timestamp: NaiveDate,
    pub actual: Option<f64>,
    pub prediction_a: Option<f64>,
    pub prediction_b: Option<f64>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

impl ChartRow {
    fn empty(timestamp: NaiveDate) -> Self {
        Self {
            timestamp,
            actual: None,
            prediction_a: None,
            prediction_b: None,
            lower_bound: None,
            upper_bound: None,
        }
    }

    fn slot(&mut self, column: Column) -> &mut Option<f64> {
        match column {
            Column::Actual => &mut self.actual,
            Column::PredictionA => &mut self.prediction_a,
            Column::PredictionB => &mut self.prediction_b,
            Column::LowerBound => &mut self.lower_bound,
            Column::UpperBound => &mut self.upper_bound,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Column {
    Actual,
    PredictionA,
    PredictionB,
    LowerBound,
    UpperBound,
}

#[derive(Default)]
struct RowIndex {
    rows: BTreeMap<NaiveDate, ChartRow>,
    duplicates: usize,
}

impl RowIndex {
    /// The first value seen for a (timestamp, column) pair wins.
    fn fill(&mut self, timestamp: NaiveDate, column: Column, value: f64) {
        let slot = self
            .rows
            .entry(timestamp)
            .or_insert_with(|| ChartRow::empty(timestamp))
            .slot(column);
        if slot.is_none() {
            *slot = Some(value);
        } else {
            self.duplicates += 1;
        }
    }

    fn fill_series(&mut self, series: &[SeriesPoint], column: Column) {
        for point in series {
            self.fill(point.timestamp(), column, point.value());
        }
    }
}

/// Left-joins the chart series on their timestamps.
///
/// The output holds exactly one row per distinct timestamp found in any
/// input, in chronological order. Series of different lengths are fine;
/// missing values stay `None` rather than becoming zero.
#[instrument(skip_all, fields(actual = actual.len(), prediction_a = prediction_a.len(), prediction_b = prediction_b.len(), bounds = bounds.len()))]
pub fn merge_series_for_chart(
    actual: &[SeriesPoint],
    prediction_a: &[SeriesPoint],
    prediction_b: &[SeriesPoint],
    bounds: &[IntervalPoint],
) -> Vec<ChartRow> {
    let mut index = RowIndex::default();

    index.fill_series(actual, Column::Actual);
    index.fill_series(prediction_a, Column::PredictionA);
    index.fill_series(prediction_b, Column::PredictionB);
    for interval in bounds {
        index.fill(interval.timestamp, Column::LowerBound, interval.lower);
        index.fill(interval.timestamp, Column::UpperBound, interval.upper);
    }

    if index.duplicates > 0 {
        debug!(duplicates = index.duplicates, "Ignored repeated timestamps while merging series");
    }

    index.rows.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    fn series(points: &[(i32, u32, f64)]) -> Vec<SeriesPoint> {
        points
            .iter()
            .map(|&(year, month, value)| SeriesPoint::new(date(year, month), value).unwrap())
            .collect()
    }

    #[test]
    fn test_series_of_different_lengths() {
        let short = series(&[(2024, 1, 1.0), (2024, 2, 2.0), (2024, 3, 3.0)]);
        let long = series(&[
            (2024, 1, 10.0),
            (2024, 2, 20.0),
            (2024, 3, 30.0),
            (2024, 4, 40.0),
            (2024, 5, 50.0),
            (2024, 6, 60.0),
        ]);

        let rows = merge_series_for_chart(&[], &short, &long, &[]);

        assert_eq!(rows.len(), 6);
        for row in &rows[3..] {
            assert_eq!(row.prediction_a, None);
            assert!(row.prediction_b.is_some());
        }
        assert_eq!(rows[0].prediction_a, Some(1.0));
        assert_eq!(rows[5].prediction_b, Some(60.0));
    }

    #[test]
    fn test_rows_are_chronological_and_distinct() {
        let actual = series(&[(2023, 12, 5800.0), (2023, 10, 4800.0), (2023, 11, 5200.0)]);
        let predicted = series(&[(2024, 2, 6500.0), (2023, 11, 5150.0), (2024, 1, 6200.0)]);
        let bounds = vec![IntervalPoint {
            timestamp: date(2024, 3),
            lower: 6200.0,
            upper: 7400.0,
        }];

        let rows = merge_series_for_chart(&actual, &predicted, &[], &bounds);

        let timestamps: Vec<NaiveDate> = rows.iter().map(|r| r.timestamp).collect();
        assert_eq!(
            timestamps,
            vec![date(2023, 10), date(2023, 11), date(2023, 12), date(2024, 1), date(2024, 2), date(2024, 3)]
        );
        assert_eq!(rows[1].actual, Some(5200.0));
        assert_eq!(rows[1].prediction_a, Some(5150.0));
        assert_eq!(rows[3].actual, None);
        assert_eq!(rows[5].lower_bound, Some(6200.0));
        assert_eq!(rows[5].prediction_a, None);
    }

    #[test]
    fn test_output_length_matches_distinct_timestamps() {
        let a = series(&[(2024, 1, 1.0), (2024, 3, 1.0), (2024, 5, 1.0)]);
        let b = series(&[(2024, 2, 1.0), (2024, 3, 1.0)]);
        let c = series(&[(2024, 5, 1.0), (2024, 7, 1.0)]);

        let rows = merge_series_for_chart(&a, &b, &c, &[]);
        // 1, 2, 3, 5, 7
        assert_eq!(rows.len(), 5);
    }

    #[test]
    fn test_duplicate_timestamp_first_wins() {
        let actual = series(&[(2024, 1, 100.0), (2024, 1, 999.0)]);
        let rows = merge_series_for_chart(&actual, &[], &[], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].actual, Some(100.0));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_series_for_chart(&[], &[], &[], &[]).is_empty());
    }
}
