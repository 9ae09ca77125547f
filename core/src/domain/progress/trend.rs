//! Least-squares weight trend.
//!
//! Samples are indexed 0..n in chronological order and treated as one per
//! day; gaps are not interpolated. The per-sample slope times seven is the
//! weekly rate.

use crate::domain::progress::{
    entities::BodyMeasurementSample,
    value_objects::{DateRange, TrendAnalysis},
};

pub const DAYS_PER_WEEK: f64 = 7.0;

/// OLS slope of `values` against their index. Zero for fewer than two
/// points or a degenerate denominator.
pub fn linear_slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let n = n as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) = values.iter().enumerate().fold(
        (0.0, 0.0, 0.0, 0.0),
        |(sx, sy, sxy, sxx), (i, y)| {
            let x = i as f64;
            (sx + x, sy + y, sxy + x * y, sxx + x * x)
        },
    );

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return 0.0;
    }

    (n * sum_xy - sum_x * sum_y) / denominator
}

pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (count, sum) = values
        .into_iter()
        .fold((0usize, 0.0), |(count, sum), v| (count + 1, sum + v));

    (count > 0).then(|| sum / count as f64)
}

/// Trend over `samples`, which must already be restricted to `range` and
/// sorted by date.
pub fn analyze(samples: &[BodyMeasurementSample], range: DateRange) -> TrendAnalysis {
    let weights: Vec<f64> = samples.iter().map(|s| s.weight_kg).collect();

    TrendAnalysis {
        start_date: range.start,
        end_date: range.end,
        sample_count: samples.len(),
        slope_kg_per_week: linear_slope(&weights) * DAYS_PER_WEEK,
        avg_weight_kg: mean(weights.iter().copied()),
        avg_body_fat_pct: mean(samples.iter().filter_map(|s| s.body_fat_pct)),
        avg_muscle_pct: mean(samples.iter().filter_map(|s| s.muscle_pct)),
        latest_weight_kg: weights.last().copied(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::progress::entities::Circumferences;

    fn series(start: NaiveDate, weights: &[f64]) -> Vec<BodyMeasurementSample> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| BodyMeasurementSample {
                user_id: Uuid::nil(),
                date: start.checked_add_days(Days::new(i as u64)).unwrap(),
                weight_kg: *w,
                body_fat_pct: None,
                muscle_pct: None,
                circumferences: Circumferences::default(),
                recorded_at: Utc::now(),
            })
            .collect()
    }

    #[test]
    fn steady_loss_of_200g_a_day_is_1_4_kg_a_week() {
        let start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let samples = series(start, &[80.0, 79.8, 79.6, 79.4]);
        let range = DateRange::ending_on(NaiveDate::from_ymd_opt(2025, 3, 4).unwrap(), 7);

        let trend = analyze(&samples, range);

        assert!((trend.slope_kg_per_week + 1.4).abs() < 1e-9);
        assert!((trend.avg_weight_kg.unwrap() - 79.7).abs() < 1e-9);
        assert_eq!(trend.latest_weight_kg, Some(79.4));
        assert_eq!(trend.avg_body_fat_pct, None);
    }

    #[test]
    fn sparse_series_have_zero_slope() {
        assert_eq!(linear_slope(&[]), 0.0);
        assert_eq!(linear_slope(&[72.5]), 0.0);

        let range = DateRange::ending_on(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(), 7);
        let empty = analyze(&[], range);
        assert_eq!(empty.slope_kg_per_week, 0.0);
        assert_eq!(empty.avg_weight_kg, None);
        assert_eq!(empty.sample_count, 0);
    }

    #[test]
    fn flat_series_has_zero_slope() {
        assert_eq!(linear_slope(&[70.0, 70.0, 70.0]), 0.0);
    }

    #[test]
    fn averages_ignore_missing_metrics() {
        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let mut samples = series(start, &[90.0, 89.0, 88.0]);
        samples[0].body_fat_pct = Some(30.0);
        samples[2].body_fat_pct = Some(28.0);
        samples[1].muscle_pct = Some(35.0);

        let trend = analyze(&samples, DateRange::ending_on(start, 3));

        assert_eq!(trend.avg_body_fat_pct, Some(29.0));
        assert_eq!(trend.avg_muscle_pct, Some(35.0));
        assert!((trend.slope_kg_per_week + 7.0).abs() < 1e-9);
    }

    #[test]
    fn window_includes_both_ends() {
        let end = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let range = DateRange::ending_on(end, 7);

        assert_eq!(range.start, NaiveDate::from_ymd_opt(2025, 6, 24).unwrap());
        assert!(range.contains(end));
        assert!(!range.contains(NaiveDate::from_ymd_opt(2025, 6, 23).unwrap()));
    }
}
