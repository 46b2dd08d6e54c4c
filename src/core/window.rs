use chrono::{DateTime, Utc};
use itertools::Itertools;
use ordered_float::OrderedFloat;

use crate::{
    core::{CoreError, ForecastPoint},
    prelude::*,
    quantity::intensity::GramsPerKilowattHour,
};

/// A contiguous run of forecast hours, scored by its mean intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub start_hour: u32,
    pub start_time: DateTime<Utc>,
    pub average_intensity: GramsPerKilowattHour,
}

/// The ranked greenest windows, plus the baseline of starting right away.
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Ascending by average intensity, at most the requested count.
    pub windows: Vec<Window>,

    /// Mean intensity of the window starting at the first forecast point.
    pub immediate_average: GramsPerKilowattHour,
}

impl Selection {
    /// Percentage saved by deferring the workload into the given window
    /// instead of starting immediately.
    pub fn savings_percent(&self, window: &Window) -> Result<f64, CoreError> {
        if self.immediate_average == GramsPerKilowattHour::ZERO {
            return Err(CoreError::DivisionByZero);
        }
        Ok((self.immediate_average.0 - window.average_intensity.0) / self.immediate_average.0
            * 100.0)
    }
}

/// Ranks every contiguous `duration`-hour window of the forecast by its mean
/// carbon intensity, ascending, and returns the best `top_n` of them.
///
/// Every index up to `points.len() - duration` starts a candidate window, so
/// there are `points.len() - duration + 1` candidates. Ties are broken by the
/// earliest start hour to keep the ranking deterministic. A `top_n` larger
/// than the number of candidates is not an error; `top_n == 0` yields an
/// empty selection.
#[instrument(skip_all, fields(n_points = points.len(), duration, top_n))]
pub fn select_top_windows(
    points: &[ForecastPoint],
    duration: usize,
    top_n: usize,
) -> Result<Selection, CoreError> {
    if duration == 0 {
        return Err(CoreError::InvalidArgument("window duration must be at least 1 hour"));
    }
    if points.len() < duration {
        return Err(CoreError::InsufficientData { needed: duration, actual: points.len() });
    }
    for point in points {
        point.validate()?;
    }

    #[allow(clippy::cast_precision_loss)]
    let average = |window: &[ForecastPoint]| {
        window.iter().map(|point| point.intensity.0).sum::<f64>() / duration as f64
    };

    let immediate_average = GramsPerKilowattHour::from(average(&points[..duration]));

    let windows = points
        .windows(duration)
        .map(|window| Window {
            start_hour: window[0].hour,
            start_time: window[0].time,
            average_intensity: GramsPerKilowattHour::from(average(window)),
        })
        .sorted_by_key(|window| (OrderedFloat(window.average_intensity.0), window.start_hour))
        .take(top_n)
        .collect();

    trace!(immediate_average = %immediate_average, "selected");
    Ok(Selection { windows, immediate_average })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn hourly(intensities: &[f64]) -> Vec<ForecastPoint> {
        let start = DateTime::from_timestamp(1_756_425_600, 0).unwrap();
        intensities
            .iter()
            .enumerate()
            .map(|(hour, intensity)| {
                #[allow(clippy::cast_possible_truncation)]
                ForecastPoint::new(
                    hour as u32,
                    start + chrono::TimeDelta::hours(hour as i64),
                    GramsPerKilowattHour::from(*intensity),
                )
            })
            .collect()
    }

    #[test]
    fn test_ranking() -> Result {
        let points = hourly(&[100.0, 80.0, 60.0, 90.0, 70.0, 50.0]);
        let selection = select_top_windows(&points, 4, 2)?;

        assert_eq!(selection.windows.len(), 2);
        assert_eq!(selection.windows[0].start_hour, 2);
        assert_abs_diff_eq!(selection.windows[0].average_intensity.0, 67.5);
        assert_eq!(selection.windows[1].start_hour, 1);
        assert_abs_diff_eq!(selection.windows[1].average_intensity.0, 75.0);
        assert_abs_diff_eq!(selection.immediate_average.0, 82.5);

        let savings = selection.savings_percent(&selection.windows[0])?;
        assert_abs_diff_eq!(savings, (82.5 - 67.5) / 82.5 * 100.0);
        Ok(())
    }

    #[test]
    fn test_window_count() -> Result {
        let points = hourly(&[10.0, 20.0, 30.0, 40.0]);
        // 3 candidates, all requested:
        assert_eq!(select_top_windows(&points, 2, 10)?.windows.len(), 3);
        assert_eq!(select_top_windows(&points, 2, 0)?.windows.len(), 0);
        Ok(())
    }

    #[test]
    fn test_tie_break_prefers_earliest() -> Result {
        let points = hourly(&[50.0, 50.0, 50.0]);
        let selection = select_top_windows(&points, 1, 3)?;
        let start_hours: Vec<_> =
            selection.windows.iter().map(|window| window.start_hour).collect();
        assert_eq!(start_hours, [0, 1, 2]);
        Ok(())
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(
            select_top_windows(&hourly(&[1.0]), 0, 1),
            Err(CoreError::InvalidArgument("window duration must be at least 1 hour")),
        );
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            select_top_windows(&hourly(&[1.0, 2.0]), 3, 1),
            Err(CoreError::InsufficientData { needed: 3, actual: 2 }),
        );
    }

    #[test]
    fn test_non_finite_intensity() {
        let points = hourly(&[1.0, f64::NAN]);
        assert!(matches!(
            select_top_windows(&points, 1, 1),
            Err(CoreError::InvalidArgument(_)),
        ));
    }

    #[test]
    fn test_zero_immediate_average() -> Result {
        let selection = select_top_windows(&hourly(&[0.0, 0.0]), 2, 1)?;
        assert_eq!(
            selection.savings_percent(&selection.windows[0]),
            Err(CoreError::DivisionByZero),
        );
        Ok(())
    }

    #[test]
    fn test_idempotent() -> Result {
        let points = hourly(&[30.0, 10.0, 20.0, 40.0]);
        assert_eq!(select_top_windows(&points, 2, 2)?, select_top_windows(&points, 2, 2)?);
        Ok(())
    }
}
