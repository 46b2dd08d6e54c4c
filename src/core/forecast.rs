use std::path::Path;

use chrono::{DateTime, Utc};

use crate::{core::CoreError, prelude::*, quantity::intensity::GramsPerKilowattHour};

/// One hour of forecasted grid carbon intensity.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    derive_more::Constructor,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct ForecastPoint {
    /// Hour offset from the start of the forecast.
    pub hour: u32,

    pub time: DateTime<Utc>,

    pub intensity: GramsPerKilowattHour,
}

impl ForecastPoint {
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        if self.intensity.is_valid() {
            Ok(())
        } else {
            Err(CoreError::InvalidArgument("intensity must be finite and non-negative"))
        }
    }
}

/// Reads a forecast from a JSON array of points, for mocked or recorded data.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<ForecastPoint>> {
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read `{}`", path.as_ref().display()))?;
    let points: Vec<ForecastPoint> =
        serde_json::from_str(&contents).context("failed to deserialize the forecast")?;
    for point in &points {
        point.validate()?;
    }
    info!(n_points = points.len(), "loaded");
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_point() -> Result {
        let point: ForecastPoint = serde_json::from_str(
            r#"{"hour": 3, "time": "2026-08-29T15:00:00Z", "intensity": 212.5}"#,
        )?;
        assert_eq!(point.hour, 3);
        assert_eq!(point.intensity, GramsPerKilowattHour::from(212.5));
        Ok(())
    }

    #[test]
    fn test_validate_rejects_negative() {
        let point = ForecastPoint::new(0, Utc::now(), GramsPerKilowattHour::from(-1.0));
        assert_eq!(
            point.validate(),
            Err(CoreError::InvalidArgument("intensity must be finite and non-negative")),
        );
    }
}
