//! [Carbon Intensity API](https://carbonintensity.org.uk) client for the GB grid.

use chrono::{DateTime, NaiveDateTime, Utc};
use itertools::Itertools;
use reqwest::Url;
use serde::{Deserialize, Deserializer, de};

use crate::{core::ForecastPoint, prelude::*, quantity::intensity::GramsPerKilowattHour};

pub struct Client {
    client: reqwest::Client,
    base_url: Url,
}

impl Client {
    pub fn try_new(base_url: Url) -> Result<Self> {
        Ok(Self { client: reqwest::Client::builder().build()?, base_url })
    }

    /// Fetches the 48-hour forecast and resamples its half-hour settlement
    /// periods into hourly points, `hour` counting from the first period.
    #[instrument(name = "Fetching the intensity forecast…", fields(from = %from), skip_all)]
    pub async fn get_forecast(&self, from: DateTime<Utc>) -> Result<Vec<ForecastPoint>> {
        let url = self
            .base_url
            .join(&format!("intensity/{}/fw48h", from.format("%Y-%m-%dT%H:%MZ")))
            .context("failed to build the forecast URL")?;
        let response: GetForecastResponse = self
            .client
            .get(url)
            .send()
            .await
            .context("failed to call")?
            .error_for_status()
            .context("request failed")?
            .json()
            .await
            .context("failed to deserialize the response")?;
        let points = resample_hourly(response.data);
        for point in &points {
            point.validate()?;
        }
        info!(n_points = points.len(), "fetched");
        Ok(points)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn resample_hourly(periods: Vec<Period>) -> Vec<ForecastPoint> {
    periods
        .into_iter()
        .tuples()
        .enumerate()
        .map(|(hour, (first, second))| {
            let intensity = (first.intensity.forecast + second.intensity.forecast) / 2.0;
            ForecastPoint::new(hour as u32, first.from, intensity)
        })
        .collect()
}

#[derive(Deserialize)]
struct GetForecastResponse {
    data: Vec<Period>,
}

#[derive(Deserialize)]
struct Period {
    #[serde(deserialize_with = "Period::deserialize_time")]
    from: DateTime<Utc>,

    intensity: PeriodIntensity,
}

impl Period {
    /// The API emits timestamps without seconds, for example `2018-01-20T12:00Z`.
    fn deserialize_time<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let timestamp = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%dT%H:%MZ")
            .map(|time| time.and_utc())
            .map_err(|_| {
                de::Error::invalid_value(de::Unexpected::Str(&timestamp), &"a valid timestamp")
            })
    }
}

#[derive(Deserialize)]
struct PeriodIntensity {
    forecast: GramsPerKilowattHour,
}
