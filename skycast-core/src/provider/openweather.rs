use anyhow::{Context, anyhow};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::{
    model::{CurrentConditions, ForecastPoint, WeatherKind, WeatherReport},
    outlook::midday_outlook,
    provider::QueryError,
};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// Client for the OpenWeather "current weather" and "5-day/3-hour forecast"
/// endpoints.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host. Tests use this to talk to a
    /// local mock server instead of the real API.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    /// Run one full weather query for a city: both endpoints concurrently,
    /// joined before anything is returned.
    ///
    /// A 404 from either endpoint means the provider does not know the city;
    /// any other failure on either side is transient. The two requests
    /// succeed or fail as a unit, so a report never carries partial data.
    pub async fn query(&self, city: &str) -> Result<WeatherReport, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::EmptyCity);
        }

        let (current, forecast) =
            tokio::try_join!(self.fetch_current(city), self.fetch_forecast(city))?;

        Ok(WeatherReport {
            current,
            outlook: midday_outlook(&forecast),
        })
    }

    async fn fetch_current(&self, city: &str) -> Result<CurrentConditions, QueryError> {
        let url = format!("{}/data/2.5/weather", self.base_url);
        let body = self.get_json(&url, city, "current weather").await?;

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .context("Failed to parse OpenWeather current JSON")
            .map_err(QueryError::Transient)?;

        let (kind, description) = primary_condition(&parsed.weather);

        Ok(CurrentConditions {
            location_name: parsed.name,
            country: parsed.sys.country,
            temperature_c: parsed.main.temp,
            feels_like_c: parsed.main.feels_like,
            temp_min_c: parsed.main.temp_min,
            temp_max_c: parsed.main.temp_max,
            humidity_pct: parsed.main.humidity,
            wind_speed_mps: parsed.wind.speed,
            pressure_hpa: parsed.main.pressure,
            kind,
            description,
        })
    }

    async fn fetch_forecast(&self, city: &str) -> Result<Vec<ForecastPoint>, QueryError> {
        let url = format!("{}/data/2.5/forecast", self.base_url);
        let body = self.get_json(&url, city, "5-day forecast").await?;

        let parsed: OwForecastResponse = serde_json::from_str(&body)
            .context("Failed to parse OpenWeather forecast JSON")
            .map_err(QueryError::Transient)?;

        let points = parsed
            .list
            .into_iter()
            .map(|entry| {
                let (kind, description) = primary_condition(&entry.weather);
                ForecastPoint {
                    timestamp: entry.dt_txt,
                    kind,
                    description,
                    temperature_c: entry.main.temp,
                    temp_min_c: entry.main.temp_min,
                    temp_max_c: entry.main.temp_max,
                }
            })
            .collect();

        Ok(points)
    }

    /// Shared GET plumbing for both endpoints: metric units, city as the `q`
    /// parameter, credential as `appid`. Returns the raw body on success.
    async fn get_json(&self, url: &str, city: &str, what: &str) -> Result<String, QueryError> {
        let res = self
            .http
            .get(url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .with_context(|| format!("Failed to send request to OpenWeather ({what})"))
            .map_err(QueryError::Transient)?;

        let status = res.status();
        let body = res
            .text()
            .await
            .with_context(|| format!("Failed to read OpenWeather {what} response body"))
            .map_err(QueryError::Transient)?;

        if status == StatusCode::NOT_FOUND {
            return Err(QueryError::CityNotFound);
        }

        if !status.is_success() {
            return Err(QueryError::Transient(anyhow!(
                "OpenWeather {what} request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        Ok(body)
    }
}

fn primary_condition(weather: &[OwWeather]) -> (WeatherKind, String) {
    weather.first().map_or_else(
        || (WeatherKind::Other, "Unknown".to_string()),
        |w| (WeatherKind::from(w.main.as_str()), w.description.clone()),
    )
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    feels_like: f64,
    temp_min: f64,
    temp_max: f64,
    humidity: u8,
    pressure: u32,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary so multibyte bodies slice cleanly.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
