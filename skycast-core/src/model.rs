use serde::{Deserialize, Serialize};

/// The small closed vocabulary OpenWeather uses for its `weather[0].main`
/// field. Anything outside it collapses into [`WeatherKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherKind {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Snow,
    Thunderstorm,
    Other,
}

impl WeatherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherKind::Clear => "Clear",
            WeatherKind::Clouds => "Clouds",
            WeatherKind::Rain => "Rain",
            WeatherKind::Drizzle => "Drizzle",
            WeatherKind::Snow => "Snow",
            WeatherKind::Thunderstorm => "Thunderstorm",
            WeatherKind::Other => "Other",
        }
    }
}

impl From<&str> for WeatherKind {
    fn from(value: &str) -> Self {
        match value {
            "Clear" => WeatherKind::Clear,
            "Clouds" => WeatherKind::Clouds,
            "Rain" => WeatherKind::Rain,
            "Drizzle" => WeatherKind::Drizzle,
            "Snow" => WeatherKind::Snow,
            "Thunderstorm" => WeatherKind::Thunderstorm,
            _ => WeatherKind::Other,
        }
    }
}

impl std::fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the conditions at one location at fetch time.
///
/// Built fresh on every successful query and replaced wholesale, never merged
/// with a previous snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub location_name: String,
    pub country: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: u8,
    pub wind_speed_mps: f64,
    pub pressure_hpa: u32,
    pub kind: WeatherKind,
    pub description: String,
}

/// One raw point of the 5-day/3-hour forecast series, as the provider
/// returned it. The timestamp stays the provider's literal
/// `YYYY-MM-DD HH:MM:SS` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub timestamp: String,
    pub kind: WeatherKind,
    pub description: String,
    pub temperature_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
}

/// One midday sample of the forecast series, selected by
/// [`crate::outlook::midday_outlook`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: String,
    pub kind: WeatherKind,
    pub description: String,
    pub temperature_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
}

impl From<ForecastPoint> for ForecastEntry {
    fn from(p: ForecastPoint) -> Self {
        ForecastEntry {
            timestamp: p.timestamp,
            kind: p.kind,
            description: p.description,
            temperature_c: p.temperature_c,
            temp_min_c: p.temp_min_c,
            temp_max_c: p.temp_max_c,
        }
    }
}

/// Everything one successful query produces: the current conditions plus the
/// sampled daily outlook. Both halves come from the same pair of requests;
/// there is no partial variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentConditions,
    pub outlook: Vec<ForecastEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_known_labels() {
        assert_eq!(WeatherKind::from("Clear"), WeatherKind::Clear);
        assert_eq!(WeatherKind::from("Thunderstorm"), WeatherKind::Thunderstorm);
        assert_eq!(WeatherKind::from("Drizzle"), WeatherKind::Drizzle);
    }

    #[test]
    fn kind_falls_back_to_other() {
        assert_eq!(WeatherKind::from("Mist"), WeatherKind::Other);
        assert_eq!(WeatherKind::from("clear"), WeatherKind::Other);
        assert_eq!(WeatherKind::from(""), WeatherKind::Other);
    }

    #[test]
    fn kind_display_matches_provider_label() {
        assert_eq!(WeatherKind::Snow.to_string(), "Snow");
    }
}
