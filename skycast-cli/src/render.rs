//! Human-friendly terminal output for a weather report.

use chrono::{Local, NaiveDateTime};
use skycast_core::{CurrentConditions, ForecastEntry, WeatherKind, WeatherReport};
use std::fmt::Write;

pub fn report(report: &WeatherReport) -> String {
    let mut out = current_block(&report.current);

    if !report.outlook.is_empty() {
        out.push('\n');
        out.push_str(&outlook_block(&report.outlook));
    }

    out
}

fn current_block(current: &CurrentConditions) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}, {} — {}",
        current.location_name,
        current.country,
        Local::now().format("%A %H:%M"),
    );
    let _ = writeln!(
        out,
        "  {}°C (feels like {}°C)",
        round(current.temperature_c),
        round(current.feels_like_c),
    );
    let _ = writeln!(
        out,
        "  {} — {} {}",
        current.kind,
        current.description,
        glyph(current.kind),
    );
    let _ = writeln!(
        out,
        "  Humidity {}%   Wind {} m/s   Pressure {} hPa   Min/Max {}°/{}°",
        current.humidity_pct,
        current.wind_speed_mps,
        current.pressure_hpa,
        round(current.temp_min_c),
        round(current.temp_max_c),
    );

    out
}

fn outlook_block(outlook: &[ForecastEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "5-day forecast");

    for entry in outlook {
        let _ = writeln!(
            out,
            "  {:<4} {}  {:>3}°C  {}°/{}°  {}",
            weekday(&entry.timestamp),
            glyph(entry.kind),
            round(entry.temperature_c),
            round(entry.temp_min_c),
            round(entry.temp_max_c),
            entry.description,
        );
    }

    out
}

fn glyph(kind: WeatherKind) -> &'static str {
    match kind {
        WeatherKind::Rain => "🌧️",
        WeatherKind::Clouds => "☁️",
        WeatherKind::Clear => "☀️",
        WeatherKind::Snow => "❄️",
        WeatherKind::Thunderstorm => "⛈️",
        WeatherKind::Drizzle => "🌦️",
        WeatherKind::Other => "🌤️",
    }
}

fn round(temp: f64) -> i64 {
    temp.round() as i64
}

/// Short weekday name from the provider's literal `YYYY-MM-DD HH:MM:SS`
/// stamp; an unparseable stamp falls back to its date half rather than
/// erroring.
fn weekday(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").map_or_else(
        |_| {
            timestamp
                .split_whitespace()
                .next()
                .unwrap_or(timestamp)
                .to_string()
        },
        |dt| dt.format("%a").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chennai_conditions() -> CurrentConditions {
        CurrentConditions {
            location_name: "Chennai".to_string(),
            country: "IN".to_string(),
            temperature_c: 30.4,
            feels_like_c: 33.2,
            temp_min_c: 29.0,
            temp_max_c: 31.5,
            humidity_pct: 70,
            wind_speed_mps: 4.1,
            pressure_hpa: 1008,
            kind: WeatherKind::Clear,
            description: "clear sky".to_string(),
        }
    }

    #[test]
    fn temperatures_render_rounded() {
        assert_eq!(round(30.4), 30);
        assert_eq!(round(30.5), 31);
        assert_eq!(round(-0.4), 0);
    }

    #[test]
    fn current_block_shows_rounded_temp_and_kind() {
        let out = current_block(&chennai_conditions());

        assert!(out.contains("Chennai, IN"));
        assert!(out.contains("30°C (feels like 33°C)"));
        assert!(out.contains("Clear — clear sky"));
        assert!(out.contains("Humidity 70%"));
        assert!(out.contains("Min/Max 29°/32°"));
    }

    #[test]
    fn glyph_covers_the_whole_vocabulary() {
        assert_eq!(glyph(WeatherKind::Rain), "🌧️");
        assert_eq!(glyph(WeatherKind::Clear), "☀️");
        assert_eq!(glyph(WeatherKind::Other), "🌤️");
    }

    #[test]
    fn weekday_from_forecast_stamp() {
        // 2025-03-10 is a Monday.
        assert_eq!(weekday("2025-03-10 12:00:00"), "Mon");
    }

    #[test]
    fn weekday_falls_back_to_date_text() {
        assert_eq!(weekday("2025-03-XX 12:00:00"), "2025-03-XX");
    }

    #[test]
    fn outlook_lists_each_entry() {
        let entry = ForecastEntry {
            timestamp: "2025-03-11 12:00:00".to_string(),
            kind: WeatherKind::Rain,
            description: "light rain".to_string(),
            temperature_c: 22.6,
            temp_min_c: 20.2,
            temp_max_c: 24.8,
        };

        let out = outlook_block(&[entry]);
        assert!(out.starts_with("5-day forecast"));
        assert!(out.contains("Tue"));
        assert!(out.contains("23°C"));
        assert!(out.contains("20°/25°"));
        assert!(out.contains("light rain"));
    }

    #[test]
    fn report_without_outlook_has_no_forecast_section() {
        let report = WeatherReport {
            current: chennai_conditions(),
            outlook: vec![],
        };
        assert!(!super::report(&report).contains("5-day forecast"));
    }
}
