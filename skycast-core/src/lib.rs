//! Core library for the `skycast` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client that joins the current-conditions and
//!   5-day-forecast lookups into one query
//! - Midday sampling of the forecast series into a daily outlook
//! - Shared domain models
//!
//! It is used by `skycast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod outlook;
pub mod provider;

pub use config::Config;
pub use model::{CurrentConditions, ForecastEntry, ForecastPoint, WeatherKind, WeatherReport};
pub use outlook::midday_outlook;
pub use provider::{QueryError, openweather::OpenWeatherClient};
