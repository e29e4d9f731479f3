use thiserror::Error;

pub mod openweather;

/// Why a weather query failed.
///
/// Every variant is recoverable from the user's point of view: fix the input,
/// or simply try again. A failure always replaces any previously shown result;
/// callers never keep a stale report next to an error.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The city name was empty after trimming. Raised before any request is
    /// sent.
    #[error("Please enter a city name.")]
    EmptyCity,

    /// The provider answered 404 for the given city on either endpoint.
    #[error("City not found. Try another city name.")]
    CityNotFound,

    /// Anything else: transport failure, provider outage, malformed payload.
    #[error("Something went wrong. Please try again.")]
    Transient(#[source] anyhow::Error),
}

impl QueryError {
    /// Full diagnostic text: the user-facing message, plus the underlying
    /// cause chain for transient failures.
    pub fn detail(&self) -> String {
        match self {
            QueryError::Transient(source) => format!("{self} ({source:#})"),
            _ => self.to_string(),
        }
    }
}
