//! Concurrent fan-out of weather fetches over the tracked locations.

use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::error::{Result, WeatherError};
use crate::fetcher::{WeatherFetcher, FETCH_ERROR_MESSAGE};
use crate::models::{CurrentConditions, Location, LocationWeather};
use crate::registry::LocationRegistry;

/// Receives fetch failures that were dropped from an aggregated result
pub trait ErrorSink: Send + Sync {
    fn report(&self, location: &Location, error: &WeatherError);
}

/// Default sink: one `error!` event per failed location
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorSink;

/// Underlying cause of `error`, or its own rendering when it has no source
fn cause_of(error: &WeatherError) -> String {
    std::error::Error::source(error)
        .map(|source| source.to_string())
        .unwrap_or_else(|| error.to_string())
}

impl ErrorSink for TracingErrorSink {
    fn report(&self, location: &Location, error: &WeatherError) {
        let cause = cause_of(error);
        tracing::error!(
            location_id = location.id,
            location = %location.name,
            cause = %cause,
            "{}",
            error.message()
        );
    }
}

pub struct WeatherAggregator {
    registry: Arc<LocationRegistry>,
    fetcher: Arc<dyn WeatherFetcher>,
    error_sink: Arc<dyn ErrorSink>,
    fetch_timeout: Duration,
}

impl WeatherAggregator {
    pub fn new(
        registry: Arc<LocationRegistry>,
        fetcher: Arc<dyn WeatherFetcher>,
        error_sink: Arc<dyn ErrorSink>,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            fetcher,
            error_sink,
            fetch_timeout,
        }
    }

    /// Current conditions for every tracked location that could be fetched.
    ///
    /// All fetches run concurrently against one registry snapshot and are awaited
    /// together. Failures go to the error sink and are left out; the output keeps
    /// snapshot order and is empty when every fetch fails.
    pub async fn get_all(&self) -> Vec<LocationWeather> {
        let snapshot = self.registry.snapshot();
        tracing::debug!("Fetching weather for {} locations", snapshot.len());

        let outcomes = join_all(snapshot.iter().map(|location| self.fetch_one(location))).await;

        let mut results = Vec::with_capacity(outcomes.len());
        for (location, outcome) in snapshot.iter().zip(outcomes) {
            match outcome {
                Ok(weather) => results.push(LocationWeather {
                    location: location.clone(),
                    weather,
                }),
                Err(e) => self.error_sink.report(location, &e),
            }
        }

        tracing::info!(
            "Fetched weather for {}/{} locations",
            results.len(),
            snapshot.len()
        );
        results
    }

    async fn fetch_one(&self, location: &Location) -> Result<CurrentConditions> {
        match tokio::time::timeout(self.fetch_timeout, self.fetcher.fetch(location)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(WeatherError::Timeout {
                message: FETCH_ERROR_MESSAGE.to_string(),
                after: self.fetch_timeout,
            }),
        }
    }
}
