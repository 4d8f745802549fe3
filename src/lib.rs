//! Weather for a mutable set of tracked locations.
//!
//! Locations are held in a copy-on-write [`LocationRegistry`], added by name through
//! Open-Meteo geocoding, and reported on together by a [`WeatherAggregator`] that
//! tolerates individual upstream failures.

pub mod aggregator;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetcher;
pub mod formatters;
pub mod geocoding;
pub mod models;
pub mod registry;
pub mod service;
pub mod weather_codes;
pub mod workflow;

pub use aggregator::{ErrorSink, TracingErrorSink, WeatherAggregator};
pub use client::OpenMeteoClient;
pub use config::Config;
pub use error::{Result, WeatherError};
pub use fetcher::WeatherFetcher;
pub use geocoding::GeocodingResolver;
pub use models::{CurrentConditions, Location, LocationWeather};
pub use registry::LocationRegistry;
pub use service::Weather;
pub use workflow::AddLocationWorkflow;
