//! Error taxonomy shared by the registry, the upstream clients and the workflows.

use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeatherError>;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Geocoding returned no match for the given name
    #[error("Location not found: {name}")]
    LocationNotFound { name: String },

    /// No tracked location carries this identifier
    #[error("Location not found: {id}")]
    UnknownLocation { id: i64 },

    /// Network, DNS, timeout or non-success status from an upstream service
    #[error("{message}: {source}")]
    Transport {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream body was not valid JSON or did not match the expected schema
    #[error("{message}: {source}")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// A fetch did not settle before its deadline
    #[error("{message}: timed out after {}s", .after.as_secs_f64())]
    Timeout { message: String, after: Duration },
}

impl WeatherError {
    pub fn transport<S: Into<String>>(message: S, source: reqwest::Error) -> Self {
        Self::Transport {
            message: message.into(),
            source,
        }
    }

    pub fn decode<S: Into<String>>(message: S, source: serde_json::Error) -> Self {
        Self::Decode {
            message: message.into(),
            source,
        }
    }

    /// True for the two not-found variants, which callers treat as bad input
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::LocationNotFound { .. } | Self::UnknownLocation { .. }
        )
    }

    /// Human-readable context without the underlying cause
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::LocationNotFound { name } => format!("Location not found: {name}"),
            Self::UnknownLocation { id } => format!("Location not found: {id}"),
            Self::Transport { message, .. }
            | Self::Decode { message, .. }
            | Self::Timeout { message, .. } => message.clone(),
        }
    }
}
