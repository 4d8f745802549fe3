//! Adding a location by name: geocode, register, then fetch its weather.

use std::sync::Arc;

use crate::error::Result;
use crate::fetcher::WeatherFetcher;
use crate::geocoding::GeocodingResolver;
use crate::models::LocationWeather;
use crate::registry::LocationRegistry;

pub struct AddLocationWorkflow {
    resolver: Arc<dyn GeocodingResolver>,
    registry: Arc<LocationRegistry>,
    fetcher: Arc<dyn WeatherFetcher>,
}

impl AddLocationWorkflow {
    pub fn new(
        resolver: Arc<dyn GeocodingResolver>,
        registry: Arc<LocationRegistry>,
        fetcher: Arc<dyn WeatherFetcher>,
    ) -> Self {
        Self {
            resolver,
            registry,
            fetcher,
        }
    }

    /// Resolves `name`, starts tracking it, and returns its current weather.
    ///
    /// A geocoding failure leaves the registry untouched. Once resolution succeeds
    /// the location stays registered even if the weather fetch then fails, so an
    /// error from this call does not mean the location is absent.
    pub async fn add_location(&self, name: &str) -> Result<LocationWeather> {
        let location = self.resolver.resolve(name).await?;

        if !self.registry.add(location.clone()) {
            tracing::debug!(
                "Location {} ({}) resolved from {:?} is already tracked",
                location.name,
                location.id,
                name
            );
        }

        let weather = self.fetcher.fetch(&location).await.inspect_err(|e| {
            tracing::warn!(
                "Location {} ({}) was registered but its weather fetch failed: {}",
                location.name,
                location.id,
                e
            );
        })?;

        Ok(LocationWeather { location, weather })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::tests::FakeFetcher;
    use crate::error::WeatherError;
    use crate::models::Location;
    use async_trait::async_trait;
    use std::collections::HashMap;

    const PARIS_ID: i64 = 2988507;

    /// Resolves names from a fixed table; anything else is not found
    struct FakeResolver {
        known: HashMap<String, Location>,
    }

    impl FakeResolver {
        fn with_paris() -> Self {
            let paris = Location {
                id: PARIS_ID,
                name: "Paris".to_string(),
                country: "France".to_string(),
                timezone: "Europe/Paris".to_string(),
                latitude: 48.85341,
                longitude: 2.3488,
            };
            Self {
                known: HashMap::from([("Paris".to_string(), paris)]),
            }
        }
    }

    #[async_trait]
    impl GeocodingResolver for FakeResolver {
        async fn resolve(&self, name: &str) -> Result<Location> {
            self.known
                .get(name)
                .cloned()
                .ok_or_else(|| WeatherError::LocationNotFound {
                    name: name.to_string(),
                })
        }
    }

    fn workflow(
        registry: Arc<LocationRegistry>,
        fetcher: Arc<FakeFetcher>,
    ) -> AddLocationWorkflow {
        AddLocationWorkflow::new(Arc::new(FakeResolver::with_paris()), registry, fetcher)
    }

    #[tokio::test]
    async fn test_add_location_success() {
        let registry = Arc::new(LocationRegistry::with_defaults());
        let workflow = workflow(registry.clone(), Arc::new(FakeFetcher::default()));

        let added = workflow.add_location("Paris").await.unwrap();

        assert_eq!(added.location.id, PARIS_ID);
        assert_eq!(added.weather.temperature, 48.85341);
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.snapshot()[2].name, "Paris");
    }

    #[tokio::test]
    async fn test_unknown_name_leaves_registry_unchanged() {
        let registry = Arc::new(LocationRegistry::with_defaults());
        let fetcher = Arc::new(FakeFetcher::default());
        let workflow = workflow(registry.clone(), fetcher.clone());
        let before = registry.len();

        let err = workflow.add_location("Nowhereville").await.unwrap_err();

        assert!(matches!(err, WeatherError::LocationNotFound { ref name } if name == "Nowhereville"));
        assert!(err.to_string().contains("Nowhereville"));
        assert_eq!(registry.len(), before);
        assert!(fetcher.calls.lock().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_after_registration_keeps_location() {
        let registry = Arc::new(LocationRegistry::with_defaults());
        let workflow = workflow(registry.clone(), Arc::new(FakeFetcher::failing(&[PARIS_ID])));
        let before = registry.len();

        let result = workflow.add_location("Paris").await;

        // The call reports failure, yet Paris is tracked from now on
        let err = result.unwrap_err();
        assert!(matches!(err, WeatherError::Transport { .. }));
        assert_eq!(registry.len(), before + 1);
        assert!(registry.contains(PARIS_ID));
    }

    #[tokio::test]
    async fn test_adding_same_place_twice_keeps_ids_unique() {
        let registry = Arc::new(LocationRegistry::with_defaults());
        let fetcher = Arc::new(FakeFetcher::default());
        let workflow = workflow(registry.clone(), fetcher.clone());

        workflow.add_location("Paris").await.unwrap();
        let again = workflow.add_location("Paris").await.unwrap();

        // The repeat is not registered twice but still reports fresh weather
        assert_eq!(again.location.id, PARIS_ID);
        assert_eq!(registry.len(), 3);
        assert_eq!(*fetcher.calls.lock(), vec![PARIS_ID, PARIS_ID]);
    }
}
