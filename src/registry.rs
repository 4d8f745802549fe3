//! The set of tracked locations.
//!
//! The backing list is never mutated in place. Readers take a cheap `Arc`
//! snapshot and iterate it without holding any lock; writers build a new list
//! and swap it in, so a snapshot is always either fully old or fully new.
//!
//! Taking the snapshot itself is not lock-free: `snapshot()` holds the read lock
//! just long enough to clone the `Arc`, and waits while a writer copies the list
//! under the write lock. Lists here stay small, so that wait is a few clones.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Result, WeatherError};
use crate::models::Location;

#[derive(Debug)]
pub struct LocationRegistry {
    locations: RwLock<Arc<Vec<Location>>>,
}

impl Default for LocationRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl LocationRegistry {
    /// Creates a registry holding `locations`; later duplicates of an id are dropped
    pub fn new(locations: Vec<Location>) -> Self {
        let mut unique: Vec<Location> = Vec::with_capacity(locations.len());
        for location in locations {
            if !unique.iter().any(|l| l.id == location.id) {
                unique.push(location);
            }
        }
        Self {
            locations: RwLock::new(Arc::new(unique)),
        }
    }

    /// Registry seeded with San Francisco and New York City
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Location {
                id: 5391959,
                name: "San Francisco".to_string(),
                country: "United States".to_string(),
                timezone: "America/Los_Angeles".to_string(),
                latitude: 37.7749,
                longitude: -122.4194,
            },
            Location {
                id: 5128581,
                name: "New York City".to_string(),
                country: "United States".to_string(),
                timezone: "America/New_York".to_string(),
                latitude: 40.7128,
                longitude: -74.006,
            },
        ])
    }

    /// Immutable view of the current locations
    pub fn snapshot(&self) -> Arc<Vec<Location>> {
        self.locations.read().clone()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.snapshot().iter().any(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Appends `location` by installing a new list.
    ///
    /// Returns `false` and leaves the registry unchanged if the id is already tracked.
    pub fn add(&self, location: Location) -> bool {
        let mut guard = self.locations.write();
        if guard.iter().any(|l| l.id == location.id) {
            tracing::debug!("Location {} ({}) already tracked", location.name, location.id);
            return false;
        }

        tracing::info!("Tracking location {} ({})", location.name, location.id);
        let mut next = Vec::with_capacity(guard.len() + 1);
        next.extend(guard.iter().cloned());
        next.push(location);
        *guard = Arc::new(next);
        true
    }

    /// Removes the location with `id` by installing a new list without it
    pub fn remove(&self, id: i64) -> Result<Location> {
        let mut guard = self.locations.write();
        let Some(position) = guard.iter().position(|l| l.id == id) else {
            return Err(WeatherError::UnknownLocation { id });
        };

        let removed = guard[position].clone();
        let next: Vec<Location> = guard.iter().filter(|l| l.id != id).cloned().collect();
        *guard = Arc::new(next);

        tracing::info!("Stopped tracking location {} ({})", removed.name, id);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: i64, name: &str) -> Location {
        Location {
            id,
            name: name.to_string(),
            country: "Testland".to_string(),
            timezone: "UTC".to_string(),
            latitude: 1.0,
            longitude: 2.0,
        }
    }

    #[test]
    fn test_default_seed() {
        let registry = LocationRegistry::default();
        let ids: Vec<i64> = registry.snapshot().iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![5391959, 5128581]);
    }

    #[test]
    fn test_new_drops_duplicate_ids() {
        let registry = LocationRegistry::new(vec![
            location(1, "First"),
            location(1, "Again"),
            location(2, "Second"),
        ]);
        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].name, "First");
    }

    #[test]
    fn test_add_appends_and_rejects_duplicate_id() {
        let registry = LocationRegistry::new(vec![location(1, "One")]);
        assert!(registry.add(location(2, "Two")));
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(2));

        // Same coordinates and name are fine, same id is not
        assert!(!registry.add(location(2, "Two again")));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.snapshot()[1].name, "Two");
    }

    #[test]
    fn test_remove_present_id() {
        let registry = LocationRegistry::with_defaults();
        let removed = registry.remove(5128581).unwrap();
        assert_eq!(removed.name, "New York City");
        assert_eq!(registry.len(), 1);
        assert!(!registry.contains(5128581));
    }

    #[test]
    fn test_remove_absent_id_leaves_registry_unchanged() {
        let registry = LocationRegistry::with_defaults();
        let before = registry.snapshot();

        let err = registry.remove(42).unwrap_err();
        assert!(matches!(err, WeatherError::UnknownLocation { id: 42 }));

        let after = registry.snapshot();
        assert_eq!(*before, *after);
        assert!(Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_remove_on_empty_registry_reports_not_found() {
        let registry = LocationRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.remove(7).unwrap_err().is_not_found());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_mutations() {
        let registry = LocationRegistry::with_defaults();
        let snapshot = registry.snapshot();

        registry.add(location(3, "Three"));
        registry.remove(5391959).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].id, 5391959);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(3));
    }

    #[test]
    fn test_concurrent_adds_never_tear() {
        let registry = Arc::new(LocationRegistry::new(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        registry.add(location(t * 1000 + i, "Generated"));
                        let snapshot = registry.snapshot();
                        let mut ids: Vec<i64> = snapshot.iter().map(|l| l.id).collect();
                        ids.sort_unstable();
                        ids.dedup();
                        assert_eq!(ids.len(), snapshot.len());
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 400);
    }
}
