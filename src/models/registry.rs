use crate::error::Result;
use crate::models::Station;
use crate::readers::StationLoader;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Stations loaded so far, keyed by lower-cased name.
///
/// A failed load leaves any previously loaded dataset for that station
/// untouched.
#[derive(Debug, Default)]
pub struct StationRegistry {
    stations: BTreeMap<String, Station>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry_key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Load a station and register it, replacing an earlier dataset of the
    /// same name only on success.
    pub fn load(
        &mut self,
        loader: &StationLoader,
        directory: &str,
        station_name: &str,
    ) -> Result<&Station> {
        let station = loader.load(directory, station_name)?;
        Ok(self.insert(station))
    }

    pub fn insert(&mut self, station: Station) -> &Station {
        let key = Self::registry_key(station.name());
        if self.stations.contains_key(&key) {
            info!("Replacing previously loaded station '{}'", station.name());
        } else {
            debug!("Registering station '{}'", station.name());
        }

        self.stations.insert(key.clone(), station);
        &self.stations[&key]
    }

    pub fn get(&self, name: &str) -> Option<&Station> {
        self.stations.get(&Self::registry_key(name))
    }

    /// Display names of every registered station.
    pub fn names(&self) -> Vec<&str> {
        self.stations.values().map(Station::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
