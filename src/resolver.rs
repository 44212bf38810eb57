use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::error::SolarError;
use crate::types::Location;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("no location found for {0:?}")]
    NotFound(String),

    #[error("network error: {0}")]
    NetworkError(String),

    #[error("rate limited by the location service")]
    RateLimited,

    #[error("malformed gazetteer data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidLocation(#[from] SolarError),
}

pub trait LocationResolver {
    fn resolve_location(&self, place: &str) -> Result<Location, ResolveError>;
}

impl<R: LocationResolver + ?Sized> LocationResolver for &R {
    fn resolve_location(&self, place: &str) -> Result<Location, ResolveError> {
        (**self).resolve_location(place)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Gazetteer {
    places: HashMap<String, Location>,
}

#[derive(Deserialize)]
struct GazetteerEntry {
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    altitude_km: f64,
    city: Option<String>,
    region: Option<String>,
}

fn key(place: &str) -> String {
    place.trim().to_lowercase()
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, location: Location) {
        self.places.insert(key(name), location);
    }

    pub fn with_place(mut self, name: &str, location: Location) -> Self {
        self.insert(name, location);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ResolveError> {
        let entries: Vec<GazetteerEntry> = serde_json::from_str(json)?;
        let mut gazetteer = Self::new();
        for entry in entries {
            let mut location = Location::new(entry.latitude, entry.longitude, entry.altitude_km)?;
            location.city = entry.city;
            location.region = entry.region;
            gazetteer.insert(&entry.name, location);
        }
        Ok(gazetteer)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl LocationResolver for Gazetteer {
    fn resolve_location(&self, place: &str) -> Result<Location, ResolveError> {
        match self.places.get(&key(place)) {
            Some(location) => Ok(location.clone()),
            None => {
                warn!(place, "place not in gazetteer");
                Err(ResolveError::NotFound(place.to_string()))
            }
        }
    }
}
