//! Static lift and trail records
//!
//! Both collections are read once at startup and never mutated afterwards;
//! the resulting `ResortData` is shared read-only by every query.

mod types;

pub use types::{DanglingReference, Difficulty, Lift, LiftStatus, Trail, TrailStatus};

use crate::config::DataConfig;
use crate::error::{Result, SnowtoothError};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;

/// Immutable snapshot of every lift and trail
#[derive(Debug, Clone, Default)]
pub struct ResortData {
    lifts: Vec<Lift>,
    trails: Vec<Trail>,
}

impl ResortData {
    /// Create a snapshot from already-parsed records
    ///
    /// Ids must be unique within each collection. Cross references between
    /// lifts and trails are not checked here; see [`ResortData::dangling_references`].
    pub fn new(lifts: Vec<Lift>, trails: Vec<Trail>) -> Result<Self> {
        ensure_unique_ids("lift", lifts.iter().map(|lift| lift.id.as_str()))?;
        ensure_unique_ids("trail", trails.iter().map(|trail| trail.id.as_str()))?;

        Ok(Self { lifts, trails })
    }

    /// Load both data files named by the configuration
    pub fn load(config: &DataConfig) -> Result<Self> {
        tracing::info!("Loading lifts from {}", config.lifts);
        let lifts: Vec<Lift> = read_records(&config.lifts)?;

        tracing::info!("Loading trails from {}", config.trails);
        let trails: Vec<Trail> = read_records(&config.trails)?;

        let data = Self::new(lifts, trails)?;

        for reference in data.dangling_references() {
            tracing::warn!("Dangling reference: {}", reference);
        }

        tracing::info!(
            "Loaded {} lifts and {} trails",
            data.lifts.len(),
            data.trails.len()
        );

        Ok(data)
    }

    pub fn lifts(&self) -> &[Lift] {
        &self.lifts
    }

    pub fn trails(&self) -> &[Trail] {
        &self.trails
    }

    /// Every stored cross reference with no matching target, in collection order
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let lift_ids: HashSet<&str> = self.lifts.iter().map(|lift| lift.id.as_str()).collect();
        let trail_ids: HashSet<&str> = self.trails.iter().map(|trail| trail.id.as_str()).collect();

        let mut dangling = Vec::new();

        for lift in &self.lifts {
            for trail_id in lift.trails.iter().filter(|id| !trail_ids.contains(id.as_str())) {
                dangling.push(DanglingReference::Trail {
                    lift_id: lift.id.clone(),
                    trail_id: trail_id.clone(),
                });
            }
        }

        for trail in &self.trails {
            for lift_id in trail.lift.iter().filter(|id| !lift_ids.contains(id.as_str())) {
                dangling.push(DanglingReference::Lift {
                    trail_id: trail.id.clone(),
                    lift_id: lift_id.clone(),
                });
            }
        }

        dangling
    }
}

fn read_records<T: DeserializeOwned>(path: &str) -> Result<Vec<T>> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SnowtoothError::DataLoad(format!("Failed to read '{}': {}", path, e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| SnowtoothError::DataLoad(format!("Failed to parse '{}': {}", path, e)))
}

fn ensure_unique_ids<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SnowtoothError::DataLoad(format!("Duplicate {} id '{}'", kind, id)));
        }
    }
    Ok(())
}
