//! Resolver set for the lift and trail queries
//!
//! Every operation here is a synchronous read over the injected
//! [`ResortData`] snapshot. The GraphQL field wiring in `query` and `objects`
//! only converts arguments and results; the semantics live here.

use crate::data::{Lift, LiftStatus, ResortData, Trail, TrailStatus};
use std::sync::Arc;

/// Query operations over one immutable data snapshot
#[derive(Debug, Clone)]
pub struct Resolvers {
    data: Arc<ResortData>,
}

impl Resolvers {
    pub fn new(data: Arc<ResortData>) -> Self {
        Self { data }
    }

    pub fn data(&self) -> &ResortData {
        &self.data
    }

    /// `allLifts`: every lift, unfiltered
    pub fn all_lifts(&self) -> &[Lift] {
        self.data.lifts()
    }

    /// `LiftCount`: total when `status` is absent, otherwise lifts with exactly that status
    pub fn lift_count(&self, status: Option<LiftStatus>) -> usize {
        match status {
            None => self.data.lifts().len(),
            Some(status) => self
                .data
                .lifts()
                .iter()
                .filter(|lift| lift.status == Some(status))
                .count(),
        }
    }

    /// `findLiftById`: first lift with an exactly matching id
    pub fn find_lift_by_id(&self, id: &str) -> Option<&Lift> {
        tracing::debug!("Looking up lift '{}'", id);
        self.data.lifts().iter().find(|lift| lift.id == id)
    }

    /// `allTrails`: every trail, or only those with `status`
    pub fn all_trails(&self, status: Option<TrailStatus>) -> Vec<&Trail> {
        self.data
            .trails()
            .iter()
            .filter(|trail| status.map_or(true, |status| trail.status == status))
            .collect()
    }

    /// `trailCount`: trails with exactly that status
    pub fn trail_count(&self, status: TrailStatus) -> usize {
        self.data
            .trails()
            .iter()
            .filter(|trail| trail.status == status)
            .count()
    }

    /// `findTrailByID`: first trail with an exactly matching id
    pub fn find_trail_by_id(&self, id: &str) -> Option<&Trail> {
        tracing::debug!("Looking up trail '{}'", id);
        self.data.trails().iter().find(|trail| trail.id == id)
    }

    /// `Lift.trailAccess`
    pub fn trail_access(&self, lift: &Lift) -> Vec<&Trail> {
        trail_access(&lift.trails, self.data.trails())
    }

    /// `Trail.accessedByLifts`
    pub fn accessed_by_lifts(&self, trail: &Trail) -> Vec<&Lift> {
        accessed_by_lifts(&trail.lift, self.data.lifts())
    }
}

/// Trails named by `trail_ids`, in the order listed
///
/// Ids without a matching trail are skipped.
pub fn trail_access<'a>(trail_ids: &[String], trails: &'a [Trail]) -> Vec<&'a Trail> {
    trail_ids
        .iter()
        .filter_map(|id| trails.iter().find(|trail| &trail.id == id))
        .collect()
}

/// Lifts named by `lift_ids`, in the order listed
///
/// Ids without a matching lift are skipped.
pub fn accessed_by_lifts<'a>(lift_ids: &[String], lifts: &'a [Lift]) -> Vec<&'a Lift> {
    lift_ids
        .iter()
        .filter_map(|id| lifts.iter().find(|lift| &lift.id == id))
        .collect()
}
