//! Immutable record of a single fired shot.

use crate::common::ShotOutcome;
use crate::grid::Coordinate;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// One resolved shot: who fired, where, with what outcome, and when.
/// Created at resolution time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    shooter: String,
    coordinate: Coordinate,
    result: ShotOutcome,
    fired_at: SystemTime,
}

impl Shot {
    pub fn new(shooter: impl Into<String>, coordinate: Coordinate, result: ShotOutcome) -> Self {
        Self {
            shooter: shooter.into(),
            coordinate,
            result,
            fired_at: SystemTime::now(),
        }
    }

    pub fn shooter(&self) -> &str {
        &self.shooter
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn result(&self) -> ShotOutcome {
        self.result
    }

    pub fn fired_at(&self) -> SystemTime {
        self.fired_at
    }

    /// `true` if the shot hit (or sank) a ship.
    pub fn is_hit(&self) -> bool {
        self.result.is_hit()
    }
}
