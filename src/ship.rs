//! Ship catalogue and per-ship damage tracking.

use crate::common::ShotOutcome;
use crate::grid::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a ship on the grid. Informational once placed:
/// consistency with the coordinate run is a placement-time concern and is
/// not re-validated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// The fixed five-ship catalogue. The two destroyers are distinct entries
/// so a fleet carries exactly one of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShipKind {
    AircraftCarrier,
    Cruiser,
    Destroyer1,
    Destroyer2,
    TorpedoBoat,
}

impl ShipKind {
    /// Wire/display name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::AircraftCarrier => "aircraft-carrier",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Destroyer1 => "destroyer1",
            ShipKind::Destroyer2 => "destroyer2",
            ShipKind::TorpedoBoat => "torpedo-boat",
        }
    }

    /// Length of the ship, which is also its sink threshold.
    pub const fn size(self) -> usize {
        match self {
            ShipKind::AircraftCarrier => 5,
            ShipKind::Cruiser => 4,
            ShipKind::Destroyer1 => 3,
            ShipKind::Destroyer2 => 3,
            ShipKind::TorpedoBoat => 2,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "aircraft-carrier" => Some(ShipKind::AircraftCarrier),
            "cruiser" => Some(ShipKind::Cruiser),
            "destroyer1" => Some(ShipKind::Destroyer1),
            "destroyer2" => Some(ShipKind::Destroyer2),
            "torpedo-boat" => Some(ShipKind::TorpedoBoat),
            _ => None,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A placed ship: its cells, orientation and accumulated damage. Ships are
/// created at placement time and persist for the whole game as a record,
/// even after sinking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ship {
    kind: ShipKind,
    coordinates: Vec<Coordinate>,
    orientation: Orientation,
    hits: u8,
}

impl Ship {
    /// Build a ship with no damage. Coordinate validity (bounds, overlap)
    /// is the placing fleet's responsibility.
    pub fn new(kind: ShipKind, coordinates: Vec<Coordinate>, orientation: Orientation) -> Self {
        Self {
            kind,
            coordinates,
            orientation,
            hits: 0,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn size(&self) -> usize {
        self.kind.size()
    }

    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn hits(&self) -> u8 {
        self.hits
    }

    /// Membership test on this ship's cells.
    pub fn occupies(&self, coord: Coordinate) -> bool {
        self.coordinates.contains(&coord)
    }

    /// `true` once the hit count has reached the ship's length.
    pub fn is_sunk(&self) -> bool {
        usize::from(self.hits) >= self.size()
    }

    /// Register one hit and report whether it sank the ship. Must not be
    /// called on a ship that is already sunk; the per-cell shot dedup in
    /// the owning fleet guarantees at most one hit per cell.
    pub fn hit(&mut self) -> ShotOutcome {
        self.hits += 1;
        if self.is_sunk() {
            ShotOutcome::Sunk
        } else {
            ShotOutcome::Hit
        }
    }
}
