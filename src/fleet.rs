//! A side's fleet: grid, ships and shot histories.

use crate::common::{GameError, ShotOutcome};
use crate::config::FLEET_SIZE;
use crate::grid::{Coordinate, Grid};
use crate::ship::{Orientation, Ship, ShipKind};
use crate::shot::Shot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Resolution of an incoming shot, with the sunk ship's full coordinate
/// list revealed to the caller when applicable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotResolution {
    pub result: ShotOutcome,
    pub ship_kind: Option<ShipKind>,
    pub ship_coordinates: Vec<Coordinate>,
}

/// Per-ship status projection for score display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStatus {
    #[serde(rename = "type")]
    pub kind: ShipKind,
    pub size: usize,
    pub hits: u8,
    pub sunk: bool,
}

/// One side of the game: a grid, up to five ships, the shots this side has
/// received and the shots it has fired. The fired history exists only to
/// stop this side from re-targeting a cell; it does not model the
/// opponent's board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    name: String,
    grid: Grid,
    ships: Vec<Ship>,
    shots_received: Vec<Shot>,
    shots_fired: Vec<Shot>,
}

impl Fleet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grid: Grid::default(),
            ships: Vec::new(),
            shots_received: Vec::new(),
            shots_fired: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn shots_received(&self) -> &[Shot] {
        &self.shots_received
    }

    pub fn shots_fired(&self) -> &[Shot] {
        &self.shots_fired
    }

    /// Place a ship on this fleet. Validates that every coordinate is on
    /// the grid, that none overlaps an already-placed ship (or repeats
    /// within the supplied run), and that the coordinate count matches the
    /// ship size. Collinearity and contiguity are NOT validated here; that
    /// is the placement caller's concern. Nothing is mutated on failure.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        coordinates: Vec<Coordinate>,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.ships.len() >= FLEET_SIZE {
            return Err(GameError::FleetFull);
        }
        if coordinates.len() != kind.size() {
            return Err(GameError::WrongCoordinateCount {
                expected: kind.size(),
                got: coordinates.len(),
            });
        }
        for (i, &coord) in coordinates.iter().enumerate() {
            if !self.grid.is_valid_coordinate(coord) {
                return Err(GameError::OutOfBounds(coord.to_string()));
            }
            if self.ships.iter().any(|ship| ship.occupies(coord))
                || coordinates[..i].contains(&coord)
            {
                return Err(GameError::Overlap(coord.to_string()));
            }
        }
        log::debug!(
            "{}: placed {} at {:?}",
            self.name,
            kind,
            coordinates.iter().map(Coordinate::to_string).collect::<Vec<_>>()
        );
        self.ships.push(Ship::new(kind, coordinates, orientation));
        Ok(())
    }

    /// `true` iff the full complement of five ships is placed.
    pub fn all_ships_placed(&self) -> bool {
        self.ships.len() == FLEET_SIZE
    }

    /// Resolve an incoming shot against this fleet's ships.
    ///
    /// A coordinate already present in the received history yields
    /// `AlreadyFired` without recording a new shot or touching any ship.
    /// Otherwise the first occupying ship takes the hit (revealing its full
    /// coordinate list when sunk), a miss hits open water, and the shot is
    /// appended to the received history either way.
    pub fn receive_shot(&mut self, coord: Coordinate, shooter: &str) -> ShotResolution {
        if self
            .shots_received
            .iter()
            .any(|shot| shot.coordinate() == coord)
        {
            return ShotResolution {
                result: ShotOutcome::AlreadyFired,
                ship_kind: None,
                ship_coordinates: Vec::new(),
            };
        }

        let mut result = ShotOutcome::Miss;
        let mut ship_kind = None;
        let mut ship_coordinates = Vec::new();
        for ship in &mut self.ships {
            if ship.occupies(coord) {
                result = ship.hit();
                ship_kind = Some(ship.kind());
                if result == ShotOutcome::Sunk {
                    ship_coordinates = ship.coordinates().to_vec();
                }
                break;
            }
        }

        log::debug!("{}: {} fired at {} -> {}", self.name, shooter, coord, result);
        self.shots_received.push(Shot::new(shooter, coord, result));
        ShotResolution {
            result,
            ship_kind,
            ship_coordinates,
        }
    }

    /// `true` if this side has already fired at the cell.
    pub fn has_already_fired_at(&self, coord: Coordinate) -> bool {
        self.shots_fired
            .iter()
            .any(|shot| shot.coordinate() == coord)
    }

    /// Record a shot this side fired, after the orchestrator resolved it.
    pub fn add_shot_fired(&mut self, coord: Coordinate, result: ShotOutcome) {
        self.shots_fired
            .push(Shot::new(self.name.clone(), coord, result));
    }

    /// `true` iff at least one ship is placed and every ship is sunk. A
    /// fleet with no ships is never "lost".
    pub fn has_lost(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_sunk)
    }

    pub fn count_sunk_ships(&self) -> usize {
        self.ships.iter().filter(|ship| ship.is_sunk()).count()
    }

    /// Per-ship status list for score display.
    pub fn ships_status(&self) -> Vec<ShipStatus> {
        self.ships
            .iter()
            .map(|ship| ShipStatus {
                kind: ship.kind(),
                size: ship.size(),
                hits: ship.hits(),
                sunk: ship.is_sunk(),
            })
            .collect()
    }

    /// Received-shot history keyed by canonical coordinate text, for
    /// rendering the grid.
    pub fn shots_received_by_coordinate(&self) -> BTreeMap<String, ShotOutcome> {
        self.shots_received
            .iter()
            .map(|shot| (shot.coordinate().to_string(), shot.result()))
            .collect()
    }
}
