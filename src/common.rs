//! Common types: shot outcomes and the game error taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotOutcome {
    /// Shot missed every ship.
    Miss,
    /// Shot hit a ship without sinking it.
    Hit,
    /// Shot sank a ship.
    Sunk,
    /// The defending fleet already resolved a shot at this cell.
    ///
    /// Defense-in-depth: the orchestration layer rejects repeated targets
    /// before they reach a fleet, so this arm is normally unreachable.
    AlreadyFired,
}

impl ShotOutcome {
    /// `true` for `Hit` and `Sunk`.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "MISS"),
            ShotOutcome::Hit => write!(f, "HIT"),
            ShotOutcome::Sunk => write!(f, "SUNK"),
            ShotOutcome::AlreadyFired => write!(f, "ALREADY_FIRED"),
        }
    }
}

/// Errors surfaced by validation, placement, snapshots and policy guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Raw coordinate text does not name a cell on the grid.
    InvalidCoordinate(String),
    /// A supplied coordinate falls outside the grid.
    OutOfBounds(String),
    /// A supplied coordinate overlaps an already-placed ship.
    Overlap(String),
    /// Number of coordinates does not match the ship size.
    WrongCoordinateCount { expected: usize, got: usize },
    /// The fleet already holds its full complement of ships.
    FleetFull,
    /// Ship placement was attempted after the game started.
    PlacementClosed,
    /// Player name failed validation.
    InvalidPlayerName(&'static str),
    /// Supplied ship specs do not cover the catalogue exactly once each.
    CatalogueMismatch(String),
    /// This side already fired at the cell.
    AlreadyFiredAt(String),
    /// A turn was requested out of sequence.
    OutOfTurn(&'static str),
    /// A randomized retry loop exhausted its guard. Indicates a logic bug,
    /// never a normal game condition.
    RetryGuardExhausted(&'static str),
    /// Snapshot schema version differs from the supported one.
    SnapshotVersion { found: u32, supported: u32 },
    /// Snapshot bytes could not be encoded or decoded.
    SnapshotCodec(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidCoordinate(raw) => write!(f, "invalid coordinate {:?}", raw),
            GameError::OutOfBounds(coord) => {
                write!(f, "coordinate {} is outside the grid", coord)
            }
            GameError::Overlap(coord) => {
                write!(f, "coordinate {} overlaps another ship", coord)
            }
            GameError::WrongCoordinateCount { expected, got } => {
                write!(f, "expected {} coordinates, got {}", expected, got)
            }
            GameError::FleetFull => write!(f, "fleet already holds all its ships"),
            GameError::PlacementClosed => {
                write!(f, "ships cannot be placed once the game has started")
            }
            GameError::InvalidPlayerName(reason) => write!(f, "invalid player name: {}", reason),
            GameError::CatalogueMismatch(reason) => {
                write!(f, "ship catalogue mismatch: {}", reason)
            }
            GameError::AlreadyFiredAt(coord) => {
                write!(f, "already fired at {}", coord)
            }
            GameError::OutOfTurn(reason) => write!(f, "out of turn: {}", reason),
            GameError::RetryGuardExhausted(what) => {
                write!(f, "retry guard exhausted during {}", what)
            }
            GameError::SnapshotVersion { found, supported } => {
                write!(
                    f,
                    "snapshot schema version {} is not supported (expected {})",
                    found, supported
                )
            }
            GameError::SnapshotCodec(reason) => write!(f, "snapshot codec error: {}", reason),
        }
    }
}

impl std::error::Error for GameError {}
