//! Placement and targeting policies for computer-driven fleets.
//!
//! The human/computer distinction is which policy drives a fleet, not a
//! subtype relation. Randomness is injected through the RNG parameter so
//! games replay deterministically from a seed.

use crate::common::GameError;
use crate::config::{PLACEMENT_RETRY_CAP, SHIP_CATALOGUE, TARGET_RETRY_CAP};
use crate::fleet::Fleet;
use crate::grid::{Coordinate, Grid};
use crate::ship::Orientation;
use rand::rngs::SmallRng;
use rand::Rng;

/// Places a full fleet of ships.
pub trait PlacementPolicy {
    fn place_ships(&mut self, rng: &mut SmallRng, fleet: &mut Fleet) -> Result<(), GameError>;
}

/// Chooses the next cell for a fleet to target.
pub trait TargetingPolicy {
    fn select_target(&mut self, rng: &mut SmallRng, fleet: &Fleet) -> Result<Coordinate, GameError>;
}

/// Uniform random placement and uniform non-repeating targeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPolicy;

impl RandomPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Pick a random orientation and starting cell such that a straight run
    /// of `size` cells fits on the grid.
    fn random_run(rng: &mut SmallRng, grid: Grid, size: usize) -> (Vec<Coordinate>, Orientation) {
        let n = grid.size();
        let len = size as u8;
        if rng.random::<bool>() {
            let row = rng.random_range(0..n);
            let start = rng.random_range(1..=n - len + 1);
            let run = (0..len).map(|i| Coordinate::new(row, start + i)).collect();
            (run, Orientation::Horizontal)
        } else {
            let row = rng.random_range(0..=n - len);
            let col = rng.random_range(1..=n);
            let run = (0..len).map(|i| Coordinate::new(row + i, col)).collect();
            (run, Orientation::Vertical)
        }
    }
}

impl PlacementPolicy for RandomPolicy {
    /// Place every catalogue ship in turn, retrying on overlap with a
    /// generous guard. The grid always has room for the 17 ship cells, so
    /// exhausting the guard aborts loudly as a logic bug.
    fn place_ships(&mut self, rng: &mut SmallRng, fleet: &mut Fleet) -> Result<(), GameError> {
        for kind in SHIP_CATALOGUE {
            let mut attempts = 0;
            loop {
                attempts += 1;
                if attempts > PLACEMENT_RETRY_CAP {
                    return Err(GameError::RetryGuardExhausted("random ship placement"));
                }
                let (run, orientation) = Self::random_run(rng, fleet.grid(), kind.size());
                match fleet.place_ship(kind, run, orientation) {
                    Ok(()) => break,
                    Err(GameError::Overlap(_)) => continue,
                    Err(err) => return Err(err),
                }
            }
        }
        Ok(())
    }
}

impl TargetingPolicy for RandomPolicy {
    /// Sample uniformly random cells, rejecting any this fleet has already
    /// fired at. Bounded in practice by the cell count; the guard aborts
    /// loudly if it ever trips.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        fleet: &Fleet,
    ) -> Result<Coordinate, GameError> {
        let n = fleet.grid().size();
        for _ in 0..TARGET_RETRY_CAP {
            let coord = Coordinate::new(rng.random_range(0..n), rng.random_range(1..=n));
            if !fleet.has_already_fired_at(coord) {
                return Ok(coord);
            }
        }
        Err(GameError::RetryGuardExhausted("random target selection"))
    }
}
