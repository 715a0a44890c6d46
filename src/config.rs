use crate::ship::ShipKind;
use std::time::Duration;

pub const GRID_SIZE: u8 = 10;
pub const FLEET_SIZE: usize = 5;
pub const SHIP_CATALOGUE: [ShipKind; FLEET_SIZE] = [
    ShipKind::AircraftCarrier,
    ShipKind::Cruiser,
    ShipKind::Destroyer1,
    ShipKind::Destroyer2,
    ShipKind::TorpedoBoat,
];
pub const TOTAL_SHIP_CELLS: usize = 17;

/// Hard cap on resolved player shots before the game is adjudicated.
pub const MAX_TURNS: u32 = 100;

/// Inactivity window after which a session counts as abandoned.
pub const ABANDON_AFTER: Duration = Duration::from_secs(3600);

/// Fixed identity of the computer opponent, also used as the winner string.
pub const COMPUTER_NAME: &str = "Ordinateur";

/// Retry guards for the randomized placement and targeting loops. The grid
/// always has room (17 ship cells in 100, at most 100 fired coordinates), so
/// exhausting either guard signals a logic bug.
pub const PLACEMENT_RETRY_CAP: usize = 10_000;
pub const TARGET_RETRY_CAP: usize = 10_000;
