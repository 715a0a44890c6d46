//! The game session state machine: turn sequencing, victory detection and
//! snapshot/restore.

use crate::common::{GameError, ShotOutcome};
use crate::config::{ABANDON_AFTER, COMPUTER_NAME, MAX_TURNS};
use crate::fleet::Fleet;
use crate::grid::Coordinate;
use crate::policy::{PlacementPolicy, TargetingPolicy};
use crate::ship::{Orientation, ShipKind};
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::SystemTime;

/// Which side acts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Turn {
    Player,
    Computer,
}

/// Session lifecycle. Transitions are one-directional:
/// `Placement -> InProgress -> Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Placement,
    InProgress,
    Finished,
}

/// One resolved turn, as reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnRecord {
    pub coordinate: Coordinate,
    pub result: ShotOutcome,
    pub ship_kind: Option<ShipKind>,
    pub ship_coordinates: Vec<Coordinate>,
    pub message: String,
}

/// Failure of a turn request. Sequencing rejections are non-fatal values:
/// the session state is left untouched and play can continue. `Fatal`
/// wraps invariant-guard violations that must abort the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    NotYourTurn,
    NotInProgress,
    AlreadyFired(Coordinate),
    Fatal(GameError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::NotYourTurn => write!(f, "it is not this side's turn"),
            TurnError::NotInProgress => write!(f, "the game is not in progress"),
            TurnError::AlreadyFired(coord) => write!(f, "already fired at {}", coord),
            TurnError::Fatal(err) => write!(f, "{}", err),
        }
    }
}

impl From<TurnError> for GameError {
    fn from(err: TurnError) -> Self {
        match err {
            TurnError::NotYourTurn => GameError::OutOfTurn("it is not this side's turn"),
            TurnError::NotInProgress => GameError::OutOfTurn("the game is not in progress"),
            TurnError::AlreadyFired(coord) => GameError::AlreadyFiredAt(coord.to_string()),
            TurnError::Fatal(inner) => inner,
        }
    }
}

/// Snapshot schema version. Bump when the serialized session layout
/// changes so stale blobs are rejected instead of silently misread.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct SnapshotEnvelope {
    version: u32,
    payload: Vec<u8>,
}

/// A single human-vs-computer game. Owns both fleets and drives turn
/// order, shot resolution, the 100-turn cap and win detection. All
/// operations are synchronous; callers serialize concurrent access.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    player: Fleet,
    computer: Fleet,
    current_turn: Turn,
    status: SessionStatus,
    turn_count: u32,
    winner: Option<String>,
    last_activity: SystemTime,
}

impl GameSession {
    /// Fresh session in the placement phase, player to act first.
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player: Fleet::new(player_name),
            computer: Fleet::new(COMPUTER_NAME),
            current_turn: Turn::Player,
            status: SessionStatus::Placement,
            turn_count: 0,
            winner: None,
            last_activity: SystemTime::now(),
        }
    }

    pub fn player(&self) -> &Fleet {
        &self.player
    }

    pub fn computer(&self) -> &Fleet {
        &self.computer
    }

    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Place one of the player's ships. Only legal during the placement
    /// phase; positions are immutable once the game has started.
    pub fn place_player_ship(
        &mut self,
        kind: ShipKind,
        coordinates: Vec<Coordinate>,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.status != SessionStatus::Placement {
            return Err(GameError::PlacementClosed);
        }
        self.player.place_ship(kind, coordinates, orientation)
    }

    /// Start the game: the computer fleet auto-places and the status moves
    /// to `InProgress` with the player to act. Returns `Ok(false)` without
    /// any state change while the player fleet is incomplete.
    pub fn start_game(
        &mut self,
        placement: &mut dyn PlacementPolicy,
        rng: &mut SmallRng,
    ) -> Result<bool, GameError> {
        if !self.player.all_ships_placed() {
            return Ok(false);
        }
        placement.place_ships(rng, &mut self.computer)?;
        self.status = SessionStatus::InProgress;
        self.current_turn = Turn::Player;
        self.touch();
        log::info!("game started for {}", self.player.name());
        Ok(true)
    }

    /// Resolve one player shot against the computer fleet.
    ///
    /// A miss passes the turn to the computer; a hit or sink keeps it with
    /// the player. The victory check runs after the shot and, when it
    /// triggers, supersedes turn passing by finishing the game.
    pub fn player_turn(&mut self, coord: Coordinate) -> Result<TurnRecord, TurnError> {
        if self.current_turn != Turn::Player {
            return Err(TurnError::NotYourTurn);
        }
        if self.status != SessionStatus::InProgress {
            return Err(TurnError::NotInProgress);
        }
        if self.player.has_already_fired_at(coord) {
            return Err(TurnError::AlreadyFired(coord));
        }

        let shooter = self.player.name().to_string();
        let resolution = self.computer.receive_shot(coord, &shooter);
        if resolution.result == ShotOutcome::AlreadyFired {
            // Histories are kept in lockstep, so this cannot happen unless
            // a caller bypassed the fired-history check above.
            return Err(TurnError::AlreadyFired(coord));
        }
        self.player.add_shot_fired(coord, resolution.result);
        self.turn_count += 1;

        let mut message = match resolution.result {
            ShotOutcome::Miss => {
                self.current_turn = Turn::Computer;
                "Raté !".to_string()
            }
            ShotOutcome::Hit => "Touché !".to_string(),
            ShotOutcome::Sunk => "Coulé !".to_string(),
            ShotOutcome::AlreadyFired => unreachable!("rejected above"),
        };

        if self.check_victory() {
            message = self.victory_message();
        }
        self.touch();

        Ok(TurnRecord {
            coordinate: coord,
            result: resolution.result,
            ship_kind: resolution.ship_kind,
            ship_coordinates: resolution.ship_coordinates,
            message,
        })
    }

    /// Resolve one computer shot against the player fleet. Same
    /// turn-passing rule as [`player_turn`](Self::player_turn): the
    /// computer keeps shooting while it hits, enabling a streak.
    pub fn computer_turn(
        &mut self,
        targeting: &mut dyn TargetingPolicy,
        rng: &mut SmallRng,
    ) -> Result<TurnRecord, TurnError> {
        if self.current_turn != Turn::Computer {
            return Err(TurnError::NotYourTurn);
        }
        if self.status != SessionStatus::InProgress {
            return Err(TurnError::NotInProgress);
        }

        let coord = targeting
            .select_target(rng, &self.computer)
            .map_err(TurnError::Fatal)?;
        let resolution = self.player.receive_shot(coord, COMPUTER_NAME);
        if resolution.result == ShotOutcome::AlreadyFired {
            return Err(TurnError::AlreadyFired(coord));
        }
        self.computer.add_shot_fired(coord, resolution.result);

        let mut message = match resolution.result {
            ShotOutcome::Miss => {
                self.current_turn = Turn::Player;
                format!("L'ordinateur tire en {}... Raté !", coord)
            }
            ShotOutcome::Hit => format!("L'ordinateur tire en {}... Touché !", coord),
            ShotOutcome::Sunk => format!("L'ordinateur tire en {}... Coulé !", coord),
            ShotOutcome::AlreadyFired => unreachable!("rejected above"),
        };

        if self.check_victory() {
            message = self.victory_message();
        }
        self.touch();

        Ok(TurnRecord {
            coordinate: coord,
            result: resolution.result,
            ship_kind: resolution.ship_kind,
            ship_coordinates: resolution.ship_coordinates,
            message,
        })
    }

    /// Victory check, run after every resolved shot. A fully sunk fleet
    /// loses immediately; at the turn cap the side with more enemy ships
    /// sunk wins, ties going to the computer.
    fn check_victory(&mut self) -> bool {
        if self.computer.has_lost() {
            self.finish(self.player.name().to_string());
            return true;
        }
        if self.player.has_lost() {
            self.finish(COMPUTER_NAME.to_string());
            return true;
        }
        if self.turn_count >= MAX_TURNS {
            let player_sunk = self.computer.count_sunk_ships();
            let computer_sunk = self.player.count_sunk_ships();
            let winner = if player_sunk > computer_sunk {
                self.player.name().to_string()
            } else {
                COMPUTER_NAME.to_string()
            };
            self.finish(winner);
            return true;
        }
        false
    }

    fn finish(&mut self, winner: String) {
        log::info!("game over after {} turns, {} wins", self.turn_count, winner);
        self.winner = Some(winner);
        self.status = SessionStatus::Finished;
    }

    fn victory_message(&self) -> String {
        match &self.winner {
            Some(winner) => format!("{} gagne la partie !", winner),
            None => String::new(),
        }
    }

    fn touch(&mut self) {
        self.last_activity = SystemTime::now();
    }

    /// Informational only: `true` once the session has seen no activity
    /// for over an hour. No cleanup is performed here.
    pub fn is_abandoned(&self) -> bool {
        self.last_activity
            .elapsed()
            .map(|idle| idle > ABANDON_AFTER)
            .unwrap_or(false)
    }

    /// Serialize the session into an opaque, versioned blob the hosting
    /// layer can persist between requests.
    pub fn snapshot(&self) -> Result<Vec<u8>, GameError> {
        let payload =
            bincode::serialize(self).map_err(|err| GameError::SnapshotCodec(err.to_string()))?;
        bincode::serialize(&SnapshotEnvelope {
            version: SNAPSHOT_VERSION,
            payload,
        })
        .map_err(|err| GameError::SnapshotCodec(err.to_string()))
    }

    /// Restore a session from a snapshot blob, rejecting unknown schema
    /// versions before touching the payload.
    pub fn restore(bytes: &[u8]) -> Result<Self, GameError> {
        let envelope: SnapshotEnvelope =
            bincode::deserialize(bytes).map_err(|err| GameError::SnapshotCodec(err.to_string()))?;
        if envelope.version != SNAPSHOT_VERSION {
            return Err(GameError::SnapshotVersion {
                found: envelope.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        bincode::deserialize(&envelope.payload)
            .map_err(|err| GameError::SnapshotCodec(err.to_string()))
    }
}
