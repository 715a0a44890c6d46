//! Boundary operations exposed to the hosting request layer: session
//! initialization, player-shot processing (including the computer's
//! return streak) and the read-only state projection.

use crate::common::{GameError, ShotOutcome};
use crate::config::{COMPUTER_NAME, FLEET_SIZE, SHIP_CATALOGUE};
use crate::fleet::ShipStatus;
use crate::game::{GameSession, SessionStatus, Turn, TurnRecord};
use crate::grid::Coordinate;
use crate::policy::{PlacementPolicy, TargetingPolicy};
use crate::ship::{Orientation, ShipKind};
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Ship specification supplied by the placement UI. Coordinates arrive as
/// raw text and are normalized before any game logic runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub size: usize,
    pub coordinates: Vec<String>,
    pub orientation: Orientation,
}

/// One shot as presented to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotView {
    pub coordinate: String,
    pub result: ShotOutcome,
    pub ship_type: Option<&'static str>,
    pub ship_coordinates: Vec<String>,
    pub message: String,
}

/// Which side won, as presented to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Player,
    Computer,
}

/// Full result of one player action: the player's shot plus every shot of
/// the computer's return streak, so a hit-streak is fully visible to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotReport {
    pub player_shot: ShotView,
    pub computer_shots: Vec<ShotView>,
    pub game_over: bool,
    pub winner: Option<Winner>,
}

/// One side of the read-only state projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ships_status: Vec<ShipStatus>,
    pub shots_received: BTreeMap<String, ShotOutcome>,
    pub sunk_count: usize,
}

/// Read-only projection of a session for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub status: SessionStatus,
    pub current_turn: Turn,
    pub turn_count: u32,
    pub player: SideView,
    pub computer: SideView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}

/// Validate and normalize a player name: trimmed, 2 to 30 characters.
pub fn validate_player_name(name: &str) -> Result<String, GameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(GameError::InvalidPlayerName("name is required"));
    }
    let len = trimmed.chars().count();
    if !(2..=30).contains(&len) {
        return Err(GameError::InvalidPlayerName(
            "name must be 2 to 30 characters",
        ));
    }
    Ok(trimmed.to_string())
}

/// Build a session from the player's name and five ship specs, place the
/// player fleet and start the game (computer auto-placement included). Any
/// failure surfaces as a single error and no partial session is retained.
///
/// The specs must cover the five-ship catalogue exactly once each, with
/// sizes matching the catalogue.
pub fn initialize_game(
    player_name: &str,
    ships: &[ShipSpec],
    placement: &mut dyn PlacementPolicy,
    rng: &mut SmallRng,
) -> Result<GameSession, GameError> {
    let name = validate_player_name(player_name)?;

    if ships.len() != FLEET_SIZE {
        return Err(GameError::CatalogueMismatch(format!(
            "expected {} ships, got {}",
            FLEET_SIZE,
            ships.len()
        )));
    }
    let mut seen: Vec<ShipKind> = Vec::with_capacity(FLEET_SIZE);
    for spec in ships {
        let kind = ShipKind::from_name(&spec.kind).ok_or_else(|| {
            GameError::CatalogueMismatch(format!("unknown ship type {:?}", spec.kind))
        })?;
        if spec.size != kind.size() {
            return Err(GameError::CatalogueMismatch(format!(
                "{} has size {}, got {}",
                kind,
                kind.size(),
                spec.size
            )));
        }
        if seen.contains(&kind) {
            return Err(GameError::CatalogueMismatch(format!(
                "duplicate ship type {}",
                kind
            )));
        }
        seen.push(kind);
    }
    debug_assert_eq!(seen.len(), SHIP_CATALOGUE.len());

    let mut session = GameSession::new(name);
    for (spec, &kind) in ships.iter().zip(&seen) {
        let grid = session.player().grid();
        let coordinates = spec
            .coordinates
            .iter()
            .map(|raw| grid.parse_coordinate(raw))
            .collect::<Result<Vec<Coordinate>, GameError>>()?;
        session.place_player_ship(kind, coordinates, spec.orientation)?;
    }

    if !session.start_game(placement, rng)? {
        // Unreachable: the five placements above succeeded.
        return Err(GameError::CatalogueMismatch("fleet incomplete".to_string()));
    }
    Ok(session)
}

/// Process one player shot. The raw coordinate is normalized and must name
/// a grid cell; malformed or already-fired coordinates are rejected before
/// any session state is touched. When the player misses, the computer
/// shoots back in a loop until it misses or the game ends, and every shot
/// of that streak is collected into the report.
pub fn process_player_shot(
    session: &mut GameSession,
    raw_coordinate: &str,
    targeting: &mut dyn TargetingPolicy,
    rng: &mut SmallRng,
) -> Result<ShotReport, GameError> {
    let coord = session.player().grid().parse_coordinate(raw_coordinate)?;
    if session.player().has_already_fired_at(coord) {
        return Err(GameError::AlreadyFiredAt(coord.to_string()));
    }

    let record = session.player_turn(coord)?;
    let mut report = ShotReport {
        player_shot: shot_view(&record),
        computer_shots: Vec::new(),
        game_over: false,
        winner: None,
    };

    if session.status() == SessionStatus::Finished {
        report.game_over = true;
        report.winner = winner_of(session);
        return Ok(report);
    }

    while session.current_turn() == Turn::Computer
        && session.status() == SessionStatus::InProgress
    {
        let record = session.computer_turn(targeting, rng)?;
        let result = record.result;
        report.computer_shots.push(shot_view(&record));
        if session.status() == SessionStatus::Finished {
            report.game_over = true;
            report.winner = winner_of(session);
            break;
        }
        if result == ShotOutcome::Miss {
            break;
        }
    }

    Ok(report)
}

/// Read-only projection of the whole session for rendering.
pub fn get_game_state(session: &GameSession) -> GameStateView {
    let player = session.player();
    let computer = session.computer();
    GameStateView {
        status: session.status(),
        current_turn: session.current_turn(),
        turn_count: session.turn_count(),
        player: SideView {
            name: Some(player.name().to_string()),
            ships_status: player.ships_status(),
            shots_received: player.shots_received_by_coordinate(),
            sunk_count: player.count_sunk_ships(),
        },
        computer: SideView {
            name: None,
            ships_status: computer.ships_status(),
            shots_received: computer.shots_received_by_coordinate(),
            sunk_count: computer.count_sunk_ships(),
        },
        winner: session.winner().map(str::to_string),
    }
}

fn shot_view(record: &TurnRecord) -> ShotView {
    ShotView {
        coordinate: record.coordinate.to_string(),
        result: record.result,
        ship_type: record.ship_kind.map(ShipKind::name),
        ship_coordinates: record
            .ship_coordinates
            .iter()
            .map(Coordinate::to_string)
            .collect(),
        message: record.message.clone(),
    }
}

fn winner_of(session: &GameSession) -> Option<Winner> {
    session.winner().map(|name| {
        if name == COMPUTER_NAME {
            Winner::Computer
        } else {
            Winner::Player
        }
    })
}
