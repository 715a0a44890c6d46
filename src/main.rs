use bataille_navale::{
    get_game_state, init_logging, initialize_game, process_player_shot, Fleet, GameSession,
    PlacementPolicy, RandomPolicy, SessionStatus, ShipSpec, TargetingPolicy,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Drive one automated game through the service boundary and print the
/// final state as JSON.
#[derive(Parser)]
#[command(author, version, about = "Automated bataille navale session driver")]
struct Cli {
    /// Fix RNG seed for a reproducible game (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
    /// Player name used for the session.
    #[arg(long, default_value = "Amiral")]
    name: String,
    /// Snapshot and restore the session between shots, the way a stateless
    /// hosting layer would.
    #[arg(long)]
    snapshot_each_turn: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    // Lay out the player fleet with the same random policy the computer
    // uses, then hand it to the service as raw placement specs.
    let mut scratch = Fleet::new(&cli.name);
    RandomPolicy.place_ships(&mut rng, &mut scratch)?;
    let specs: Vec<ShipSpec> = scratch
        .ships()
        .iter()
        .map(|ship| ShipSpec {
            kind: ship.kind().name().to_string(),
            size: ship.size(),
            coordinates: ship.coordinates().iter().map(ToString::to_string).collect(),
            orientation: ship.orientation(),
        })
        .collect();

    let mut session = initialize_game(&cli.name, &specs, &mut RandomPolicy, &mut rng)?;

    while session.status() == SessionStatus::InProgress {
        let target = RandomPolicy.select_target(&mut rng, session.player())?;
        let report =
            process_player_shot(&mut session, &target.to_string(), &mut RandomPolicy, &mut rng)?;
        log::debug!(
            "{} -> {}, {} computer shots back",
            report.player_shot.coordinate,
            report.player_shot.result,
            report.computer_shots.len()
        );
        if cli.snapshot_each_turn {
            let blob = session.snapshot()?;
            session = GameSession::restore(&blob)?;
        }
        if report.game_over {
            break;
        }
    }

    let view = get_game_state(&session);
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
