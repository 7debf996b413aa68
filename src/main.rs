//! Moto Dash entry point
//!
//! Headless demo: runs the simulation at the fixed tick rate with a small
//! look-ahead autopilot on the snapshot, then reports the final run. Real
//! front-ends replace this loop with their own render/input plumbing.

use std::time::{Duration, Instant};

use rand::Rng;

use moto_dash::consts::*;
use moto_dash::sim::{Action, EntityKind, GameSession, Mode, Snapshot, tick};

/// How far ahead of a rider's front edge the autopilot reacts
const LOOKAHEAD: f32 = 90.0;

/// Jump when the nearest hazard enters the look-ahead window.
///
/// Vehicles lead the snapshot's entity list in player order, so pairing it
/// with `players` recovers each rider's box.
fn autopilot(snapshot: &Snapshot, session: &mut GameSession) {
    for (player, rider) in snapshot.players.iter().zip(snapshot.entities.iter()) {
        if player.crashed {
            continue;
        }
        let front = rider.x + rider.width;
        let incoming = snapshot.entities.iter().any(|e| {
            matches!(e.kind, EntityKind::Block | EntityKind::Spike | EntityKind::Wall)
                && e.x > rider.x
                && e.x < front + LOOKAHEAD
        });
        if incoming {
            session.queue_action(Action::Jump(player.slot));
        }
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| rand::rng().random());
    let mode = match args.next().as_deref() {
        Some("duo") => Mode::TwoPlayer,
        _ => Mode::Single,
    };

    log::info!("Moto Dash (headless) starting, seed {}", seed);
    let mut session = GameSession::new(mode, seed);

    let tick_duration = Duration::from_secs_f32(SIM_DT);
    let mut accumulator = 0.0_f32;
    let mut last = Instant::now();

    while !session.game_over {
        let now = Instant::now();
        accumulator += (now - last).as_secs_f32().min(0.1);
        last = now;

        let mut substeps = 0;
        while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            autopilot(&session.snapshot(), &mut session);
            tick(&mut session);
            accumulator -= SIM_DT;
            substeps += 1;
        }

        if session.time_ticks % 300 == 0 && session.time_ticks > 0 {
            log::info!(
                "tick {}: score {}, level {}",
                session.time_ticks,
                session.score as u32,
                session.difficulty()
            );
        }

        std::thread::sleep(tick_duration / 4);
    }

    let final_snapshot = session.snapshot();
    println!(
        "game over: score {}, level {}, {} ticks survived",
        final_snapshot.score as u32,
        final_snapshot.difficulty,
        session.time_ticks
    );
    match serde_json::to_string_pretty(&final_snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}
