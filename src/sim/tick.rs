//! Fixed timestep simulation tick
//!
//! One deterministic step per external tick request: drain queued actions,
//! spawn, integrate vehicles against the terrain, scroll the obstacle and
//! slope sets, resolve collisions, then advance the score.

use serde::{Deserialize, Serialize};

use super::collision;
use super::state::{GameSession, PlayerSlot};
use super::terrain::TerrainQuery;
use crate::consts::SCORE_PER_TICK;

/// Abstract input actions, queued by the front-end and applied atomically at
/// tick boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Jump(PlayerSlot),
    Reset,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut GameSession) {
    // Queued actions first, in arrival order. A jump for a slot this mode
    // doesn't field is ignored.
    while let Some(action) = session.actions.pop_front() {
        match action {
            Action::Jump(slot) => match session.vehicle_mut(slot) {
                Some(vehicle) => vehicle.jump(),
                None => log::debug!("jump for absent player {:?} ignored", slot),
            },
            Action::Reset => session.reset(),
        }
    }

    // A finished round only waits for a reset
    if session.game_over {
        return;
    }

    session.time_ticks += 1;

    // 1. Spawning
    let (obstacle, slope) =
        session
            .spawner
            .advance(session.score, &session.track, &mut session.rng);
    if let Some(o) = obstacle {
        session.obstacles.push(o);
    }
    if let Some(s) = slope {
        session.slopes.push(s);
    }

    // 2. Vehicle physics against the slopes as they stand this tick
    let terrain = TerrainQuery::new(&session.track, &session.slopes);
    for vehicle in session.vehicles.iter_mut() {
        let ground = terrain.ground_at(vehicle.rect.center_x());
        vehicle.update(1.0, ground);
    }

    // 3. Scroll the track, dropping anything past the left boundary
    for obstacle in session.obstacles.iter_mut() {
        obstacle.advance();
    }
    session.obstacles.retain(|o| !o.offscreen());
    for slope in session.slopes.iter_mut() {
        slope.advance();
    }
    session.slopes.retain(|s| !s.offscreen());

    // 4. Collisions and the terminal check
    collision::resolve(&mut session.vehicles, &session.obstacles);
    if collision::all_crashed(&session.vehicles) {
        session.game_over = true;
        log::info!(
            "game over at score {} after {} ticks",
            session.score as u32,
            session.time_ticks
        );
        return;
    }

    // 5. Survival reward; difficulty stays derived from score
    session.score += SCORE_PER_TICK;
}
