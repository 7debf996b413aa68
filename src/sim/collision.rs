//! Vehicle/obstacle collision resolution
//!
//! Axis-aligned overlap only: slopes are terrain, never hazards. Each vehicle
//! is tested independently so one rider crashing leaves the other running.

use super::state::{Obstacle, Vehicle};

/// Crash every non-crashed vehicle that overlaps any active obstacle
pub fn resolve(vehicles: &mut [Vehicle], obstacles: &[Obstacle]) {
    for vehicle in vehicles.iter_mut() {
        if vehicle.crashed {
            continue;
        }
        if obstacles.iter().any(|o| vehicle.rect.overlaps(&o.rect)) {
            vehicle.crash();
            log::info!("player {:?} crashed", vehicle.slot);
        }
    }
}

/// Terminal predicate: the round ends when every rider is down
pub fn all_crashed(vehicles: &[Vehicle]) -> bool {
    vehicles.iter().all(|v| v.crashed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Track;
    use crate::sim::state::{ObstacleKind, PlayerSlot};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn obstacle_over(vehicle: &Vehicle) -> Obstacle {
        let track = Track::duo();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut o = Obstacle::spawn(ObstacleKind::Spike, &track, &mut rng);
        o.rect.pos.x = vehicle.rect.left();
        o
    }

    #[test]
    fn test_overlap_crashes_vehicle() {
        let track = Track::duo();
        let mut vehicles = vec![Vehicle::new(PlayerSlot::One, &track)];
        let obstacles = vec![obstacle_over(&vehicles[0])];

        resolve(&mut vehicles, &obstacles);
        assert!(vehicles[0].crashed);
    }

    #[test]
    fn test_distant_obstacle_is_harmless() {
        let track = Track::duo();
        let mut vehicles = vec![Vehicle::new(PlayerSlot::One, &track)];
        let mut rng = Pcg32::seed_from_u64(0);
        let obstacles = vec![Obstacle::spawn(ObstacleKind::Wall, &track, &mut rng)];

        resolve(&mut vehicles, &obstacles);
        assert!(!vehicles[0].crashed);
    }

    #[test]
    fn test_riders_resolve_independently() {
        let track = Track::duo();
        let mut vehicles = vec![
            Vehicle::new(PlayerSlot::One, &track),
            Vehicle::new(PlayerSlot::Two, &track),
        ];
        let obstacles = vec![obstacle_over(&vehicles[0])];

        resolve(&mut vehicles, &obstacles);
        assert!(vehicles[0].crashed);
        assert!(!vehicles[1].crashed);
        assert!(!all_crashed(&vehicles));

        let obstacles = vec![obstacle_over(&vehicles[1])];
        resolve(&mut vehicles, &obstacles);
        assert!(all_crashed(&vehicles));
    }

    #[test]
    fn test_airborne_vehicle_clears_low_obstacle() {
        let track = Track::duo();
        let mut vehicles = vec![Vehicle::new(PlayerSlot::One, &track)];
        // Lift the rider well above the obstacle's top
        vehicles[0].rect.pos.y -= 200.0;
        let obstacles = vec![obstacle_over(&vehicles[0])];

        resolve(&mut vehicles, &obstacles);
        assert!(!vehicles[0].crashed);
    }
}
