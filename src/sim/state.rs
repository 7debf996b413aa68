//! Game state and core simulation types
//!
//! Everything the session owns lives here: the vehicles, the active obstacle
//! and slope sets, the seeded RNG and the pending action queue. Entity sets
//! keep insertion order so iteration stays deterministic.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::spawn::SpawnDirector;
use super::tick::Action;
use crate::{Track, consts::*, lerp};

/// Player mode for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Single,
    TwoPlayer,
}

impl Mode {
    pub fn player_count(&self) -> usize {
        match self {
            Mode::Single => 1,
            Mode::TwoPlayer => 2,
        }
    }
}

/// Identity of a player-controlled vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Track position for this rider
    fn start_x(&self) -> f32 {
        match self {
            PlayerSlot::One => PLAYER_ONE_X,
            PlayerSlot::Two => PLAYER_TWO_X,
        }
    }
}

/// A player-controlled vehicle
///
/// State machine: grounded -> airborne (on jump) -> grounded (on landing);
/// `crashed` is absorbing from any state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub slot: PlayerSlot,
    pub rect: Rect,
    pub velocity_y: f32,
    pub jumping: bool,
    /// Terminal per-vehicle flag, only cleared by a full reset
    pub crashed: bool,
}

impl Vehicle {
    pub fn new(slot: PlayerSlot, track: &Track) -> Self {
        let x = slot.start_x();
        let y = track.baseline() - VEHICLE_HEIGHT;
        Self {
            slot,
            rect: Rect::new(x, y, VEHICLE_WIDTH, VEHICLE_HEIGHT),
            velocity_y: 0.0,
            jumping: false,
            crashed: false,
        }
    }

    /// Integrate gravity and resolve ground contact against the effective
    /// ground height at this vehicle's center.
    ///
    /// `dt_ticks` is measured in ticks, not seconds: the game loop passes 1.0
    /// so the constants keep their 60 Hz reference semantics.
    pub fn update(&mut self, dt_ticks: f32, ground_y: f32) {
        if self.crashed {
            return;
        }

        self.velocity_y += GRAVITY * dt_ticks;
        self.rect.pos.y += self.velocity_y;

        let floor = ground_y - self.rect.size.y;
        if self.rect.pos.y >= floor {
            self.rect.pos.y = floor;
            self.velocity_y = 0.0;
            self.jumping = false;
        }
    }

    /// Single instantaneous impulse; at most one active jump arc per landing
    pub fn jump(&mut self) {
        if !self.jumping && !self.crashed {
            self.velocity_y = JUMP_IMPULSE;
            self.jumping = true;
        }
    }

    /// Idempotent terminal transition, no further physics afterward
    pub fn crash(&mut self) {
        self.crashed = true;
    }
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Block,
    Spike,
    Wall,
}

impl ObstacleKind {
    /// Spawn order matches the weight tables in `spawn`
    pub const ALL: [ObstacleKind; 3] = [ObstacleKind::Block, ObstacleKind::Spike, ObstacleKind::Wall];

    /// Sample this kind's footprint; block and wall dimensions are drawn on
    /// integer bounds, spike is fixed
    fn sample_size<R: Rng>(&self, rng: &mut R) -> (f32, f32) {
        match self {
            ObstacleKind::Block => (
                rng.random_range(25..=50) as f32,
                rng.random_range(40..=80) as f32,
            ),
            ObstacleKind::Spike => (30.0, 60.0),
            ObstacleKind::Wall => (20.0, rng.random_range(100..=140) as f32),
        }
    }
}

/// A ground hazard scrolling leftward along the track
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub rect: Rect,
    pub speed: f32,
}

impl Obstacle {
    /// Instantiate at the right edge of the track, bottom on the flat
    /// baseline (obstacles never ride slopes)
    pub fn spawn<R: Rng>(kind: ObstacleKind, track: &Track, rng: &mut R) -> Self {
        let (width, height) = kind.sample_size(rng);
        Self {
            kind,
            rect: Rect::new(track.width, track.baseline() - height, width, height),
            speed: SCROLL_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.rect.pos.x -= self.speed;
    }

    /// True once the trailing edge has crossed the track's left boundary
    pub fn offscreen(&self) -> bool {
        self.rect.right() < 0.0
    }
}

/// Slope direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlopeKind {
    Up,
    Down,
}

/// A terrain feature that raises the effective ground across its span.
///
/// Slopes are never collision hazards; they only change what `TerrainQuery`
/// reports under a vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slope {
    pub kind: SlopeKind,
    pub rect: Rect,
    pub speed: f32,
}

impl Slope {
    pub fn spawn(kind: SlopeKind, track: &Track) -> Self {
        Self {
            kind,
            rect: Rect::new(
                track.width,
                track.baseline() - SLOPE_HEIGHT,
                SLOPE_WIDTH,
                SLOPE_HEIGHT,
            ),
            speed: SCROLL_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.rect.pos.x -= self.speed;
    }

    pub fn offscreen(&self) -> bool {
        self.rect.right() < 0.0
    }

    /// Surface height at `x`, if `x` falls within this segment's span.
    ///
    /// `Up` climbs left-to-right: baseline at the left edge, crest (smaller y)
    /// at the right edge. `Down` is the mirror.
    pub fn surface_at(&self, x: f32) -> Option<f32> {
        if !self.rect.contains_x(x) {
            return None;
        }
        let t = (x - self.rect.left()) / self.rect.size.x;
        let (from, to) = match self.kind {
            SlopeKind::Up => (self.rect.bottom(), self.rect.top()),
            SlopeKind::Down => (self.rect.top(), self.rect.bottom()),
        };
        Some(lerp(from, to, t))
    }
}

/// One round of the game: exclusive owner of every entity it contains
#[derive(Debug, Clone)]
pub struct GameSession {
    pub mode: Mode,
    pub track: Track,
    /// Seed this session's RNG stream started from
    pub seed: u64,
    pub vehicles: Vec<Vehicle>,
    pub obstacles: Vec<Obstacle>,
    pub slopes: Vec<Slope>,
    pub score: f32,
    pub game_over: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    pub(crate) spawner: SpawnDirector,
    pub(crate) actions: VecDeque<Action>,
}

impl GameSession {
    /// Create a session on the default duo track
    pub fn new(mode: Mode, seed: u64) -> Self {
        Self::with_track(mode, Track::default(), seed)
    }

    pub fn with_track(mode: Mode, track: Track, seed: u64) -> Self {
        log::info!("new {:?} session, seed {}", mode, seed);
        Self {
            mode,
            track,
            seed,
            vehicles: Self::build_vehicles(mode, &track),
            obstacles: Vec::new(),
            slopes: Vec::new(),
            score: 0.0,
            game_over: false,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            spawner: SpawnDirector::new(),
            actions: VecDeque::new(),
        }
    }

    fn build_vehicles(mode: Mode, track: &Track) -> Vec<Vehicle> {
        let slots = [PlayerSlot::One, PlayerSlot::Two];
        slots[..mode.player_count()]
            .iter()
            .map(|&slot| Vehicle::new(slot, track))
            .collect()
    }

    /// Queue an abstract action; it is applied at the next tick boundary
    pub fn queue_action(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn vehicle_mut(&mut self, slot: PlayerSlot) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.slot == slot)
    }

    /// Derived display level, also selects the spawn-weight tier
    pub fn difficulty(&self) -> u32 {
        (self.score / 100.0).floor() as u32 + 1
    }

    /// Discard and rebuild the owned entity sets from the stored
    /// configuration. The RNG stream keeps running, so the next round plays
    /// out differently from the last.
    pub fn reset(&mut self) {
        log::info!(
            "session reset at score {} after {} ticks",
            self.score as u32,
            self.time_ticks
        );
        self.vehicles = Self::build_vehicles(self.mode, &self.track);
        self.obstacles.clear();
        self.slopes.clear();
        self.score = 0.0;
        self.game_over = false;
        self.time_ticks = 0;
        self.spawner = SpawnDirector::new();
    }

    /// Capture the post-tick presentation snapshot
    pub fn snapshot(&self) -> super::Snapshot {
        super::Snapshot::capture(self)
    }
}
