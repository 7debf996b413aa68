//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (insertion order for entity sets)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rect;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod terrain;
pub mod tick;

pub use collision::{all_crashed, resolve};
pub use rect::Rect;
pub use snapshot::{EntityKind, EntityView, PlayerView, Snapshot};
pub use spawn::{SpawnDirector, kind_weights, obstacle_interval, weighted_index};
pub use state::{GameSession, Mode, Obstacle, ObstacleKind, PlayerSlot, Slope, SlopeKind, Vehicle};
pub use terrain::TerrainQuery;
pub use tick::{Action, tick};
