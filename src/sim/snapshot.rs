//! Read-only presentation snapshot
//!
//! Front-ends render from this projection and never touch the session
//! directly; the simulation stays the single writer. Entity order is stable:
//! vehicles, then obstacles, then slopes, each in insertion order.

use serde::Serialize;

use super::state::{GameSession, ObstacleKind, PlayerSlot, SlopeKind};

/// Renderable entity tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntityKind {
    Vehicle,
    Block,
    Spike,
    Wall,
    SlopeUp,
    SlopeDown,
}

impl From<ObstacleKind> for EntityKind {
    fn from(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Block => EntityKind::Block,
            ObstacleKind::Spike => EntityKind::Spike,
            ObstacleKind::Wall => EntityKind::Wall,
        }
    }
}

impl From<SlopeKind> for EntityKind {
    fn from(kind: SlopeKind) -> Self {
        match kind {
            SlopeKind::Up => EntityKind::SlopeUp,
            SlopeKind::Down => EntityKind::SlopeDown,
        }
    }
}

/// One drawable entity
#[derive(Debug, Clone, Serialize)]
pub struct EntityView {
    pub kind: EntityKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Set for vehicles only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crashed: Option<bool>,
}

/// Per-player status, used by the duo-mode HUD
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlayerView {
    pub slot: PlayerSlot,
    pub crashed: bool,
}

/// Post-tick state of the world, as presentation sees it
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub entities: Vec<EntityView>,
    /// Real-valued; displays truncate to integer
    pub score: f32,
    pub difficulty: u32,
    pub game_over: bool,
    pub players: Vec<PlayerView>,
}

impl Snapshot {
    pub fn capture(session: &GameSession) -> Self {
        let mut entities =
            Vec::with_capacity(session.vehicles.len() + session.obstacles.len() + session.slopes.len());

        for vehicle in &session.vehicles {
            entities.push(EntityView {
                kind: EntityKind::Vehicle,
                x: vehicle.rect.left(),
                y: vehicle.rect.top(),
                width: vehicle.rect.size.x,
                height: vehicle.rect.size.y,
                crashed: Some(vehicle.crashed),
            });
        }
        for obstacle in &session.obstacles {
            entities.push(EntityView {
                kind: obstacle.kind.into(),
                x: obstacle.rect.left(),
                y: obstacle.rect.top(),
                width: obstacle.rect.size.x,
                height: obstacle.rect.size.y,
                crashed: None,
            });
        }
        for slope in &session.slopes {
            entities.push(EntityView {
                kind: slope.kind.into(),
                x: slope.rect.left(),
                y: slope.rect.top(),
                width: slope.rect.size.x,
                height: slope.rect.size.y,
                crashed: None,
            });
        }

        Self {
            entities,
            score: session.score,
            difficulty: session.difficulty(),
            game_over: session.game_over,
            players: session
                .vehicles
                .iter()
                .map(|v| PlayerView {
                    slot: v.slot,
                    crashed: v.crashed,
                })
                .collect(),
        }
    }
}
