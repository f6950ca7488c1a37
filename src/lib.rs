//! Turn-based grid-world simulation core.
//!
//! The crate owns the rules of the world: a tile grid with visibility
//! tracking, an entity registry with occupancy queries, action resolution
//! for movement and melee combat, and the chase AI that drives hostile
//! mobs. Input capture, rendering and the process loop are external
//! collaborators that talk to the [`Runtime`] through
//! [`Runtime::submit_player_action`] and [`Runtime::snapshot_for_render`].

use glam::IVec2;

/// How far the player can see.
pub const FOV_RADIUS: i32 = 8;

/// Extra traversal cost for pathing through a cell held by a blocking
/// entity. Mobs route around crowds but can still push through when there
/// is no other way.
pub const BLOCKED_CELL_COST: u32 = 10;

/// 8 directions, clock face order.
pub const DIR_8: [IVec2; 8] = [
    IVec2::from_array([0, -1]),
    IVec2::from_array([1, -1]),
    IVec2::from_array([1, 0]),
    IVec2::from_array([1, 1]),
    IVec2::from_array([0, 1]),
    IVec2::from_array([-1, 1]),
    IVec2::from_array([-1, 0]),
    IVec2::from_array([-1, -1]),
];

mod action;
pub use action::Action;

mod ai;
pub use ai::ChaseAi;

pub mod ecs;

mod entity;
pub use entity::Entity;

mod fov;
pub use crate::fov::Fov;

mod msg;
pub use msg::{Message, MessageLog, MsgTone};

mod pathing;

mod placement;
pub(crate) use placement::Placement;

pub mod prelude;

mod runtime;
pub use runtime::{EntityView, Runtime, Snapshot, TileView, TileVisibility};

mod terrain;
pub use terrain::Terrain;

mod tile;
pub use tile::MapTile;
