pub use crate::{
    Action, Entity, Fov, MapTile, Message, MessageLog, MsgTone, Runtime,
    Snapshot, Terrain, DIR_8, FOV_RADIUS,
};
pub use glam::{ivec2, IVec2};
