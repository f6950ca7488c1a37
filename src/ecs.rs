//! Entity component types.

use derive_more::{Deref, DerefMut};
use serde::{Deserialize, Serialize};

/// Entities with this flag prevent movement into their cell and are valid
/// melee targets.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize,
)]
pub struct Blocks(pub bool);

/// Render color of the entity glyph.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [u8; 3]);

impl Default for Color {
    fn default() -> Self {
        Color([255, 255, 255])
    }
}

/// Render ordering key, higher layers draw on top.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Default, Serialize,
    Deserialize,
)]
pub struct DrawLayer(pub i32);

/// Hit points. Entities with this component are actors, alive while hp
/// stays positive.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize,
)]
pub struct Health {
    pub hp: i32,
    pub max_hp: i32,
}

impl Health {
    pub fn new(max_hp: i32) -> Health {
        Health { hp: max_hp, max_hp }
    }
}

#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize,
)]
pub struct Icon(pub char);

#[derive(Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct Name(pub String);

/// Melee combat attributes.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize,
)]
pub struct Stats {
    /// Damage dealt by a successful attack before defense.
    pub power: i32,
    /// Flat reduction applied to incoming damage.
    pub defense: i32,
}

////////////////////////////////

/// Entity component system. Stores all the data of game entities.
#[derive(Default, Deref, DerefMut)]
pub(crate) struct Ecs(pub(crate) hecs::World);
