use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};

use crate::prelude::*;

/// Spatial index, used for efficiently finding locations of entities and
/// entities at locations.
///
/// The per-cell bins preserve insertion order, so when several entities
/// somehow end up in one cell, occupancy queries resolve to the
/// first-inserted one. Whole-registry iteration goes in ascending entity
/// id order. Neither order affects simulation outcomes, only message and
/// render sequencing.
#[derive(Clone, Default, Debug)]
pub struct Placement {
    places: BTreeMap<Entity, IVec2>,
    entities: IndexMap<IVec2, IndexSet<Entity>>,
}

impl Placement {
    pub fn entities_at(
        &self,
        loc: IVec2,
    ) -> impl Iterator<Item = Entity> + '_ {
        self.entities.get(&loc).into_iter().flatten().copied()
    }

    pub fn all_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.places.keys().copied()
    }

    pub fn entity_pos(&self, e: &Entity) -> Option<IVec2> {
        self.places.get(e).copied()
    }

    pub fn insert(&mut self, loc: IVec2, e: Entity) {
        self.remove(&e);
        self.places.insert(e, loc);
        self.entities.entry(loc).or_default().insert(e);
    }

    pub fn remove(&mut self, e: &Entity) {
        if let Some(loc) = self.places.remove(e) {
            if let Some(bin) = self.entities.get_mut(&loc) {
                bin.shift_remove(e);
            }
        }
    }
}
