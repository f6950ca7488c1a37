//! Logic for revealing unexplored game terrain.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Per-cell visibility state seen from the player's viewpoint.
///
/// `visible` is replaced wholesale on every recompute, `explored` only
/// ever grows. Every visible cell is also explored.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct Fov {
    visible: HashSet<IVec2>,
    explored: HashSet<IVec2>,
}

impl Fov {
    pub fn is_visible(&self, p: IVec2) -> bool {
        self.visible.contains(&p)
    }

    pub fn is_explored(&self, p: IVec2) -> bool {
        self.explored.contains(&p)
    }

    /// Recompute the visible set from a viewer position and fold it into
    /// the explored set.
    pub fn recompute(
        &mut self,
        terrain: &Terrain,
        viewer: IVec2,
        radius: i32,
    ) {
        self.visible = fov::compute(viewer.to_array(), radius, |c| {
            let p = IVec2::from(c);
            terrain.in_bounds(p) && terrain.is_transparent(p)
        })
        .into_iter()
        .map(IVec2::from)
        .filter(|&p| terrain.in_bounds(p))
        .collect();

        self.explored.extend(&self.visible);
    }
}
