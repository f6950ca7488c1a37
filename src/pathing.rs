//! Cost-weighted shortest paths over the 8-connected grid.

use pathfinding::prelude::astar;

use crate::{prelude::*, BLOCKED_CELL_COST};

impl Runtime {
    /// Plan a shortest path between two cells.
    ///
    /// Returns the cells after `from` up to and including `to`, empty when
    /// the destination is unreachable or equals the start. Cardinal steps
    /// cost 2 and diagonal steps 3, a fixed-point approximation of √2 that
    /// keeps costs on an integer scale. Cells held by a blocking entity
    /// cost extra instead of being impassable, so mobs prefer routing
    /// around crowds but can still path through when nothing else works.
    ///
    /// Paths are deterministic for a fixed grid and entity placement.
    /// Results are not cached here, the chase AI owns path caching.
    pub fn find_path(&self, from: IVec2, to: IVec2) -> Vec<IVec2> {
        if from == to {
            return Vec::new();
        }

        let Some((path, _)) = astar(
            &from,
            |&p| {
                DIR_8
                    .iter()
                    .map(move |&d| (p + d, step_cost(d)))
                    .filter(|&(q, _)| {
                        self.terrain().in_bounds(q)
                            && self.terrain().is_walkable(q)
                    })
                    .map(|(q, c)| (q, c * self.cell_cost(q)))
                    .collect::<Vec<_>>()
            },
            |&p| {
                let d = (to - p).abs();
                // Cheapest possible step is 2 per Chebyshev unit.
                2 * d.x.max(d.y) as u32
            },
            |&p| p == to,
        ) else {
            return Vec::new();
        };

        // astar includes the start cell, the contract excludes it.
        path[1..].to_vec()
    }

    fn cell_cost(&self, p: IVec2) -> u32 {
        if self.blocking_entity_at(p).is_some() {
            1 + BLOCKED_CELL_COST
        } else {
            1
        }
    }
}

fn step_cost(dir: IVec2) -> u32 {
    if dir.x != 0 && dir.y != 0 {
        3
    } else {
        2
    }
}
