use serde::{Deserialize, Serialize};

use crate::{
    ecs::{Blocks, Color, DrawLayer, Ecs, Health, Icon, Name, Stats},
    prelude::*,
    ChaseAi, Placement,
};

/// Main data container for the simulation runtime.
///
/// All world state is owned here and only mutates inside
/// [`Runtime::submit_player_action`], one turn at a time. There is no
/// ambient global state, every operation reaches the grid, the entity
/// registry and the message log through an explicit runtime handle.
pub struct Runtime {
    pub(crate) terrain: Terrain,
    pub(crate) fov: Fov,
    pub(crate) ecs: Ecs,
    pub(crate) placement: Placement,
    pub(crate) log: MessageLog,
    pub(crate) player: Option<Entity>,
    running: bool,
    turn: u64,
}

impl Runtime {
    pub fn new(terrain: Terrain) -> Self {
        Runtime {
            terrain,
            fov: Default::default(),
            ecs: Default::default(),
            placement: Default::default(),
            log: Default::default(),
            player: None,
            running: true,
            turn: 0,
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn fov(&self) -> &Fov {
        &self.fov
    }

    pub fn messages(&self) -> &MessageLog {
        &self.log
    }

    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// False once an Escape action has been processed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Completed turn count, exposed for observability.
    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub(crate) fn halt(&mut self) {
        self.running = false;
    }

    pub(crate) fn post_msg(&mut self, tone: MsgTone, text: impl Into<String>) {
        self.log.push(tone, text);
    }

    pub fn spawn(&mut self, loadout: impl hecs::DynamicBundle) -> Entity {
        Entity(self.ecs.spawn(loadout))
    }

    /// Spawn the player mob and reveal its surroundings.
    pub fn spawn_player(&mut self, loc: IVec2) -> Entity {
        assert!(self.player.is_none(), "Runtime: player already spawned");

        let player = self.spawn((
            Name("player".into()),
            Icon('@'),
            Color([255, 255, 255]),
            DrawLayer(1),
            Blocks(true),
            Stats {
                power: 5,
                defense: 2,
            },
            Health::new(30),
        ));
        self.player = Some(player);
        player.place(self, loc);
        self.update_fov();
        player
    }

    /// Spawn a hostile mob with a chase brain.
    pub fn spawn_mob(
        &mut self,
        name: &str,
        icon: char,
        color: [u8; 3],
        loc: IVec2,
        stats: Stats,
        max_hp: i32,
    ) -> Entity {
        let mob = self.spawn((
            Name(name.into()),
            Icon(icon),
            Color(color),
            DrawLayer(1),
            Blocks(true),
            stats,
            Health::new(max_hp),
            ChaseAi::default(),
        ));
        mob.place(self, loc);
        mob
    }

    /// The entity at the cell that prevents movement into it, if any.
    ///
    /// Should several entities share a cell, the first-inserted one wins.
    pub fn blocking_entity_at(&self, loc: IVec2) -> Option<Entity> {
        self.placement
            .entities_at(loc)
            .find(|e| e.blocks_movement(self))
    }

    /// Same lookup restricted to living actors.
    pub fn actor_at(&self, loc: IVec2) -> Option<Entity> {
        self.placement.entities_at(loc).find(|e| e.is_alive(self))
    }

    /// Living actors in spawn order.
    pub fn live_actors(&self) -> impl Iterator<Item = Entity> + '_ {
        self.placement.all_entities().filter(|e| e.is_alive(self))
    }

    fn live_npcs(&self) -> Vec<Entity> {
        self.live_actors()
            .filter(|e| !e.is_player(self) && e.has::<ChaseAi>(self))
            .collect()
    }

    /// Entry point for external input, runs one full simulation turn.
    ///
    /// Fixed three-phase sequence: apply the player's action, let every
    /// other living mob react, then recompute the field of view from the
    /// player's possibly updated position. Escape short-circuits before
    /// the reaction phase.
    pub fn submit_player_action(&mut self, action: Action) {
        if !self.running {
            return;
        }
        let Some(player) = self.player else {
            log::warn!("submit_player_action: no player in the world");
            return;
        };

        player.execute(self, action);
        if !self.running {
            return;
        }

        for mob in self.live_npcs() {
            // A mob may have died earlier in this phase.
            if !mob.is_alive(self) {
                continue;
            }
            let act = mob.take_turn(self);
            mob.execute(self, act);
        }

        self.update_fov();
        self.turn += 1;
        log::debug!("turn {} complete", self.turn);
    }

    /// Recompute the visible cell set from the player's viewpoint.
    pub fn update_fov(&mut self) {
        let Some(loc) = self.player.and_then(|p| p.loc(self)) else {
            return;
        };
        self.fov.recompute(&self.terrain, loc, FOV_RADIUS);
    }

    /// Read-only projection of everything the display layer needs.
    pub fn snapshot_for_render(&self) -> Snapshot {
        let (width, height) = (self.terrain.width(), self.terrain.height());

        let mut tiles = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                let p = ivec2(x, y);
                let visibility = if self.fov.is_visible(p) {
                    TileVisibility::Visible
                } else if self.fov.is_explored(p) {
                    TileVisibility::Explored
                } else {
                    TileVisibility::Unseen
                };
                tiles.push(TileView {
                    tile: self.terrain.tile(p),
                    visibility,
                });
            }
        }

        let mut mobs: Vec<(i32, Entity, IVec2)> = self
            .placement
            .all_entities()
            .filter_map(|e| {
                let loc = e.loc(self)?;
                self.fov
                    .is_visible(loc)
                    .then(|| (e.draw_layer(self), e, loc))
            })
            .collect();
        mobs.sort_by_key(|&(layer, e, _)| (layer, e));

        let entities = mobs
            .into_iter()
            .map(|(layer, e, pos)| EntityView {
                pos,
                icon: e.icon(self),
                color: e.color(self),
                layer,
            })
            .collect();

        Snapshot {
            width,
            height,
            tiles,
            entities,
        }
    }
}

/// Palette bucket of a rendered map cell.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TileVisibility {
    #[default]
    Unseen,
    Explored,
    Visible,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TileView {
    pub tile: MapTile,
    pub visibility: TileVisibility,
}

/// A visible entity glyph, listed in stable render order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub pos: IVec2,
    pub icon: char,
    pub color: [u8; 3],
    pub layer: i32,
}

/// One frame's worth of display state. Tiles are row-major.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<TileView>,
    pub entities: Vec<EntityView>,
}
