//! Generic entity logic.

use hecs::Component;

use crate::{
    ecs::{Blocks, Color, DrawLayer, Health, Icon, Name, Stats},
    msg::sentence,
    prelude::*,
    ChaseAi,
};

// Dummy wrapper so we can write impls for it directly instead of deriving a
// trait for hecs::Entity and writing every fn signature twice.
/// Game entity identifier datatype. All the actual contents live in the ECS.
#[derive(
    Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug,
)]
pub struct Entity(pub(crate) hecs::Entity);

impl Entity {
    pub(crate) fn get<T>(&self, r: &Runtime) -> T
    where
        T: Component + Clone + Default,
    {
        r.ecs
            .get::<&T>(self.0)
            .map(|c| (*c).clone())
            .unwrap_or_default()
    }

    pub(crate) fn set<T: Component>(&self, r: &mut Runtime, val: T) {
        r.ecs.insert_one(self.0, val).expect("Entity::set failed");
    }

    /// Access and mutate a component using a closure.
    ///
    /// No-op returning `None` when the entity lacks the component.
    pub(crate) fn with_mut<T: Component, U>(
        &self,
        r: &mut Runtime,
        f: impl FnOnce(&mut T) -> U,
    ) -> Option<U> {
        r.ecs.query_one_mut::<&mut T>(self.0).ok().map(f)
    }

    pub fn loc(&self, r: &Runtime) -> Option<IVec2> {
        r.placement.entity_pos(self)
    }

    /// Put the entity at a map cell.
    ///
    /// This is the only place entity positions mutate.
    pub(crate) fn place(&self, r: &mut Runtime, loc: IVec2) {
        debug_assert!(r.terrain().in_bounds(loc));
        r.placement.insert(loc, *self);
    }

    pub fn is_player(&self, r: &Runtime) -> bool {
        r.player() == Some(*self)
    }

    pub(crate) fn has<T: Component>(&self, r: &Runtime) -> bool {
        r.ecs.get::<&T>(self.0).is_ok()
    }

    /// Actors are entities that can fight and take damage.
    pub fn is_actor(&self, r: &Runtime) -> bool {
        self.has::<Health>(r)
    }

    pub fn is_alive(&self, r: &Runtime) -> bool {
        self.is_actor(r) && self.get::<Health>(r).hp > 0
    }

    pub fn blocks_movement(&self, r: &Runtime) -> bool {
        self.get::<Blocks>(r).0
    }

    pub fn stats(&self, r: &Runtime) -> Stats {
        self.get::<Stats>(r)
    }

    pub fn health(&self, r: &Runtime) -> Health {
        self.get::<Health>(r)
    }

    pub fn icon(&self, r: &Runtime) -> char {
        match self.get::<Icon>(r) {
            Icon('\0') => '?',
            Icon(c) => c,
        }
    }

    pub fn color(&self, r: &Runtime) -> [u8; 3] {
        self.get::<Color>(r).0
    }

    pub fn draw_layer(&self, r: &Runtime) -> i32 {
        self.get::<DrawLayer>(r).0
    }

    /// Description string, "you" for the player.
    pub fn desc(&self, r: &Runtime) -> String {
        if self.is_player(r) {
            "you".into()
        } else {
            format!("the {}", self.get::<Name>(r).0)
        }
    }

    /// Apply combat damage and handle the death transition.
    pub(crate) fn take_damage(&self, r: &mut Runtime, amount: i32) {
        debug_assert!(amount > 0, "non-positive damage never lands");

        self.with_mut::<Health, _>(r, |h| h.hp -= amount);
        if self.get::<Health>(r).hp <= 0 {
            self.die(r);
        }
    }

    /// Turn a dead actor into inert remains.
    ///
    /// The corpse stops blocking movement, loses its brain and drops under
    /// living mobs in draw order.
    fn die(&self, r: &mut Runtime) {
        if self.is_player(r) {
            r.post_msg(MsgTone::PlayerDeath, "You died!");
        } else {
            r.post_msg(
                MsgTone::EnemyDeath,
                sentence(&format!("{} is dead!", self.desc(r))),
            );
        }

        let name = self.get::<Name>(r).0;
        self.set(r, Name(format!("remains of {name}")));
        self.set(r, Icon('%'));
        self.set(r, Color([191, 0, 0]));
        self.set(r, Blocks(false));
        self.set(r, DrawLayer(0));
        // Behavior exists only on living actors.
        let _ = r.ecs.remove_one::<ChaseAi>(self.0);
    }
}
