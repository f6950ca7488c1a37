//! Entities doing things.

use serde::{Deserialize, Serialize};

use crate::{msg::sentence, prelude::*};

/// Atomic single-turn actions.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Stand still for the turn.
    Wait,
    /// End the simulation session. An expected exit signal, not an error.
    Escape,
    /// Attack or step, depending on what holds the destination cell. The
    /// default key-driven directional action.
    Bump(IVec2),
    /// Plain movement, used when the chase AI follows a path.
    Step(IVec2),
    MeleeAttack(IVec2),
}

impl Entity {
    /// Execute an action against the world.
    ///
    /// Illegal directional actions fail by doing nothing, a blocked move
    /// must not interrupt turn flow or need special handling upstream.
    pub fn execute(&self, r: &mut Runtime, action: Action) {
        use Action::*;
        match action {
            Wait => {}
            Escape => r.halt(),
            Bump(dir) => self.bump(r, dir),
            Step(dir) => {
                self.step(r, dir);
            }
            MeleeAttack(dir) => self.melee(r, dir),
        }
    }

    /// Melee when the destination holds a living actor, move otherwise.
    fn bump(&self, r: &mut Runtime, dir: IVec2) {
        check_dir(dir);
        let Some(loc) = self.loc(r) else { return };

        if r.actor_at(loc + dir).is_some() {
            self.melee(r, dir);
        } else {
            self.step(r, dir);
        }
    }

    /// Try to move one cell. Returns whether movement happened.
    fn step(&self, r: &mut Runtime, dir: IVec2) -> bool {
        check_dir(dir);
        let Some(loc) = self.loc(r) else { return false };
        let dest = loc + dir;

        if !r.terrain().in_bounds(dest) {
            return false;
        }
        if !r.terrain().is_walkable(dest) {
            return false;
        }
        if r.blocking_entity_at(dest).is_some() {
            return false;
        }

        self.place(r, dest);
        true
    }

    fn melee(&self, r: &mut Runtime, dir: IVec2) {
        check_dir(dir);
        let Some(loc) = self.loc(r) else { return };
        let Some(target) = r.actor_at(loc + dir) else { return };

        let damage = self.stats(r).power - target.stats(r).defense;
        let tone = if self.is_player(r) {
            MsgTone::PlayerAttack
        } else {
            MsgTone::EnemyAttack
        };

        if damage > 0 {
            r.post_msg(
                tone,
                sentence(&format!(
                    "{} attacks {} for {damage} hit points.",
                    self.desc(r),
                    target.desc(r)
                )),
            );
            target.take_damage(r, damage);
        } else {
            r.post_msg(
                tone,
                sentence(&format!(
                    "{} attacks {} but does no damage.",
                    self.desc(r),
                    target.desc(r)
                )),
            );
        }
    }
}

fn check_dir(dir: IVec2) {
    debug_assert!(
        dir.x.abs() <= 1 && dir.y.abs() <= 1 && dir != IVec2::ZERO,
        "bad action direction {dir}"
    );
}
