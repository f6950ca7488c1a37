//! Mobs figuring out what to do on their own.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Chase-the-player brain, attached to hostile mobs while they live.
///
/// Carries the path cached from the last time the mob was in view.
/// The path is consumed one cell per turn and replanned whenever the mob
/// sees the player again, so mobs keep heading for the player's last
/// known position after losing sight.
#[derive(Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
pub struct ChaseAi {
    pub path: VecDeque<IVec2>,
}

impl Entity {
    /// Decide on the mob's action for this turn.
    ///
    /// Attack when adjacent and in view, otherwise follow the cached path
    /// towards the player, idle when there is no path left.
    pub(crate) fn take_turn(&self, r: &mut Runtime) -> Action {
        if self.is_player(r) {
            log::warn!("Entity::take_turn: player mob has a chase brain");
            return Action::Wait;
        }
        let (Some(loc), Some(player)) = (self.loc(r), r.player()) else {
            return Action::Wait;
        };
        let Some(target) = player.loc(r) else {
            return Action::Wait;
        };

        let delta = target - loc;
        let distance = delta.x.abs().max(delta.y.abs());

        // Sharing the player's cell leaves nothing to swing at.
        if distance == 0 {
            return Action::Wait;
        }

        // Visibility is symmetric, when the mob's cell is in the player's
        // view the mob sees the player back.
        if r.fov().is_visible(loc) {
            if distance <= 1 {
                return Action::MeleeAttack(delta);
            }
            let path: VecDeque<IVec2> = r.find_path(loc, target).into();
            self.with_mut::<ChaseAi, _>(r, |ai| ai.path = path);
        }

        if let Some(next) = self
            .with_mut::<ChaseAi, _>(r, |ai| ai.path.pop_front())
            .flatten()
        {
            let step = next - loc;
            // A blocked step still consumed its path cell, so a stale path
            // can fall out of reach. Drop it rather than lunge across the
            // gap.
            if step != IVec2::ZERO && step.abs().max_element() <= 1 {
                return Action::Step(step);
            }
            self.with_mut::<ChaseAi, _>(r, |ai| ai.path.clear());
        }

        Action::Wait
    }
}

#[cfg(test)]
mod tests {
    use crate::{ecs::Stats, prelude::*, ChaseAi};

    fn spawn_orc(r: &mut Runtime, loc: IVec2) -> Entity {
        r.spawn_mob(
            "orc",
            'o',
            [63, 127, 63],
            loc,
            Stats {
                power: 3,
                defense: 0,
            },
            10,
        )
    }

    #[test]
    fn adjacent_visible_mob_attacks() {
        let mut r = Runtime::new("...".parse::<Terrain>().unwrap());
        let _player = r.spawn_player(ivec2(0, 0));
        let orc = spawn_orc(&mut r, ivec2(1, 0));

        assert_eq!(
            orc.take_turn(&mut r),
            Action::MeleeAttack(ivec2(-1, 0))
        );
    }

    #[test]
    fn visible_mob_replans_and_steps() {
        let mut r = Runtime::new(".....".parse::<Terrain>().unwrap());
        let _player = r.spawn_player(ivec2(0, 0));
        let orc = spawn_orc(&mut r, ivec2(3, 0));

        assert_eq!(orc.take_turn(&mut r), Action::Step(ivec2(-1, 0)));
        // The remaining path keeps pointing at the player.
        assert_eq!(
            orc.get::<ChaseAi>(&r).path,
            vec![ivec2(1, 0), ivec2(0, 0)]
        );
    }

    #[test]
    fn unseen_mob_follows_stale_path() {
        let mut r = Runtime::new(
            "
            ...#.
            ...#."
                .parse::<Terrain>()
                .unwrap(),
        );
        let _player = r.spawn_player(ivec2(0, 0));
        let orc = spawn_orc(&mut r, ivec2(4, 0));
        orc.set(
            &mut r,
            ChaseAi {
                path: vec![ivec2(4, 1)].into(),
            },
        );

        // Hidden behind the wall column, the cached path still runs out.
        assert_eq!(orc.take_turn(&mut r), Action::Step(ivec2(0, 1)));
        assert_eq!(orc.take_turn(&mut r), Action::Wait);
    }

    #[test]
    fn blocked_step_does_not_derail_stale_path() {
        let mut r = Runtime::new(
            "
            ...#.
            ...#.
            ...#."
                .parse::<Terrain>()
                .unwrap(),
        );
        let _player = r.spawn_player(ivec2(0, 0));
        let orc = spawn_orc(&mut r, ivec2(4, 0));
        let _crowd = spawn_orc(&mut r, ivec2(4, 1));
        orc.set(
            &mut r,
            ChaseAi {
                path: vec![ivec2(4, 1), ivec2(4, 2)].into(),
            },
        );

        // The step onto the occupied path cell fails silently but the
        // cell is spent.
        let act = orc.take_turn(&mut r);
        assert_eq!(act, Action::Step(ivec2(0, 1)));
        orc.execute(&mut r, act);
        assert_eq!(orc.loc(&r), Some(ivec2(4, 0)));

        // The rest of the path is out of reach now, the mob gives it up
        // instead of stepping two cells at once.
        assert_eq!(orc.take_turn(&mut r), Action::Wait);
        assert!(orc.get::<ChaseAi>(&r).path.is_empty());
    }

    #[test]
    fn mob_sharing_the_player_cell_waits() {
        let mut r = Runtime::new("...".parse::<Terrain>().unwrap());
        let _player = r.spawn_player(ivec2(1, 0));
        let orc = spawn_orc(&mut r, ivec2(1, 0));

        assert_eq!(orc.take_turn(&mut r), Action::Wait);
    }

    #[test]
    fn unseen_mob_without_path_waits() {
        let mut r = Runtime::new(
            "
            ..#..
            ..#.."
                .parse::<Terrain>()
                .unwrap(),
        );
        let _player = r.spawn_player(ivec2(0, 0));
        let orc = spawn_orc(&mut r, ivec2(3, 0));

        assert_eq!(orc.take_turn(&mut r), Action::Wait);
    }
}
