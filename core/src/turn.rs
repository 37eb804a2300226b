//! Lane-change resolution once an obstacle is in the way.

use crate::command::Action;
use crate::rules::RaceRules;
use crate::scan::Lookahead;
use crate::score::{is_obstacle, score_lane, ObstacleFrom, ScoreFrom};
use crate::state::{Car, PowerUp, Terrain};

pub struct TurnContext<'a> {
    pub me: &'a Car,
    pub opponent: &'a Car,
    pub rules: &'a RaceRules,
    /// Lookahead in the current lane.
    pub forward: &'a Lookahead,
    /// Candidate lookaheads, index `lane - 1`.
    pub lanes: &'a [Lookahead],
    /// Lookahead in the current lane if the car accelerates.
    pub accelerate: &'a Lookahead,
}

#[derive(Clone, Copy, Debug)]
struct Neighbour {
    score: i32,
    obstructed: bool,
}

impl TurnContext<'_> {
    fn neighbour(&self, lane: i32) -> Option<Neighbour> {
        let lookahead = usize::try_from(lane - 1)
            .ok()
            .and_then(|index| self.lanes.get(index))?;
        Some(Neighbour {
            score: score_lane(lookahead, ScoreFrom::Here, self.me, self.opponent),
            obstructed: is_obstacle(lookahead, ObstacleFrom::Here),
        })
    }

    /// Staying in lane: accelerate if that is no worse and hits no wall, else
    /// drop oil at top speed, else nothing.
    fn hold_lane(&self, forward: i32) -> Action {
        let accelerate = score_lane(self.accelerate, ScoreFrom::Ahead, self.me, self.opponent);
        if accelerate >= forward && !self.accelerate.contains(Terrain::Wall) {
            Action::Accelerate
        } else if self.me.speed >= self.rules.max_speed && self.me.has_powerup(PowerUp::Oil) {
            Action::Oil
        } else {
            Action::Nothing
        }
    }
}

/// Picks a lane change (or a stay-in-lane action) from the scores of the
/// current lane and its neighbours. Ties prefer left, then forward.
pub fn resolve_turn(ctx: &TurnContext<'_>) -> Action {
    let lane = ctx.me.lane();
    let forward = score_lane(ctx.forward, ScoreFrom::Ahead, ctx.me, ctx.opponent);

    match (ctx.neighbour(lane - 1), ctx.neighbour(lane + 1)) {
        (None, None) => Action::Nothing,
        (Some(left), None) => edge_turn(ctx, Action::TurnLeft, left, forward),
        (None, Some(right)) => edge_turn(ctx, Action::TurnRight, right, forward),
        (Some(left), Some(right)) => match (left.obstructed, right.obstructed) {
            (true, true) => {
                if left.score > right.score && left.score > forward {
                    Action::TurnLeft
                } else if right.score > left.score && right.score > forward {
                    Action::TurnRight
                } else if forward > left.score && forward > right.score {
                    ctx.hold_lane(forward)
                } else {
                    Action::Nothing
                }
            }
            (false, false) => {
                if left.score >= right.score && left.score > forward {
                    Action::TurnLeft
                } else if right.score > left.score && right.score > forward {
                    Action::TurnRight
                } else {
                    Action::Nothing
                }
            }
            (true, false) => Action::TurnRight,
            (false, true) => Action::TurnLeft,
        },
    }
}

fn edge_turn(ctx: &TurnContext<'_>, turn: Action, side: Neighbour, forward: i32) -> Action {
    if !side.obstructed || side.score > forward {
        turn
    } else {
        ctx.hold_lane(forward)
    }
}
