//! Positional checks between the two cars and "is this power-up worth using
//! now" heuristics.

use crate::constants::{EMP_TARGET_MIN_SPEED, LIZARD_SCORE_THRESHOLD};
use crate::rules::RaceRules;
use crate::scan::Lookahead;
use crate::score::{is_obstacle, score_lane, ObstacleFrom, ScoreFrom};
use crate::state::{Car, PowerUp};

#[inline]
pub fn is_beside(a: &Car, b: &Car) -> bool {
    (a.lane() - b.lane()).abs() <= 1
}

/// `a` is strictly further along the track than `b`.
#[inline]
pub fn in_front(a: &Car, b: &Car) -> bool {
    a.block() > b.block()
}

/// `me` sits directly behind `opponent` in the same lane.
#[inline]
pub fn is_collided(me: &Car, opponent: &Car) -> bool {
    me.lane() == opponent.lane() && me.block() - opponent.block() == -1
}

pub fn is_boost_nice(me: &Car, boost: &Lookahead) -> bool {
    me.has_powerup(PowerUp::Boost)
        && !is_obstacle(boost, ObstacleFrom::Ahead)
        && me.damage == 0
        && !me.boosting
}

/// Near the finish a held lizard is always worth using. Otherwise only when
/// the lane is bad enough and the block the car lands on is clean; a landing
/// block past the end of `lookahead` counts as clean.
pub fn is_lizard_nice(me: &Car, opponent: &Car, lookahead: &Lookahead, rules: &RaceRules) -> bool {
    if !me.has_powerup(PowerUp::Lizard) {
        return false;
    }
    if rules.finish_block - me.block() <= me.speed {
        return true;
    }
    let landing_clear = usize::try_from(me.speed)
        .ok()
        .and_then(|index| lookahead.get(index))
        .map_or(true, |terrain| !terrain.is_obstacle());
    score_lane(lookahead, ScoreFrom::Here, me, opponent) < LIZARD_SCORE_THRESHOLD && landing_clear
}

/// EMP pays off against a fast opponent in reach of the blast that we would
/// not catch this turn by driving.
pub fn is_emp_nice(me: &Car, opponent: &Car) -> bool {
    opponent.speed >= EMP_TARGET_MIN_SPEED
        && is_beside(me, opponent)
        && me.has_powerup(PowerUp::Emp)
        && opponent.block() - me.block() > me.speed
}
