//! Single-turn decision cascade.
//!
//! Rules are checked top-down and the first one that produces an action wins.
//! Nothing is carried between calls.

use core::fmt;

use crate::command::Action;
use crate::constants::{OIL_DROP_RANGE, SPEED_STATE_1, TWEET_LEAD, TWEET_LEAD_SLOW};
use crate::predicates::{
    in_front, is_beside, is_boost_nice, is_collided, is_emp_nice, is_lizard_nice,
};
use crate::rules::{Budget, RaceRules};
use crate::scan::{scan_for, scan_lanes, Lookahead};
use crate::score::{is_obstacle, ObstacleFrom};
use crate::state::{Car, GameState, PowerUp};
use crate::track::Track;
use crate::turn::{resolve_turn, TurnContext};

/// Cascade step that produced an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Repair,
    EarlyAccelerate,
    Dodge,
    Tempo,
    OffenseAhead,
    OffenseBehind,
    SpendOil,
    PreBoostFix,
    Fallback,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Repair => "repair",
            Self::EarlyAccelerate => "early_accelerate",
            Self::Dodge => "dodge",
            Self::Tempo => "tempo",
            Self::OffenseAhead => "offense_ahead",
            Self::OffenseBehind => "offense_behind",
            Self::SpendOil => "spend_oil",
            Self::PreBoostFix => "pre_boost_fix",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub action: Action,
    pub rule: Rule,
}

impl Verdict {
    fn new(action: Action, rule: Rule) -> Self {
        Self { action, rule }
    }
}

pub fn decide(state: &GameState, rules: &RaceRules) -> Action {
    evaluate(state, rules).action
}

/// Runs the cascade and reports which rule fired.
///
/// `state` must satisfy `GameState::validate` for `rules`.
pub fn evaluate(state: &GameState, rules: &RaceRules) -> Verdict {
    let me = &state.player;
    let opponent = &state.opponent;
    let track = state.track();
    let lane = me.lane();

    let current = scan_for(&track, me, lane, Budget::CurrentSpeed, rules);
    let accelerate = scan_for(&track, me, lane, Budget::Accelerate, rules);
    let boost = scan_for(&track, me, lane, Budget::Boost, rules);

    if me.damage >= rules.fix_damage {
        return Verdict::new(Action::Fix, Rule::Repair);
    }

    if me.speed <= rules.early_acceleration_speed
        && !is_obstacle(&accelerate, ObstacleFrom::Ahead)
    {
        return Verdict::new(Action::Accelerate, Rule::EarlyAccelerate);
    }

    let at_boost_speed = rules.at_boost_speed(me);
    if is_obstacle(&current, ObstacleFrom::Ahead)
        || is_collided(me, opponent)
        || (at_boost_speed && is_obstacle(&boost, ObstacleFrom::Ahead))
    {
        let dodge = Dodge {
            track: &track,
            me,
            opponent,
            rules,
            current: &current,
            accelerate: &accelerate,
        };
        let action = if at_boost_speed {
            dodge.resolve(&boost, Budget::Boost)
        } else {
            dodge.resolve(&current, Budget::CurrentSpeed)
        };
        return Verdict::new(action, Rule::Dodge);
    }

    if me.speed < rules.tempo_speed {
        if is_boost_nice(me, &boost) {
            return Verdict::new(Action::Boost, Rule::Tempo);
        }
        if !is_obstacle(&accelerate, ObstacleFrom::Ahead) {
            return Verdict::new(Action::Accelerate, Rule::Tempo);
        }
    }

    if in_front(me, opponent) {
        if is_boost_nice(me, &boost) {
            return Verdict::new(Action::Boost, Rule::OffenseAhead);
        }
        if me.has_powerup(PowerUp::Oil)
            && me.block() - opponent.block() <= OIL_DROP_RANGE
            && is_beside(me, opponent)
        {
            return Verdict::new(Action::Oil, Rule::OffenseAhead);
        }
        if me.has_powerup(PowerUp::Tweet) {
            return Verdict::new(tweet_at(opponent), Rule::OffenseAhead);
        }
    }

    if in_front(opponent, me) {
        if is_emp_nice(me, opponent) {
            return Verdict::new(Action::Emp, Rule::OffenseBehind);
        }
        if is_boost_nice(me, &boost) {
            return Verdict::new(Action::Boost, Rule::OffenseBehind);
        }
        if me.has_powerup(PowerUp::Tweet) {
            return Verdict::new(tweet_at(opponent), Rule::OffenseBehind);
        }
    }

    if me.speed >= rules.max_speed && me.has_powerup(PowerUp::Oil) {
        return Verdict::new(Action::Oil, Rule::SpendOil);
    }

    if me.has_powerup(PowerUp::Boost)
        && me.damage >= 1
        && me.speed == rules.max_speed
        && in_front(opponent, me)
    {
        return Verdict::new(Action::Fix, Rule::PreBoostFix);
    }

    if is_obstacle(&accelerate, ObstacleFrom::Ahead) {
        let lanes = scan_lanes(&track, me, Budget::CurrentSpeed, rules);
        let action = resolve_turn(&TurnContext {
            me,
            opponent,
            rules,
            forward: &current,
            lanes: &lanes,
            accelerate: &accelerate,
        });
        return Verdict::new(action, Rule::Fallback);
    }

    Verdict::new(Action::Accelerate, Rule::Fallback)
}

/// Cyber truck drops ahead of where the opponent should be next round. A slow
/// opponent is assumed to accelerate.
pub fn tweet_at(opponent: &Car) -> Action {
    let lead = if opponent.speed <= SPEED_STATE_1 {
        TWEET_LEAD_SLOW
    } else {
        TWEET_LEAD
    };
    Action::Tweet {
        lane: opponent.lane(),
        block: opponent.block() + opponent.speed + lead,
    }
}

struct Dodge<'a> {
    track: &'a Track<'a>,
    me: &'a Car,
    opponent: &'a Car,
    rules: &'a RaceRules,
    current: &'a Lookahead,
    accelerate: &'a Lookahead,
}

impl Dodge<'_> {
    /// Lizard over the hazard if worthwhile, otherwise steer around it using
    /// candidate lanes scanned with `budget`.
    fn resolve(&self, own_lane: &Lookahead, budget: Budget) -> Action {
        if is_lizard_nice(self.me, self.opponent, own_lane, self.rules) {
            return Action::Lizard;
        }
        let lanes = scan_lanes(self.track, self.me, budget, self.rules);
        resolve_turn(&TurnContext {
            me: self.me,
            opponent: self.opponent,
            rules: self.rules,
            forward: self.current,
            lanes: &lanes,
            accelerate: self.accelerate,
        })
    }
}
