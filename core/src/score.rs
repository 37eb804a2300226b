//! Obstacle checks and lane desirability scoring over a lookahead.

use crate::constants::{
    SCORE_BOOST, SCORE_EMP_TRAILING, SCORE_MUD, SCORE_OIL_SPILL, SCORE_TWEET, SCORE_WALL,
};
use crate::predicates::in_front;
use crate::scan::Lookahead;
use crate::state::{Car, Terrain};

/// First lookahead index an obstacle check considers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObstacleFrom {
    /// Include the car's own block.
    Here,
    /// Only blocks strictly ahead of the car.
    Ahead,
}

/// First lookahead index a lane score considers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreFrom {
    /// Include the car's own block.
    Here,
    /// Start one block ahead of the car.
    Ahead,
}

impl ObstacleFrom {
    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Here => 0,
            Self::Ahead => 1,
        }
    }
}

impl ScoreFrom {
    #[inline]
    fn index(self) -> usize {
        match self {
            Self::Here => 0,
            Self::Ahead => 1,
        }
    }
}

pub fn is_obstacle(lookahead: &Lookahead, from: ObstacleFrom) -> bool {
    lookahead
        .tail(from.index())
        .iter()
        .any(|terrain| terrain.is_obstacle())
}

/// Score contribution of a single block. EMP pickups only pay off when
/// `me` is trailing.
pub fn terrain_score(terrain: Terrain, me: &Car, opponent: &Car) -> i32 {
    match terrain {
        Terrain::Mud => SCORE_MUD,
        Terrain::OilSpill => SCORE_OIL_SPILL,
        Terrain::Wall => SCORE_WALL,
        Terrain::Boost => SCORE_BOOST,
        Terrain::Tweet => SCORE_TWEET,
        Terrain::Emp if in_front(opponent, me) => SCORE_EMP_TRAILING,
        _ => 0,
    }
}

/// Sum of per-block scores. Higher is a more desirable lane.
pub fn score_lane(lookahead: &Lookahead, from: ScoreFrom, me: &Car, opponent: &Car) -> i32 {
    lookahead
        .tail(from.index())
        .iter()
        .map(|&terrain| terrain_score(terrain, me, opponent))
        .sum()
}
