//! Round snapshot as delivered by the game engine in `state.json`.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::error::StateError;
use crate::rules::RaceRules;
use crate::track::Track;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "y")]
    pub lane: i32,
    #[serde(rename = "x")]
    pub block: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerUp {
    Boost,
    Oil,
    Tweet,
    Lizard,
    Emp,
}

/// Surface object of a single block. Encoded on the wire as the engine's
/// numeric code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Terrain {
    Clear = 0,
    Mud = 1,
    OilSpill = 2,
    OilPickup = 3,
    Finish = 4,
    Boost = 5,
    Wall = 6,
    LizardPickup = 7,
    Tweet = 8,
    Emp = 9,
}

impl Terrain {
    #[inline]
    pub fn is_obstacle(self) -> bool {
        matches!(self, Self::Mud | Self::Wall | Self::OilSpill)
    }
}

impl TryFrom<u8> for Terrain {
    type Error = StateError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Clear,
            1 => Self::Mud,
            2 => Self::OilSpill,
            3 => Self::OilPickup,
            4 => Self::Finish,
            5 => Self::Boost,
            6 => Self::Wall,
            7 => Self::LizardPickup,
            8 => Self::Tweet,
            9 => Self::Emp,
            _ => return Err(StateError::UnknownTerrain { code }),
        })
    }
}

impl From<Terrain> for u8 {
    fn from(terrain: Terrain) -> Self {
        terrain as u8
    }
}

/// Either car. The opponent's record only carries id, position and speed;
/// everything else defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: i32,
    pub position: Position,
    pub speed: i32,
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub boosting: bool,
    #[serde(default)]
    pub boost_counter: i32,
    #[serde(default)]
    pub powerups: Vec<PowerUp>,
    #[serde(default)]
    pub score: i32,
}

impl Car {
    #[inline]
    pub fn lane(&self) -> i32 {
        self.position.lane
    }

    #[inline]
    pub fn block(&self) -> i32 {
        self.position.block
    }

    pub fn has_powerup(&self, kind: PowerUp) -> bool {
        self.powerups.contains(&kind)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub position: Position,
    #[serde(rename = "surfaceObject")]
    pub terrain: Terrain,
    #[serde(default)]
    pub occupied_by_player_id: i32,
    #[serde(rename = "isOccupiedByCyberTruck", default)]
    pub occupied_by_cyber_truck: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_round: u32,
    #[serde(default)]
    pub max_rounds: u32,
    pub player: Car,
    pub opponent: Car,
    pub world_map: Vec<Vec<Option<Cell>>>,
}

impl GameState {
    pub fn track(&self) -> Track<'_> {
        Track::new(&self.world_map)
    }

    /// Checks the shape the decision code relies on. Everything downstream of
    /// a successful `validate` treats these as preconditions.
    pub fn validate(&self, rules: &RaceRules) -> Result<(), StateError> {
        if self.world_map.is_empty() {
            return Err(StateError::EmptyWorldMap);
        }
        let expected = rules.lane_count.max(0) as usize;
        if self.world_map.len() != expected {
            return Err(StateError::LaneCountMismatch {
                expected,
                found: self.world_map.len(),
            });
        }
        if self.world_map[0].first().copied().flatten().is_none() {
            return Err(StateError::MissingStartCell);
        }
        for (car, name) in [(&self.player, "player"), (&self.opponent, "opponent")] {
            if car.lane() < 1 || car.lane() > rules.lane_count {
                return Err(StateError::LaneOutOfRange {
                    car: name,
                    lane: car.lane(),
                    lane_count: rules.lane_count,
                });
            }
        }
        Ok(())
    }
}
