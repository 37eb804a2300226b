//! Compact builders for snapshots used across the unit tests.
//!
//! Lanes are written one character per block: `.` clear, `m` mud, `o` oil
//! spill, `O` oil pickup, `f` finish, `b` boost, `w` wall, `l` lizard, `t`
//! tweet, `e` emp, `c` cyber truck on clear road, `F` cyber truck on the
//! finish line, `_` absent.

use alloc::vec::Vec;

use crate::scan::Lookahead;
use crate::state::{Car, Cell, GameState, Position, PowerUp, Terrain};

fn terrain(symbol: char) -> Terrain {
    match symbol {
        '.' | 'c' => Terrain::Clear,
        'm' => Terrain::Mud,
        'o' => Terrain::OilSpill,
        'O' => Terrain::OilPickup,
        'f' | 'F' => Terrain::Finish,
        'b' => Terrain::Boost,
        'w' => Terrain::Wall,
        'l' => Terrain::LizardPickup,
        't' => Terrain::Tweet,
        'e' => Terrain::Emp,
        other => panic!("unknown lane symbol {other:?}"),
    }
}

pub(crate) fn lookahead(tiles: &str) -> Lookahead {
    tiles.chars().map(terrain).collect()
}

pub(crate) fn world_map(start_block: i32, lanes: &[&str]) -> Vec<Vec<Option<Cell>>> {
    lanes
        .iter()
        .zip(1..)
        .map(|(row, lane)| {
            row.chars()
                .zip(start_block..)
                .map(|(symbol, block)| {
                    (symbol != '_').then(|| Cell {
                        position: Position { lane, block },
                        terrain: terrain(symbol),
                        occupied_by_player_id: 0,
                        occupied_by_cyber_truck: matches!(symbol, 'c' | 'F'),
                    })
                })
                .collect()
        })
        .collect()
}

pub(crate) fn car(lane: i32, block: i32, speed: i32) -> Car {
    Car {
        id: 1,
        position: Position { lane, block },
        speed,
        damage: 0,
        boosting: false,
        boost_counter: 0,
        powerups: Vec::new(),
        score: 0,
    }
}

impl Car {
    pub(crate) fn with_powerups(mut self, powerups: &[PowerUp]) -> Self {
        self.powerups = powerups.to_vec();
        self
    }

    pub(crate) fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    pub(crate) fn boosting(mut self) -> Self {
        self.boosting = true;
        self.boost_counter = 5;
        self
    }
}

/// Snapshot whose map starts at the player's block.
pub(crate) fn state(player: Car, mut opponent: Car, lanes: &[&str]) -> GameState {
    opponent.id = 2;
    GameState {
        current_round: 1,
        max_rounds: 0,
        world_map: world_map(player.block(), lanes),
        player,
        opponent,
    }
}
