//! Lookahead scanning along a single lane.

use alloc::vec::Vec;
use core::slice;

use crate::rules::{Budget, RaceRules};
use crate::state::{Car, Terrain};
use crate::track::Track;

/// Terrain a car would pass over, starting at its own block. Never contains a
/// finish block or anything beyond it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lookahead {
    tiles: Vec<Terrain>,
}

impl Lookahead {
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Terrain> {
        self.tiles.get(index).copied()
    }

    pub fn contains(&self, terrain: Terrain) -> bool {
        self.tiles.contains(&terrain)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Terrain] {
        &self.tiles
    }

    /// Tiles from `index` on; empty when `index` is past the end.
    pub fn tail(&self, index: usize) -> &[Terrain] {
        self.tiles.get(index..).unwrap_or(&[])
    }

    pub fn iter(&self) -> slice::Iter<'_, Terrain> {
        self.tiles.iter()
    }
}

impl FromIterator<Terrain> for Lookahead {
    fn from_iter<I: IntoIterator<Item = Terrain>>(iter: I) -> Self {
        Self {
            tiles: iter.into_iter().collect(),
        }
    }
}

/// Collects the terrain of `lane` from `from_block` through
/// `from_block + budget`, stopping at the first absent or finish block.
pub fn scan(track: &Track<'_>, lane: i32, from_block: i32, budget: i32) -> Lookahead {
    let first = (from_block - track.start_block()).max(0);
    let last = from_block - track.start_block() + budget;

    let mut tiles = Vec::with_capacity((last - first + 1).max(0) as usize);
    for offset in first..=last {
        match track.tile(lane, offset as usize) {
            None | Some(Terrain::Finish) => break,
            Some(terrain) => tiles.push(terrain),
        }
    }
    Lookahead { tiles }
}

/// Lookahead for `car` on `lane` sized by `budget`.
pub fn scan_for(
    track: &Track<'_>,
    car: &Car,
    lane: i32,
    budget: Budget,
    rules: &RaceRules,
) -> Lookahead {
    scan(track, lane, car.block(), rules.budget(budget, car))
}

/// One lookahead per lane (index `lane - 1`), all from the car's block.
pub fn scan_lanes(track: &Track<'_>, car: &Car, budget: Budget, rules: &RaceRules) -> Vec<Lookahead> {
    (1..=track.lane_count() as i32)
        .map(|lane| scan_for(track, car, lane, budget, rules))
        .collect()
}
