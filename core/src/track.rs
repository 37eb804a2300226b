//! Indexed view over the visible part of the track.

use alloc::vec::Vec;

use crate::state::{Cell, Terrain};

/// Borrowed view of `worldMap`. Row `lane - 1` holds that lane's cells, all
/// rows starting at the same block.
#[derive(Clone, Copy, Debug)]
pub struct Track<'a> {
    start_block: i32,
    lanes: &'a [Vec<Option<Cell>>],
}

impl<'a> Track<'a> {
    pub fn new(lanes: &'a [Vec<Option<Cell>>]) -> Self {
        let start_block = lanes
            .first()
            .and_then(|row| row.first())
            .and_then(|cell| cell.as_ref())
            .map_or(0, |cell| cell.position.block);
        Self { start_block, lanes }
    }

    #[inline]
    pub fn start_block(&self) -> i32 {
        self.start_block
    }

    #[inline]
    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    /// Terrain at `offset` blocks past the start of `lane`, or `None` once the
    /// populated track ends. A block holding a cyber truck reads as a wall,
    /// except the finish line, which always reads as `Finish`.
    ///
    /// Panics if `lane` is not on the track.
    pub fn tile(&self, lane: i32, offset: usize) -> Option<Terrain> {
        assert!(
            lane >= 1 && lane as usize <= self.lanes.len(),
            "lane {lane} is outside a track of {} lanes",
            self.lanes.len()
        );
        let cell = self.lanes[(lane - 1) as usize].get(offset).copied().flatten()?;
        if cell.occupied_by_cyber_truck && cell.terrain != Terrain::Finish {
            Some(Terrain::Wall)
        } else {
            Some(cell.terrain)
        }
    }
}
