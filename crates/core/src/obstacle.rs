//! Obstacles and the ordered collection that owns them.
//!
//! The set keeps spawn order. Traversal hands each obstacle out mutably and
//! lets the visitor drop it on the spot; survivors keep their relative order so
//! rendering and tests see a deterministic sequence.

use crate::types::ROWS;

/// One hazard on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub lane: u8,
    pub row: u8,
}

impl Obstacle {
    pub fn new(lane: u8, row: u8) -> Self {
        Self { lane, row }
    }

    /// Scroll one row toward the player.
    pub fn advance(&mut self) {
        self.row = self.row.saturating_add(1);
    }

    /// Past the last row and due for removal.
    pub fn is_off_road(&self) -> bool {
        self.row >= ROWS
    }

    pub fn occupies(&self, lane: u8, row: u8) -> bool {
        self.lane == lane && self.row == row
    }
}

/// Verdict returned by a [`ObstacleSet::for_each_removable`] visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Keep,
    Remove,
}

/// Ordered collection of live obstacles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObstacleSet {
    items: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(crate::types::MAX_OBSTACLES),
        }
    }

    /// Append a new obstacle at the tail.
    pub fn append(&mut self, lane: u8, row: u8) {
        self.items.push(Obstacle::new(lane, row));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Forward traversal in spawn order.
    pub fn iter(&self) -> std::slice::Iter<'_, Obstacle> {
        self.items.iter()
    }

    /// Visit every obstacle in spawn order, removing those the visitor rejects.
    ///
    /// Removal of the current element never disturbs the visit of the ones after
    /// it. The whole pass is a single in-place compaction, so each removal costs
    /// O(1) and survivors keep their order. Returns how many were removed.
    pub fn for_each_removable<F>(&mut self, mut visit: F) -> u32
    where
        F: FnMut(&mut Obstacle) -> Visit,
    {
        let before = self.items.len();
        self.items.retain_mut(|o| visit(o) == Visit::Keep);
        (before - self.items.len()) as u32
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
