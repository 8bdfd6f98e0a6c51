// items.rs

use bevy::prelude::Resource;
use std::fmt;

/// Opaque identifier of one list entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered item list owned by the host.
///
/// Only the order is mutable from the outside: the slice handed to the
/// reorder engine cannot grow or shrink, so the set of ids never changes
/// through a reorder.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemOrder(Vec<ItemId>);

impl ItemOrder {
    /// Ids `0..count` in ascending order
    pub fn sequence(count: usize) -> Self {
        ItemOrder((0..count).map(ItemId).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Item shown at a list position
    pub fn get(&self, position: usize) -> Option<ItemId> {
        self.0.get(position).copied()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.0
    }

    /// Mutable view for reordering (no insertion or removal)
    pub fn as_mut_slice(&mut self) -> &mut [ItemId] {
        &mut self.0
    }
}

impl From<Vec<usize>> for ItemOrder {
    fn from(ids: Vec<usize>) -> Self {
        ItemOrder(ids.into_iter().map(ItemId).collect())
    }
}
