//! Per-level lookup tables keyed by the closed [`Level`] enumeration, so a
//! name or color lookup can never land outside the defined rank range.

use super::Level;
use std::ops::{Index, IndexMut};

/// One entry per defined level, no gaps. Each logger owns its own table;
/// overriding an entry on one instance never affects another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable<T>([T; Level::COUNT]);

impl<T> LevelTable<T> {
    /// Entries must be given in rank order, `Debug` first.
    #[must_use]
    pub const fn new(entries: [T; Level::COUNT]) -> Self {
        Self(entries)
    }

    /// Builds the table by calling `f` once per level in rank order.
    #[must_use]
    pub fn from_fn(f: impl FnMut(Level) -> T) -> Self {
        Self(Level::all().map(f))
    }

    /// Replaces a single level's entry, leaving the others untouched.
    pub fn set(&mut self, level: Level, entry: T) {
        self.0[level as usize] = entry;
    }

    #[must_use]
    pub const fn get(&self, level: Level) -> &T {
        &self.0[level as usize]
    }

    /// Entries paired with their level, in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Level, &T)> {
        Level::all().into_iter().zip(self.0.iter())
    }
}

impl<T> Index<Level> for LevelTable<T> {
    type Output = T;

    fn index(&self, level: Level) -> &T {
        &self.0[level as usize]
    }
}

impl<T> IndexMut<Level> for LevelTable<T> {
    fn index_mut(&mut self, level: Level) -> &mut T {
        &mut self.0[level as usize]
    }
}

impl<T: Default> Default for LevelTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}
