//! Grid mutation with conflict enforcement.
//!
//! [`Schedule`] owns every class grid together with the reverse index, so the
//! two structures can only change in step. All writes, including the
//! rename/remove cascades and document decoding, go through [`Schedule::assign`],
//! [`Schedule::clear`], or the cascade application.

use std::collections::BTreeMap;

use crate::error::{Result, TimetableError};
use crate::grid::TimetableGrid;
use crate::index::ScheduleIndex;
use crate::registry::{RegistryEvent, TeacherRegistry};
use crate::types::{ClassName, Slot, TeacherKey};

/// All class grids plus the index answering busy queries across them.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    grids: BTreeMap<ClassName, TimetableGrid>,
    index: ScheduleIndex,
}

impl Schedule {
    pub fn new() -> Schedule {
        Schedule::default()
    }

    /// Create an empty grid for `class`.
    ///
    /// # Errors
    /// `Duplicate` when the class already exists.
    pub fn add_class(&mut self, class: ClassName) -> Result<()> {
        if self.grids.contains_key(&class) {
            return Err(TimetableError::Duplicate(format!("class {class}")));
        }
        self.grids.insert(class, TimetableGrid::new());
        Ok(())
    }

    /// Delete `class` and withdraw its cells from the index.
    ///
    /// # Errors
    /// `NotFound` when the class does not exist.
    pub fn remove_class(&mut self, class: &ClassName) -> Result<()> {
        let grid = self
            .grids
            .remove(class)
            .ok_or_else(|| not_found_class(class))?;
        for (slot, key) in grid.assigned() {
            self.index.on_set(class, slot, Some(key), None);
        }
        Ok(())
    }

    /// Class names in grade/section order.
    pub fn class_names(&self) -> impl Iterator<Item = &ClassName> + '_ {
        self.grids.keys()
    }

    pub fn contains_class(&self, class: &ClassName) -> bool {
        self.grids.contains_key(class)
    }

    /// The grid for `class`, if it exists.
    pub fn grid(&self, class: &ClassName) -> Option<&TimetableGrid> {
        self.grids.get(class)
    }

    /// Iterate `(class, grid)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClassName, &TimetableGrid)> + '_ {
        self.grids.iter()
    }

    /// Number of classes.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// The cross-grid busy index.
    pub fn index(&self) -> &ScheduleIndex {
        &self.index
    }

    /// Convenience delegate for [`ScheduleIndex::is_busy`].
    pub fn is_busy(&self, key: &TeacherKey, slot: Slot) -> bool {
        self.index.is_busy(key, slot)
    }

    /// Assign `key` to `slot` in `class`.
    ///
    /// Re-assigning a cell to the teacher it already holds is a no-op; a cell
    /// holding a different teacher is overwritten (the previous occupant
    /// becomes free at that slot). Grid and index change together; when this
    /// returns an error, neither has changed.
    ///
    /// # Errors
    /// `NotFound` for an unknown class or a key missing from `registry`;
    /// `Conflict` when the teacher is already assigned at `slot` in another
    /// class (the error names that class).
    pub fn assign(
        &mut self,
        registry: &TeacherRegistry,
        class: &ClassName,
        slot: Slot,
        key: &TeacherKey,
    ) -> Result<()> {
        if !registry.contains(key) {
            return Err(TimetableError::NotFound(format!("teacher {key}")));
        }
        let Some(grid) = self.grids.get_mut(class) else {
            return Err(not_found_class(class));
        };
        if let Some(occupied) = self.index.occupant_class(key, slot) {
            if occupied == class {
                // The cell already holds this teacher.
                return Ok(());
            }
            return Err(TimetableError::Conflict {
                class: occupied.clone(),
            });
        }
        let old = grid.set(slot, Some(key.clone()));
        self.index.on_set(class, slot, old.as_ref(), Some(key));
        Ok(())
    }

    /// Clear `slot` in `class`. Clearing an already-empty cell succeeds with
    /// no observable change.
    ///
    /// # Errors
    /// `NotFound` when the class does not exist.
    pub fn clear(&mut self, class: &ClassName, slot: Slot) -> Result<()> {
        let Some(grid) = self.grids.get_mut(class) else {
            return Err(not_found_class(class));
        };
        let old = grid.set(slot, None);
        if old.is_some() {
            self.index.on_set(class, slot, old.as_ref(), None);
        }
        Ok(())
    }

    /// Apply a registry cascade to every grid.
    ///
    /// Invoked by [`TeacherRegistry`] inside `rename`/`remove`, so callers
    /// never observe a renamed teacher with stale cells.
    pub(crate) fn apply(&mut self, event: &RegistryEvent) {
        match event {
            RegistryEvent::Renamed { old, new } => {
                let cells: Vec<(ClassName, Slot)> = self
                    .index
                    .assignments_of(old)
                    .map(|(class, slot)| (class.clone(), slot))
                    .collect();
                for (class, slot) in cells {
                    if let Some(grid) = self.grids.get_mut(&class) {
                        let prev = grid.set(slot, Some(new.clone()));
                        self.index.on_set(&class, slot, prev.as_ref(), Some(new));
                    }
                }
            }
            RegistryEvent::Removed { key } => {
                let cells: Vec<(ClassName, Slot)> = self
                    .index
                    .assignments_of(key)
                    .map(|(class, slot)| (class.clone(), slot))
                    .collect();
                for (class, slot) in cells {
                    if let Some(grid) = self.grids.get_mut(&class) {
                        let prev = grid.set(slot, None);
                        self.index.on_set(&class, slot, prev.as_ref(), None);
                    }
                }
            }
        }
    }
}

fn not_found_class(class: &ClassName) -> TimetableError {
    TimetableError::NotFound(format!("class {class}"))
}
