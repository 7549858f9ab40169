//! Cross-grid reverse index: which class occupies a teacher at each slot.
//!
//! Every grid mutation flows through [`ScheduleIndex::on_set`], keeping the
//! reverse map exactly equal to the set of assigned cells across all grids.
//! Busy queries are then a map lookup instead of a rescan of every class,
//! which matters because the availability and substitute queries ask them
//! inside loops over all slots and all teachers.

use std::collections::BTreeMap;

use crate::types::{ClassName, Slot, TeacherKey};

/// Reverse mapping from teacher key to the cells currently assigned to it.
///
/// Derived data: the authoritative cell values live in the grids. Each
/// teacher maps slots to the single class holding them, so "at most one class
/// per slot" is structural here. Entries for teachers with no assignments are
/// pruned.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    by_teacher: BTreeMap<TeacherKey, BTreeMap<Slot, ClassName>>,
}

impl ScheduleIndex {
    pub fn new() -> ScheduleIndex {
        ScheduleIndex::default()
    }

    /// True when any class has `key` assigned at `slot`.
    pub fn is_busy(&self, key: &TeacherKey, slot: Slot) -> bool {
        self.occupant_class(key, slot).is_some()
    }

    /// The class holding `key` at `slot`, if any.
    pub fn occupant_class(&self, key: &TeacherKey, slot: Slot) -> Option<&ClassName> {
        self.by_teacher.get(key)?.get(&slot)
    }

    /// The cells assigned to `key`, in day-major slot order.
    pub fn assignments_of(
        &self,
        key: &TeacherKey,
    ) -> impl Iterator<Item = (&ClassName, Slot)> + '_ {
        self.by_teacher
            .get(key)
            .into_iter()
            .flat_map(|slots| slots.iter().map(|(&slot, class)| (class, slot)))
    }

    /// Teachers that currently hold at least one assignment.
    pub fn teachers(&self) -> impl Iterator<Item = &TeacherKey> + '_ {
        self.by_teacher.keys()
    }

    /// Incremental update hook; the grid owner calls this on every cell
    /// write. Removes `(class, slot)` from `old`'s entry and adds it to
    /// `new`'s.
    pub fn on_set(
        &mut self,
        class: &ClassName,
        slot: Slot,
        old: Option<&TeacherKey>,
        new: Option<&TeacherKey>,
    ) {
        if old == new {
            return;
        }
        if let Some(key) = old {
            if let Some(slots) = self.by_teacher.get_mut(key) {
                slots.remove(&slot);
                if slots.is_empty() {
                    self.by_teacher.remove(key);
                }
            }
        }
        if let Some(key) = new {
            self.by_teacher
                .entry(key.clone())
                .or_default()
                .insert(slot, class.clone());
        }
    }
}
