//! The teacher registry: identities, normalization, and cascading edits.

use std::collections::{BTreeMap, BTreeSet};

use crate::assignment::Schedule;
use crate::error::{Result, TimetableError};
use crate::types::{title_case, Teacher, TeacherKey};

/// Notification emitted by a registry mutation that touched grid contents.
///
/// The grid/index cascade is already applied when the event is returned, so
/// presentation layers subscribe by inspecting the returned value instead of
/// sitting on the mutation path.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistryEvent {
    /// A teacher's identity changed; every cell that held `old` now holds
    /// `new`.
    Renamed { old: TeacherKey, new: TeacherKey },
    /// A teacher was removed; every cell that referenced `key` is now empty.
    Removed { key: TeacherKey },
}

/// Owns the set of teachers, keyed by their `(name, subject)` identity.
///
/// Iteration order is key order: name first, then subject. Name lookup and
/// query results follow that order.
#[derive(Debug, Clone, Default)]
pub struct TeacherRegistry {
    teachers: BTreeMap<TeacherKey, Teacher>,
}

impl TeacherRegistry {
    pub fn new() -> TeacherRegistry {
        TeacherRegistry::default()
    }

    /// Register a teacher.
    ///
    /// Name and subject are trimmed and title-cased before the key is built;
    /// the normalized form is the identity, so `" alice SMITH "` and
    /// `"Alice Smith"` collide.
    ///
    /// # Errors
    /// `Validation` when name or subject is empty after trimming; `Duplicate`
    /// when the normalized key is already registered.
    pub fn add(&mut self, name: &str, subject: &str, color: &str) -> Result<TeacherKey> {
        let key = normalized_key(name, subject)?;
        if self.teachers.contains_key(&key) {
            return Err(TimetableError::Duplicate(format!("teacher {key}")));
        }
        let teacher = Teacher {
            name: key.name.clone(),
            subject: key.subject.clone(),
            color: color.to_string(),
        };
        self.teachers.insert(key.clone(), teacher);
        Ok(key)
    }

    /// Change a teacher's name, subject, or color.
    ///
    /// The new name and subject go through the same normalization as
    /// [`add`](Self::add). When the normalized key changes, every grid cell
    /// holding `old` is migrated to the new key through `schedule` before
    /// this returns, so no stale reference survives. Renaming to the same key
    /// updates the color in place.
    ///
    /// # Errors
    /// `NotFound` when `old` is not registered; `Validation` on empty fields;
    /// `Duplicate` when the new key belongs to a different existing teacher.
    pub fn rename(
        &mut self,
        schedule: &mut Schedule,
        old: &TeacherKey,
        new_name: &str,
        new_subject: &str,
        new_color: &str,
    ) -> Result<RegistryEvent> {
        if !self.teachers.contains_key(old) {
            return Err(TimetableError::NotFound(format!("teacher {old}")));
        }
        let new_key = normalized_key(new_name, new_subject)?;
        if new_key != *old && self.teachers.contains_key(&new_key) {
            return Err(TimetableError::Duplicate(format!("teacher {new_key}")));
        }
        self.teachers.remove(old);
        self.teachers.insert(
            new_key.clone(),
            Teacher {
                name: new_key.name.clone(),
                subject: new_key.subject.clone(),
                color: new_color.to_string(),
            },
        );
        let event = RegistryEvent::Renamed {
            old: old.clone(),
            new: new_key,
        };
        schedule.apply(&event);
        Ok(event)
    }

    /// Remove a teacher and clear every cell that referenced them.
    ///
    /// # Errors
    /// `NotFound` when `key` is not registered.
    pub fn remove(&mut self, schedule: &mut Schedule, key: &TeacherKey) -> Result<RegistryEvent> {
        if self.teachers.remove(key).is_none() {
            return Err(TimetableError::NotFound(format!("teacher {key}")));
        }
        let event = RegistryEvent::Removed { key: key.clone() };
        schedule.apply(&event);
        Ok(event)
    }

    /// The teacher registered under `key`, if any.
    pub fn get(&self, key: &TeacherKey) -> Option<&Teacher> {
        self.teachers.get(key)
    }

    pub fn contains(&self, key: &TeacherKey) -> bool {
        self.teachers.contains_key(key)
    }

    /// Teachers in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Teacher> + '_ {
        self.teachers.values()
    }

    pub fn len(&self) -> usize {
        self.teachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty()
    }

    /// First teacher with the given display name, in iteration order.
    ///
    /// The input is normalized like [`add`](Self::add). When two teachers
    /// share a name across subjects the match is the one with the
    /// alphabetically first subject; callers that need an exact teacher
    /// should look up by [`TeacherKey`] instead.
    pub fn find_by_name(&self, name: &str) -> Option<&Teacher> {
        let name = title_case(name.trim());
        self.iter().find(|teacher| teacher.name == name)
    }

    /// Sorted, deduplicated list of the subjects currently registered.
    pub fn subjects(&self) -> Vec<String> {
        let unique: BTreeSet<&str> = self
            .teachers
            .values()
            .map(|teacher| teacher.subject.as_str())
            .collect();
        unique.into_iter().map(String::from).collect()
    }

    /// Insert a teacher exactly as stored in a document, bypassing input
    /// normalization. Documents written by the engine are already normalized;
    /// foreign documents keep their own spelling so that their cell
    /// references still resolve.
    pub(crate) fn insert_unchecked(&mut self, teacher: Teacher) {
        self.teachers.insert(teacher.key(), teacher);
    }
}

/// Trim and title-case name and subject, then build the identity key.
fn normalized_key(name: &str, subject: &str) -> Result<TeacherKey> {
    let name = title_case(name.trim());
    let subject = title_case(subject.trim());
    if name.is_empty() || subject.is_empty() {
        return Err(TimetableError::Validation(
            "teacher name and subject must be non-empty".to_string(),
        ));
    }
    Ok(TeacherKey { name, subject })
}
