//! Substitute planning for an absent teacher.

use serde::{Deserialize, Serialize};

use crate::assignment::Schedule;
use crate::error::{Result, TimetableError};
use crate::registry::TeacherRegistry;
use crate::types::{ClassName, Day, Slot};

/// One slot the absent teacher was scheduled to teach, with every
/// same-subject teacher free to cover it.
///
/// An empty candidate list means the slot has no replacement; such slots are
/// reported, never omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstituteSlot {
    pub class: ClassName,
    pub slot: Slot,
    pub candidates: Vec<String>,
}

/// Propose substitutes for every slot `absent_name` teaches on the filtered
/// days.
///
/// The name is normalized like registry input. When several teachers share
/// the display name across subjects, the first in registry iteration order is
/// taken (see [`TeacherRegistry::find_by_name`]). Candidates teach the same
/// subject as the absent teacher and are free at the slot in question; they
/// are listed by name in registry order. Slots are reported in day-major
/// order.
///
/// Returns an empty vector when the teacher exists but has no assignment
/// matching the day filter; that is distinct from the `NotFound` error for an
/// unknown name.
///
/// # Errors
/// `NotFound` when no registered teacher has the given display name.
pub fn find_substitutes(
    registry: &TeacherRegistry,
    schedule: &Schedule,
    absent_name: &str,
    day: Option<Day>,
) -> Result<Vec<SubstituteSlot>> {
    let absent = registry.find_by_name(absent_name).ok_or_else(|| {
        TimetableError::NotFound(format!("teacher named '{}'", absent_name.trim()))
    })?;
    let absent_key = absent.key();

    let mut report = Vec::new();
    for (class, slot) in schedule.index().assignments_of(&absent_key) {
        if let Some(day) = day {
            if slot.day != day {
                continue;
            }
        }
        let candidates: Vec<String> = registry
            .iter()
            .filter(|candidate| {
                let key = candidate.key();
                key != absent_key
                    && candidate.subject == absent.subject
                    && !schedule.is_busy(&key, slot)
            })
            .map(|candidate| candidate.name.clone())
            .collect();
        report.push(SubstituteSlot {
            class: class.clone(),
            slot,
            candidates,
        });
    }
    Ok(report)
}
