//! Which teachers are free, under optional subject, day, and period
//! narrowing.

use serde::{Deserialize, Serialize};

use crate::assignment::Schedule;
use crate::registry::TeacherRegistry;
use crate::types::{Day, Period, Slot, Teacher};

/// Narrowing criteria for [`available_teachers`].
///
/// A `None` field means "any": no restriction on that axis. The default
/// filter matches every subject across the whole week.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityFilter {
    /// Case-insensitive subject match.
    pub subject: Option<String>,
    pub day: Option<Day>,
    pub period: Option<Period>,
}

/// Teachers matching the subject filter who are free in every slot of the
/// filtered day x period cross product.
///
/// "Free" is strict: a single assignment anywhere in the cross product makes
/// a teacher busy. With neither day nor period narrowed the cross product is
/// the whole week, so an unfiltered query returns exactly the teachers with
/// zero assignments. Results keep registry iteration order.
pub fn available_teachers<'a>(
    registry: &'a TeacherRegistry,
    schedule: &Schedule,
    filter: &AvailabilityFilter,
) -> Vec<&'a Teacher> {
    let days: Vec<Day> = match filter.day {
        Some(day) => vec![day],
        None => Day::ALL.to_vec(),
    };
    let periods: Vec<Period> = match filter.period {
        Some(period) => vec![period],
        None => Period::ALL.to_vec(),
    };

    registry
        .iter()
        .filter(|teacher| match &filter.subject {
            Some(subject) => teacher.subject.to_lowercase() == subject.to_lowercase(),
            None => true,
        })
        .filter(|teacher| {
            let key = teacher.key();
            !days.iter().any(|&day| {
                periods
                    .iter()
                    .any(|&period| schedule.is_busy(&key, Slot::new(day, period)))
            })
        })
        .collect()
}
