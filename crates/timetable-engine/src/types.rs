//! Core value types for the timetable domain.
//!
//! Days and periods are symbolic, not calendar time: every week is the same
//! fixed Mon..Fri / P1..P8 grid. Normalization rules live here because they
//! define key equality for the rest of the crate, not just display.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// Number of teaching periods per day.
pub const PERIODS_PER_DAY: usize = 8;

/// Number of school days per week.
pub const DAYS_PER_WEEK: usize = 5;

/// School day, Monday through Friday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; DAYS_PER_WEEK] = [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri];

    /// Zero-based column index (Mon = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Day for a zero-based column index.
    pub fn from_index(index: usize) -> Option<Day> {
        Day::ALL.get(index).copied()
    }

    /// Parse a three-letter day abbreviation, case-insensitively.
    pub fn parse(input: &str) -> Option<Day> {
        match input.trim().to_ascii_lowercase().as_str() {
            "mon" => Some(Day::Mon),
            "tue" => Some(Day::Tue),
            "wed" => Some(Day::Wed),
            "thu" => Some(Day::Thu),
            "fri" => Some(Day::Fri),
            _ => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
        };
        f.write_str(name)
    }
}

/// Teaching period within a day, first through eighth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    P1,
    P2,
    P3,
    P4,
    P5,
    P6,
    P7,
    P8,
}

impl Period {
    /// All periods in day order.
    pub const ALL: [Period; PERIODS_PER_DAY] = [
        Period::P1,
        Period::P2,
        Period::P3,
        Period::P4,
        Period::P5,
        Period::P6,
        Period::P7,
        Period::P8,
    ];

    /// Zero-based row index (P1 = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Period for a zero-based row index.
    pub fn from_index(index: usize) -> Option<Period> {
        Period::ALL.get(index).copied()
    }

    /// One-based period number (P1 = 1).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Period for a one-based number in `1..=8`.
    pub fn from_number(number: u8) -> Option<Period> {
        number
            .checked_sub(1)
            .and_then(|index| Period::from_index(index as usize))
    }

    /// Parse `"P3"` or `"3"`, case-insensitively.
    pub fn parse(input: &str) -> Option<Period> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix(['P', 'p'])
            .unwrap_or(trimmed);
        digits.parse::<u8>().ok().and_then(Period::from_number)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.number())
    }
}

/// A single cell position in a weekly grid.
///
/// Ordering is day-major: all of Monday's periods sort before Tuesday's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub period: Period,
}

impl Slot {
    pub fn new(day: Day, period: Period) -> Slot {
        Slot { day, period }
    }

    /// Iterate all 40 slots of the week in day-major order.
    pub fn all() -> impl Iterator<Item = Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| Period::ALL.into_iter().map(move |period| Slot { day, period }))
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.period)
    }
}

/// Unique identity of a teacher: display name plus subject, compared by
/// value.
///
/// Both fields are held in normalized (title-cased) form by the registry.
/// Because identity is the two-field struct rather than a joined string, a
/// separator character inside a name cannot collide with another teacher's
/// key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeacherKey {
    pub name: String,
    pub subject: String,
}

impl TeacherKey {
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> TeacherKey {
        TeacherKey {
            name: name.into(),
            subject: subject.into(),
        }
    }
}

impl fmt::Display for TeacherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.subject)
    }
}

/// A registered teacher.
///
/// `color` is an opaque display tag; the engine carries it through the
/// document format untouched and never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub name: String,
    pub subject: String,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Teacher {
    /// The `(name, subject)` identity of this teacher.
    pub fn key(&self) -> TeacherKey {
        TeacherKey::new(self.name.clone(), self.subject.clone())
    }
}

/// Swatch used when a stored teacher entry has no color.
pub(crate) fn default_color() -> String {
    "#3498db".to_string()
}

/// Class identity: grade number plus section letter, e.g. `6-A`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassName {
    pub grade: u32,
    pub section: String,
}

impl ClassName {
    /// Normalize free-text input into a class name.
    ///
    /// Leading digits give the grade; the first letter after them (spaces and
    /// dashes skipped) gives the section, uppercased. `"6a"`, `"6 - a"`, and
    /// `"06-A"` all normalize to `6-A`.
    ///
    /// # Errors
    /// Returns `TimetableError::Validation` when no grade number or section
    /// letter can be extracted.
    pub fn parse(input: &str) -> Result<ClassName> {
        let trimmed = input.trim();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(TimetableError::Validation(format!(
                "class name '{trimmed}' has no grade number"
            )));
        }
        let grade: u32 = digits.parse().map_err(|_| {
            TimetableError::Validation(format!("grade number in '{trimmed}' is out of range"))
        })?;
        let mut rest = trimmed[digits.len()..]
            .chars()
            .skip_while(|&c| c == ' ' || c == '-');
        let section = match rest.next() {
            Some(c) if c.is_alphabetic() => c.to_uppercase().to_string(),
            _ => {
                return Err(TimetableError::Validation(format!(
                    "class name '{trimmed}' has no section letter"
                )))
            }
        };
        Ok(ClassName { grade, section })
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.grade, self.section)
    }
}

/// Title-case a string: the first letter of every alphabetic run uppercased,
/// the rest lowercased.
///
/// This is the normalization applied to teacher names and subjects before key
/// construction, so it defines identity: `" math TEACHER "` and
/// `"Math Teacher"` are the same subject.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alphabetic = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}
