//! Snapshot codec: the persisted `{teachers, timetables}` JSON document.
//!
//! The document is the save-file interchange format: teachers keyed by the
//! `"Name|Subject"` composite string, timetables
//! grouped by decimal grade, each grid an 8x5 array (rows = periods P1..P8,
//! columns = Mon..Fri) of key-or-empty strings.
//!
//! Decoding is lenient where a stale or hand-edited file can be salvaged
//! (missing sections, missing colors, cells referencing unknown teachers)
//! and strict where the shape itself is wrong (non-object sections,
//! non-numeric grade keys, grids that are not 8x5 string arrays). Every
//! decoded cell goes through the same grid+index path as a live assignment,
//! so a decoded schedule upholds the no-double-booking invariant even when
//! the file does not.

use serde_json::{Map, Value};

use crate::assignment::Schedule;
use crate::error::{Result, TimetableError};
use crate::grid::TimetableGrid;
use crate::registry::TeacherRegistry;
use crate::types::{ClassName, Day, Period, Slot, Teacher, TeacherKey, DAYS_PER_WEEK, PERIODS_PER_DAY};

/// Separator between name and subject in document keys.
///
/// In-memory identity is the two-field [`TeacherKey`]; the joined form exists
/// only inside the document.
const KEY_SEPARATOR: char = '|';

/// Encode the registry and all grids as a pretty-printed JSON document.
///
/// Teachers and classes are emitted in key order, so re-encoding a decoded
/// document reproduces it content-for-content.
pub fn encode(registry: &TeacherRegistry, schedule: &Schedule) -> Result<String> {
    let doc = to_document(registry, schedule);
    serde_json::to_string_pretty(&doc).map_err(|e| TimetableError::Format(e.to_string()))
}

/// Build the document tree without serializing it to text.
pub fn to_document(registry: &TeacherRegistry, schedule: &Schedule) -> Value {
    let mut teachers = Map::new();
    for teacher in registry.iter() {
        teachers.insert(
            join_key(&teacher.key()),
            serde_json::json!({
                "name": teacher.name,
                "subject": teacher.subject,
                "color": teacher.color,
            }),
        );
    }

    let mut by_grade: std::collections::BTreeMap<u32, Map<String, Value>> = Default::default();
    for (class, grid) in schedule.iter() {
        by_grade
            .entry(class.grade)
            .or_default()
            .insert(class.to_string(), grid_rows(grid));
    }
    let mut timetables = Map::new();
    for (grade, classes) in by_grade {
        timetables.insert(grade.to_string(), Value::Object(classes));
    }

    let mut root = Map::new();
    root.insert("teachers".to_string(), Value::Object(teachers));
    root.insert("timetables".to_string(), Value::Object(timetables));
    Value::Object(root)
}

/// Decode a document produced by [`encode`] (or an equivalent save file).
///
/// # Errors
/// `Format` when the input is not JSON, the root or a section is not an
/// object, a teacher entry is malformed, a grade key is not a decimal
/// integer, a class name does not normalize, or a grid is not 8 rows of 5
/// string cells.
pub fn decode(input: &str) -> Result<(TeacherRegistry, Schedule)> {
    let doc: Value =
        serde_json::from_str(input).map_err(|e| TimetableError::Format(e.to_string()))?;
    from_document(&doc)
}

/// Decode an already-parsed document tree.
pub fn from_document(doc: &Value) -> Result<(TeacherRegistry, Schedule)> {
    let root = doc
        .as_object()
        .ok_or_else(|| TimetableError::Format("document root must be an object".to_string()))?;

    // Missing sections mean an empty save, not a broken one.
    let mut registry = TeacherRegistry::new();
    if let Some(section) = root.get("teachers") {
        let entries = section
            .as_object()
            .ok_or_else(|| TimetableError::Format("'teachers' must be an object".to_string()))?;
        for (key, value) in entries {
            let teacher: Teacher = serde_json::from_value(value.clone())
                .map_err(|e| TimetableError::Format(format!("teacher entry '{key}': {e}")))?;
            registry.insert_unchecked(teacher);
        }
    }

    let mut schedule = Schedule::new();
    if let Some(section) = root.get("timetables") {
        let grades = section
            .as_object()
            .ok_or_else(|| TimetableError::Format("'timetables' must be an object".to_string()))?;
        for (grade_key, classes) in grades {
            if grade_key.parse::<u32>().is_err() {
                return Err(TimetableError::Format(format!(
                    "grade key '{grade_key}' is not a number"
                )));
            }
            let classes = classes.as_object().ok_or_else(|| {
                TimetableError::Format(format!("grade '{grade_key}' must be an object"))
            })?;
            for (class_key, rows) in classes {
                let class = ClassName::parse(class_key).map_err(|_| {
                    TimetableError::Format(format!("class name '{class_key}' does not normalize"))
                })?;
                schedule.add_class(class.clone()).map_err(|_| {
                    TimetableError::Format(format!("class '{class}' appears twice"))
                })?;
                load_grid(&registry, &mut schedule, &class, rows)?;
            }
        }
    }

    Ok((registry, schedule))
}

/// Serialize one grid as 8 rows of 5 key-or-empty strings.
fn grid_rows(grid: &TimetableGrid) -> Value {
    let rows: Vec<Value> = grid
        .to_rows()
        .into_iter()
        .map(|row| {
            Value::Array(
                row.into_iter()
                    .map(|cell| Value::String(cell.map(|key| join_key(&key)).unwrap_or_default()))
                    .collect(),
            )
        })
        .collect();
    Value::Array(rows)
}

/// Load one grid's cells through the normal assignment path.
fn load_grid(
    registry: &TeacherRegistry,
    schedule: &mut Schedule,
    class: &ClassName,
    rows: &Value,
) -> Result<()> {
    let rows = rows.as_array().ok_or_else(|| {
        TimetableError::Format(format!("grid for class '{class}' must be an array"))
    })?;
    if rows.len() != PERIODS_PER_DAY {
        return Err(TimetableError::Format(format!(
            "grid for class '{class}': expected {} rows, got {}",
            PERIODS_PER_DAY,
            rows.len()
        )));
    }
    for (period, row) in Period::ALL.iter().zip(rows) {
        let cells = row.as_array().ok_or_else(|| {
            TimetableError::Format(format!("row {period} of class '{class}' must be an array"))
        })?;
        if cells.len() != DAYS_PER_WEEK {
            return Err(TimetableError::Format(format!(
                "row {period} of class '{class}': expected {} columns, got {}",
                DAYS_PER_WEEK,
                cells.len()
            )));
        }
        for (day, cell) in Day::ALL.iter().zip(cells) {
            let raw = cell.as_str().ok_or_else(|| {
                TimetableError::Format(format!(
                    "cell {day} {period} of class '{class}' must be a string"
                ))
            })?;
            if raw.is_empty() {
                continue;
            }
            // A reference with no matching teacher entry loads as an empty
            // cell rather than failing the whole document.
            let Some(key) = split_key(raw) else {
                continue;
            };
            if !registry.contains(&key) {
                continue;
            }
            // A file can double-book a teacher; the first occurrence in
            // document order wins and later cells load as empty.
            let _ = schedule.assign(registry, class, Slot::new(*day, *period), &key);
        }
    }
    Ok(())
}

/// Join a key into the document's composite string form.
fn join_key(key: &TeacherKey) -> String {
    format!("{}{}{}", key.name, KEY_SEPARATOR, key.subject)
}

/// Split a document key at the first separator. Strings without a separator
/// cannot name a teacher.
fn split_key(raw: &str) -> Option<TeacherKey> {
    let (name, subject) = raw.split_once(KEY_SEPARATOR)?;
    Some(TeacherKey::new(name, subject))
}
