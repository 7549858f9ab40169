//! The per-class timetable grid: a fixed 8x5 matrix of optional assignments.
//!
//! The grid is a plain value container. Conflict checking belongs to
//! [`crate::assignment::Schedule`]; a grid never refuses a `set`.

use crate::error::{Result, TimetableError};
use crate::types::{Slot, TeacherKey, DAYS_PER_WEEK, PERIODS_PER_DAY};

/// One class's weekly grid.
///
/// Rows are periods P1..P8, columns are Mon..Fri. All 40 cells exist for the
/// grid's whole lifetime; an empty cell is `None`, never a missing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimetableGrid {
    cells: [[Option<TeacherKey>; DAYS_PER_WEEK]; PERIODS_PER_DAY],
}

impl TimetableGrid {
    /// Create an empty grid.
    pub fn new() -> TimetableGrid {
        TimetableGrid::default()
    }

    /// The teacher assigned at `slot`, if any.
    pub fn get(&self, slot: Slot) -> Option<&TeacherKey> {
        self.cells[slot.period.index()][slot.day.index()].as_ref()
    }

    /// Assign or clear `slot`, returning the previous occupant.
    pub fn set(&mut self, slot: Slot, value: Option<TeacherKey>) -> Option<TeacherKey> {
        std::mem::replace(
            &mut self.cells[slot.period.index()][slot.day.index()],
            value,
        )
    }

    /// Iterate the assigned cells in day-major slot order.
    pub fn assigned(&self) -> impl Iterator<Item = (Slot, &TeacherKey)> + '_ {
        Slot::all().filter_map(move |slot| self.get(slot).map(|key| (slot, key)))
    }

    /// Serialize to 8 rows of 5 columns (row = period, column = day).
    pub fn to_rows(&self) -> Vec<Vec<Option<TeacherKey>>> {
        self.cells.iter().map(|row| row.to_vec()).collect()
    }

    /// Rebuild a grid from 8 rows of 5 columns.
    ///
    /// # Errors
    /// Returns `TimetableError::Format` when the array is not exactly 8x5.
    pub fn from_rows(rows: Vec<Vec<Option<TeacherKey>>>) -> Result<TimetableGrid> {
        if rows.len() != PERIODS_PER_DAY {
            return Err(TimetableError::Format(format!(
                "expected {} rows, got {}",
                PERIODS_PER_DAY,
                rows.len()
            )));
        }
        let mut grid = TimetableGrid::new();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != DAYS_PER_WEEK {
                return Err(TimetableError::Format(format!(
                    "expected {} columns in row {}, got {}",
                    DAYS_PER_WEEK,
                    r,
                    row.len()
                )));
            }
            for (c, cell) in row.into_iter().enumerate() {
                grid.cells[r][c] = cell;
            }
        }
        Ok(grid)
    }
}
