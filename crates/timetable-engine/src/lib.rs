//! # timetable-engine
//!
//! Conflict-free weekly timetabling for schools: teacher registration, class
//! grids, double-booking prevention, availability and substitute queries, and
//! a JSON snapshot codec.
//!
//! A timetable is a fixed 8x5 grid (periods P1..P8 by days Mon..Fri) per
//! class. The engine guarantees one invariant above all: a teacher is never
//! assigned to the same slot in two classes. Every query that asks "is this
//! teacher busy" goes through one incrementally-maintained index instead of
//! rescanning the grids.
//!
//! The engine is a synchronous, single-threaded library: every operation runs
//! to completion before the caller sees its result, and `&mut` methods are
//! the only mutation points. A multi-threaded host gets snapshot-consistent
//! reads by wrapping the registry/schedule pair in a single lock.
//!
//! ## Quick start
//!
//! ```rust
//! use timetable_engine::{
//!     available_teachers, AvailabilityFilter, ClassName, Day, Period, Schedule, Slot,
//!     TeacherRegistry,
//! };
//!
//! let mut registry = TeacherRegistry::new();
//! let alice = registry.add("alice", "math", "#3498db").unwrap();
//! let bob = registry.add("Bob", "Math", "#e67e22").unwrap();
//!
//! let mut schedule = Schedule::new();
//! let class = ClassName::parse("6-A").unwrap();
//! schedule.add_class(class.clone()).unwrap();
//!
//! let monday_first = Slot::new(Day::Mon, Period::P1);
//! schedule.assign(&registry, &class, monday_first, &alice).unwrap();
//!
//! // Alice is busy Monday P1; Bob is the only free Math teacher.
//! let filter = AvailabilityFilter {
//!     subject: Some("Math".to_string()),
//!     day: Some(Day::Mon),
//!     period: Some(Period::P1),
//! };
//! let free = available_teachers(&registry, &schedule, &filter);
//! assert_eq!(free.len(), 1);
//! assert_eq!(free[0].key(), bob);
//! ```
//!
//! ## Modules
//!
//! - [`registry`] -- teacher identities, normalization, cascading edits
//! - [`grid`] -- the per-class 8x5 grid value container
//! - [`index`] -- cross-grid reverse index behind every busy query
//! - [`assignment`] -- `Schedule`: grids plus index, conflict enforcement
//! - [`availability`] -- "which teachers are free" filtering
//! - [`substitute`] -- replacements for an absent teacher
//! - [`snapshot`] -- JSON document encode/decode
//! - [`error`] -- error types
//! - [`types`] -- days, periods, slots, keys, names

pub mod assignment;
pub mod availability;
pub mod error;
pub mod grid;
pub mod index;
pub mod registry;
pub mod snapshot;
pub mod substitute;
pub mod types;

pub use assignment::Schedule;
pub use availability::{available_teachers, AvailabilityFilter};
pub use error::TimetableError;
pub use grid::TimetableGrid;
pub use index::ScheduleIndex;
pub use registry::{RegistryEvent, TeacherRegistry};
pub use snapshot::{decode, encode};
pub use substitute::{find_substitutes, SubstituteSlot};
pub use types::{ClassName, Day, Period, Slot, Teacher, TeacherKey};
