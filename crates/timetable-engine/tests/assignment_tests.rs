//! Tests for class lifecycle, conflict enforcement, and clear semantics.

use timetable_engine::{
    encode, ClassName, Day, Period, Schedule, Slot, TeacherKey, TeacherRegistry, TimetableError,
};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn slot(day: Day, period: Period) -> Slot {
    Slot::new(day, period)
}

fn class(name: &str) -> ClassName {
    ClassName::parse(name).unwrap()
}

fn two_math_teachers() -> (TeacherRegistry, TeacherKey, TeacherKey) {
    let mut registry = TeacherRegistry::new();
    let alice = registry.add("Alice", "Math", "#3498db").unwrap();
    let bob = registry.add("Bob", "Math", "#e67e22").unwrap();
    (registry, alice, bob)
}

// ── Class lifecycle ─────────────────────────────────────────────────────────

#[test]
fn add_class_creates_empty_grid() {
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();

    let grid = schedule.grid(&class("6-A")).unwrap();
    assert_eq!(grid.assigned().count(), 0, "a new grid has no assignments");
    assert!(schedule.contains_class(&class("6-A")));
}

#[test]
fn add_class_rejects_duplicate() {
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();
    let err = schedule.add_class(class("6a")).unwrap_err();
    assert!(matches!(err, TimetableError::Duplicate(_)));
    assert_eq!(schedule.len(), 1);
}

#[test]
fn remove_class_unknown_is_not_found() {
    let mut schedule = Schedule::new();
    let err = schedule.remove_class(&class("9-Z")).unwrap_err();
    assert!(matches!(err, TimetableError::NotFound(_)));
}

#[test]
fn remove_class_frees_its_teachers() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();
    let s = slot(Day::Mon, Period::P1);
    schedule.assign(&registry, &class("6-A"), s, &alice).unwrap();

    schedule.remove_class(&class("6-A")).unwrap();

    assert!(!schedule.is_busy(&alice, s), "removing a class releases its slots");
    assert_eq!(schedule.index().assignments_of(&alice).count(), 0);
}

#[test]
fn class_names_are_sorted_by_grade_then_section() {
    let mut schedule = Schedule::new();
    schedule.add_class(class("10-A")).unwrap();
    schedule.add_class(class("6-B")).unwrap();
    schedule.add_class(class("6-A")).unwrap();

    let names: Vec<String> = schedule.class_names().map(|c| c.to_string()).collect();
    assert_eq!(names, vec!["6-A", "6-B", "10-A"]);
}

// ── Conflict enforcement ────────────────────────────────────────────────────

#[test]
fn same_teacher_same_slot_in_two_classes_is_a_conflict() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();
    schedule.add_class(class("6-B")).unwrap();

    let s = slot(Day::Mon, Period::P1);
    schedule.assign(&registry, &class("6-A"), s, &alice).unwrap();

    let err = schedule.assign(&registry, &class("6-B"), s, &alice).unwrap_err();
    match err {
        TimetableError::Conflict { class: conflicting } => {
            assert_eq!(conflicting, class("6-A"), "error names the occupied class");
        }
        other => panic!("expected Conflict, got {other:?}"),
    }
}

#[test]
fn failed_assign_changes_nothing() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();
    schedule.add_class(class("6-B")).unwrap();

    let s = slot(Day::Mon, Period::P1);
    schedule.assign(&registry, &class("6-A"), s, &alice).unwrap();
    let before = encode(&registry, &schedule).unwrap();

    assert!(schedule.assign(&registry, &class("6-B"), s, &alice).is_err());

    let after = encode(&registry, &schedule).unwrap();
    assert_eq!(before, after, "a rejected assign must not touch state");
    assert_eq!(schedule.grid(&class("6-B")).unwrap().get(s), None);
    assert_eq!(schedule.index().assignments_of(&alice).count(), 1);
}

#[test]
fn reassigning_same_cell_to_same_teacher_is_a_noop() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();

    let s = slot(Day::Mon, Period::P1);
    schedule.assign(&registry, &class("6-A"), s, &alice).unwrap();
    schedule.assign(&registry, &class("6-A"), s, &alice).unwrap();

    assert_eq!(schedule.index().assignments_of(&alice).count(), 1);
}

#[test]
fn same_teacher_different_slots_is_fine() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();
    schedule.add_class(class("6-B")).unwrap();

    schedule
        .assign(&registry, &class("6-A"), slot(Day::Mon, Period::P1), &alice)
        .unwrap();
    schedule
        .assign(&registry, &class("6-B"), slot(Day::Mon, Period::P2), &alice)
        .unwrap();

    assert_eq!(schedule.index().assignments_of(&alice).count(), 2);
}

#[test]
fn overwriting_a_cell_releases_the_previous_occupant() {
    let (registry, alice, bob) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();

    let s = slot(Day::Wed, Period::P3);
    schedule.assign(&registry, &class("6-A"), s, &alice).unwrap();
    schedule.assign(&registry, &class("6-A"), s, &bob).unwrap();

    assert_eq!(schedule.grid(&class("6-A")).unwrap().get(s), Some(&bob));
    assert!(!schedule.is_busy(&alice, s), "Alice is free again");
    assert!(schedule.is_busy(&bob, s));
}

#[test]
fn assign_unknown_class_is_not_found() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    let err = schedule
        .assign(&registry, &class("6-A"), slot(Day::Mon, Period::P1), &alice)
        .unwrap_err();
    assert!(matches!(err, TimetableError::NotFound(_)));
}

#[test]
fn assign_unknown_teacher_is_not_found() {
    let registry = TeacherRegistry::new();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();
    let ghost = TeacherKey::new("Ghost", "History");
    let err = schedule
        .assign(&registry, &class("6-A"), slot(Day::Mon, Period::P1), &ghost)
        .unwrap_err();
    assert!(matches!(err, TimetableError::NotFound(_)));
    assert!(!schedule.is_busy(&ghost, slot(Day::Mon, Period::P1)));
}

// ── Clearing ────────────────────────────────────────────────────────────────

#[test]
fn clear_releases_the_slot() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();

    let s = slot(Day::Fri, Period::P8);
    schedule.assign(&registry, &class("6-A"), s, &alice).unwrap();
    schedule.clear(&class("6-A"), s).unwrap();

    assert_eq!(schedule.grid(&class("6-A")).unwrap().get(s), None);
    assert!(!schedule.is_busy(&alice, s));
}

#[test]
fn clear_on_empty_cell_is_idempotent() {
    let (registry, alice, _) = two_math_teachers();
    let mut schedule = Schedule::new();
    schedule.add_class(class("6-A")).unwrap();
    schedule
        .assign(&registry, &class("6-A"), slot(Day::Mon, Period::P1), &alice)
        .unwrap();

    let empty = slot(Day::Tue, Period::P4);
    schedule.clear(&class("6-A"), empty).unwrap();
    let before = encode(&registry, &schedule).unwrap();

    schedule.clear(&class("6-A"), empty).unwrap();

    let after = encode(&registry, &schedule).unwrap();
    assert_eq!(before, after, "clearing an empty cell changes nothing");
}

#[test]
fn clear_unknown_class_is_not_found() {
    let mut schedule = Schedule::new();
    let err = schedule
        .clear(&class("6-A"), slot(Day::Mon, Period::P1))
        .unwrap_err();
    assert!(matches!(err, TimetableError::NotFound(_)));
}
