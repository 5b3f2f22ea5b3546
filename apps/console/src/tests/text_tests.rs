use super::*;
use client_core::{Console, UiAction};

fn seeded() -> Console {
    let mut console = Console::new();
    console.forms.teacher.name = "Alice".into();
    console.forms.teacher.subjects = "Math, Physics".into();
    console.dispatch(UiAction::AddTeacher).expect("teacher");
    console.forms.room.name = "R1".into();
    console.dispatch(UiAction::AddRoom).expect("room");
    console
}

#[test]
fn active_tab_is_bracketed_with_status() {
    let view = Console::new().view();
    let text = render_view(&view);
    let mut lines = text.lines();

    assert_eq!(
        lines.next(),
        Some("[Teachers]  Rooms   Classes   Schedule ")
    );
    assert_eq!(lines.next(), Some("status: Ready"));
    assert!(text.contains("No teachers added."));
}

#[test]
fn list_rows_are_numbered_from_one() {
    let view = seeded().view();
    assert_eq!(
        render_list(&view.teachers, "none"),
        "  1. Alice (Math, Physics)\n"
    );
    assert_eq!(render_list(&view.rooms, "none"), "  1. R1 (Cap: 30)\n");
}

#[test]
fn classes_tab_lists_teacher_options() {
    let mut console = seeded();
    console
        .dispatch(UiAction::SwitchTab(Tab::Classes))
        .expect("tab");

    let text = render_view(&console.view());

    assert!(text.contains("No classes added."));
    assert!(text.contains("  0: Any Qualified Teacher"));
    assert!(text.contains("  1: Alice"));
}

#[test]
fn schedule_tab_without_solution_says_so() {
    let mut console = Console::new();
    console
        .dispatch(UiAction::SwitchTab(Tab::Schedule))
        .expect("tab");

    assert!(render_view(&console.view()).contains("No schedule generated yet."));
}

#[test]
fn grid_pads_columns_to_widest_cell() {
    let mut console = seeded();
    console.forms.class.name = "Algebra".into();
    console.forms.class.subject = "Math".into();
    console.dispatch(UiAction::AddClass).expect("class");
    let pending = console.begin_generate().expect("pending");
    let store = console.store();
    let entry = shared::protocol::ScheduleEntry {
        time_slot_id: pending.request.time_slots[0].id.clone(),
        class_id: store.classes()[0].id.clone(),
        room_id: store.rooms()[0].id.clone(),
        teacher_id: store.teachers()[0].id.clone(),
    };
    console.apply_solve_outcome(
        pending,
        Ok(shared::protocol::SolveResponse {
            status: "OPTIMAL".into(),
            schedule: vec![entry],
        }),
    );

    let grid = render_grid(&console.schedule_grid().expect("grid"));
    let lines: Vec<&str> = grid.lines().collect();

    // separator, header, separator, then period 1.
    assert_eq!(lines.len(), 1 + 2 * 6);
    assert!(lines[3].starts_with("| Period 1 | Algebra / R1 / Alice |"), "{grid}");
    assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
}
