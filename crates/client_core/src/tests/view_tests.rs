use super::*;
use crate::slots::generate_time_slots;
use shared::domain::{Room, SchoolClass, SlotId, Teacher};

struct Fixture {
    store: EntityStore,
    alice: TeacherId,
    r1: RoomId,
    algebra: ClassId,
}

fn fixture() -> Fixture {
    let mut store = EntityStore::new();
    let alice = TeacherId::new("t-alice");
    let r1 = RoomId::new("r-1");
    let algebra = ClassId::new("c-algebra");
    store.push_teacher(Teacher {
        id: alice.clone(),
        name: "Alice".into(),
        qualifications: vec!["Math".into(), "Physics".into()],
    });
    store.push_room(Room {
        id: r1.clone(),
        name: "R1".into(),
        capacity: Some(30),
    });
    store.push_class(SchoolClass {
        id: algebra.clone(),
        name: "Algebra".into(),
        subject: "Math".into(),
        required_sessions: Some(3),
        teacher_id: None,
    });
    Fixture {
        store,
        alice,
        r1,
        algebra,
    }
}

fn entry(slot: &str, class: &ClassId, room: &RoomId, teacher: &TeacherId) -> ScheduleEntry {
    ScheduleEntry {
        time_slot_id: SlotId::new(slot),
        class_id: class.clone(),
        room_id: room.clone(),
        teacher_id: teacher.clone(),
    }
}

fn summaries(grid: &GridView, day: Weekday, period: u8) -> Vec<String> {
    grid.cards_at(day, period)
        .expect("slot cell")
        .iter()
        .map(ScheduleCard::summary)
        .collect()
}

#[test]
fn teacher_rows_join_qualifications() {
    let fx = fixture();
    let view = render_teacher_list(&fx.store);

    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].title, "Alice");
    assert_eq!(view.rows[0].detail, "(Math, Physics)");
    assert_eq!(view.rows[0].delete, EntityRef::Teacher(fx.alice));
}

#[test]
fn room_rows_show_capacity_or_placeholder() {
    let mut fx = fixture();
    fx.store.push_room(Room {
        id: RoomId::new("r-2"),
        name: "Hall".into(),
        capacity: None,
    });

    let view = render_room_list(&fx.store);

    assert_eq!(view.rows[0].detail, "(Cap: 30)");
    assert_eq!(view.rows[1].detail, "(Cap: ?)");
}

#[test]
fn class_rows_resolve_teacher_name() {
    let mut fx = fixture();
    fx.store.push_class(SchoolClass {
        id: ClassId::new("c-mech"),
        name: "Mechanics".into(),
        subject: "Physics".into(),
        required_sessions: Some(2),
        teacher_id: Some(fx.alice.clone()),
    });
    fx.store.push_class(SchoolClass {
        id: ClassId::new("c-bio"),
        name: "Biology".into(),
        subject: "Bio".into(),
        required_sessions: None,
        teacher_id: Some(TeacherId::new("t-gone")),
    });

    let view = render_class_list(&fx.store);

    assert_eq!(view.rows[0].detail, "(Math) - 3x/week (Teacher: Any)");
    assert_eq!(view.rows[1].detail, "(Physics) - 2x/week (Teacher: Alice)");
    assert_eq!(view.rows[2].detail, "(Bio) - ?x/week (Teacher: Unknown)");
}

#[test]
fn teacher_select_starts_with_any_option() {
    let fx = fixture();
    let select = render_teacher_select(&fx.store);

    assert_eq!(select.options.len(), 2);
    assert_eq!(select.options[0].value, "");
    assert_eq!(select.options[0].label, ANY_TEACHER_LABEL);
    assert_eq!(select.options[1].value, "t-alice");
    assert_eq!(select.options[1].label, "Alice");
}

#[test]
fn grid_has_header_row_and_period_labels() {
    let fx = fixture();
    let grid = render_schedule_grid(&fx.store, &[], &generate_time_slots());

    assert_eq!(grid.columns, 6);
    assert_eq!(grid.cells.len(), 36);
    let headers: Vec<_> = grid.rows().next().expect("header row").to_vec();
    let labels: Vec<_> = headers
        .iter()
        .map(|c| match c {
            GridCell::Header { text } => text.clone(),
            GridCell::Slot { .. } => panic!("header row holds only headers"),
        })
        .collect();
    assert_eq!(labels, ["Period", "Mon", "Tue", "Wed", "Thu", "Fri"]);
    assert_eq!(
        grid.rows().nth(3).expect("period 3")[0],
        GridCell::Header {
            text: "Period 3".into()
        }
    );
}

#[test]
fn entry_lands_in_its_slot_cell_only() {
    let fx = fixture();
    let schedule = [entry("slot_0", &fx.algebra, &fx.r1, &fx.alice)];
    let grid = render_schedule_grid(&fx.store, &schedule, &generate_time_slots());

    assert_eq!(summaries(&grid, Weekday::Mon, 1), ["Algebra / R1 / Alice"]);
    for day in Weekday::ALL {
        for period in 1..=5 {
            if (day, period) != (Weekday::Mon, 1) {
                assert!(grid.cards_at(day, period).expect("cell").is_empty());
            }
        }
    }
}

#[test]
fn parallel_entries_share_a_cell() {
    let mut fx = fixture();
    let r2 = RoomId::new("r-2");
    fx.store.push_room(Room {
        id: r2.clone(),
        name: "R2".into(),
        capacity: Some(12),
    });
    let schedule = [
        entry("slot_7", &fx.algebra, &fx.r1, &fx.alice),
        entry("slot_7", &fx.algebra, &r2, &fx.alice),
    ];

    let grid = render_schedule_grid(&fx.store, &schedule, &generate_time_slots());

    assert_eq!(
        summaries(&grid, Weekday::Tue, 3),
        ["Algebra / R1 / Alice", "Algebra / R2 / Alice"]
    );
}

#[test]
fn unresolvable_references_render_placeholders() {
    let fx = fixture();
    let schedule = [entry(
        "slot_24",
        &ClassId::new("c-missing"),
        &RoomId::default(),
        &TeacherId::new("t-missing"),
    )];

    let grid = render_schedule_grid(&fx.store, &schedule, &generate_time_slots());

    assert_eq!(summaries(&grid, Weekday::Fri, 5), ["Unknown / ? / ?"]);
}

#[test]
fn grid_rendering_is_idempotent() {
    let fx = fixture();
    let slots = generate_time_slots();
    let schedule = [entry("slot_12", &fx.algebra, &fx.r1, &fx.alice)];

    let first = render_schedule_grid(&fx.store, &schedule, &slots);
    let second = render_schedule_grid(&fx.store, &schedule, &slots);

    assert_eq!(first, second);
}

#[test]
fn entries_for_unsent_slots_are_not_drawn() {
    let fx = fixture();
    let schedule = [entry("Mon_1", &fx.algebra, &fx.r1, &fx.alice)];
    let grid = render_schedule_grid(&fx.store, &schedule, &generate_time_slots());

    assert!(grid.cells.iter().all(|cell| match cell {
        GridCell::Slot { cards, .. } => cards.is_empty(),
        GridCell::Header { .. } => true,
    }));
}

#[test]
fn schedule_list_is_day_major_and_skips_dangling_entries() {
    let fx = fixture();
    let schedule = [
        entry("slot_6", &fx.algebra, &fx.r1, &fx.alice),
        entry("slot_1", &fx.algebra, &fx.r1, &fx.alice),
        entry("slot_2", &fx.algebra, &RoomId::new("r-gone"), &fx.alice),
    ];

    let rows = render_schedule_list(&fx.store, &schedule, &generate_time_slots());

    assert_eq!(rows.len(), 2);
    assert_eq!((rows[0].day, rows[0].period), (Weekday::Mon, 2));
    assert_eq!((rows[1].day, rows[1].period), (Weekday::Tue, 2));
    assert_eq!(rows[0].subject, "Math");
    assert_eq!(rows[0].teacher, "Alice");
    assert_eq!(rows[0].room, "R1");
}
