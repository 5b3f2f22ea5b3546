//! View-model projections of console state.
//!
//! Every function here is a pure function of its inputs; a rendering backend
//! turns the returned structures into something visible.

use serde::Serialize;
use shared::{
    domain::{ClassId, RoomId, TeacherId, TimeSlot, Weekday},
    protocol::ScheduleEntry,
};

use crate::{
    slots::{find_slot, PERIODS_PER_DAY},
    store::EntityStore,
};

pub const UNKNOWN_CLASS: &str = "Unknown";
pub const UNKNOWN_REF: &str = "?";
pub const ANY_TEACHER_LABEL: &str = "Any Qualified Teacher";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum EntityRef {
    Teacher(TeacherId),
    Room(RoomId),
    Class(ClassId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRow {
    pub title: String,
    pub detail: String,
    pub delete: EntityRef,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub rows: Vec<ListRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectView {
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleCard {
    pub title: String,
    pub room: String,
    pub teacher: String,
}

impl ScheduleCard {
    pub fn summary(&self) -> String {
        format!("{} / {} / {}", self.title, self.room, self.teacher)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    Header {
        text: String,
    },
    Slot {
        day: Weekday,
        period: u8,
        cards: Vec<ScheduleCard>,
    },
}

/// Weekly timetable, row-major: a header row then one row per period, each
/// led by a period label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridView {
    pub columns: usize,
    pub cells: Vec<GridCell>,
}

impl GridView {
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.columns)
    }

    pub fn cards_at(&self, day: Weekday, period: u8) -> Option<&[ScheduleCard]> {
        self.cells.iter().find_map(|cell| match cell {
            GridCell::Slot {
                day: d,
                period: p,
                cards,
            } if *d == day && *p == period => Some(cards.as_slice()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleListRow {
    pub day: Weekday,
    pub period: u8,
    pub class: String,
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

pub fn render_teacher_list(store: &EntityStore) -> ListView {
    ListView {
        rows: store
            .teachers()
            .iter()
            .map(|t| ListRow {
                title: t.name.clone(),
                detail: format!("({})", t.qualifications.join(", ")),
                delete: EntityRef::Teacher(t.id.clone()),
            })
            .collect(),
    }
}

pub fn render_room_list(store: &EntityStore) -> ListView {
    ListView {
        rows: store
            .rooms()
            .iter()
            .map(|r| ListRow {
                title: r.name.clone(),
                detail: format!("(Cap: {})", display_int(r.capacity)),
                delete: EntityRef::Room(r.id.clone()),
            })
            .collect(),
    }
}

pub fn render_class_list(store: &EntityStore) -> ListView {
    ListView {
        rows: store
            .classes()
            .iter()
            .map(|c| {
                let teacher = match &c.teacher_id {
                    None => "Any",
                    Some(id) => store
                        .teacher(id)
                        .map(|t| t.name.as_str())
                        .unwrap_or(UNKNOWN_CLASS),
                };
                ListRow {
                    title: c.name.clone(),
                    detail: format!(
                        "({}) - {}x/week (Teacher: {teacher})",
                        c.subject,
                        display_int(c.required_sessions)
                    ),
                    delete: EntityRef::Class(c.id.clone()),
                }
            })
            .collect(),
    }
}

pub fn render_teacher_select(store: &EntityStore) -> SelectView {
    let sentinel = SelectOption {
        value: String::new(),
        label: ANY_TEACHER_LABEL.to_string(),
    };
    SelectView {
        options: std::iter::once(sentinel)
            .chain(store.teachers().iter().map(|t| SelectOption {
                value: t.id.to_string(),
                label: t.name.clone(),
            }))
            .collect(),
    }
}

pub fn render_schedule_grid(
    store: &EntityStore,
    schedule: &[ScheduleEntry],
    time_slots: &[TimeSlot],
) -> GridView {
    let columns = Weekday::ALL.len() + 1;
    let mut cells = Vec::with_capacity(columns * (usize::from(PERIODS_PER_DAY) + 1));

    cells.push(header("Period"));
    cells.extend(Weekday::ALL.iter().map(|d| header(d.label())));

    for period in 1..=PERIODS_PER_DAY {
        cells.push(header(&format!("Period {period}")));
        for day in Weekday::ALL {
            let cards = find_slot(time_slots, day, period)
                .map(|slot| {
                    schedule
                        .iter()
                        .filter(|entry| entry.time_slot_id == slot.id)
                        .map(|entry| card_for(store, entry))
                        .collect()
                })
                .unwrap_or_default();
            cells.push(GridCell::Slot { day, period, cards });
        }
    }

    GridView { columns, cells }
}

/// Flat listing of fully resolvable entries in day-major, period-minor order.
pub fn render_schedule_list(
    store: &EntityStore,
    schedule: &[ScheduleEntry],
    time_slots: &[TimeSlot],
) -> Vec<ScheduleListRow> {
    let mut rows: Vec<(usize, ScheduleListRow)> = schedule
        .iter()
        .filter_map(|entry| {
            let (position, slot) = time_slots
                .iter()
                .enumerate()
                .find(|(_, s)| s.id == entry.time_slot_id)?;
            let class = store.class(&entry.class_id)?;
            let teacher = store.teacher(&entry.teacher_id)?;
            let room = store.room(&entry.room_id)?;
            Some((
                position,
                ScheduleListRow {
                    day: slot.day,
                    period: slot.period,
                    class: class.name.clone(),
                    subject: class.subject.clone(),
                    teacher: teacher.name.clone(),
                    room: room.name.clone(),
                },
            ))
        })
        .collect();
    rows.sort_by_key(|(position, _)| *position);
    rows.into_iter().map(|(_, row)| row).collect()
}

fn card_for(store: &EntityStore, entry: &ScheduleEntry) -> ScheduleCard {
    ScheduleCard {
        title: store
            .class(&entry.class_id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| UNKNOWN_CLASS.to_string()),
        room: store
            .room(&entry.room_id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| UNKNOWN_REF.to_string()),
        teacher: store
            .teacher(&entry.teacher_id)
            .map(|t| t.name.clone())
            .unwrap_or_else(|| UNKNOWN_REF.to_string()),
    }
}

fn header(text: &str) -> GridCell {
    GridCell::Header {
        text: text.to_string(),
    }
}

fn display_int(value: Option<i64>) -> String {
    value.map_or_else(|| UNKNOWN_REF.to_string(), |v| v.to_string())
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
