use shared::domain::{SlotId, TimeSlot, Weekday};

pub const PERIODS_PER_DAY: u8 = 5;

/// The fixed teaching week: Mon..Fri, periods 1..=5, ids `slot_0`..`slot_24`
/// in day-major order. Rebuilt for every solve request.
pub fn generate_time_slots() -> Vec<TimeSlot> {
    Weekday::ALL
        .iter()
        .flat_map(|&day| (1..=PERIODS_PER_DAY).map(move |period| (day, period)))
        .enumerate()
        .map(|(index, (day, period))| TimeSlot {
            id: SlotId::new(format!("slot_{index}")),
            day,
            period,
        })
        .collect()
}

pub fn find_slot(slots: &[TimeSlot], day: Weekday, period: u8) -> Option<&TimeSlot> {
    slots.iter().find(|s| s.day == day && s.period == period)
}
