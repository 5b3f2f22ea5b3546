use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{ClassId, Room, RoomId, SchoolClass, SlotId, Teacher, TeacherId, TimeSlot};

pub fn solve_route() -> &'static str {
    "/api/solve"
}

/// Full snapshot sent to the external solver for one generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveRequest {
    pub teachers: Vec<Teacher>,
    pub rooms: Vec<Room>,
    pub classes: Vec<SchoolClass>,
    pub time_slots: Vec<TimeSlot>,
}

/// One (class, room, teacher, slot) assignment.
///
/// Ids are not validated. Missing or `null` ids decode as empty strings and
/// numbers keep their JSON text; either way they render as placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(default, deserialize_with = "lenient_id")]
    pub time_slot_id: SlotId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub class_id: ClassId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub room_id: RoomId,
    #[serde(default, deserialize_with = "lenient_id")]
    pub teacher_id: TeacherId,
}

/// Solver reply. Any JSON object decodes: an odd `status` is kept as its JSON
/// text and a `schedule` that is not an array counts as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    #[serde(default = "unknown_status", deserialize_with = "lenient_status")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_schedule")]
    pub schedule: Vec<ScheduleEntry>,
}

fn unknown_status() -> String {
    "UNKNOWN".to_string()
}

fn lenient_id<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    };
    Ok(T::from(raw))
}

fn lenient_status<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_schedule<'de, D>(deserializer: D) -> Result<Vec<ScheduleEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| ScheduleEntry::deserialize(item).unwrap_or_default())
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStatus {
    Optimal,
    Feasible,
    Infeasible,
    Other(String),
}

impl SolveStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "OPTIMAL" => Self::Optimal,
            "FEASIBLE" => Self::Feasible,
            "INFEASIBLE" => Self::Infeasible,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn has_solution(&self) -> bool {
        matches!(self, Self::Optimal | Self::Feasible)
    }
}

impl SolveResponse {
    pub fn solve_status(&self) -> SolveStatus {
        SolveStatus::parse(&self.status)
    }
}
