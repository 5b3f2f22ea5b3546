use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

macro_rules! entity_id {
    ($name:ident) => {
        id_newtype!($name);

        impl $name {
            /// Fresh random 128-bit identifier.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }
        }
    };
}

entity_id!(TeacherId);
entity_id!(RoomId);
entity_id!(ClassId);
id_newtype!(SlotId);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: TeacherId,
    pub name: String,
    pub qualifications: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    /// `None` when the entered capacity was not a number; sent as `null`.
    pub capacity: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: ClassId,
    pub name: String,
    pub subject: String,
    pub required_sessions: Option<i64>,
    /// `None` means any qualified teacher may take the class.
    pub teacher_id: Option<TeacherId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub id: SlotId,
    pub day: Weekday,
    pub period: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generated_ids_are_distinct_uuids() {
        let a = TeacherId::generate();
        let b = TeacherId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn class_without_teacher_serializes_null_reference() {
        let class = SchoolClass {
            id: ClassId::new("c1"),
            name: "Algebra".into(),
            subject: "Math".into(),
            required_sessions: Some(3),
            teacher_id: None,
        };
        assert_eq!(
            serde_json::to_value(&class).expect("serialize"),
            json!({
                "id": "c1",
                "name": "Algebra",
                "subject": "Math",
                "required_sessions": 3,
                "teacher_id": null
            })
        );
    }

    #[test]
    fn unparsed_capacity_is_sent_as_null() {
        let room = Room {
            id: RoomId::new("r1"),
            name: "Lab".into(),
            capacity: None,
        };
        let value = serde_json::to_value(&room).expect("serialize");
        assert_eq!(value["capacity"], serde_json::Value::Null);
    }

    #[test]
    fn time_slot_day_uses_short_label() {
        let slot = TimeSlot {
            id: SlotId::new("slot_7"),
            day: Weekday::Tue,
            period: 3,
        };
        assert_eq!(
            serde_json::to_value(&slot).expect("serialize"),
            json!({ "id": "slot_7", "day": "Tue", "period": 3 })
        );
    }
}
