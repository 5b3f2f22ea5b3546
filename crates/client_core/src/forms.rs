//! Entry forms: raw field text in, validated entity records out.
//!
//! Each `submit` only checks presence. On success the record is appended to
//! the store and the form's text fields are cleared the same way the entry
//! screens always have; on failure nothing changes.

use shared::domain::{ClassId, Room, RoomId, SchoolClass, Teacher, TeacherId};

use crate::{
    error::{ConsoleError, FormKind},
    store::EntityStore,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeacherForm {
    pub name: String,
    /// Comma separated subjects.
    pub subjects: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomForm {
    pub name: String,
    pub capacity: String,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            capacity: "30".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassForm {
    pub name: String,
    pub subject: String,
    pub sessions: String,
    /// Selected teacher id; empty selects any qualified teacher.
    pub teacher: String,
}

impl Default for ClassForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            subject: String::new(),
            sessions: "3".into(),
            teacher: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub teacher: TeacherForm,
    pub room: RoomForm,
    pub class: ClassForm,
}

impl TeacherForm {
    pub fn submit(&mut self, store: &mut EntityStore) -> Result<TeacherId, ConsoleError> {
        if self.name.is_empty() || self.subjects.is_empty() {
            return Err(ConsoleError::MissingFields(FormKind::Teacher));
        }

        let teacher = Teacher {
            id: TeacherId::generate(),
            name: self.name.clone(),
            qualifications: split_subjects(&self.subjects),
        };
        let id = teacher.id.clone();
        store.push_teacher(teacher);

        self.name.clear();
        self.subjects.clear();
        Ok(id)
    }
}

impl RoomForm {
    pub fn submit(&mut self, store: &mut EntityStore) -> Result<RoomId, ConsoleError> {
        if self.name.is_empty() {
            return Err(ConsoleError::MissingFields(FormKind::Room));
        }

        let room = Room {
            id: RoomId::generate(),
            name: self.name.clone(),
            capacity: parse_leading_int(&self.capacity),
        };
        let id = room.id.clone();
        store.push_room(room);

        self.name.clear();
        Ok(id)
    }
}

impl ClassForm {
    pub fn submit(&mut self, store: &mut EntityStore) -> Result<ClassId, ConsoleError> {
        if self.name.is_empty() || self.subject.is_empty() {
            return Err(ConsoleError::MissingFields(FormKind::Class));
        }

        let teacher_id = if self.teacher.is_empty() {
            None
        } else {
            let id = TeacherId::new(self.teacher.clone());
            if store.teacher(&id).is_none() {
                return Err(ConsoleError::UnknownTeacher(self.teacher.clone()));
            }
            Some(id)
        };

        let class = SchoolClass {
            id: ClassId::generate(),
            name: self.name.clone(),
            subject: self.subject.clone(),
            required_sessions: parse_leading_int(&self.sessions),
            teacher_id,
        };
        let id = class.id.clone();
        store.push_class(class);

        self.name.clear();
        self.subject.clear();
        Ok(id)
    }
}

/// Splits on commas and trims each part. Empty parts are kept.
pub fn split_subjects(raw: &str) -> Vec<String> {
    raw.split(',').map(|s| s.trim().to_string()).collect()
}

/// Reads an optionally signed run of leading digits after any whitespace,
/// ignoring whatever follows. A `0x`/`0X` prefix switches to hexadecimal.
/// `None` when there are no digits or the value does not fit in an `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let value = i64::from_str_radix(&rest[..digits_end], radix).ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
#[path = "tests/forms_tests.rs"]
mod tests;
