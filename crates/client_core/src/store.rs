//! In-memory entity collections for one console session.

use shared::domain::{ClassId, Room, RoomId, SchoolClass, Teacher, TeacherId};
use tracing::info;

/// Ordered teachers, rooms and classes. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    teachers: Vec<Teacher>,
    rooms: Vec<Room>,
    classes: Vec<SchoolClass>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn classes(&self) -> &[SchoolClass] {
        &self.classes
    }

    pub fn teacher(&self, id: &TeacherId) -> Option<&Teacher> {
        self.teachers.iter().find(|t| &t.id == id)
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    pub fn class(&self, id: &ClassId) -> Option<&SchoolClass> {
        self.classes.iter().find(|c| &c.id == id)
    }

    /// True when every collection has at least one entity.
    pub fn is_solvable(&self) -> bool {
        !self.teachers.is_empty() && !self.rooms.is_empty() && !self.classes.is_empty()
    }

    pub fn push_teacher(&mut self, teacher: Teacher) {
        info!(teacher_id = %teacher.id, name = %teacher.name, "teacher added");
        self.teachers.push(teacher);
    }

    pub fn push_room(&mut self, room: Room) {
        info!(room_id = %room.id, name = %room.name, "room added");
        self.rooms.push(room);
    }

    pub fn push_class(&mut self, class: SchoolClass) {
        info!(class_id = %class.id, name = %class.name, "class added");
        self.classes.push(class);
    }

    /// Classes that referenced the teacher keep the dangling id.
    pub fn remove_teacher(&mut self, id: &TeacherId) -> bool {
        let before = self.teachers.len();
        self.teachers.retain(|t| &t.id != id);
        log_removal("teacher", id.as_str(), before != self.teachers.len())
    }

    pub fn remove_room(&mut self, id: &RoomId) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|r| &r.id != id);
        log_removal("room", id.as_str(), before != self.rooms.len())
    }

    pub fn remove_class(&mut self, id: &ClassId) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| &c.id != id);
        log_removal("class", id.as_str(), before != self.classes.len())
    }
}

fn log_removal(kind: &str, id: &str, removed: bool) -> bool {
    if removed {
        info!(kind, id, "entity removed");
    } else {
        tracing::debug!(kind, id, "remove ignored; id not present");
    }
    removed
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
