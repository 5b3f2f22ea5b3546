//! Line commands accepted by the console.

use client_core::Tab;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Teacher,
    Room,
    Class,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    TeacherName,
    TeacherSubjects,
    RoomName,
    RoomCapacity,
    ClassName,
    ClassSubject,
    ClassSessions,
    /// Option number from the teacher select, `0` for any qualified teacher.
    ClassTeacher,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Tab(Tab),
    Set { field: FormField, value: String },
    Add(EntityKind),
    /// 1-based row number in the entity's list.
    Delete { kind: EntityKind, row: usize },
    Generate,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help'")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("unknown entity '{0}'; expected teacher, room or class")]
    Entity(String),
    #[error("unknown field '{0}'")]
    Field(String),
    #[error("{0}")]
    Tab(String),
}

pub const HELP: &str = "\
commands:
  tab <teachers|rooms|classes|schedule>   switch view
  set <form>.<field> <value>              fill a form field
      teacher.name teacher.subjects
      room.name room.capacity
      class.name class.subject class.sessions class.teacher
  add <teacher|room|class>                submit a form
  delete <teacher|room|class> <row>       remove a listed entity
  generate                                request a schedule from the solver
  show                                    redraw the current tab
  json                                    dump the view model as JSON
  quit";

/// `Ok(None)` for blank lines and `#` comments.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = split_word(line);
    let command = match verb.to_ascii_lowercase().as_str() {
        "tab" => Command::Tab(rest.parse().map_err(CommandError::Tab)?),
        "set" => {
            let (path, value) = split_word(rest);
            if path.is_empty() {
                return Err(CommandError::Usage("set <form>.<field> <value>"));
            }
            Command::Set {
                field: parse_field(path)?,
                value: value.to_string(),
            }
        }
        "add" => Command::Add(parse_entity(rest)?),
        "delete" | "del" | "rm" => {
            let (kind, row) = split_word(rest);
            let row = row
                .parse::<usize>()
                .ok()
                .filter(|row| *row > 0)
                .ok_or(CommandError::Usage("delete <teacher|room|class> <row>"))?;
            Command::Delete {
                kind: parse_entity(kind)?,
                row,
            }
        }
        "generate" | "solve" => Command::Generate,
        "show" => Command::Show,
        "json" => Command::Json,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_entity(raw: &str) -> Result<EntityKind, CommandError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "teacher" | "teachers" => Ok(EntityKind::Teacher),
        "room" | "rooms" => Ok(EntityKind::Room),
        "class" | "classes" => Ok(EntityKind::Class),
        other => Err(CommandError::Entity(other.to_string())),
    }
}

fn parse_field(raw: &str) -> Result<FormField, CommandError> {
    let field = match raw.to_ascii_lowercase().as_str() {
        "teacher.name" => FormField::TeacherName,
        "teacher.subjects" => FormField::TeacherSubjects,
        "room.name" => FormField::RoomName,
        "room.capacity" => FormField::RoomCapacity,
        "class.name" => FormField::ClassName,
        "class.subject" => FormField::ClassSubject,
        "class.sessions" => FormField::ClassSessions,
        "class.teacher" => FormField::ClassTeacher,
        _ => return Err(CommandError::Field(raw.to_string())),
    };
    Ok(field)
}
