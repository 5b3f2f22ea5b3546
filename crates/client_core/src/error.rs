use thiserror::Error;

/// Which entry form an input error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Teacher,
    Room,
    Class,
}

/// Errors surfaced to the user as a blocking alert. State is unchanged when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("missing required fields in {0:?} form")]
    MissingFields(FormKind),
    #[error("class form references unknown teacher '{0}'")]
    UnknownTeacher(String),
    #[error("teachers, rooms and classes must all be non-empty before solving")]
    MissingEntities,
}

impl ConsoleError {
    pub fn alert_text(&self) -> &'static str {
        match self {
            Self::MissingFields(FormKind::Teacher) => "Please fill in all fields",
            Self::MissingFields(FormKind::Room) => "Please enter room name",
            Self::MissingFields(FormKind::Class) => "Please fill in required fields",
            Self::UnknownTeacher(_) => "Please choose a listed teacher",
            Self::MissingEntities => "Please add teachers, rooms, and classes first.",
        }
    }
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("invalid solver url '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("solver request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("solver responded with status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed solver response: {0}")]
    Decode(#[source] reqwest::Error),
}
