//! Client side of the timetable console: entity store, entry forms, view-model
//! renderers and the solver round-trip.

pub mod console;
pub mod error;
pub mod forms;
pub mod slots;
pub mod solver;
pub mod store;
pub mod view;

pub use console::{Console, ConsoleView, Dispatched, PendingSolve, SolveApplied, Tab, UiAction};
pub use error::{ConsoleError, FormKind, SolverError};
pub use solver::{HttpSolverClient, SolverTransport};
