//! Console state: the entity store, entry forms, status line and the solve
//! request sequence, plus the UI actions that drive them.

use std::str::FromStr;

use serde::Serialize;
use shared::{
    domain::TimeSlot,
    protocol::{ScheduleEntry, SolveRequest, SolveResponse, SolveStatus},
};
use tracing::{debug, info, warn};

use crate::{
    error::{ConsoleError, SolverError},
    forms::Forms,
    slots::generate_time_slots,
    solver::SolverTransport,
    store::EntityStore,
    view::{
        render_class_list, render_room_list, render_schedule_grid, render_schedule_list,
        render_teacher_list, render_teacher_select, EntityRef, GridView, ListView,
        ScheduleListRow, SelectView,
    },
};

pub const STATUS_READY: &str = "Ready";
pub const STATUS_GENERATING: &str = "Generating...";
pub const STATUS_SOLVER_ERROR: &str = "Error calling solver";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Teachers,
    Rooms,
    Classes,
    Schedule,
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "teachers" => Ok(Self::Teachers),
            "rooms" => Ok(Self::Rooms),
            "classes" => Ok(Self::Classes),
            "schedule" => Ok(Self::Schedule),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    AddTeacher,
    AddRoom,
    AddClass,
    Remove(EntityRef),
    SwitchTab(Tab),
    Generate,
}

impl UiAction {
    fn name(&self) -> &'static str {
        match self {
            UiAction::AddTeacher => "add_teacher",
            UiAction::AddRoom => "add_room",
            UiAction::AddClass => "add_class",
            UiAction::Remove(_) => "remove",
            UiAction::SwitchTab(_) => "switch_tab",
            UiAction::Generate => "generate",
        }
    }
}

#[derive(Debug)]
pub enum Dispatched {
    Applied,
    /// The caller owns the network call and reports back through
    /// [`Console::apply_solve_outcome`].
    SolveRequested(PendingSolve),
}

/// A solve request that has been issued but not yet answered.
#[derive(Debug, Clone)]
pub struct PendingSolve {
    pub seq: u64,
    pub request: SolveRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveApplied {
    Rendered,
    Failed,
    /// A newer request was issued after this one; the response was dropped.
    Superseded,
}

#[derive(Debug, Clone)]
struct Solution {
    status: SolveStatus,
    schedule: Vec<ScheduleEntry>,
    time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConsoleView {
    pub active_tab: Tab,
    pub status: String,
    pub teachers: ListView,
    pub rooms: ListView,
    pub classes: ListView,
    pub teacher_select: SelectView,
    pub schedule_grid: Option<GridView>,
    pub schedule_list: Vec<ScheduleListRow>,
    pub has_solution: Option<bool>,
}

#[derive(Debug)]
pub struct Console {
    store: EntityStore,
    pub forms: Forms,
    status: String,
    active_tab: Tab,
    solution: Option<Solution>,
    last_seq: u64,
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
            forms: Forms::default(),
            status: STATUS_READY.to_string(),
            active_tab: Tab::default(),
            solution: None,
            last_seq: 0,
        }
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Switching tabs never fails, so callers need not go through `dispatch`.
    pub fn switch_tab(&mut self, tab: Tab) {
        debug!(?tab, "switching tab");
        self.active_tab = tab;
    }

    pub fn dispatch(&mut self, action: UiAction) -> Result<Dispatched, ConsoleError> {
        debug!(action = action.name(), "dispatching ui action");
        match action {
            UiAction::AddTeacher => {
                self.forms.teacher.submit(&mut self.store)?;
            }
            UiAction::AddRoom => {
                self.forms.room.submit(&mut self.store)?;
            }
            UiAction::AddClass => {
                self.forms.class.submit(&mut self.store)?;
            }
            UiAction::Remove(EntityRef::Teacher(id)) => {
                self.store.remove_teacher(&id);
            }
            UiAction::Remove(EntityRef::Room(id)) => {
                self.store.remove_room(&id);
            }
            UiAction::Remove(EntityRef::Class(id)) => {
                self.store.remove_class(&id);
            }
            UiAction::SwitchTab(tab) => self.switch_tab(tab),
            UiAction::Generate => return self.begin_generate().map(Dispatched::SolveRequested),
        }
        Ok(Dispatched::Applied)
    }

    /// Snapshots the store with a fresh week of slots and marks the request
    /// as the latest one. Leaves the status untouched when a collection is
    /// empty.
    pub fn begin_generate(&mut self) -> Result<PendingSolve, ConsoleError> {
        if !self.store.is_solvable() {
            return Err(ConsoleError::MissingEntities);
        }

        self.last_seq += 1;
        self.status = STATUS_GENERATING.to_string();
        let request = SolveRequest {
            teachers: self.store.teachers().to_vec(),
            rooms: self.store.rooms().to_vec(),
            classes: self.store.classes().to_vec(),
            time_slots: generate_time_slots(),
        };
        info!(seq = self.last_seq, "solve request issued");
        Ok(PendingSolve {
            seq: self.last_seq,
            request,
        })
    }

    pub fn apply_solve_outcome(
        &mut self,
        pending: PendingSolve,
        outcome: Result<SolveResponse, SolverError>,
    ) -> SolveApplied {
        if pending.seq != self.last_seq {
            warn!(
                seq = pending.seq,
                latest = self.last_seq,
                "discarding superseded solve response"
            );
            return SolveApplied::Superseded;
        }

        match outcome {
            Ok(response) => {
                self.status = format!("Status: {}", response.status);
                self.solution = Some(Solution {
                    status: response.solve_status(),
                    schedule: response.schedule,
                    time_slots: pending.request.time_slots,
                });
                SolveApplied::Rendered
            }
            Err(err) => {
                warn!(seq = pending.seq, error = %err, "solve request failed");
                self.status = STATUS_SOLVER_ERROR.to_string();
                SolveApplied::Failed
            }
        }
    }

    /// Issue, await and apply a single solve request.
    pub async fn generate_schedule(
        &mut self,
        transport: &dyn SolverTransport,
    ) -> Result<SolveApplied, ConsoleError> {
        let pending = self.begin_generate()?;
        let outcome = transport.solve(&pending.request).await;
        Ok(self.apply_solve_outcome(pending, outcome))
    }

    pub fn schedule_grid(&self) -> Option<GridView> {
        self.solution
            .as_ref()
            .map(|s| render_schedule_grid(&self.store, &s.schedule, &s.time_slots))
    }

    pub fn view(&self) -> ConsoleView {
        let schedule_list = self
            .solution
            .as_ref()
            .map(|s| render_schedule_list(&self.store, &s.schedule, &s.time_slots))
            .unwrap_or_default();
        ConsoleView {
            active_tab: self.active_tab,
            status: self.status.clone(),
            teachers: render_teacher_list(&self.store),
            rooms: render_room_list(&self.store),
            classes: render_class_list(&self.store),
            teacher_select: render_teacher_select(&self.store),
            schedule_grid: self.schedule_grid(),
            schedule_list,
            has_solution: self.solution.as_ref().map(|s| s.status.has_solution()),
        }
    }
}

#[cfg(test)]
#[path = "tests/console_tests.rs"]
mod tests;
