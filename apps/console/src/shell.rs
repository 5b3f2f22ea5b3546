//! Executes parsed commands against a [`Console`].

use std::io::Write;

use client_core::{
    view::{EntityRef, ListView},
    Console, ConsoleError, Dispatched, SolveApplied, SolverTransport, Tab, UiAction,
};
use tracing::{debug, warn};

use crate::{
    commands::{Command, EntityKind, FormField, HELP},
    text::render_view,
};

pub struct Shell {
    console: Console,
    solver: Box<dyn SolverTransport>,
    /// Receives status lines that must be visible while a solve is pending.
    progress: Box<dyn Write + Send>,
}

#[derive(Debug, Default)]
pub struct Output {
    pub text: String,
    pub quit: bool,
}

impl Output {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

impl Shell {
    pub fn new(solver: Box<dyn SolverTransport>) -> Self {
        Self::with_progress(solver, Box::new(std::io::stdout()))
    }

    pub fn with_progress(
        solver: Box<dyn SolverTransport>,
        progress: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            console: Console::new(),
            solver,
            progress,
        }
    }

    pub fn console(&self) -> &Console {
        &self.console
    }

    pub async fn execute(&mut self, command: Command) -> Output {
        debug!(?command, "executing console command");
        match command {
            Command::Help => Output::text(format!("{HELP}\n")),
            Command::Quit => Output {
                text: String::new(),
                quit: true,
            },
            Command::Show => self.redraw(String::new()),
            Command::Json => match serde_json::to_string_pretty(&self.console.view()) {
                Ok(json) => Output::text(format!("{json}\n")),
                Err(err) => Output::text(format!("! failed to encode view: {err}\n")),
            },
            Command::Set { field, value } => {
                self.set_field(field, value);
                Output::default()
            }
            Command::Tab(tab) => self.apply(UiAction::SwitchTab(tab)),
            Command::Add(EntityKind::Teacher) => self.apply(UiAction::AddTeacher),
            Command::Add(EntityKind::Room) => self.apply(UiAction::AddRoom),
            Command::Add(EntityKind::Class) => self.apply(UiAction::AddClass),
            Command::Delete { kind, row } => {
                let view = self.console.view();
                let list = match kind {
                    EntityKind::Teacher => &view.teachers,
                    EntityKind::Room => &view.rooms,
                    EntityKind::Class => &view.classes,
                };
                match row_target(list, row) {
                    Some(target) => self.apply(UiAction::Remove(target)),
                    None => self.redraw(format!("no {kind:?} at row {row}\n").to_lowercase()),
                }
            }
            Command::Generate => self.generate().await,
        }
    }

    fn apply(&mut self, action: UiAction) -> Output {
        match self.console.dispatch(action) {
            Ok(_) => self.redraw(String::new()),
            Err(err) => alert(&err),
        }
    }

    async fn generate(&mut self) -> Output {
        let pending = match self.console.dispatch(UiAction::Generate) {
            Ok(Dispatched::SolveRequested(pending)) => pending,
            Ok(Dispatched::Applied) => return self.redraw(String::new()),
            Err(err) => return alert(&err),
        };
        self.show_progress();
        let outcome = self.solver.solve(&pending.request).await;
        let applied = self.console.apply_solve_outcome(pending, outcome);
        debug!(?applied, "solve finished");

        if applied == SolveApplied::Rendered {
            self.console.switch_tab(Tab::Schedule);
        }
        self.redraw(String::new())
    }

    fn show_progress(&mut self) {
        let line = format!("status: {}\n", self.console.status());
        if let Err(err) = self
            .progress
            .write_all(line.as_bytes())
            .and_then(|()| self.progress.flush())
        {
            warn!(error = %err, "failed to write progress status");
        }
    }

    fn set_field(&mut self, field: FormField, value: String) {
        if field == FormField::ClassTeacher {
            let resolved = value.trim().parse::<usize>().ok().and_then(|index| {
                self.console
                    .view()
                    .teacher_select
                    .options
                    .get(index)
                    .map(|option| option.value.clone())
            });
            self.console.forms.class.teacher = resolved.unwrap_or(value);
            return;
        }

        let forms = &mut self.console.forms;
        match field {
            FormField::TeacherName => forms.teacher.name = value,
            FormField::TeacherSubjects => forms.teacher.subjects = value,
            FormField::RoomName => forms.room.name = value,
            FormField::RoomCapacity => forms.room.capacity = value,
            FormField::ClassName => forms.class.name = value,
            FormField::ClassSubject => forms.class.subject = value,
            FormField::ClassSessions => forms.class.sessions = value,
            FormField::ClassTeacher => forms.class.teacher = value,
        }
    }

    fn redraw(&self, mut prefix: String) -> Output {
        prefix.push_str(&render_view(&self.console.view()));
        Output::text(prefix)
    }
}

fn row_target(list: &ListView, row: usize) -> Option<EntityRef> {
    row.checked_sub(1)
        .and_then(|index| list.rows.get(index))
        .map(|r| r.delete.clone())
}

fn alert(err: &ConsoleError) -> Output {
    debug!(error = %err, "alert raised");
    Output::text(format!("! {}\n", err.alert_text()))
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
