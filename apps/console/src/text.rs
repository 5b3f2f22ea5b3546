//! Plain-text rendering of the console view model.

use std::fmt::Write as _;

use client_core::{
    view::{GridCell, GridView, ListView, ScheduleListRow, SelectView},
    ConsoleView, Tab,
};

const TABS: [(Tab, &str); 4] = [
    (Tab::Teachers, "Teachers"),
    (Tab::Rooms, "Rooms"),
    (Tab::Classes, "Classes"),
    (Tab::Schedule, "Schedule"),
];

pub fn render_view(view: &ConsoleView) -> String {
    let mut out = String::new();
    out.push_str(&tab_bar(view.active_tab));
    let _ = writeln!(out, "status: {}", view.status);
    out.push('\n');

    match view.active_tab {
        Tab::Teachers => out.push_str(&render_list(&view.teachers, "No teachers added.")),
        Tab::Rooms => out.push_str(&render_list(&view.rooms, "No rooms added.")),
        Tab::Classes => {
            out.push_str(&render_list(&view.classes, "No classes added."));
            out.push_str(&render_select(&view.teacher_select));
        }
        Tab::Schedule => match &view.schedule_grid {
            Some(grid) => {
                out.push_str(&render_grid(grid));
                out.push_str(&render_schedule_list(&view.schedule_list));
            }
            None => out.push_str("No schedule generated yet.\n"),
        },
    }
    out
}

fn tab_bar(active: Tab) -> String {
    let labels: Vec<String> = TABS
        .iter()
        .map(|(tab, label)| {
            if *tab == active {
                format!("[{label}]")
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    format!("{}\n", labels.join(" "))
}

pub fn render_list(list: &ListView, empty: &str) -> String {
    if list.rows.is_empty() {
        return format!("{empty}\n");
    }
    let mut out = String::new();
    for (index, row) in list.rows.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {} {}", index + 1, row.title, row.detail);
    }
    out
}

fn render_select(select: &SelectView) -> String {
    let mut out = String::from("\nclass.teacher options:\n");
    for (index, option) in select.options.iter().enumerate() {
        let _ = writeln!(out, "{index:>3}: {}", option.label);
    }
    out
}

/// Fixed-width table; a cell with several cards grows its row.
pub fn render_grid(grid: &GridView) -> String {
    let rows: Vec<Vec<Vec<String>>> = grid
        .rows()
        .map(|row| row.iter().map(cell_lines).collect())
        .collect();

    let mut widths = vec![0usize; grid.columns];
    for row in &rows {
        for (col, lines) in row.iter().enumerate() {
            let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
            widths[col] = widths[col].max(longest);
        }
    }

    let separator = format!(
        "+{}+\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = separator.clone();
    for row in &rows {
        let height = row.iter().map(Vec::len).max().unwrap_or(1).max(1);
        for line_no in 0..height {
            out.push('|');
            for (col, lines) in row.iter().enumerate() {
                let text = lines.get(line_no).map(String::as_str).unwrap_or("");
                let _ = write!(out, " {text:<width$} |", width = widths[col]);
            }
            out.push('\n');
        }
        out.push_str(&separator);
    }
    out
}

fn cell_lines(cell: &GridCell) -> Vec<String> {
    match cell {
        GridCell::Header { text } => vec![text.clone()],
        GridCell::Slot { cards, .. } => cards.iter().map(|c| c.summary()).collect(),
    }
}

fn render_schedule_list(rows: &[ScheduleListRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n");
    for row in rows {
        let _ = writeln!(
            out,
            "{} P{}  {} ({})  {}  {}",
            row.day, row.period, row.class, row.subject, row.teacher, row.room
        );
    }
    out
}

#[cfg(test)]
#[path = "tests/text_tests.rs"]
mod tests;
