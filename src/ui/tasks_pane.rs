use crate::app::AppState;
use crate::domain::{days_left_on, DaysLeft, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, overdue_style, selected_style, title_style,
};
use chrono::{Local, NaiveDate};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Row text: `✓ description - Deadline: D (N days left)`
pub fn task_row_text(task: &Task, today: NaiveDate) -> String {
    format!(
        "{} {} - Deadline: {} ({})",
        task.status_mark(),
        task.description,
        task.deadline,
        days_left_on(&task.deadline, today)
    )
}

fn row_style(task: &Task, today: NaiveDate) -> Style {
    if task.completed {
        return done_style();
    }
    match days_left_on(&task.deadline, today) {
        DaysLeft::Days(0) | DaysLeft::Invalid => overdue_style(),
        DaysLeft::Days(_) => default_style(),
    }
}

/// Render the task list, scrolled so the selected row stays visible
pub fn render_tasks_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let today = Local::now().date_naive();
    let tasks = app.tasks();

    let items: Vec<ListItem> = if tasks.is_empty() {
        vec![ListItem::new(Line::styled(
            "No tasks yet. Press 'a' to add one.",
            hint_style(),
        ))]
    } else {
        tasks
            .iter()
            .map(|task| {
                ListItem::new(Line::raw(task_row_text(task, today))).style(row_style(task, today))
            })
            .collect()
    };

    let completed = app.data.tasks.completed_count();
    let title = format!(" Tasks ({}/{} done) ", completed, tasks.len());

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    let selected = (!tasks.is_empty()).then_some(app.selected_task);
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}
