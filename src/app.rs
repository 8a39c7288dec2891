use crate::config::Config;
use crate::domain::task::DATE_FORMAT;
use crate::domain::{Category, ResourceRow, Tab, Task, TickOutcome, Timer, UiMode};
use crate::error::{AppError, Result};
use crate::opener::LinkOpener;
use crate::persistence::{AppData, JsonStore};
use crate::report::{build_progress, timer_summary, ProgressReport};
use chrono::Local;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Notice shown after a failed action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        Self {
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Input form state for adding tasks
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub description: String,
    pub deadline: String,
    pub editing_field: usize, // 0 = description, 1 = deadline
}

/// Input form state for adding resources
#[derive(Debug, Clone)]
pub struct ResourceForm {
    pub category: Category,
    pub name: String,
    pub url: String,
    pub editing_field: usize, // 0 = name, 1 = url
}

#[derive(Debug, Clone)]
pub enum InputForm {
    Task(TaskForm),
    Resource(ResourceForm),
}

/// Main application state
pub struct AppState {
    pub data: AppData,
    pub timer: Timer,
    store: JsonStore,
    opener: Box<dyn LinkOpener>,
    pub tab: Tab,
    pub ui_mode: UiMode,
    pub selected_task: usize,
    pub selected_resource_row: usize,
    pub input_form: Option<InputForm>,
    pub notice: Option<Notice>,
    /// Category preselected in the next resource form
    pub last_category: Category,
    /// Data file was unreadable and has not been written since
    load_failed: bool,
}

impl AppState {
    pub fn new(data: AppData, timer: Timer, store: JsonStore, opener: Box<dyn LinkOpener>) -> Self {
        let mut app = Self {
            data,
            timer,
            store,
            opener,
            tab: Tab::Timer,
            ui_mode: UiMode::Normal,
            selected_task: 0,
            selected_resource_row: 0,
            input_form: None,
            notice: None,
            last_category: Category::Reading,
            load_failed: false,
        };
        app.clamp_resource_selection();
        app
    }

    /// Load persisted data and build the app; a broken data file starts empty with a notice
    pub fn open(store: JsonStore, config: &Config, opener: Box<dyn LinkOpener>) -> Self {
        let timer = Timer::new(
            config.timer.work_secs,
            config.timer.break_secs,
            config.timer.auto_continue,
        );

        match store.load() {
            Ok(data) => {
                info!(
                    path = %store.path().display(),
                    tasks = data.tasks.len(),
                    resources = data.resources.len(),
                    pomodoros = data.pomodoro_count,
                    "loaded data file"
                );
                Self::new(data, timer, store, opener)
            }
            Err(err) => {
                warn!(error = %err, "could not load data file, starting empty");
                let mut app = Self::new(AppData::default(), timer, store, opener);
                app.load_failed = true;
                app.show_notice(&err);
                app
            }
        }
    }

    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    /// Write the whole aggregate to disk
    pub fn save(&mut self) -> Result<()> {
        self.store.save(&self.data)?;
        self.load_failed = false;
        debug!(path = %self.store.path().display(), "saved data file");
        Ok(())
    }

    /// Final save on quit; an unreadable data file is left as it was
    /// unless something has been written over it already
    pub fn save_on_exit(&mut self) -> Result<()> {
        if self.load_failed {
            warn!(path = %self.store.path().display(), "data file was not loaded, leaving it untouched");
            return Ok(());
        }
        self.save()
    }

    /// Surface an action failure as a notice; nothing is fatal
    pub fn report(&mut self, result: Result<()>) {
        if let Err(err) = result {
            warn!(code = err.code(), error = %err, "action failed");
            self.show_notice(&err);
        }
    }

    pub fn show_notice(&mut self, err: &AppError) {
        self.notice = Some(Notice::from(err));
        self.ui_mode = UiMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = match &self.input_form {
            Some(InputForm::Task(_)) => UiMode::AddingTask,
            Some(InputForm::Resource(_)) => UiMode::AddingResource,
            None => UiMode::Normal,
        };
    }

    // ---- tabs ----

    pub fn select_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            debug!(tab = tab.title(), "switched tab");
        }
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.tab.prev());
    }

    // ---- timer ----

    pub fn start_timer(&mut self, now: Instant) {
        if self.timer.start(now) {
            info!(timer = %self.timer_line(), "timer started");
        }
    }

    pub fn pause_timer(&mut self) {
        if self.timer.pause() {
            info!(timer = %self.timer_line(), "timer paused");
        }
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        info!(timer = %self.timer_line(), "timer reset");
    }

    /// Fire due ticks; a finished work phase counts a pomodoro and is saved
    pub fn poll_timer(&mut self, now: Instant) -> Result<()> {
        let mut counted = 0;
        for outcome in self.timer.poll(now) {
            if let TickOutcome::PhaseComplete { finished, next } = outcome {
                info!(finished = finished.name(), next = next.name(), "phase complete");
            }
            if outcome.completed_pomodoro() {
                counted += 1;
            }
        }

        if counted > 0 {
            self.data.pomodoro_count += counted;
            info!(pomodoros = self.data.pomodoro_count, "pomodoro completed");
            self.save()?;
        }
        Ok(())
    }

    /// How long the event loop may wait before the timer needs attention
    pub fn wait_budget(&self, now: Instant, refresh: Duration) -> Duration {
        self.timer
            .time_until_next_tick(now)
            .map_or(refresh, |until| until.min(refresh))
    }

    pub fn timer_display(&self) -> String {
        self.timer.display()
    }

    pub fn status_text(&self) -> &'static str {
        self.timer.status_text()
    }

    fn timer_line(&self) -> String {
        timer_summary(self.timer.state(), &self.timer.display(), self.timer.status_text())
    }

    // ---- tasks ----

    pub fn tasks(&self) -> &[Task] {
        self.data.tasks.as_slice()
    }

    pub fn add_task(&mut self, description: &str, deadline: &str) -> Result<()> {
        self.data.tasks.add(description, deadline)?;
        info!(task = description.trim(), deadline = deadline.trim(), "task added");
        self.selected_task = self.data.tasks.len() - 1;
        self.save()
    }

    pub fn complete_task(&mut self, index: usize) -> Result<()> {
        let task = self.data.tasks.complete(index)?;
        info!(task = %task.description, "task completed");
        self.save()
    }

    pub fn delete_task(&mut self, index: usize) -> Result<()> {
        let task = self.data.tasks.delete(index)?;
        info!(task = %task.description, "task deleted");
        self.clamp_task_selection();
        self.save()
    }

    /// Resolve the current selection to a task id at the moment of the action
    fn selected_task_id(&self) -> Result<uuid::Uuid> {
        self.data
            .tasks
            .get(self.selected_task)
            .map(|t| t.id)
            .ok_or(AppError::Index {
                what: "task",
                index: self.selected_task,
                len: self.data.tasks.len(),
            })
    }

    pub fn complete_selected_task(&mut self) -> Result<()> {
        let id = self.selected_task_id()?;
        let task = self.data.tasks.complete_by_id(id)?;
        info!(task = %task.description, "task completed");
        self.save()
    }

    pub fn delete_selected_task(&mut self) -> Result<()> {
        let id = self.selected_task_id()?;
        let task = self.data.tasks.delete_by_id(id)?;
        info!(task = %task.description, "task deleted");
        self.clamp_task_selection();
        self.save()
    }

    pub fn move_task_selection_up(&mut self) {
        self.selected_task = self.selected_task.saturating_sub(1);
    }

    pub fn move_task_selection_down(&mut self) {
        if self.selected_task + 1 < self.data.tasks.len() {
            self.selected_task += 1;
        }
    }

    fn clamp_task_selection(&mut self) {
        let len = self.data.tasks.len();
        if self.selected_task >= len {
            self.selected_task = len.saturating_sub(1);
        }
    }

    // ---- resources ----

    /// Flattened resource rows for rendering
    pub fn resource_rows(&self) -> Vec<ResourceRow> {
        self.data.resources.list()
    }

    pub fn add_resource(&mut self, category: &str, name: &str, url: &str) -> Result<()> {
        let (category, id) = self.data.resources.add(category, name, url)?;
        info!(category = category.key(), name = name.trim(), "resource added");
        self.last_category = category;
        if let Some(pos) = self
            .resource_rows()
            .iter()
            .position(|row| matches!(row, ResourceRow::Entry { id: row_id, .. } if *row_id == id))
        {
            self.selected_resource_row = pos;
        }
        self.save()
    }

    pub fn delete_resource(&mut self, category: &str, index: usize) -> Result<()> {
        let resource = self.data.resources.delete(category, index)?;
        info!(category, name = %resource.name, "resource deleted");
        self.clamp_resource_selection();
        self.save()
    }

    /// Id, name and url of the selected entry row
    fn selected_resource(&self) -> Result<(uuid::Uuid, String, String)> {
        match self.resource_rows().into_iter().nth(self.selected_resource_row) {
            Some(ResourceRow::Entry { id, name, url, .. }) => Ok((id, name, url)),
            _ => Err(AppError::Index {
                what: "resource",
                index: self.selected_resource_row,
                len: self.data.resources.len(),
            }),
        }
    }

    /// Delete the selected row from the category that actually owns it
    pub fn delete_selected_resource(&mut self) -> Result<()> {
        let (id, _, _) = self.selected_resource()?;
        let (category, resource) = self.data.resources.delete_by_id(id)?;
        info!(category = category.key(), name = %resource.name, "resource deleted");
        self.clamp_resource_selection();
        self.save()
    }

    pub fn open_selected_resource(&mut self) -> Result<()> {
        let (_, name, url) = self.selected_resource()?;
        info!(name = %name, url = %url, "opening resource");
        self.opener.open(&url)
    }

    pub fn move_resource_selection_up(&mut self) {
        let rows = self.resource_rows();
        if let Some(pos) = (0..self.selected_resource_row.min(rows.len()))
            .rev()
            .find(|&i| !rows[i].is_header())
        {
            self.selected_resource_row = pos;
        }
    }

    pub fn move_resource_selection_down(&mut self) {
        let rows = self.resource_rows();
        if let Some(pos) = (self.selected_resource_row + 1..rows.len()).find(|&i| !rows[i].is_header()) {
            self.selected_resource_row = pos;
        }
    }

    /// Keep the selection on an entry row (nearest one at or before, else after)
    fn clamp_resource_selection(&mut self) {
        let rows = self.resource_rows();
        let start = self.selected_resource_row.min(rows.len().saturating_sub(1));
        let before = (0..=start).rev().find(|&i| !rows[i].is_header());
        let after = (start..rows.len()).find(|&i| !rows[i].is_header());
        self.selected_resource_row = before.or(after).unwrap_or(0);
    }

    // ---- progress ----

    /// Progress views, rebuilt from the current tasks on every call
    pub fn progress(&self) -> ProgressReport {
        build_progress(self.data.tasks.as_slice())
    }

    // ---- input forms ----

    pub fn start_add_task(&mut self) {
        self.input_form = Some(InputForm::Task(TaskForm {
            description: String::new(),
            deadline: Local::now().date_naive().format(DATE_FORMAT).to_string(),
            editing_field: 0,
        }));
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn start_add_resource(&mut self) {
        self.input_form = Some(InputForm::Resource(ResourceForm {
            category: self.last_category,
            name: String::new(),
            url: String::new(),
            editing_field: 0,
        }));
        self.ui_mode = UiMode::AddingResource;
    }

    /// Toggle between the two text fields of the open form
    pub fn input_form_toggle_field(&mut self) {
        match &mut self.input_form {
            Some(InputForm::Task(form)) => form.editing_field = (form.editing_field + 1) % 2,
            Some(InputForm::Resource(form)) => form.editing_field = (form.editing_field + 1) % 2,
            None => {}
        }
    }

    fn active_field(&mut self) -> Option<&mut String> {
        match &mut self.input_form {
            Some(InputForm::Task(form)) => Some(match form.editing_field {
                0 => &mut form.description,
                _ => &mut form.deadline,
            }),
            Some(InputForm::Resource(form)) => Some(match form.editing_field {
                0 => &mut form.name,
                _ => &mut form.url,
            }),
            None => None,
        }
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(field) = self.active_field() {
            field.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(field) = self.active_field() {
            field.pop();
        }
    }

    /// Cycle the category of an open resource form
    pub fn input_form_cycle_category(&mut self, forward: bool) {
        if let Some(InputForm::Resource(form)) = &mut self.input_form {
            form.category = if forward {
                form.category.next()
            } else {
                form.category.prev()
            };
        }
    }

    /// Submit the open form; on failure the form stays open for correction
    pub fn submit_input_form(&mut self) -> Result<()> {
        let Some(form) = self.input_form.clone() else {
            return Ok(());
        };

        match form {
            InputForm::Task(form) => self.add_task(&form.description, &form.deadline)?,
            InputForm::Resource(form) => {
                self.add_resource(form.category.key(), &form.name, &form.url)?
            }
        }

        self.input_form = None;
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }
}
