use crate::error::{AppError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Date format used for deadlines
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A task with a deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID for internal references (not persisted)
    #[serde(skip, default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Task description
    #[serde(rename = "task")]
    pub description: String,
    /// Deadline as YYYY-MM-DD (kept as text so hand-edited files still load)
    pub deadline: String,
    pub completed: bool,
}

impl Task {
    pub fn new(description: String, deadline: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            deadline,
            completed: false,
        }
    }

    /// Status mark used in lists
    pub fn status_mark(&self) -> &'static str {
        if self.completed {
            "✓"
        } else {
            "○"
        }
    }
}

// Records compare by content; the id is only a handle for this process.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.description == other.description
            && self.deadline == other.deadline
            && self.completed == other.completed
    }
}

impl Eq for Task {}

/// Days remaining until a deadline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysLeft {
    Days(i64),
    Invalid,
}

impl fmt::Display for DaysLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaysLeft::Days(days) => write!(f, "{} days left", days),
            DaysLeft::Invalid => f.write_str("Invalid date"),
        }
    }
}

/// Parse a YYYY-MM-DD deadline
pub fn parse_deadline(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Days left until `deadline` counted from `today`, clamped at zero
pub fn days_left_on(deadline: &str, today: NaiveDate) -> DaysLeft {
    match parse_deadline(deadline) {
        Some(date) => DaysLeft::Days((date - today).num_days().max(0)),
        None => DaysLeft::Invalid,
    }
}

/// Ordered list of tasks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskRegistry {
    tasks: Vec<Task>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a new task; returns its id
    pub fn add(&mut self, description: &str, deadline_text: &str) -> Result<Uuid> {
        let description = description.trim();
        let deadline_text = deadline_text.trim();
        if description.is_empty() {
            return Err(AppError::validation("Task description is required"));
        }
        if deadline_text.is_empty() {
            return Err(AppError::validation("Deadline is required"));
        }
        let deadline = parse_deadline(deadline_text).ok_or_else(|| {
            AppError::validation("Please enter the date in YYYY-MM-DD format")
        })?;

        let task = Task::new(
            description.to_string(),
            deadline.format(DATE_FORMAT).to_string(),
        );
        let id = task.id;
        self.tasks.push(task);
        Ok(id)
    }

    /// Mark the task at `index` complete (idempotent)
    pub fn complete(&mut self, index: usize) -> Result<&Task> {
        let len = self.tasks.len();
        let task = self.tasks.get_mut(index).ok_or(AppError::Index {
            what: "task",
            index,
            len,
        })?;
        task.completed = true;
        Ok(task)
    }

    /// Remove the task at `index`; later tasks shift down by one
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        if index >= self.tasks.len() {
            return Err(AppError::Index {
                what: "task",
                index,
                len: self.tasks.len(),
            });
        }
        Ok(self.tasks.remove(index))
    }

    pub fn complete_by_id(&mut self, id: Uuid) -> Result<&Task> {
        let index = self.require_position(id)?;
        self.complete(index)
    }

    pub fn delete_by_id(&mut self, id: Uuid) -> Result<Task> {
        let index = self.require_position(id)?;
        self.delete(index)
    }

    /// Current position of the task with `id`
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    fn require_position(&self, id: Uuid) -> Result<usize> {
        self.position(id)
            .ok_or_else(|| AppError::validation("The selected task no longer exists"))
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
