use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timer phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// The phase that follows this one
    pub fn next(&self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }

    /// Status line shown once this phase is under way
    pub fn banner(&self) -> &'static str {
        match self {
            Self::Work => "Work Time!",
            Self::Break => "Break Time!",
        }
    }
}

/// Run state of the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Paused,
}

impl TimerState {
    pub fn to_tag(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Running => "RUNNING",
            Self::Paused => "PAUSED",
        }
    }
}

/// Resource category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Reading,
    Practice,
    Links,
}

impl Category {
    /// All categories in display order
    pub fn all() -> &'static [Category] {
        &[Category::Reading, Category::Practice, Category::Links]
    }

    /// Key used in the data file
    pub fn key(&self) -> &'static str {
        match self {
            Self::Reading => "reading",
            Self::Practice => "practice",
            Self::Links => "links",
        }
    }

    /// Capitalized label for headers and forms
    pub fn label(&self) -> &'static str {
        match self {
            Self::Reading => "Reading",
            Self::Practice => "Practice",
            Self::Links => "Links",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Reading => Self::Practice,
            Self::Practice => Self::Links,
            Self::Links => Self::Reading,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Reading => Self::Links,
            Self::Practice => Self::Reading,
            Self::Links => Self::Practice,
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reading" => Ok(Self::Reading),
            "practice" => Ok(Self::Practice),
            "links" => Ok(Self::Links),
            _ => Err(AppError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Top-level tabs of the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Timer,
    Tasks,
    Progress,
    Resources,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Timer, Tab::Tasks, Tab::Progress, Tab::Resources]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Timer => "Pomodoro Timer",
            Tab::Tasks => "Tasks",
            Tab::Progress => "Progress",
            Tab::Resources => "Resources",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Timer => 0,
            Tab::Tasks => 1,
            Tab::Progress => 2,
            Tab::Resources => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Tab {
        Self::all()[(self.index() + 1) % Self::all().len()]
    }

    pub fn prev(&self) -> Tab {
        let len = Self::all().len();
        Self::all()[(self.index() + len - 1) % len]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    AddingResource,
    Notice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_next() {
        assert_eq!(Phase::Work.next(), Phase::Break);
        assert_eq!(Phase::Break.next(), Phase::Work);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("reading".parse::<Category>().unwrap(), Category::Reading);
        assert_eq!("Practice".parse::<Category>().unwrap(), Category::Practice);
        assert_eq!(" LINKS ".parse::<Category>().unwrap(), Category::Links);

        let err = "videos".parse::<Category>().unwrap_err();
        assert_eq!(err.code(), "unknown_category");
    }

    #[test]
    fn test_category_cycle() {
        assert_eq!(Category::Links.next(), Category::Reading);
        assert_eq!(Category::Reading.prev(), Category::Links);
        assert_eq!(Category::all().len(), 3);
    }

    #[test]
    fn test_tab_navigation() {
        assert_eq!(Tab::Timer.next(), Tab::Tasks);
        assert_eq!(Tab::Resources.next(), Tab::Timer);
        assert_eq!(Tab::Timer.prev(), Tab::Resources);
        assert_eq!(Tab::from_index(2), Some(Tab::Progress));
        assert_eq!(Tab::from_index(9), None);
    }
}
