/// Errors raised at the action boundary.
///
/// None of these are fatal: the UI turns them into a notice and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed user input (task description, deadline, resource fields).
    #[error("{0}")]
    Validation(String),

    /// Resource category outside {reading, practice, links}.
    #[error("unknown resource category: {0}")]
    UnknownCategory(String),

    /// Selection refers to a removed or out-of-range position.
    #[error("no {what} at position {index} (have {len})")]
    Index {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Data file could not be read, parsed or written.
    #[error("could not access data file: {0}")]
    Persistence(String),

    /// A resource link could not be launched.
    #[error("could not open resource: {0}")]
    ExternalOpen(String),

    /// Configuration file is unreadable or holds unusable values.
    #[error("config error: {0}")]
    Config(String),
}

impl AppError {
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Self::Validation(message.into())
    }

    pub fn persistence<M: Into<String>>(message: M) -> Self {
        Self::Persistence(message.into())
    }

    /// Short machine-readable code, used by tests and log fields.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::UnknownCategory(_) => "unknown_category",
            Self::Index { .. } => "index",
            Self::Persistence(_) => "persistence",
            Self::ExternalOpen(_) => "external_open",
            Self::Config(_) => "config",
        }
    }

    /// Title shown on the notice modal.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Invalid Input",
            Self::UnknownCategory(_) => "Invalid Resource Type",
            Self::Index { .. } => "Nothing Selected",
            Self::Persistence(_) => "Data File Error",
            Self::ExternalOpen(_) => "Open Failed",
            Self::Config(_) => "Config Error",
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
