pub mod enums;
pub mod resource;
pub mod task;
pub mod timer;

pub use enums::{Category, Phase, Tab, TimerState, UiMode};
pub use resource::{ResourceRegistry, ResourceRow};
pub use task::{days_left_on, DaysLeft, Task, TaskRegistry};
pub use timer::{TickOutcome, Timer};
