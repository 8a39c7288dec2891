use crate::domain::Task;

/// Placeholder text when there is nothing to chart
pub const NO_DATA_TEXT: &str = "No tasks available";

/// One point of the completion trace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracePoint {
    pub deadline: String,
    /// 1 when the task is completed, 0 otherwise
    pub completed: u8,
}

/// Completion over deadline, in task list order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceView {
    NoData,
    Points(Vec<TracePoint>),
}

/// Completed vs remaining task counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioView {
    NoData,
    Split { completed: usize, remaining: usize },
}

impl RatioView {
    pub fn total(&self) -> usize {
        match self {
            RatioView::NoData => 0,
            RatioView::Split {
                completed,
                remaining,
            } => completed + remaining,
        }
    }

    /// Completed share as a fraction (0.0 to 1.0)
    pub fn completed_fraction(&self) -> Option<f64> {
        match self {
            RatioView::NoData => None,
            RatioView::Split { completed, .. } => Some(*completed as f64 / self.total() as f64),
        }
    }

    /// Completed and remaining shares as percentages
    pub fn percentages(&self) -> Option<(f64, f64)> {
        self.completed_fraction()
            .map(|done| (done * 100.0, (1.0 - done) * 100.0))
    }
}

/// Both progress views for one task snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    pub trace: TraceView,
    pub ratio: RatioView,
}

/// Build the progress views from the current tasks
pub fn build_progress(tasks: &[Task]) -> ProgressReport {
    if tasks.is_empty() {
        return ProgressReport {
            trace: TraceView::NoData,
            ratio: RatioView::NoData,
        };
    }

    let points = tasks
        .iter()
        .map(|task| TracePoint {
            deadline: task.deadline.clone(),
            completed: u8::from(task.completed),
        })
        .collect();

    let completed = tasks.iter().filter(|t| t.completed).count();

    ProgressReport {
        trace: TraceView::Points(points),
        ratio: RatioView::Split {
            completed,
            remaining: tasks.len() - completed,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_tasks_give_no_data() {
        let report = build_progress(&[]);
        assert_eq!(report.trace, TraceView::NoData);
        assert_eq!(report.ratio, RatioView::NoData);
        assert_eq!(report.ratio.percentages(), None);
    }

    #[test]
    fn test_trace_keeps_list_order() {
        let mut tasks = TaskRegistry::new();
        tasks.add("Late", "2030-12-01").unwrap();
        tasks.add("Early", "2030-01-01").unwrap();
        tasks.complete(0).unwrap();

        let report = build_progress(tasks.as_slice());
        assert_eq!(
            report.trace,
            TraceView::Points(vec![
                TracePoint {
                    deadline: "2030-12-01".to_string(),
                    completed: 1
                },
                TracePoint {
                    deadline: "2030-01-01".to_string(),
                    completed: 0
                },
            ])
        );
    }

    #[test]
    fn test_ratio_sums_to_total() {
        let mut tasks = TaskRegistry::new();
        for day in 1..=4 {
            tasks.add("T", &format!("2030-01-0{}", day)).unwrap();
        }
        tasks.complete(0).unwrap();

        let report = build_progress(tasks.as_slice());
        assert_eq!(
            report.ratio,
            RatioView::Split {
                completed: 1,
                remaining: 3
            }
        );
        assert_eq!(report.ratio.total(), tasks.len());
        assert_eq!(report.ratio.percentages(), Some((25.0, 75.0)));
    }
}
