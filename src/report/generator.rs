use crate::domain::{days_left_on, Category, TimerState};
use crate::persistence::AppData;
use crate::report::progress::{build_progress, RatioView, TraceView, NO_DATA_TEXT};
use chrono::NaiveDate;

/// Format percentage with 1 decimal place
fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Render a Markdown summary of the persisted state as of `today`
pub fn generate_report(data: &AppData, today: NaiveDate) -> String {
    let progress = build_progress(data.tasks.as_slice());
    let mut report = String::new();

    report.push_str(&format!("# Productivity Report - {}\n\n", today.format("%Y-%m-%d")));

    // Summary
    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Pomodoros completed:** {}\n", data.pomodoro_count));
    report.push_str(&format!(
        "- **Tasks:** {} ({} completed)\n",
        data.tasks.len(),
        data.tasks.completed_count()
    ));
    report.push_str(&format!("- **Resources:** {}\n\n", data.resources.len()));

    // Tasks
    report.push_str("## Tasks\n\n");
    if data.tasks.is_empty() {
        report.push_str(&format!("_{}_\n\n", NO_DATA_TEXT));
    } else {
        report.push_str("| | Task | Deadline | Days Left |\n");
        report.push_str("|---|------|----------|-----------|\n");
        for task in data.tasks.iter() {
            report.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                task.status_mark(),
                task.description,
                task.deadline,
                days_left_on(&task.deadline, today)
            ));
        }
        report.push('\n');
    }

    // Progress
    report.push_str("## Task Completion Progress\n\n");
    match &progress.trace {
        TraceView::NoData => report.push_str(&format!("_{}_\n\n", NO_DATA_TEXT)),
        TraceView::Points(points) => {
            for point in points {
                report.push_str(&format!("- {} → {}\n", point.deadline, point.completed));
            }
            report.push('\n');
        }
    }

    report.push_str("## Task Completion Ratio\n\n");
    match progress.ratio {
        RatioView::NoData => report.push_str(&format!("_{}_\n\n", NO_DATA_TEXT)),
        RatioView::Split {
            completed,
            remaining,
        } => {
            if let Some((done_pct, left_pct)) = progress.ratio.percentages() {
                report.push_str(&format!(
                    "- **Completed:** {} ({})\n",
                    completed,
                    format_percent(done_pct)
                ));
                report.push_str(&format!(
                    "- **Remaining:** {} ({})\n\n",
                    remaining,
                    format_percent(left_pct)
                ));
            }
        }
    }

    // Resources
    report.push_str("## Resources\n\n");
    for &category in Category::all() {
        let entries = data.resources.entries(category);
        report.push_str(&format!("### {} ({})\n\n", category.label(), entries.len()));
        for resource in entries {
            report.push_str(&format!("- [{}]({})\n", resource.name, resource.url));
        }
        if !entries.is_empty() {
            report.push('\n');
        }
    }

    report
}

/// One-line timer summary for log events
pub fn timer_summary(state: TimerState, display: &str, status: &str) -> String {
    format!("{} {} ({})", state.to_tag(), display, status)
}
