use crate::app::AppState;
use crate::report::{RatioView, TracePoint, TraceView, NO_DATA_TEXT};
use crate::ui::layout::split_progress;
use crate::ui::styles::{border_style, done_style, gauge_style, hint_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
    Frame,
};

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()))
}

fn render_placeholder(f: &mut Frame, title: &str, area: Rect) {
    let paragraph = Paragraph::new(NO_DATA_TEXT)
        .style(hint_style())
        .alignment(Alignment::Center)
        .block(pane_block(title));
    f.render_widget(paragraph, area);
}

/// Chart coordinates: x is the position in the task list, y is 0 or 1
pub fn trace_coordinates(points: &[TracePoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .enumerate()
        .map(|(idx, point)| (idx as f64, f64::from(point.completed)))
        .collect()
}

/// Gauge label for the ratio view
pub fn ratio_label(ratio: &RatioView) -> String {
    match ratio {
        RatioView::NoData => NO_DATA_TEXT.to_string(),
        RatioView::Split {
            completed,
            remaining,
        } => {
            let (done_pct, _) = ratio.percentages().unwrap_or((0.0, 0.0));
            format!(
                "{} completed / {} remaining ({:.1}%)",
                completed, remaining, done_pct
            )
        }
    }
}

fn render_trace(f: &mut Frame, points: &[TracePoint], area: Rect) {
    const TITLE: &str = " Task Completion Over Time ";

    let data = trace_coordinates(points);
    let x_max = (points.len().saturating_sub(1) as f64).max(1.0);

    let first = points.first().map(|p| p.deadline.as_str()).unwrap_or_default();
    let last = points.last().map(|p| p.deadline.as_str()).unwrap_or_default();

    let dataset = Dataset::default()
        .name("Completed")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(done_style())
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(pane_block(TITLE))
        .x_axis(
            Axis::default()
                .title("Deadline")
                .style(hint_style())
                .bounds([0.0, x_max])
                .labels(vec![Span::raw(first), Span::raw(last)]),
        )
        .y_axis(
            Axis::default()
                .title("Completed")
                .style(hint_style())
                .bounds([0.0, 1.0])
                .labels(vec![Span::raw("0"), Span::raw("1")]),
        );
    f.render_widget(chart, area);
}

/// Render the trace chart and completion gauge
pub fn render_progress_pane(f: &mut Frame, app: &AppState, area: Rect) {
    const RATIO_TITLE: &str = " Completed vs Remaining ";

    let progress = app.progress();
    let (chart_area, gauge_area) = split_progress(area);

    match &progress.trace {
        TraceView::NoData => render_placeholder(f, " Task Completion Over Time ", chart_area),
        TraceView::Points(points) => render_trace(f, points, chart_area),
    }

    match progress.ratio.completed_fraction() {
        None => render_placeholder(f, RATIO_TITLE, gauge_area),
        Some(fraction) => {
            let gauge = Gauge::default()
                .block(pane_block(RATIO_TITLE))
                .gauge_style(gauge_style())
                .ratio(fraction)
                .label(ratio_label(&progress.ratio));
            f.render_widget(gauge, gauge_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_coordinates_keep_list_order() {
        let points = vec![
            TracePoint {
                deadline: "2030-05-01".to_string(),
                completed: 1,
            },
            TracePoint {
                deadline: "2030-01-01".to_string(),
                completed: 0,
            },
        ];
        assert_eq!(trace_coordinates(&points), vec![(0.0, 1.0), (1.0, 0.0)]);
    }

    #[test]
    fn test_ratio_label() {
        assert_eq!(ratio_label(&RatioView::NoData), "No tasks available");
        let ratio = RatioView::Split {
            completed: 1,
            remaining: 3,
        };
        assert_eq!(ratio_label(&ratio), "1 completed / 3 remaining (25.0%)");
    }
}
