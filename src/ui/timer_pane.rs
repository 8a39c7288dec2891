use crate::app::AppState;
use crate::domain::{Phase, TimerState};
use crate::ui::styles::{
    border_style, break_style, gauge_style, idle_style, paused_style, title_style, work_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

fn clock_style(phase: Phase, state: TimerState) -> Style {
    match (state, phase) {
        (TimerState::Idle, _) => idle_style(),
        (TimerState::Paused, _) => paused_style(),
        (TimerState::Running, Phase::Work) => work_style(),
        (TimerState::Running, Phase::Break) => break_style(),
    }
}

/// Render the countdown, status and pomodoro count
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Pomodoro Timer ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(5), // Clock, phase, status
            Constraint::Length(1), // Phase gauge
            Constraint::Length(1),
            Constraint::Length(1), // Pomodoro count
            Constraint::Min(0),
        ])
        .split(inner);

    let timer = &app.timer;
    let style = clock_style(timer.phase(), timer.state());

    let lines = vec![
        Line::styled(app.timer_display(), style),
        Line::raw(""),
        Line::from(vec![
            Span::styled("Phase: ", title_style()),
            Span::raw(timer.phase().name()),
        ]),
        Line::raw(""),
        Line::styled(app.status_text(), style),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), chunks[1]);

    let gauge_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[2])[1];
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .ratio(timer.phase_progress().clamp(0.0, 1.0))
        .label("");
    f.render_widget(gauge, gauge_area);

    let count = Paragraph::new(Line::from(vec![
        Span::styled("Pomodoros completed: ", title_style()),
        Span::raw(app.data.pomodoro_count.to_string()),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(count, chunks[4]);
}
