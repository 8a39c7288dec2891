pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod progress_pane;
pub mod resources_pane;
pub mod styles;
pub mod tasks_pane;
pub mod timer_pane;

use crate::app::AppState;
use crate::domain::Tab;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_notice;
use progress_pane::render_progress_pane;
use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders, Tabs},
    Frame,
};
use resources_pane::render_resources_pane;
use styles::{border_style, hint_style, selected_style, title_style};
use tasks_pane::render_tasks_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::raw(format!("{} {}", idx + 1, tab.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" pomodesk ", title_style())),
        )
        .style(hint_style())
        .highlight_style(selected_style())
        .select(app.tab.index());
    f.render_widget(tabs, layout.tabs_area);

    match app.tab {
        Tab::Timer => render_timer_pane(f, app, layout.content_area),
        Tab::Tasks => render_tasks_pane(f, app, layout.content_area),
        Tab::Progress => render_progress_pane(f, app, layout.content_area),
        Tab::Resources => render_resources_pane(f, app, layout.content_area),
    }

    render_keybindings(f, app.tab, app.ui_mode, layout.keybindings_area);

    // Form first so a notice about it lands on top
    if let Some(form) = &app.input_form {
        render_input_form(f, form, size);
    }
    if let Some(notice) = &app.notice {
        render_notice(f, notice, size);
    }
}
