use crate::domain::{Tab, UiMode};
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

/// Hint text for the current tab and mode
pub fn hints_for(tab: Tab, mode: UiMode) -> &'static str {
    match mode {
        UiMode::AddingTask => " Tab switch field   Enter save   Esc cancel",
        UiMode::AddingResource => " ←/→ category   Tab switch field   Enter save   Esc cancel",
        UiMode::Notice => " Enter/Esc dismiss",
        UiMode::Normal => match tab {
            Tab::Timer => " s start   p pause   r reset   Tab/1-4 switch   q quit",
            Tab::Tasks => " ↑/↓ select   a add   c complete   x delete   Tab/1-4 switch   q quit",
            Tab::Progress => " Tab/1-4 switch   q quit",
            Tab::Resources => " ↑/↓ select   a add   o open   x delete   Tab/1-4 switch   q quit",
        },
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, tab: Tab, mode: UiMode, area: Rect) {
    let paragraph = Paragraph::new(Line::raw(hints_for(tab, mode))).style(hint_style());
    f.render_widget(paragraph, area);
}
