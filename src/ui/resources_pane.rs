use crate::app::AppState;
use crate::domain::ResourceRow;
use crate::ui::styles::{border_style, default_style, header_style, hint_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the grouped resource list, scrolled so the selected entry stays visible
pub fn render_resources_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let rows = app.resource_rows();

    let mut items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let (indent, style) = match row {
                ResourceRow::Header(_) => ("", header_style()),
                ResourceRow::Entry { .. } => ("  ", default_style()),
            };
            ListItem::new(Line::raw(format!("{}{}", indent, row.label()))).style(style)
        })
        .collect();

    if app.data.resources.is_empty() {
        items.push(ListItem::new(Line::raw("")));
        items.push(ListItem::new(Line::styled(
            "No resources yet. Press 'a' to add one.",
            hint_style(),
        )));
    }

    let title = format!(" Resources ({}) ", app.data.resources.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .highlight_style(selected_style());

    // Headers are never selectable
    let selected = rows
        .get(app.selected_resource_row)
        .filter(|row| !row.is_header())
        .map(|_| app.selected_resource_row);
    let mut state = ListState::default().with_selected(selected);
    f.render_stateful_widget(list, area, &mut state);
}
