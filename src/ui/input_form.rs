use crate::app::{InputForm, ResourceForm, TaskForm};
use crate::domain::Category;
use crate::ui::{
    layout::create_modal_area,
    styles::{hint_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Label plus `> value█` line for one text field
fn field_lines<'a>(label: &'a str, value: &'a str, editing: bool) -> [Line<'a>; 2] {
    let label = if editing {
        Line::raw(format!("{}: (editing)", label))
    } else {
        Line::raw(format!("{}:", label))
    };
    let value = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);
    [label, value]
}

fn task_form_lines(form: &TaskForm) -> Vec<Line<'_>> {
    let mut lines = vec![Line::raw("")];
    lines.extend(field_lines("Task", &form.description, form.editing_field == 0));
    lines.push(Line::raw(""));
    lines.extend(field_lines(
        "Deadline (YYYY-MM-DD)",
        &form.deadline,
        form.editing_field == 1,
    ));
    lines
}

fn resource_form_lines(form: &ResourceForm) -> Vec<Line<'_>> {
    let mut category_spans = vec![Span::raw("Type: ◀ ")];
    for (idx, category) in Category::all().iter().enumerate() {
        if idx > 0 {
            category_spans.push(Span::raw(" · "));
        }
        if *category == form.category {
            category_spans.push(Span::styled(category.label(), modal_title_style()));
        } else {
            category_spans.push(Span::styled(category.label(), hint_style()));
        }
    }
    category_spans.push(Span::raw(" ▶"));

    let mut lines = vec![Line::raw(""), Line::from(category_spans), Line::raw("")];
    lines.extend(field_lines("Name", &form.name, form.editing_field == 0));
    lines.push(Line::raw(""));
    lines.extend(field_lines("URL", &form.url, form.editing_field == 1));
    lines
}

/// Render the add-task or add-resource form
pub fn render_input_form(f: &mut Frame, form: &InputForm, area: Rect) {
    let (title_text, mut lines) = match form {
        InputForm::Task(form) => (" Add Task ", task_form_lines(form)),
        InputForm::Resource(form) => (" Add Resource ", resource_form_lines(form)),
    };

    lines.push(Line::raw(""));
    lines.push(Line::raw("Tab to switch fields  ·  Enter to submit  ·  Esc to cancel"));

    let modal_area = create_modal_area(area, lines.len() as u16 + 2);

    // Clear the area behind the form
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title_text, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
