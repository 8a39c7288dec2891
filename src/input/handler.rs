use crate::app::AppState;
use crate::domain::{Tab, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events; returns true when the app should quit
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask | UiMode::AddingResource => handle_input_form_mode(app, key),
        UiMode::Notice => handle_notice_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        // Tab switching
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.prev_tab(),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(tab) = c.to_digit(10).and_then(|d| Tab::from_index(d as usize - 1)) {
                app.select_tab(tab);
            }
        }

        _ => match app.tab {
            Tab::Timer => handle_timer_keys(app, key),
            Tab::Tasks => handle_task_keys(app, key),
            Tab::Progress => {}
            Tab::Resources => handle_resource_keys(app, key),
        },
    }
    Ok(false)
}

fn handle_timer_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') | KeyCode::Char(' ') => app.start_timer(Instant::now()),
        KeyCode::Char('p') => app.pause_timer(),
        KeyCode::Char('r') => app.reset_timer(),
        _ => {}
    }
}

fn handle_task_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_task_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_task_selection_down(),
        KeyCode::Char('a') => app.start_add_task(),
        KeyCode::Char('c') | KeyCode::Enter => {
            let result = app.complete_selected_task();
            app.report(result);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            let result = app.delete_selected_task();
            app.report(result);
        }
        _ => {}
    }
}

fn handle_resource_keys(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_resource_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_resource_selection_down(),
        KeyCode::Char('a') => app.start_add_resource(),
        KeyCode::Char('o') | KeyCode::Enter => {
            let result = app.open_selected_resource();
            app.report(result);
        }
        KeyCode::Char('x') | KeyCode::Delete => {
            let result = app.delete_selected_resource();
            app.report(result);
        }
        _ => {}
    }
}

/// Handle keys while a form is open
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            let result = app.submit_input_form();
            app.report(result);
        }
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Tab | KeyCode::BackTab => app.input_form_toggle_field(),
        // Category picker (resource form only)
        KeyCode::Left => app.input_form_cycle_category(false),
        KeyCode::Right => app.input_form_cycle_category(true),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Any of Enter, Esc or Space closes the notice
fn handle_notice_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_notice();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::{Category, TimerState};
    use crate::error::AppError;
    use crate::opener::LinkOpener;
    use crate::persistence::JsonStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use tempfile::TempDir;

    struct NoOpener;

    impl LinkOpener for NoOpener {
        fn open(&self, url: &str) -> crate::error::Result<()> {
            Err(AppError::ExternalOpen(url.to_string()))
        }
    }

    fn create_test_app() -> (AppState, TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("pomodoro_data.json"));
        (AppState::open(store, &Config::default(), Box::new(NoOpener)), dir)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_key(app, key(KeyCode::Char(c))).unwrap();
        }
    }

    #[test]
    fn test_handle_quit() {
        let (mut app, _dir) = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_q_inside_form_is_text() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();

        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(!should_quit);
    }

    #[test]
    fn test_tab_switching() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.tab, Tab::Tasks);
        handle_key(&mut app, key(KeyCode::BackTab)).unwrap();
        handle_key(&mut app, key(KeyCode::BackTab)).unwrap();
        assert_eq!(app.tab, Tab::Resources);
        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        assert_eq!(app.tab, Tab::Progress);
    }

    #[test]
    fn test_timer_keys() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.timer.state(), TimerState::Running);
        assert_eq!(app.status_text(), "Work Time!");

        handle_key(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.timer.state(), TimerState::Paused);
        assert_eq!(app.status_text(), "Paused");

        handle_key(&mut app, key(KeyCode::Char('r'))).unwrap();
        assert_eq!(app.timer.state(), TimerState::Idle);
        assert_eq!(app.status_text(), "Ready to start");
    }

    #[test]
    fn test_timer_keys_only_on_timer_tab() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('3'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.timer.state(), TimerState::Idle);
    }

    #[test]
    fn test_handle_add_task() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();

        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        assert!(app.input_form.is_some());

        type_text(&mut app, "New");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        for _ in 0..10 {
            handle_key(&mut app, key(KeyCode::Backspace)).unwrap();
        }
        type_text(&mut app, "2030-02-03");

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].deadline, "2030-02-03");
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_form.is_none());
    }

    #[test]
    fn test_empty_task_form_shows_notice() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.ui_mode, UiMode::Notice);
        assert_eq!(app.notice.as_ref().unwrap().message, "Task description is required");

        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        handle_key(&mut app, key(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.tasks().is_empty());
    }

    #[test]
    fn test_complete_and_delete_task_keys() {
        let (mut app, _dir) = create_test_app();
        app.add_task("One", "2030-01-01").unwrap();
        app.add_task("Two", "2030-01-02").unwrap();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();

        handle_key(&mut app, key(KeyCode::Up)).unwrap();
        handle_key(&mut app, key(KeyCode::Char('c'))).unwrap();
        assert!(app.tasks()[0].completed);

        handle_key(&mut app, key(KeyCode::Delete)).unwrap();
        assert_eq!(app.tasks().len(), 1);
        assert_eq!(app.tasks()[0].description, "Two");
    }

    #[test]
    fn test_delete_on_empty_list_shows_notice() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();

        assert_eq!(app.ui_mode, UiMode::Notice);
        assert_eq!(app.notice.as_ref().unwrap().title, "Nothing Selected");
    }

    #[test]
    fn test_handle_add_resource() {
        let (mut app, _dir) = create_test_app();
        handle_key(&mut app, key(KeyCode::Char('4'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingResource);

        handle_key(&mut app, key(KeyCode::Left)).unwrap();
        type_text(&mut app, "Docs");
        handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "https://docs.rs");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();

        assert_eq!(app.data.resources.entries(Category::Links).len(), 1);

        handle_key(&mut app, key(KeyCode::Char('x'))).unwrap();
        assert!(app.data.resources.is_empty());
    }

    #[test]
    fn test_open_failure_shows_notice() {
        let (mut app, _dir) = create_test_app();
        app.add_resource("reading", "Book", "https://book").unwrap();
        handle_key(&mut app, key(KeyCode::Char('4'))).unwrap();
        handle_key(&mut app, key(KeyCode::Char('o'))).unwrap();

        assert_eq!(app.ui_mode, UiMode::Notice);
        assert_eq!(app.notice.as_ref().unwrap().title, "Open Failed");
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }
}
