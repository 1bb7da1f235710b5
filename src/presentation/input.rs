use crate::application::{App, AppMode};
use crate::domain::CsvExporter;
use crate::infrastructure::{ApiClient, SystemClipboard};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, api: &ApiClient, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Browse => Self::handle_browse_mode(app, key, modifiers),
            AppMode::Filter => Self::handle_filter_mode(app, key),
            AppMode::ExportCsv => Self::handle_export_mode(app, key),
            AppMode::Register => Self::handle_register_mode(app, api, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_browse_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('e') = key {
                app.start_csv_export();
            }
            return;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.status_message = None;
                app.select_previous_job();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.status_message = None;
                app.select_next_job();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.carousel.previous();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.carousel.next();
            }
            KeyCode::Char(c @ '1'..='9') => {
                // Jump straight to a testimonial slide.
                let slide = c as usize - '1' as usize;
                app.carousel.go_to(slide);
            }
            KeyCode::Char('/') | KeyCode::Char('f') => {
                app.start_filter_entry();
            }
            KeyCode::Char('r') => {
                app.enter_register();
            }
            KeyCode::Char('y') => {
                let text = app
                    .jobs
                    .state()
                    .items
                    .get(app.selected_job)
                    .map(|job| job.clipboard_text());
                if let Some(text) = text {
                    let result = SystemClipboard::copy(&text);
                    app.set_copy_result(result);
                }
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            KeyCode::Esc => {
                app.status_message = None;
            }
            _ => {}
        }
    }

    fn handle_filter_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                app.perform_search();
            }
            KeyCode::Esc => {
                app.cancel_filter_entry();
            }
            KeyCode::Tab => {
                let next = app.active_filter.next();
                app.select_filter(next);
            }
            KeyCode::BackTab => {
                let previous = app.active_filter.previous();
                app.select_filter(previous);
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    let cursor = app.cursor_position;
                    app.active_filter_value_mut().remove(cursor - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                let cursor = app.cursor_position;
                let value = app.active_filter_value_mut();
                if cursor < value.len() {
                    value.remove(cursor);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.filter_value(app.active_filter).len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filter_value(app.active_filter).len();
            }
            KeyCode::Char(c) => {
                let cursor = app.cursor_position;
                app.active_filter_value_mut().insert(cursor, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_export_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => {
                let filename = app.get_export_filename();
                let result = CsvExporter::export_jobs(&app.jobs.state().items, &filename);
                app.set_export_result(result);
            }
            KeyCode::Esc => {
                app.cancel_filename_input();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    app.filename_input.remove(app.cursor_position - 1);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                if app.cursor_position < app.filename_input.len() {
                    app.filename_input.remove(app.cursor_position);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.filename_input.len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.filename_input.len();
            }
            KeyCode::Char(c) => {
                app.filename_input.insert(app.cursor_position, c);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_register_mode(app: &mut App, api: &ApiClient, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('p') = key {
                app.form.toggle_password_visibility();
            }
            return;
        }

        match key {
            KeyCode::Enter => {
                let client = api.clone();
                app.submit_registration(move |request| client.register_user(&request));
            }
            KeyCode::Esc => {
                app.enter_home();
            }
            KeyCode::Tab | KeyCode::Down => {
                app.active_field = app.active_field.next();
                app.cursor_position = app.form.field(app.active_field).len();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.active_field = app.active_field.previous();
                app.cursor_position = app.form.field(app.active_field).len();
            }
            KeyCode::Backspace => {
                if app.cursor_position > 0 {
                    let mut value = app.form.field(app.active_field).to_string();
                    value.remove(app.cursor_position - 1);
                    app.form.set_field(app.active_field, value);
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Delete => {
                let mut value = app.form.field(app.active_field).to_string();
                if app.cursor_position < value.len() {
                    value.remove(app.cursor_position);
                    app.form.set_field(app.active_field, value);
                }
            }
            KeyCode::Left => {
                if app.cursor_position > 0 {
                    app.cursor_position -= 1;
                }
            }
            KeyCode::Right => {
                if app.cursor_position < app.form.field(app.active_field).len() {
                    app.cursor_position += 1;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.form.field(app.active_field).len();
            }
            KeyCode::Char(c) => {
                let mut value = app.form.field(app.active_field).to_string();
                value.insert(app.cursor_position, c);
                app.form.set_field(app.active_field, value);
                app.cursor_position += 1;
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Browse;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{AppMode, FilterField, FormField};

    fn api() -> ApiClient {
        ApiClient::new("http://localhost:0")
    }

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, &api(), key, KeyModifiers::NONE);
    }

    fn ctrl(app: &mut App, c: char) {
        InputHandler::handle_key_event(app, &api(), KeyCode::Char(c), KeyModifiers::CONTROL);
    }

    #[test]
    fn test_filter_entry_key_flow() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.mode, AppMode::Filter);

        for c in "rust".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.filter_value(FilterField::Search), "rust");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_filter, FilterField::Location);
        press(&mut app, KeyCode::Char('X'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.filter_value(FilterField::Location), "");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, AppMode::Browse);
        assert_eq!(app.status_message.as_deref(), Some("Searching for jobs: rust"));
    }

    #[test]
    fn test_register_screen_key_flow() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.mode, AppMode::Register);
        assert_eq!(app.active_field, FormField::Name);

        for c in "Jo".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.form.field(FormField::Name), "Jo");
        assert!(app.form.validity().name);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_field, FormField::Email);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active_field, FormField::Name);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Browse);
    }

    #[test]
    fn test_password_visibility_key_binding() {
        let mut app = App::default();
        app.enter_register();
        assert!(!app.form.show_password());

        ctrl(&mut app, 'p');
        assert!(app.form.show_password());
        ctrl(&mut app, 'p');
        assert!(!app.form.show_password());
    }

    #[test]
    fn test_submit_key_with_short_password_sets_message_without_dispatch() {
        let mut app = App::default();
        app.enter_register();
        app.form.set_field(FormField::Name, "Jo".to_string());
        app.form.set_field(FormField::Email, "jo@x.com".to_string());
        app.form.set_field(FormField::Password, "ab".to_string());
        app.form.set_field(FormField::ConfirmPassword, "ab".to_string());

        press(&mut app, KeyCode::Enter);
        assert!(!app.registration_in_flight());
        assert_eq!(
            app.form.submit_message(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn test_csv_export_key_binding() {
        let mut app = App::default();
        ctrl(&mut app, 'e');
        assert_eq!(app.mode, AppMode::ExportCsv);
        assert_eq!(app.filename_input, "jobs.csv");

        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.filename_input, "jobs.csvx");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.filename_input, "jobs.csv");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Browse);
        assert!(app.filename_input.is_empty());
    }

    #[test]
    fn test_carousel_keys_pause_autoplay() {
        let mut app = App::default();
        assert!(app.carousel.autoplay_enabled());

        press(&mut app, KeyCode::Right);
        assert_eq!(app.carousel.active_index(), 1);
        assert!(!app.carousel.autoplay_enabled());

        press(&mut app, KeyCode::Left);
        assert_eq!(app.carousel.active_index(), 0);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.carousel.active_index(), 2);
    }

    #[test]
    fn test_help_key_binding() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.mode, AppMode::Help);

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.help_scroll, 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Browse);
    }
}
