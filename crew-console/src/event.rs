//! Keyboard handling

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::time::Duration;
use tui_input::backend::crossterm::EventHandler;

use crate::app::{App, FormField, LoginField, Overlay, Screen};

/// Poll for terminal events with a timeout
pub fn poll_event(timeout_ms: u64) -> anyhow::Result<Option<Event>> {
    if event::poll(Duration::from_millis(timeout_ms))? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Route one terminal event into the application
pub async fn handle_event(app: &mut App, event: Event) -> anyhow::Result<()> {
    let Event::Key(key) = event else {
        return Ok(());
    };
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    // Overlays swallow input before the screen underneath sees it.
    match app.overlay.clone() {
        Some(Overlay::Message { .. }) => {
            // A message shown over an open form (failed save) returns to the
            // form; the entered draft is kept.
            app.overlay = if app.form.is_some() {
                Some(Overlay::Form)
            } else {
                None
            };
            return Ok(());
        }
        Some(Overlay::ConfirmDelete(id)) => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    app.overlay = None;
                    app.delete(id).await;
                }
                KeyCode::Char('n') | KeyCode::Esc => app.overlay = None,
                _ => {}
            }
            return Ok(());
        }
        Some(Overlay::ConfirmBulkDelete(_)) => {
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    app.overlay = None;
                    app.bulk_delete().await;
                }
                KeyCode::Char('n') | KeyCode::Esc => app.overlay = None,
                _ => {}
            }
            return Ok(());
        }
        Some(Overlay::Form) => {
            handle_form(app, key).await;
            return Ok(());
        }
        None => {}
    }

    match app.screen {
        Screen::Login => handle_login(app, key).await,
        Screen::Dashboard => handle_dashboard(app, key).await,
        Screen::Employees => handle_employees(app, key).await,
    }
    Ok(())
}

async fn handle_login(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            app.login_focus = match app.login_focus {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }
        KeyCode::Enter => app.login().await,
        KeyCode::Esc => app.should_quit = true,
        _ => {
            let input = match app.login_focus {
                LoginField::Email => &mut app.email_input,
                LoginField::Password => &mut app.password_input,
            };
            input.handle_event(&Event::Key(key));
        }
    }
}

async fn handle_dashboard(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('e') | KeyCode::Enter => app.open_employees(),
        KeyCode::Char('r') => app.refresh_dashboard().await,
        KeyCode::Char('l') => app.logout(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

async fn handle_employees(app: &mut App, key: KeyEvent) {
    if app.search_focused {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.search_focused = false,
            _ => {
                app.search_input.handle_event(&Event::Key(key));
                app.apply_filters();
            }
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Char('g') => app.cycle_gender_filter(),
        KeyCode::Char('s') => app.cycle_status_filter(),
        KeyCode::Char('x') => app.reset_filters(),
        KeyCode::Char(' ') => {
            if let Some(id) = app.id_at_cursor() {
                app.roster.toggle_select(id);
            }
        }
        KeyCode::Char('a') => app.roster.select_all(),
        KeyCode::Char('A') => app.roster.select_none(),
        KeyCode::Char('t') => app.toggle_status_at_cursor().await,
        KeyCode::Char('c') => app.open_create_form(),
        KeyCode::Char('e') | KeyCode::Enter => app.open_edit_form(),
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.id_at_cursor() {
                app.overlay = Some(Overlay::ConfirmDelete(id));
            }
        }
        KeyCode::Char('D') => {
            let selected = app.roster.selection().len();
            if selected > 0 {
                app.overlay = Some(Overlay::ConfirmBulkDelete(selected));
            }
        }
        KeyCode::Char('p') => app.export_print_view(),
        KeyCode::Char('r') => app.open_employees(),
        KeyCode::Char('l') => app.logout(),
        KeyCode::Esc => app.goto(Screen::Dashboard),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

async fn handle_form(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_form();
            return;
        }
        KeyCode::Tab => {
            app.form_focus = app.form_focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.form_focus = app.form_focus.prev();
            return;
        }
        _ => {}
    }

    match app.form_focus {
        FormField::Name => edit_text_field(app, key, FormField::Name).await,
        FormField::Dob => edit_text_field(app, key, FormField::Dob).await,
        FormField::Gender => match key.code {
            KeyCode::Left => app.cycle_form_gender(false),
            KeyCode::Right | KeyCode::Char(' ') => app.cycle_form_gender(true),
            KeyCode::Enter => app.submit_form().await,
            _ => {}
        },
        FormField::State => match key.code {
            KeyCode::Left => app.cycle_form_state(false),
            KeyCode::Right | KeyCode::Char(' ') => app.cycle_form_state(true),
            KeyCode::Enter => app.submit_form().await,
            _ => {}
        },
        FormField::Image => match key.code {
            // Enter attaches the file named in the path input; a rejected
            // image records a field error and keeps the previous one.
            KeyCode::Enter => app.attach_image_from_input(),
            KeyCode::Char('x') if app.image_input.value().is_empty() => {
                if let Some(form) = &mut app.form {
                    form.remove_image();
                }
            }
            _ => {
                app.image_input.handle_event(&Event::Key(key));
            }
        },
        FormField::Active => match key.code {
            KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                if let Some(form) = &mut app.form {
                    form.draft.active = !form.draft.active;
                }
            }
            KeyCode::Enter => app.submit_form().await,
            _ => {}
        },
    }
}

/// Character-level editing for the name and dob draft fields
async fn edit_text_field(app: &mut App, key: KeyEvent, field: FormField) {
    match key.code {
        KeyCode::Enter => {
            app.submit_form().await;
            return;
        }
        _ => {}
    }

    let Some(form) = &mut app.form else { return };
    let error_key = match field {
        FormField::Name => "name",
        FormField::Dob => "dob",
        _ => return,
    };

    match key.code {
        KeyCode::Char(c) => {
            match field {
                FormField::Name => form.draft.name.push(c),
                FormField::Dob => form.draft.dob.push(c),
                _ => {}
            }
            form.clear_error(error_key);
        }
        KeyCode::Backspace => {
            match field {
                FormField::Name => {
                    form.draft.name.pop();
                }
                FormField::Dob => {
                    form.draft.dob.pop();
                }
                _ => {}
            }
            form.clear_error(error_key);
        }
        _ => {}
    }
}
