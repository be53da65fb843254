//! Application state and actions

use crate::core::{EmployeeForm, Roster, RosterFilter, Session, Summary};
use crew_client::HttpClient;
use shared::models::{Employee, Gender, STATES};
use std::path::{Path, PathBuf};
use tui_input::Input;

/// Top-level screens; everything except `Login` is behind the session guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    Employees,
}

/// Modal state drawn on top of the current screen
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Form,
    ConfirmDelete(i64),
    ConfirmBulkDelete(usize),
    Message { text: String, error: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Focusable fields of the employee form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Gender,
    Dob,
    State,
    Image,
    Active,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Gender,
        FormField::Dob,
        FormField::State,
        FormField::Image,
        FormField::Active,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Full Name",
            FormField::Gender => "Gender",
            FormField::Dob => "Date of Birth",
            FormField::State => "State",
            FormField::Image => "Profile Image",
            FormField::Active => "Status",
        }
    }

    pub fn next(&self) -> FormField {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> FormField {
        let i = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The whole application
pub struct App {
    pub client: HttpClient,
    pub session: Session,
    pub roster: Roster,
    pub screen: Screen,
    pub overlay: Option<Overlay>,
    pub should_quit: bool,
    pub export_dir: PathBuf,

    // Login screen
    pub email_input: Input,
    pub password_input: Input,
    pub login_focus: LoginField,
    pub login_error: Option<String>,

    // Dashboard
    pub summary: Option<Summary>,

    // Employees screen
    pub search_input: Input,
    pub search_focused: bool,
    pub gender_filter: Option<Gender>,
    pub status_filter: Option<bool>,
    pub cursor: usize,
    pub loading: bool,
    pub pending_reload: bool,

    // Form
    pub form: Option<EmployeeForm>,
    pub form_focus: FormField,
    pub image_input: Input,
}

impl App {
    pub fn new(client: HttpClient, export_dir: PathBuf) -> Self {
        Self {
            roster: Roster::new(client.clone()),
            client,
            session: Session::new(),
            screen: Screen::Login,
            overlay: None,
            should_quit: false,
            export_dir,
            email_input: Input::default(),
            password_input: Input::default(),
            login_focus: LoginField::Email,
            login_error: None,
            summary: None,
            search_input: Input::default(),
            search_focused: false,
            gender_filter: None,
            status_filter: None,
            cursor: 0,
            loading: false,
            pending_reload: false,
            form: None,
            form_focus: FormField::Name,
            image_input: Input::default(),
        }
    }

    /// Session guard: route every protected navigation through here
    pub fn goto(&mut self, screen: Screen) {
        if screen != Screen::Login && !self.session.is_authenticated() {
            self.screen = Screen::Login;
            return;
        }
        self.screen = screen;
    }

    pub fn show_message(&mut self, text: impl Into<String>) {
        self.overlay = Some(Overlay::Message {
            text: text.into(),
            error: false,
        });
    }

    pub fn show_error(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::error!("{text}");
        self.overlay = Some(Overlay::Message { text, error: true });
    }

    // ========== Auth ==========

    pub async fn login(&mut self) {
        let email = self.email_input.value().to_string();
        let password = self.password_input.value().to_string();
        self.login_error = None;

        match self.client.login(&email, &password).await {
            Ok(true) => {
                self.session.login(email);
                self.password_input.reset();
                self.goto(Screen::Dashboard);
                self.refresh_dashboard().await;
            }
            Ok(false) => {
                self.login_error = Some("Invalid email or password".to_string());
            }
            Err(e) => {
                tracing::error!(error = %e, "login request failed");
                self.login_error = Some("Something went wrong".to_string());
            }
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.email_input.reset();
        self.password_input.reset();
        self.login_focus = LoginField::Email;
        self.overlay = None;
        self.form = None;
        self.goto(Screen::Login);
    }

    // ========== Dashboard ==========

    pub async fn refresh_dashboard(&mut self) {
        match self.roster.load().await {
            Ok(()) => self.summary = Some(self.roster.summary()),
            Err(e) => self.show_error(format!("Failed to load employees: {e}")),
        }
    }

    // ========== Employees ==========

    /// Switch to the employees screen and queue the roster fetch.
    ///
    /// The fetch itself runs in [`run_pending`](Self::run_pending) after the
    /// next draw, so the loading state is on screen while the request is in
    /// flight.
    pub fn open_employees(&mut self) {
        self.goto(Screen::Employees);
        self.loading = true;
        self.pending_reload = true;
    }

    /// Run work deferred until after a draw
    pub async fn run_pending(&mut self) {
        if !self.pending_reload {
            return;
        }
        self.pending_reload = false;
        if let Err(e) = self.roster.load().await {
            self.show_error(format!("Failed to load employees: {e}"));
        }
        self.loading = false;
        self.clamp_cursor();
    }

    /// Recompute the visible subset from the three filter widgets
    pub fn apply_filters(&mut self) {
        self.roster.set_filter(RosterFilter {
            search: self.search_input.value().to_string(),
            gender: self.gender_filter,
            active: self.status_filter,
        });
        self.clamp_cursor();
    }

    pub fn reset_filters(&mut self) {
        self.search_input.reset();
        self.gender_filter = None;
        self.status_filter = None;
        self.apply_filters();
    }

    pub fn cycle_gender_filter(&mut self) {
        self.gender_filter = match self.gender_filter {
            None => Some(Gender::Male),
            Some(Gender::Male) => Some(Gender::Female),
            Some(Gender::Female) => Some(Gender::Other),
            Some(Gender::Other) => None,
        };
        self.apply_filters();
    }

    pub fn cycle_status_filter(&mut self) {
        self.status_filter = match self.status_filter {
            None => Some(true),
            Some(true) => Some(false),
            Some(false) => None,
        };
        self.apply_filters();
    }

    pub fn clamp_cursor(&mut self) {
        let visible = self.roster.visible().len();
        if visible == 0 {
            self.cursor = 0;
        } else if self.cursor >= visible {
            self.cursor = visible - 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let visible = self.roster.visible().len();
        if visible > 0 && self.cursor < visible - 1 {
            self.cursor += 1;
        }
    }

    pub fn employee_at_cursor(&self) -> Option<&Employee> {
        self.roster.visible().get(self.cursor).copied()
    }

    pub fn id_at_cursor(&self) -> Option<i64> {
        self.employee_at_cursor().map(|e| e.id)
    }

    pub async fn toggle_status_at_cursor(&mut self) {
        let Some(id) = self.id_at_cursor() else { return };
        if let Err(e) = self.roster.toggle_status(id).await {
            self.show_error(format!("Failed to update employee status: {e}"));
        }
        self.clamp_cursor();
    }

    /// Confirmed single delete
    pub async fn delete(&mut self, id: i64) {
        if let Err(e) = self.roster.delete(id).await {
            self.show_error(format!("Failed to delete employee: {e}"));
        }
        self.clamp_cursor();
    }

    /// Confirmed bulk delete of the current selection
    pub async fn bulk_delete(&mut self) {
        let ids: Vec<i64> = self.roster.selection().iter().copied().collect();
        if ids.is_empty() {
            return;
        }
        match self.roster.bulk_delete(&ids).await {
            Ok(deleted) => self.show_message(format!("Deleted {deleted} employee(s)")),
            Err(e) => self.show_error(format!("Failed to delete employees: {e}")),
        }
        self.clamp_cursor();
    }

    pub fn export_print_view(&mut self) {
        let visible = self.roster.visible();
        match crate::core::export::write_print_view(&self.export_dir, &visible) {
            Ok(path) => {
                let text = format!("Print view written to {}", path.display());
                self.show_message(text);
            }
            Err(e) => self.show_error(format!("Failed to write print view: {e}")),
        }
    }

    // ========== Form ==========

    pub fn open_create_form(&mut self) {
        self.form = Some(EmployeeForm::create());
        self.form_focus = FormField::Name;
        self.image_input.reset();
        self.overlay = Some(Overlay::Form);
    }

    /// Open the form for a record; if it is already open it is re-targeted
    /// (draft reset, errors cleared).
    pub fn open_edit_form(&mut self) {
        let Some(employee) = self.employee_at_cursor().cloned() else {
            return;
        };
        match &mut self.form {
            Some(form) => form.reset_to(&employee),
            None => self.form = Some(EmployeeForm::edit(&employee)),
        }
        self.form_focus = FormField::Name;
        self.image_input.reset();
        self.overlay = Some(Overlay::Form);
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.overlay = None;
    }

    /// Attach the portrait file named in the image input to the open form
    pub fn attach_image_from_input(&mut self) {
        let path = self.image_input.value().to_string();
        if path.is_empty() {
            return;
        }
        if let Some(form) = &mut self.form {
            form.attach_image(Path::new(&path));
        }
    }

    pub async fn submit_form(&mut self) {
        let Some(form) = &mut self.form else { return };
        match form.submit(&self.client).await {
            Ok(Some(saved)) => {
                tracing::info!(id = saved.id, "employee saved");
                self.close_form();
                if let Err(e) = self.roster.load().await {
                    self.show_error(format!("Failed to reload employees: {e}"));
                }
                self.clamp_cursor();
            }
            // Validation errors recorded on the form; stay open.
            Ok(None) => {}
            Err(e) => self.show_error(format!("Failed to save employee: {e}")),
        }
    }

    /// Cycle the draft gender with Left/Right on the gender field
    pub fn cycle_form_gender(&mut self, forward: bool) {
        if let Some(form) = &mut self.form {
            let current = form
                .draft
                .gender
                .and_then(|g| Gender::ALL.iter().position(|x| *x == g));
            let next = match (current, forward) {
                (None, _) => 0,
                (Some(i), true) => (i + 1) % Gender::ALL.len(),
                (Some(i), false) => (i + Gender::ALL.len() - 1) % Gender::ALL.len(),
            };
            form.draft.gender = Some(Gender::ALL[next]);
            form.clear_error("gender");
        }
    }

    /// Cycle the draft state with Left/Right on the state field
    pub fn cycle_form_state(&mut self, forward: bool) {
        if let Some(form) = &mut self.form {
            let current = form
                .draft
                .state
                .as_deref()
                .and_then(|s| STATES.iter().position(|x| *x == s));
            let next = match (current, forward) {
                (None, _) => 0,
                (Some(i), true) => (i + 1) % STATES.len(),
                (Some(i), false) => (i + STATES.len() - 1) % STATES.len(),
            };
            form.draft.state = Some(STATES[next].to_string());
            form.clear_error("state");
        }
    }
}
