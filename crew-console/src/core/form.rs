//! Employee form state machine
//!
//! The form is either closed (no instance exists) or open in create or edit
//! mode. Opening it for a different record while already open resets the
//! draft to that record and clears prior errors. Validation reports every
//! violated field together; the backend is only contacted when the draft is
//! clean.

use crew_client::{ClientResult, HttpClient};
use shared::models::{Employee, EmployeeDraft, FieldErrors, portrait};
use std::path::Path;

/// Create a new record or replace an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// An open employee form
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeForm {
    pub mode: FormMode,
    pub draft: EmployeeDraft,
    pub errors: FieldErrors,
    pub submitting: bool,
}

impl EmployeeForm {
    /// Open in create mode with empty defaults (new employees start active)
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: EmployeeDraft {
                active: true,
                ..Default::default()
            },
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    /// Open in edit mode, pre-populated from the record
    pub fn edit(employee: &Employee) -> Self {
        Self {
            mode: FormMode::Edit(employee.id),
            draft: EmployeeDraft::from_employee(employee),
            errors: FieldErrors::default(),
            submitting: false,
        }
    }

    /// Re-target an already-open form at a different record.
    ///
    /// The draft is reset to the record's values and prior validation
    /// errors are cleared.
    pub fn reset_to(&mut self, employee: &Employee) {
        *self = Self::edit(employee);
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Clear the error for one field once the user edits it
    pub fn clear_error(&mut self, field: &'static str) {
        self.errors.fields.remove(field);
    }

    /// Attach a portrait from a local file.
    ///
    /// On rejection (unreadable file, wrong format, over the size cap) the
    /// field error is recorded and any previously attached image stays.
    pub fn attach_image(&mut self, path: &Path) {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                self.errors
                    .fields
                    .insert("image", format!("Cannot read file: {e}"));
                return;
            }
        };
        match portrait::encode(&bytes) {
            Ok(data_url) => {
                self.draft.image = Some(data_url);
                self.clear_error("image");
            }
            Err(e) => {
                self.errors.fields.insert("image", e.to_string());
            }
        }
    }

    pub fn remove_image(&mut self) {
        self.draft.image = None;
        self.clear_error("image");
    }

    /// Validate and submit the draft.
    ///
    /// `Ok(None)` means validation failed and the field errors were
    /// recorded; nothing was sent. `Ok(Some(_))` is the saved record as
    /// echoed by the backend. `Err` is a transport/backend failure: the
    /// form stays open with the entered data intact.
    pub async fn submit(&mut self, client: &HttpClient) -> ClientResult<Option<Employee>> {
        let payload = match self.draft.validate() {
            Ok(payload) => {
                self.errors = FieldErrors::default();
                payload
            }
            Err(errors) => {
                self.errors = errors;
                return Ok(None);
            }
        };

        self.submitting = true;
        let result = match self.mode {
            FormMode::Create => client.create_employee(&payload).await,
            FormMode::Edit(id) => client.update_employee(&payload.with_id(id)).await,
        };
        self.submitting = false;

        result.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::models::Gender;

    fn employee(id: i64, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            gender: Gender::Male,
            dob: NaiveDate::from_ymd_opt(1985, 5, 5).unwrap(),
            state: "Punjab".to_string(),
            active: true,
            image: None,
        }
    }

    #[test]
    fn create_mode_starts_active_with_empty_fields() {
        let form = EmployeeForm::create();
        assert_eq!(form.mode, FormMode::Create);
        assert!(form.draft.active);
        assert!(form.draft.name.is_empty());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn retargeting_resets_draft_and_clears_errors() {
        let mut form = EmployeeForm::edit(&employee(1, "Anna"));
        form.draft.name.clear();
        form.errors.fields.insert("name", "Full Name is required".to_string());

        form.reset_to(&employee(2, "Bob"));
        assert_eq!(form.mode, FormMode::Edit(2));
        assert_eq!(form.draft.name, "Bob");
        assert!(form.errors.is_empty());
    }

    #[test]
    fn rejected_image_keeps_the_previous_one() {
        let mut form = EmployeeForm::create();
        form.draft.image = Some("data:image/png;base64,previous".to_string());

        // A text file is not an accepted image.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-an-image.txt");
        std::fs::write(&path, b"hello").unwrap();
        form.attach_image(&path);

        assert!(form.errors.get("image").is_some());
        assert_eq!(
            form.draft.image.as_deref(),
            Some("data:image/png;base64,previous")
        );
    }

    #[test]
    fn missing_file_is_a_field_error() {
        let mut form = EmployeeForm::create();
        form.attach_image(Path::new("/no/such/file.png"));
        assert!(form.errors.get("image").unwrap().contains("Cannot read"));
    }
}
