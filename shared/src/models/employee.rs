//! Employee model and form validation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use super::portrait;

/// States selectable on the employee form (fixed 28-entry list)
pub const STATES: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

/// Employee gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Employee record as stored by the backend
///
/// `id` is server-assigned and stable; updates always PUT the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub state: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Create payload (no id yet, the backend assigns one)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub gender: Gender,
    pub dob: NaiveDate,
    pub state: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewEmployee {
    /// Attach the server-assigned id to produce a full record
    pub fn with_id(self, id: i64) -> Employee {
        Employee {
            id,
            name: self.name,
            gender: self.gender,
            dob: self.dob,
            state: self.state,
            active: self.active,
            image: self.image,
        }
    }
}

/// Per-field validation errors, all fields reported together
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", fields.len())]
pub struct FieldErrors {
    /// field name -> message, ordered for stable display
    pub fields: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    fn put(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }
}

/// Raw form contents before validation
///
/// Fields hold whatever the user typed; `validate` turns a draft into a
/// submission payload or reports every violated field at once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub gender: Option<Gender>,
    /// Date of birth as entered, `YYYY-MM-DD`
    pub dob: String,
    pub state: Option<String>,
    pub active: bool,
    /// Validated data URL, if a portrait is attached
    pub image: Option<String>,
}

impl EmployeeDraft {
    /// Pre-populate a draft from an existing record (edit mode)
    pub fn from_employee(emp: &Employee) -> Self {
        Self {
            name: emp.name.clone(),
            gender: Some(emp.gender),
            dob: emp.dob.format("%Y-%m-%d").to_string(),
            state: Some(emp.state.clone()),
            active: emp.active,
            image: emp.image.clone(),
        }
    }

    /// Validate against today's date (see [`validate_at`](Self::validate_at))
    pub fn validate(&self) -> Result<NewEmployee, FieldErrors> {
        self.validate_at(chrono::Local::now().date_naive())
    }

    /// Validate every field and report all violations together.
    ///
    /// Rules:
    /// - name: required, trimmed length >= 2 (the output carries the trimmed name)
    /// - gender: required
    /// - dob: required, parseable, not strictly after `today`
    /// - state: required, member of [`STATES`]
    /// - image: when present, an accepted format within the size cap
    pub fn validate_at(&self, today: NaiveDate) -> Result<NewEmployee, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.put("name", "Full Name is required");
        } else if name.chars().count() < 2 {
            errors.put("name", "Full Name must be at least 2 characters");
        }

        if self.gender.is_none() {
            errors.put("gender", "Gender is required");
        }

        let mut dob = None;
        if self.dob.is_empty() {
            errors.put("dob", "Date of Birth is required");
        } else {
            match NaiveDate::parse_from_str(&self.dob, "%Y-%m-%d") {
                Ok(date) if date > today => {
                    errors.put("dob", "Date of Birth cannot be in the future");
                }
                Ok(date) => dob = Some(date),
                Err(_) => errors.put("dob", "Date of Birth must be a valid YYYY-MM-DD date"),
            }
        }

        match &self.state {
            None => errors.put("state", "State is required"),
            Some(state) if !STATES.contains(&state.as_str()) => {
                errors.put("state", "State must be one of the listed states");
            }
            Some(_) => {}
        }

        if let Some(image) = &self.image {
            if let Err(e) = portrait::decode(image) {
                errors.put("image", e.to_string());
            }
        }

        match (self.gender, dob, &self.state) {
            (Some(gender), Some(dob), Some(state)) if errors.is_empty() => Ok(NewEmployee {
                name: name.to_string(),
                gender,
                dob,
                state: state.clone(),
                active: self.active,
                image: self.image.clone(),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    fn valid_draft() -> EmployeeDraft {
        EmployeeDraft {
            name: "Anna Kumari".to_string(),
            gender: Some(Gender::Female),
            dob: "1994-06-02".to_string(),
            state: Some("Kerala".to_string()),
            active: true,
            image: None,
        }
    }

    #[test]
    fn accepts_a_valid_draft() {
        let emp = valid_draft().validate_at(today()).unwrap();
        assert_eq!(emp.name, "Anna Kumari");
        assert_eq!(emp.dob, NaiveDate::from_ymd_opt(1994, 6, 2).unwrap());
    }

    #[test]
    fn trims_the_name_on_acceptance() {
        let mut draft = valid_draft();
        draft.name = "  Anna Kumari  ".to_string();
        let emp = draft.validate_at(today()).unwrap();
        assert_eq!(emp.name, "Anna Kumari");
    }

    #[test]
    fn single_character_name_is_rejected() {
        let mut draft = valid_draft();
        draft.name = "A".to_string();
        let errors = draft.validate_at(today()).unwrap_err();
        assert_eq!(errors.fields.len(), 1);
        assert!(errors.get("name").unwrap().contains("at least 2"));
    }

    #[test]
    fn dob_today_is_accepted_tomorrow_is_not() {
        let mut draft = valid_draft();
        draft.dob = today().format("%Y-%m-%d").to_string();
        assert!(draft.validate_at(today()).is_ok());

        draft.dob = today()
            .checked_add_days(Days::new(1))
            .unwrap()
            .format("%Y-%m-%d")
            .to_string();
        let errors = draft.validate_at(today()).unwrap_err();
        assert!(errors.get("dob").unwrap().contains("future"));
    }

    #[test]
    fn reports_every_violated_field_together() {
        let draft = EmployeeDraft {
            name: " ".to_string(),
            gender: None,
            dob: "not-a-date".to_string(),
            state: Some("Atlantis".to_string()),
            active: false,
            image: None,
        };
        let errors = draft.validate_at(today()).unwrap_err();
        assert_eq!(
            errors.fields.keys().copied().collect::<Vec<_>>(),
            vec!["dob", "gender", "name", "state"]
        );
    }

    #[test]
    fn rejects_an_image_that_is_not_a_data_url() {
        let mut draft = valid_draft();
        draft.image = Some("https://example.com/pic.png".to_string());
        let errors = draft.validate_at(today()).unwrap_err();
        assert!(errors.get("image").is_some());
    }

    #[test]
    fn edit_round_trip_preserves_every_field() {
        let original = Employee {
            id: 7,
            name: "Bob Verma".to_string(),
            gender: Gender::Male,
            dob: NaiveDate::from_ymd_opt(1988, 1, 30).unwrap(),
            state: "Goa".to_string(),
            active: false,
            image: None,
        };
        let resubmitted = EmployeeDraft::from_employee(&original)
            .validate_at(today())
            .unwrap()
            .with_id(original.id);
        assert_eq!(resubmitted, original);
    }

    #[test]
    fn employee_json_shape_matches_the_backend_contract() {
        let emp = Employee {
            id: 1,
            name: "Anna".to_string(),
            gender: Gender::Female,
            dob: NaiveDate::from_ymd_opt(1990, 12, 1).unwrap(),
            state: "Punjab".to_string(),
            active: true,
            image: None,
        };
        let json = serde_json::to_value(&emp).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "name": "Anna",
                "gender": "Female",
                "dob": "1990-12-01",
                "state": "Punjab",
                "active": true
            })
        );
    }
}
