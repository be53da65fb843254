//! In-memory backend state

use chrono::NaiveDate;
use shared::models::{Employee, Gender};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// A user allowed to log in
#[derive(Debug, Clone)]
pub struct UserCredential {
    pub email: String,
    pub password: String,
}

/// Shared in-memory state for the mock backend
pub struct AppState {
    /// Employee collection, keyed by id
    pub employees: RwLock<BTreeMap<i64, Employee>>,
    /// Known users for the login check
    pub users: Vec<UserCredential>,
}

impl AppState {
    /// State with the default dev user and an empty roster
    pub fn new() -> Self {
        Self::with_users(vec![UserCredential {
            email: "admin@crew.local".to_string(),
            password: "admin123".to_string(),
        }])
    }

    pub fn with_users(users: Vec<UserCredential>) -> Self {
        Self {
            employees: RwLock::new(BTreeMap::new()),
            users,
        }
    }

    /// Check a credential pair against the users list
    pub fn authenticate(&self, email: &str, password: &str) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && u.password == password)
    }

    /// Insert a small sample roster (dev convenience behind `--seed`)
    pub async fn seed_employees(&self) {
        let samples = [
            ("Anna Kumari", Gender::Female, (1994, 6, 2), "Kerala", true),
            ("Bob Verma", Gender::Male, (1988, 1, 30), "Goa", true),
            ("Annette Dsouza", Gender::Female, (1991, 11, 17), "Maharashtra", false),
            ("Kiran Rao", Gender::Other, (1999, 3, 8), "Karnataka", true),
        ];

        let mut employees = self.employees.write().await;
        for (name, gender, (y, m, d), state, active) in samples {
            let id = shared::util::snowflake_id();
            employees.insert(
                id,
                Employee {
                    id,
                    name: name.to_string(),
                    gender,
                    dob: NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
                    state: state.to_string(),
                    active,
                    image: None,
                },
            );
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
