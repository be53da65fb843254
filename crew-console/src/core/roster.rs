//! Employee roster controller
//!
//! Owns the cached employee collection and everything derived from it: the
//! filtered visible subset, the selection, the dashboard summary, and every
//! mutating operation. Consistency contract: the cache is invalidated by a
//! full reload after every write; the optimistic status toggle is the only
//! local cache write, and it still resyncs afterwards.

use crew_client::{ClientError, ClientResult, HttpClient};
use shared::models::{Employee, Gender};
use std::collections::BTreeSet;

/// Pure view predicate over the cached collection
///
/// `search` matches case-insensitively as a substring of the name; gender
/// and status are exact matches, or pass-through when unset. Applying the
/// predicates never mutates the source collection, and the result does not
/// depend on the order the three are checked in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterFilter {
    pub search: String,
    pub gender: Option<Gender>,
    pub active: Option<bool>,
}

impl RosterFilter {
    pub fn is_unset(&self) -> bool {
        self.search.is_empty() && self.gender.is_none() && self.active.is_none()
    }

    pub fn matches(&self, emp: &Employee) -> bool {
        if !self.search.is_empty()
            && !emp
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        if self.gender.is_some_and(|g| emp.gender != g) {
            return false;
        }
        if self.active.is_some_and(|a| emp.active != a) {
            return false;
        }
        true
    }

    /// The visible subset of `employees`
    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Dashboard counts derived from the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl Summary {
    pub fn of(employees: &[Employee]) -> Self {
        let total = employees.len();
        let active = employees.iter().filter(|e| e.active).count();
        Self {
            total,
            active,
            inactive: total - active,
        }
    }
}

/// Cached employee collection plus view state
pub struct Roster {
    client: HttpClient,
    cache: Vec<Employee>,
    filter: RosterFilter,
    selection: BTreeSet<i64>,
}

impl Roster {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            cache: Vec::new(),
            filter: RosterFilter::default(),
            selection: BTreeSet::new(),
        }
    }

    /// Fetch the full collection and replace the local cache.
    ///
    /// Re-invoked after every mutating operation; the backend is the source
    /// of truth, nothing is merged client-side.
    pub async fn load(&mut self) -> ClientResult<()> {
        self.cache = self.client.list_employees().await?;
        self.prune_selection();
        Ok(())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.cache
    }

    pub fn get(&self, id: i64) -> Option<&Employee> {
        self.cache.iter().find(|e| e.id == id)
    }

    pub fn filter(&self) -> &RosterFilter {
        &self.filter
    }

    /// Replace the filter; the selection is pruned to the new visible set
    /// so bulk actions can never touch rows the user cannot see.
    pub fn set_filter(&mut self, filter: RosterFilter) {
        self.filter = filter;
        self.prune_selection();
    }

    /// The currently visible (filtered) subset
    pub fn visible(&self) -> Vec<&Employee> {
        self.filter.apply(&self.cache)
    }

    pub fn visible_ids(&self) -> Vec<i64> {
        self.visible().iter().map(|e| e.id).collect()
    }

    pub fn summary(&self) -> Summary {
        Summary::of(&self.cache)
    }

    // ========== Selection ==========

    pub fn selection(&self) -> &BTreeSet<i64> {
        &self.selection
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.selection.contains(&id)
    }

    /// Toggle selection of a visible row; ids outside the visible set are ignored
    pub fn toggle_select(&mut self, id: i64) {
        if !self.visible_ids().contains(&id) {
            return;
        }
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    /// Select every currently visible row
    pub fn select_all(&mut self) {
        self.selection = self.visible_ids().into_iter().collect();
    }

    pub fn select_none(&mut self) {
        self.selection.clear();
    }

    fn prune_selection(&mut self) {
        let visible: BTreeSet<i64> = self.visible_ids().into_iter().collect();
        self.selection.retain(|id| visible.contains(id));
    }

    // ========== Mutations ==========

    /// Optimistically flip `active` for one record.
    ///
    /// The cache snapshot is taken before the local flip and restored
    /// verbatim when the PUT fails; the backend is resynced in every case.
    pub async fn toggle_status(&mut self, id: i64) -> ClientResult<()> {
        let snapshot = self.cache.clone();
        let flipped = match self.cache.iter_mut().find(|e| e.id == id) {
            Some(emp) => {
                emp.active = !emp.active;
                emp.clone()
            }
            None => {
                return Err(ClientError::NotFound(format!(
                    "employee {id} is not in the cached collection"
                )));
            }
        };

        let result = self.client.update_employee(&flipped).await.map(|_| ());
        if let Err(e) = &result {
            tracing::warn!(id, error = %e, "status toggle failed, rolling back");
            self.cache = snapshot;
        }

        let resync = self.load().await;
        result?;
        resync
    }

    /// Delete one record, then resync
    pub async fn delete(&mut self, id: i64) -> ClientResult<()> {
        let result = self.client.delete_employee(id).await;
        if let Err(e) = &result {
            tracing::warn!(id, error = %e, "delete failed");
        }
        let resync = self.load().await;
        result?;
        resync
    }

    /// Delete several records with one concurrent DELETE per id.
    ///
    /// All requests are awaited before the resync, so the reload reflects
    /// whatever subset actually succeeded; the first error is surfaced.
    pub async fn bulk_delete(&mut self, ids: &[i64]) -> ClientResult<usize> {
        let results =
            futures::future::join_all(ids.iter().map(|id| self.client.delete_employee(*id))).await;
        self.selection.clear();

        let resync = self.load().await;

        let mut deleted = 0;
        let mut first_error = None;
        for (id, result) in ids.iter().zip(results) {
            match result {
                Ok(()) => deleted += 1,
                Err(e) => {
                    tracing::warn!(id, error = %e, "bulk delete member failed");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }
        resync?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn emp(id: i64, name: &str, gender: Gender, active: bool) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            gender,
            dob: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            state: "Kerala".to_string(),
            active,
            image: None,
        }
    }

    fn collection() -> Vec<Employee> {
        vec![
            emp(1, "Anna", Gender::Female, true),
            emp(2, "Bob", Gender::Male, false),
            emp(3, "Annette", Gender::Female, true),
        ]
    }

    #[test]
    fn search_matches_case_insensitive_substrings() {
        let employees = collection();
        let filter = RosterFilter {
            search: "ann".to_string(),
            ..Default::default()
        };
        let names: Vec<&str> = filter
            .apply(&employees)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Anna", "Annette"]);
    }

    #[test]
    fn unset_predicates_pass_everything_through() {
        let employees = collection();
        assert_eq!(RosterFilter::default().apply(&employees).len(), 3);
    }

    #[test]
    fn predicates_compose_independently_of_order() {
        let employees = collection();
        let combined = RosterFilter {
            search: "ann".to_string(),
            gender: Some(Gender::Female),
            active: Some(true),
        };
        let all_at_once = combined.apply(&employees);

        // Same subset as applying each predicate on its own, sequentially,
        // in a different order.
        let status_only = RosterFilter {
            active: Some(true),
            ..Default::default()
        };
        let gender_only = RosterFilter {
            gender: Some(Gender::Female),
            ..Default::default()
        };
        let search_only = RosterFilter {
            search: "ann".to_string(),
            ..Default::default()
        };
        let sequential: Vec<&Employee> = employees
            .iter()
            .filter(|e| status_only.matches(e))
            .filter(|e| gender_only.matches(e))
            .filter(|e| search_only.matches(e))
            .collect();

        assert_eq!(all_at_once, sequential);
    }

    #[test]
    fn filtering_is_idempotent() {
        let employees = collection();
        let filter = RosterFilter {
            search: "ann".to_string(),
            ..Default::default()
        };
        let once: Vec<Employee> = filter.apply(&employees).into_iter().cloned().collect();
        let twice: Vec<Employee> = filter.apply(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn summary_counts_total_active_inactive() {
        let employees = vec![
            emp(1, "Anna", Gender::Female, true),
            emp(2, "Bob", Gender::Male, false),
        ];
        let summary = Summary::of(&employees);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.inactive, 1);
    }
}
