//! Authentication session
//!
//! An explicit, owned session object. It is created when the app starts,
//! dropped when the app exits, and consulted on every protected screen
//! transition. Nothing is persisted; closing the app logs out.

/// Current authentication state
#[derive(Debug, Default)]
pub struct Session {
    email: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a user is logged in
    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }

    /// Mark the session authenticated for `email`
    pub fn login(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    /// Clear the session
    pub fn logout(&mut self) {
        self.email = None;
    }

    /// Email of the logged-in user, if any
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unauthenticated_and_clears_on_logout() {
        let mut session = Session::new();
        assert!(!session.is_authenticated());

        session.login("admin@crew.local");
        assert!(session.is_authenticated());
        assert_eq!(session.email(), Some("admin@crew.local"));

        session.logout();
        assert!(!session.is_authenticated());
        assert_eq!(session.email(), None);
    }
}
