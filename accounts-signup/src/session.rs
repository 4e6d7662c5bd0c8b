use std::sync::{Arc, Mutex};

/// Email and password carried over from another screen, read once when
/// the sign-up form loads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default)]
struct SessionData {
    prefill_email: Option<String>,
    prefill_password: Option<String>,
    signup_rejected: bool,
}

/// Handle on browsing-session state shared between screens. Clones
/// point at the same storage; the session outlives any single screen
/// and is dropped (or [`clear`](Self::clear)ed) on session reset.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    data: Arc<Mutex<SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prefill(&self) -> Prefill {
        let data = self.data.lock().expect("poisoned");
        Prefill {
            email: data.prefill_email.clone(),
            password: data.prefill_password.clone(),
        }
    }

    pub fn set_prefill_email(&self, email: impl Into<String>) {
        self.data.lock().expect("poisoned").prefill_email = Some(email.into());
    }

    pub fn set_prefill_password(&self, password: impl Into<String>) {
        self.data.lock().expect("poisoned").prefill_password = Some(password.into());
    }

    /// Whether this session was already told it cannot create an
    /// account.
    pub fn signup_rejected(&self) -> bool {
        self.data.lock().expect("poisoned").signup_rejected
    }

    pub fn set_signup_rejected(&self) {
        self.data.lock().expect("poisoned").signup_rejected = true;
    }

    /// Wipes everything, prefill and rejection marker alike. Invoked
    /// by the surrounding app on explicit session reset, never by the
    /// sign-up flow.
    pub fn clear(&self) {
        *self.data.lock().expect("poisoned") = SessionData::default();
    }
}
