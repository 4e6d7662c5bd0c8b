//! Age gate for account creation.

use chrono::Datelike;

use crate::session::SessionStore;

/// Minimum age, in years, allowed to create an account.
pub const MIN_SIGNUP_AGE: i32 = 14;

/// Current calendar year, UTC.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Age in whole calendar years. Month and day are ignored: the form
/// only asks for a year of birth.
pub fn compute_age(birth_year: i32, now_year: i32) -> i32 {
    now_year - birth_year
}

pub fn is_eligible(age: i32) -> bool {
    age >= MIN_SIGNUP_AGE
}

/// Marks the session if `age` is below the minimum, so the next visit
/// to the sign-up entry point redirects without asking again. Returns
/// whether a rejection was recorded. An eligible age leaves any
/// earlier marker untouched: only an explicit session reset clears it.
pub fn record_rejection_if_ineligible(session: &SessionStore, age: i32) -> bool {
    if is_eligible(age) {
        return false;
    }
    session.set_signup_rejected();
    true
}

/// Whether this session was already rejected. Consulted before the
/// form is shown at all.
pub fn rejection_recorded(session: &SessionStore) -> bool {
    session.signup_rejected()
}
