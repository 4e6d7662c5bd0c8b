//! Field-level format checks for the sign-up form.
//!
//! These encode the accounts service's accepted input, not RFC 5321:
//! the service takes addresses up to 256 chars with a domain up to 255,
//! which the RFC would reject. Lengths are counted in chars.

/// Longest accepted local part (before the `@`).
pub const MAX_EMAIL_LOCAL_LEN: usize = 64;
/// Longest accepted domain part (after the `@`).
pub const MAX_EMAIL_DOMAIN_LEN: usize = 255;
/// Longest accepted address overall.
pub const MAX_EMAIL_LEN: usize = 256;
/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 8;
/// Oldest plausible year of birth.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// Whether `value` is an address the accounts service will take:
/// exactly one `@`, local part 1 to 64 chars, domain 1 to 255 chars
/// made of at least two non-empty dot-separated labels, 256 chars in
/// total at most.
pub fn email_is_valid(value: &str) -> bool {
    if value.chars().count() > MAX_EMAIL_LEN || value.chars().any(char::is_whitespace) {
        return false;
    }
    let (local, domain) = match value.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if domain.contains('@') {
        return false;
    }
    if local.is_empty() || local.chars().count() > MAX_EMAIL_LOCAL_LEN {
        return false;
    }
    if domain.is_empty() || domain.chars().count() > MAX_EMAIL_DOMAIN_LEN {
        return false;
    }
    // A routable domain has at least two labels, none of them empty.
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Whether `value` meets the minimum password length.
pub fn password_is_valid(value: &str) -> bool {
    value.chars().count() >= MIN_PASSWORD_LEN
}

/// Whether `year` is a plausible year of birth as of `now_year`.
pub fn birth_year_is_valid(year: i32, now_year: i32) -> bool {
    (MIN_BIRTH_YEAR..=now_year).contains(&year)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a two-label domain of exactly `len` chars.
    fn domain_of_len(len: usize) -> String {
        assert!(len > 4);
        format!("{}.com", "b".repeat(len - 4))
    }

    #[test]
    fn email_shape() {
        assert!(!email_is_valid(""));
        assert!(!email_is_valid("testuser.com"));
        assert!(!email_is_valid("a@b@testuser.com"));
        assert!(!email_is_valid("a b@testuser.com"));
        assert!(email_is_valid("testuser@testuser.com"));
    }

    #[test]
    fn email_local_part_boundaries() {
        assert!(!email_is_valid("@testuser.com"));
        // 64-char local part is the last accepted length
        assert!(email_is_valid(&format!("{}@testuser.com", "a".repeat(64))));
        assert!(!email_is_valid(&format!("{}@testuser.com", "a".repeat(65))));
    }

    #[test]
    fn email_domain_boundaries() {
        assert!(!email_is_valid("a@"));
        // 254-char domain keeps the address within the 256 total
        assert!(email_is_valid(&format!("a@{}", domain_of_len(254))));
        assert!(!email_is_valid(&format!("a@{}", domain_of_len(256))));
    }

    #[test]
    fn email_total_length_boundaries() {
        // 256 chars in total is the last accepted length; with a
        // two-char local part neither the local nor the domain limit
        // is hit, so the total limit decides on its own.
        assert!(email_is_valid(&format!("ab@{}", domain_of_len(253))));
        assert!(!email_is_valid(&format!("ab@{}", domain_of_len(254))));
    }

    #[test]
    fn email_domain_labels() {
        assert!(!email_is_valid("a@b"));
        assert!(email_is_valid("a@b.c"));
        assert!(email_is_valid("a@b.c.d"));
        assert!(!email_is_valid("a@b."));
        assert!(!email_is_valid("a@.b"));
    }

    #[test]
    fn password_length() {
        assert!(!password_is_valid(""));
        assert!(!password_is_valid(&"a".repeat(7)));
        assert!(password_is_valid(&"a".repeat(8)));
    }

    #[test]
    fn birth_year_range() {
        assert!(birth_year_is_valid(1984, 2026));
        assert!(birth_year_is_valid(2026, 2026));
        assert!(birth_year_is_valid(1900, 2026));
        assert!(!birth_year_is_valid(2027, 2026));
        assert!(!birth_year_is_valid(1899, 2026));
        assert!(!birth_year_is_valid(84, 2026));
    }
}
