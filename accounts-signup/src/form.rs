use crate::validation;

pub const EMAIL_INVALID_MESSAGE: &str = "Valid email required";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "Must be at least 8 characters long";
pub const BIRTH_YEAR_REQUIRED_MESSAGE: &str = "Year of birth required";

/// Identifies a form field in validation results and telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Email,
    Password,
    Age,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::Age => "age",
        }
    }
}

/// Raw input of one sign-up attempt. Rebuilt from the form on every
/// submit, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormPayload {
    pub email: String,
    pub password: String,
    pub birth_year: Option<i32>,
}

impl FormPayload {
    /// Whitespace around the email is a paste artifact, not part of
    /// the address, so it is trimmed here. The password is kept as is.
    pub fn new(email: &str, password: &str, birth_year: Option<i32>) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.to_string(),
            birth_year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid {
        field: FieldId,
        message: &'static str,
    },
}

/// Checks the whole payload, reporting the first failing field only.
/// The order matches the form layout: email, then password, then year
/// of birth. A missing year fails the age field like a malformed one.
pub fn validate(payload: &FormPayload, now_year: i32) -> ValidationResult {
    if !validation::email_is_valid(&payload.email) {
        return ValidationResult::Invalid {
            field: FieldId::Email,
            message: EMAIL_INVALID_MESSAGE,
        };
    }
    if !validation::password_is_valid(&payload.password) {
        return ValidationResult::Invalid {
            field: FieldId::Password,
            message: PASSWORD_TOO_SHORT_MESSAGE,
        };
    }
    match payload.birth_year {
        Some(year) if validation::birth_year_is_valid(year, now_year) => ValidationResult::Valid,
        _ => ValidationResult::Invalid {
            field: FieldId::Age,
            message: BIRTH_YEAR_REQUIRED_MESSAGE,
        },
    }
}

pub fn is_valid(payload: &FormPayload, now_year: i32) -> bool {
    matches!(validate(payload, now_year), ValidationResult::Valid)
}
