//! Credential shape validation for the auth forms.
//!
//! DESIGN
//! ======
//! Per-field rules run independently and every message is collected; the
//! confirm-password cross-check runs only once all per-field rules pass and
//! its failure attaches to the dependent field. Validation never touches
//! storage or the network. Login deliberately checks the email for presence
//! only — the backend is authoritative there — while registration requires a
//! well-shaped address.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_PHONE_LEN: usize = 10;
pub const MAX_PHONE_LEN: usize = 11;

/// Field name → ordered list of human-readable messages.
pub type ValidationErrors = BTreeMap<&'static str, Vec<String>>;

// =============================================================================
// RAW FORMS (wire shapes, camelCase)
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub gender: String,
}

// =============================================================================
// VALIDATED VALUES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub phone_number: String,
    pub date_of_birth: time::Date,
    pub gender: Gender,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "MALE" => Some(Self::Male),
            "FEMALE" => Some(Self::Female),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }
}

// =============================================================================
// FIELD RULES
// =============================================================================

/// Shared email primitive. `require_shape` is the registration-side rule;
/// login checks presence only.
fn email_rules(email: &str, require_shape: bool) -> Vec<String> {
    if email.is_empty() {
        return vec!["email is required".to_owned()];
    }

    let mut messages = Vec::new();
    if require_shape && !is_email_shaped(email) {
        messages.push("email must be a valid address".to_owned());
    }
    messages
}

/// Shared password primitive. Empty is a distinct error from too short.
fn password_rules(password: &str) -> Vec<String> {
    if password.is_empty() {
        return vec!["password is required".to_owned()];
    }

    let mut messages = Vec::new();
    if password.len() < MIN_PASSWORD_LEN {
        messages.push(format!("password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    messages
}

/// Phone numbers are validated by length only, not digit content.
fn phone_rules(phone: &str) -> Vec<String> {
    if phone.is_empty() {
        return vec!["phone number is required".to_owned()];
    }

    let mut messages = Vec::new();
    if phone.len() < MIN_PHONE_LEN || phone.len() > MAX_PHONE_LEN {
        messages.push(format!("phone number must be {MIN_PHONE_LEN} to {MAX_PHONE_LEN} characters"));
    }
    messages
}

fn is_email_shaped(email: &str) -> bool {
    let parts = email.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return false;
    }
    let domain = parts[1];
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Parse `YYYY-MM-DD` into a real calendar date. Shape alone is not enough:
/// Feb 30 must fail.
fn parse_date(raw: &str) -> Option<time::Date> {
    let mut parts = raw.split('-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u8>().ok()?;
    let day = parts.next()?.parse::<u8>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let month = time::Month::try_from(month).ok()?;
    time::Date::from_calendar_date(year, month, day).ok()
}

fn push_field(errors: &mut ValidationErrors, field: &'static str, messages: Vec<String>) {
    if !messages.is_empty() {
        errors.insert(field, messages);
    }
}

// =============================================================================
// FORM VALIDATION
// =============================================================================

impl LoginForm {
    /// Validate into a typed login input, or per-field messages.
    ///
    /// # Errors
    ///
    /// Returns the field → messages map when any rule fails.
    pub fn validate(&self) -> Result<LoginInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        push_field(&mut errors, "email", email_rules(&self.email, false));
        push_field(&mut errors, "password", password_rules(&self.password));

        if errors.is_empty() {
            Ok(LoginInput { email: self.email.clone(), password: self.password.clone() })
        } else {
            Err(errors)
        }
    }
}

impl RegisterForm {
    /// Validate into a typed registration input, or per-field messages.
    ///
    /// # Errors
    ///
    /// Returns the field → messages map when any rule fails. The password
    /// confirmation mismatch is reported against `confirmPassword` and only
    /// when every individual field rule passed.
    pub fn validate(&self) -> Result<RegisterInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.full_name.is_empty() {
            errors.insert("fullName", vec!["full name is required".to_owned()]);
        }
        push_field(&mut errors, "email", email_rules(&self.email, true));
        push_field(&mut errors, "password", password_rules(&self.password));
        push_field(&mut errors, "confirmPassword", password_rules(&self.confirm_password));
        push_field(&mut errors, "phoneNumber", phone_rules(&self.phone_number));

        let date_of_birth = if self.date_of_birth.is_empty() {
            errors.insert("dateOfBirth", vec!["date of birth is required".to_owned()]);
            None
        } else {
            let parsed = parse_date(&self.date_of_birth);
            if parsed.is_none() {
                errors.insert("dateOfBirth", vec!["date of birth must be a valid date".to_owned()]);
            }
            parsed
        };

        let gender = if self.gender.is_empty() {
            errors.insert("gender", vec!["gender is required".to_owned()]);
            None
        } else {
            let parsed = Gender::parse(&self.gender);
            if parsed.is_none() {
                errors.insert("gender", vec!["gender must be one of MALE, FEMALE, OTHER".to_owned()]);
            }
            parsed
        };

        // Cross-field check runs only once every per-field rule has passed.
        if errors.is_empty() && self.password != self.confirm_password {
            errors.insert("confirmPassword", vec!["passwords do not match".to_owned()]);
        }

        match (errors.is_empty(), date_of_birth, gender) {
            (true, Some(date_of_birth), Some(gender)) => Ok(RegisterInput {
                full_name: self.full_name.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
                phone_number: self.phone_number.clone(),
                date_of_birth,
                gender,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
#[path = "validation_test.rs"]
mod tests;
