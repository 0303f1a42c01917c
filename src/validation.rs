//! Add/edit form validation
//!
//! The store accepts whatever it is given; the form runs these checks first.
//! Every failing field is reported so the form can mark all of them at once.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::employee::{EmployeeDraft, Position};

/// Phone formats accepted by the form: `05357456609`, `0535 745 6609`,
/// `5357456609`, `535 745 6609`, optionally prefixed with `+90 `.
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn phone_regex() -> &'static Regex {
    PHONE_REGEX.get_or_init(|| {
        Regex::new(r"^(?:\+90 ?)?0?5\d{2} ?\d{3} ?\d{2} ?\d{2}$").expect("valid phone regex")
    })
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
    })
}

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    DateOfEmployment,
    DateOfBirth,
    Phone,
    Email,
    Department,
    Position,
}

impl Field {
    /// Same as the serialized name and the label's translation key
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::DateOfEmployment => "dateOfEmployment",
            Field::DateOfBirth => "dateOfBirth",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Department => "department",
            Field::Position => "position",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.key())]
    Required(Field),
    #[error("phone number {0:?} is not in a supported format")]
    InvalidPhone(String),
    #[error("email {0:?} is not a valid address")]
    InvalidEmail(String),
    #[error("position {0:?} is not one of Junior, Mid, Senior")]
    InvalidPosition(String),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidPhone(_) => Field::Phone,
            FieldError::InvalidEmail(_) => Field::Email,
            FieldError::InvalidPosition(_) => Field::Position,
        }
    }

    /// Translation key of the user-facing message
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldError::Required(_) => "validation.required",
            FieldError::InvalidPhone(_) => "validation.phone",
            FieldError::InvalidEmail(_) => "validation.email",
            FieldError::InvalidPosition(_) => "validation.position",
        }
    }
}

/// Raw form values, as read from the inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeForm {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: String,
    pub date_of_birth: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub position: String,
}

impl EmployeeForm {
    /// Check every field, returning a draft without an id on success
    pub fn validate(&self) -> Result<EmployeeDraft, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = required(&self.first_name, Field::FirstName, &mut errors);
        let last_name = required(&self.last_name, Field::LastName, &mut errors);
        let date_of_employment =
            required(&self.date_of_employment, Field::DateOfEmployment, &mut errors);
        let date_of_birth = required(&self.date_of_birth, Field::DateOfBirth, &mut errors);
        let department = required(&self.department, Field::Department, &mut errors);

        let phone = required(&self.phone, Field::Phone, &mut errors);
        if !phone.is_empty() && !phone_regex().is_match(&phone) {
            errors.push(FieldError::InvalidPhone(phone.clone()));
        }

        let email = required(&self.email, Field::Email, &mut errors);
        if !email.is_empty() && !email_regex().is_match(&email) {
            errors.push(FieldError::InvalidEmail(email.clone()));
        }

        let position_raw = required(&self.position, Field::Position, &mut errors);
        let position = if position_raw.is_empty() {
            None
        } else {
            let parsed = Position::from_str(&position_raw);
            if parsed.is_none() {
                errors.push(FieldError::InvalidPosition(position_raw));
            }
            parsed
        };

        match position {
            Some(position) if errors.is_empty() => Ok(EmployeeDraft {
                id: None,
                first_name,
                last_name,
                date_of_employment,
                date_of_birth,
                phone,
                email,
                department,
                position,
            }),
            _ => {
                errors.sort_by_key(|e| e.field() as u8);
                Err(errors)
            }
        }
    }
}

fn required(value: &str, field: Field, errors: &mut Vec<FieldError>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(FieldError::Required(field));
    }
    trimmed.to_string()
}
