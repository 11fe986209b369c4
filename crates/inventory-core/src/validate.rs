//! Form Validation
//!
//! Checks run by the login, signup and item forms before they call into
//! [`crate::App`]. Failures are shown inline and never reach app state.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::{Item, ItemFields};

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Login pre-check: both fields present and the password long enough
pub fn validate_login(email: &str, password: &str, min_password_len: usize) -> Result<(), ValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if password.chars().count() < min_password_len {
        return Err(ValidationError::InvalidCredentials);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    /// Every failing rule, in form order
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.name.trim().chars().count() < 2 {
            errors.push(ValidationError::NameTooShort);
        }
        if !is_valid_email(&self.email) {
            errors.push(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < 8 {
            errors.push(ValidationError::PasswordTooShort);
        }
        let has_lower = self.password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = self.password.chars().any(|c| c.is_ascii_uppercase());
        let has_digit = self.password.chars().any(|c| c.is_ascii_digit());
        if !(has_lower && has_upper && has_digit) {
            errors.push(ValidationError::PasswordTooWeak);
        }
        if self.password != self.confirm_password {
            errors.push(ValidationError::PasswordMismatch);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Raw add/edit form input, all text as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ItemForm {
    /// Pre-fill from an existing item for editing
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.clone().unwrap_or_default(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            image_url: item.image_url.clone().unwrap_or_default(),
        }
    }

    /// Turn the form into item fields. Blank optionals become absent.
    pub fn parse(&self) -> Result<ItemFields, Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push(ValidationError::TitleRequired);
        }
        if self.description.trim().is_empty() {
            errors.push(ValidationError::DescriptionRequired);
        }
        let price = match self.price.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(p) if p.is_finite() => Some(p),
                _ => {
                    errors.push(ValidationError::InvalidPrice);
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ItemFields {
            title: self.title.clone(),
            description: self.description.clone(),
            category: non_empty(&self.category),
            price,
            image_url: non_empty(&self.image_url),
        })
    }
}
