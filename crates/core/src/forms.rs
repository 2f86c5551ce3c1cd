use std::fmt;

use thiserror::Error;
use url::Url;

use crate::model::{Difficulty, Profile, UserType};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_MESSAGE_LEN: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Subject,
    Message,
    Headline,
    PortfolioUrl,
}

impl Field {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm password",
            Self::Subject => "Subject",
            Self::Message => "Message",
            Self::Headline => "Headline",
            Self::PortfolioUrl => "Portfolio URL",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("is required")]
    Required,
    #[error("is not a valid email address")]
    InvalidEmail,
    #[error("must be at least 8 characters")]
    PasswordTooShort,
    #[error("does not match")]
    Mismatch,
    #[error("is too long")]
    TooLong,
    #[error("is not a valid URL")]
    InvalidUrl,
}

/// Every field-level problem found in one submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(Field, FieldError)>,
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = self
            .errors
            .iter()
            .map(|(field, err)| format!("{} {err}", field.label()))
            .collect::<Vec<_>>();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for FormErrors {}

impl FormErrors {
    fn push(&mut self, field: Field, error: FieldError) {
        self.errors.push((field, error));
    }

    fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, err)| *err)
    }

    /// Inline message for a field, e.g. "Email is required".
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|err| format!("{} {err}", field.label()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn check_required(errors: &mut FormErrors, field: Field, value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(field, FieldError::Required);
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_email(errors: &mut FormErrors, value: &str) -> Option<String> {
    let email = check_required(errors, Field::Email, value)?;
    if is_plausible_email(&email) {
        Some(email.to_lowercase())
    } else {
        errors.push(Field::Email, FieldError::InvalidEmail);
        None
    }
}

/// One `@`, a non-empty local part, and a dotted domain without spaces.
#[must_use]
pub fn is_plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

//
// ─── LOGIN ─────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Default)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    /// # Errors
    ///
    /// Returns `FormErrors` listing every missing or malformed field.
    pub fn validate(self) -> Result<LoginForm, FormErrors> {
        let mut errors = FormErrors::default();
        let email = check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.push(Field::Password, FieldError::Required);
        }
        errors.into_result(()).map(|()| LoginForm {
            email: email.unwrap_or_default(),
            password: self.password,
        })
    }
}

//
// ─── SIGNUP ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Default)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub user_type: UserType,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

impl SignupForm {
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
        }
    }
}

impl SignupDraft {
    /// # Errors
    ///
    /// Returns `FormErrors` listing every missing or malformed field.
    pub fn validate(self) -> Result<SignupForm, FormErrors> {
        let mut errors = FormErrors::default();
        let name = check_required(&mut errors, Field::Name, &self.name);
        let email = check_email(&mut errors, &self.email);
        if self.password.is_empty() {
            errors.push(Field::Password, FieldError::Required);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(Field::Password, FieldError::PasswordTooShort);
        }
        if self.confirm_password != self.password {
            errors.push(Field::ConfirmPassword, FieldError::Mismatch);
        }
        errors.into_result(()).map(|()| SignupForm {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: self.password,
            user_type: self.user_type,
        })
    }
}

//
// ─── CONTACT ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactDraft {
    /// # Errors
    ///
    /// Returns `FormErrors` listing every missing or malformed field.
    pub fn validate(self) -> Result<ContactForm, FormErrors> {
        let mut errors = FormErrors::default();
        let name = check_required(&mut errors, Field::Name, &self.name);
        let email = check_email(&mut errors, &self.email);
        let message = check_required(&mut errors, Field::Message, &self.message);
        if message
            .as_deref()
            .is_some_and(|m| m.chars().count() > MAX_MESSAGE_LEN)
        {
            errors.push(Field::Message, FieldError::TooLong);
        }
        errors.into_result(()).map(|()| ContactForm {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            subject: normalize_optional(self.subject),
            message: message.unwrap_or_default(),
        })
    }
}

//
// ─── ONBOARDING ────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, Default)]
pub struct OnboardingDraft {
    pub headline: String,
    pub target_level: Option<Difficulty>,
    pub portfolio_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OnboardingForm {
    pub headline: String,
    pub target_level: Difficulty,
    pub portfolio_url: Option<Url>,
}

impl OnboardingDraft {
    /// # Errors
    ///
    /// Returns `FormErrors` if the headline is missing or the portfolio URL is malformed.
    pub fn validate(self) -> Result<OnboardingForm, FormErrors> {
        let mut errors = FormErrors::default();
        let headline = check_required(&mut errors, Field::Headline, &self.headline);
        let portfolio_url = match normalize_optional(self.portfolio_url) {
            Some(raw) => match Url::parse(&raw) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
                _ => {
                    errors.push(Field::PortfolioUrl, FieldError::InvalidUrl);
                    None
                }
            },
            None => None,
        };
        errors.into_result(()).map(|()| OnboardingForm {
            headline: headline.unwrap_or_default(),
            target_level: self.target_level.unwrap_or(Difficulty::Medium),
            portfolio_url,
        })
    }
}
