use serde::{Deserialize, Serialize};

use crate::model::UserId;

/// Which side of the marketplace a signed-in user is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Candidate,
    Interviewer,
}

impl UserType {
    /// Parse the persisted form. Anything other than `"interviewer"` is a candidate.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("interviewer") => Self::Interviewer,
            _ => Self::Candidate,
        }
    }

    /// The persisted form; candidates are stored as an absent key.
    #[must_use]
    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            Self::Candidate => None,
            Self::Interviewer => Some("interviewer"),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Candidate => "Candidate",
            Self::Interviewer => "Interviewer",
        }
    }
}

/// Free-text profile fields cached client side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Profile {
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or("there")
    }
}

/// Client-visible session state assembled from the session store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionRecord {
    pub access_token: Option<String>,
    pub user_id: Option<UserId>,
    pub user_type: UserType,
    pub needs_onboarding: bool,
    pub has_job_openings: bool,
    pub profile: Profile,
}

impl SessionRecord {
    /// A session is authenticated when it carries a non-empty token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }

    #[must_use]
    pub fn is_interviewer(&self) -> bool {
        self.user_type == UserType::Interviewer
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_token_is_not_authenticated() {
        let record = SessionRecord {
            access_token: Some("   ".into()),
            ..SessionRecord::default()
        };
        assert!(!record.is_authenticated());
    }

    #[test]
    fn absent_user_type_means_candidate() {
        assert_eq!(UserType::from_stored(None), UserType::Candidate);
        assert_eq!(UserType::from_stored(Some("admin")), UserType::Candidate);
        assert_eq!(
            UserType::from_stored(Some("interviewer")),
            UserType::Interviewer
        );
    }
}
