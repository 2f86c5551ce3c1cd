/// Reading font picked on the settings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontChoice {
    #[default]
    System,
    Serif,
    Mono,
    Dyslexic,
}

impl FontChoice {
    pub const ALL: [Self; 4] = [Self::System, Self::Serif, Self::Mono, Self::Dyslexic];

    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Serif => "serif",
            Self::Mono => "mono",
            Self::Dyslexic => "dyslexic",
        }
    }

    /// Unknown values fall back to the system font.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|value| {
            Self::ALL
                .into_iter()
                .find(|font| font.stored_value() == value.trim())
        })
        .unwrap_or_default()
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System default",
            Self::Serif => "Serif",
            Self::Mono => "Monospace",
            Self::Dyslexic => "OpenDyslexic",
        }
    }

    #[must_use]
    pub fn css_family(self) -> &'static str {
        match self {
            Self::System => "system-ui, sans-serif",
            Self::Serif => "Georgia, serif",
            Self::Mono => "ui-monospace, monospace",
            Self::Dyslexic => "OpenDyslexic, sans-serif",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CookieConsent {
    Accepted,
    Declined,
}

impl CookieConsent {
    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// `None` means the visitor has not decided yet.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            Some("accepted") => Some(Self::Accepted),
            Some("declined") => Some(Self::Declined),
            _ => None,
        }
    }
}
