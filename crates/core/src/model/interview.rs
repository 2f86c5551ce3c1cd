use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Difficulty;

/// How the mock interview is conducted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    #[default]
    Video,
    Audio,
    Chat,
}

impl Modality {
    pub const ALL: [Self; 3] = [Self::Video, Self::Audio, Self::Chat];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio only",
            Self::Chat => "Chat",
        }
    }

    #[must_use]
    pub fn needs_camera(self) -> bool {
        matches!(self, Self::Video)
    }

    #[must_use]
    pub fn needs_microphone(self) -> bool {
        matches!(self, Self::Video | Self::Audio)
    }

    #[must_use]
    pub fn needs_media(self) -> bool {
        self.needs_camera() || self.needs_microphone()
    }
}

/// Target employer offered by the setup step, with the defaults it implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Employer {
    pub slug: &'static str,
    pub name: &'static str,
    pub default_difficulty: Difficulty,
    pub default_duration_minutes: u32,
    pub default_modality: Modality,
}

/// Value object produced by the setup step. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewConfig {
    pub employer: Employer,
    pub difficulty: Difficulty,
    pub duration_minutes: u32,
    pub modality: Modality,
    pub camera_enabled: bool,
    pub mic_enabled: bool,
}

impl InterviewConfig {
    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_minutes.saturating_mul(60)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    Interviewer,
    Candidate,
}

impl Speaker {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Interviewer => "Interviewer",
            Self::Candidate => "You",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
    /// Seconds since the interview started.
    pub at_secs: u32,
}

/// Camera/microphone acquisition failure, keyed by the browser's error name.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MediaError {
    #[error("Camera or microphone access was denied. Allow access in your browser settings and retry.")]
    NotAllowed,
    #[error("No camera or microphone was found. Connect a device and retry.")]
    NotFound,
    #[error("Your camera or microphone is already in use by another application.")]
    NotReadable,
    #[error("Your device does not support the requested media settings.")]
    Overconstrained,
    #[error("Media access is blocked on insecure pages.")]
    Security,
    #[error("Media access was interrupted. Please retry.")]
    Aborted,
    #[error("Could not access camera or microphone: {0}")]
    Other(String),
}

impl MediaError {
    /// Map a `DOMException` name to its error.
    #[must_use]
    pub fn from_browser_name(name: &str) -> Self {
        match name.trim() {
            "NotAllowedError" | "PermissionDeniedError" => Self::NotAllowed,
            "NotFoundError" | "DevicesNotFoundError" => Self::NotFound,
            "NotReadableError" | "TrackStartError" => Self::NotReadable,
            "OverconstrainedError" | "ConstraintNotSatisfiedError" => Self::Overconstrained,
            "SecurityError" => Self::Security,
            "AbortError" => Self::Aborted,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Why an interview left the active stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    TimerExpired,
    UserEnded,
}

/// A finished interview, handed to the report provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletedInterview {
    pub config: InterviewConfig,
    pub reason: EndReason,
    pub elapsed_secs: u32,
    pub transcript: Vec<ChatMessage>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl CompletedInterview {
    #[must_use]
    pub fn candidate_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.transcript
            .iter()
            .filter(|message| message.speaker == Speaker::Candidate)
    }
}
