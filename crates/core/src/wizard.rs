//! Interview wizard: Setup → Active → Summary.
//!
//! The flow is strictly linear. Setup collects an [`InterviewConfig`]; Active
//! runs a countdown and records the conversation; Summary holds the
//! [`CompletedInterview`] until the user restarts.
//!
//! The countdown is driven from outside through [`InterviewWizard::tick`].
//! Every entry into Active starts a new timer epoch, and ticks carrying an
//! older epoch are ignored.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{
    ChatMessage, CompletedInterview, Difficulty, Employer, EndReason, InterviewConfig, MediaError,
    Modality, Speaker,
};
use crate::time::Clock;

pub const MIN_DURATION_MINUTES: u32 = 5;
pub const MAX_DURATION_MINUTES: u32 = 120;
const MAX_MESSAGE_CHARS: usize = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WizardStage {
    Setup,
    Active,
    Summary,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WizardError {
    #[error("choose an employer to continue")]
    MissingEmployer,

    #[error("upload your resume to continue")]
    ResumeNotAcknowledged,

    #[error("interview length must be between 5 and 120 minutes")]
    InvalidDuration,

    #[error("message cannot be empty")]
    EmptyMessage,

    #[error("message is too long")]
    MessageTooLong,

    #[error("not available while the interview is in {actual:?}")]
    WrongStage { actual: WizardStage },
}

//
// ─── SETUP ─────────────────────────────────────────────────────────────────────
//

/// Choices made on the setup step. Unset options derive from the employer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupDraft {
    employer: Option<Employer>,
    resume_acknowledged: bool,
    difficulty: Option<Difficulty>,
    duration_minutes: Option<u32>,
    modality: Option<Modality>,
}

impl SetupDraft {
    #[must_use]
    pub fn employer(&self) -> Option<&Employer> {
        self.employer.as_ref()
    }

    #[must_use]
    pub fn resume_acknowledged(&self) -> bool {
        self.resume_acknowledged
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
            .or_else(|| self.employer.as_ref().map(|e| e.default_difficulty))
    }

    #[must_use]
    pub fn duration_minutes(&self) -> Option<u32> {
        self.duration_minutes
            .or_else(|| self.employer.as_ref().map(|e| e.default_duration_minutes))
    }

    #[must_use]
    pub fn modality(&self) -> Option<Modality> {
        self.modality
            .or_else(|| self.employer.as_ref().map(|e| e.default_modality))
    }

    /// True when `advance` would succeed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.config().is_ok()
    }

    /// Resolve the draft into a configuration.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MissingEmployer` or `WizardError::ResumeNotAcknowledged`
    /// when the prerequisites are not met.
    pub fn config(&self) -> Result<InterviewConfig, WizardError> {
        let employer = self.employer.clone().ok_or(WizardError::MissingEmployer)?;
        if !self.resume_acknowledged {
            return Err(WizardError::ResumeNotAcknowledged);
        }
        let difficulty = self.difficulty.unwrap_or(employer.default_difficulty);
        let duration_minutes = self
            .duration_minutes
            .unwrap_or(employer.default_duration_minutes);
        let modality = self.modality.unwrap_or(employer.default_modality);

        Ok(InterviewConfig {
            employer,
            difficulty,
            duration_minutes,
            modality,
            camera_enabled: modality.needs_camera(),
            mic_enabled: modality.needs_microphone(),
        })
    }
}

//
// ─── ACTIVE ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaState {
    /// The modality needs no devices.
    NotRequired,
    /// Acquisition has been requested and not answered yet.
    Pending,
    Granted,
    Denied(MediaError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveInterview {
    config: InterviewConfig,
    remaining_secs: u32,
    mic_on: bool,
    camera_on: bool,
    media: MediaState,
    transcript: Vec<ChatMessage>,
    started_at: DateTime<Utc>,
    epoch: u64,
}

impl ActiveInterview {
    #[must_use]
    pub fn config(&self) -> &InterviewConfig {
        &self.config
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.config.duration_secs().saturating_sub(self.remaining_secs)
    }

    #[must_use]
    pub fn mic_on(&self) -> bool {
        self.mic_on
    }

    #[must_use]
    pub fn camera_on(&self) -> bool {
        self.camera_on
    }

    #[must_use]
    pub fn media(&self) -> &MediaState {
        &self.media
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn questions_asked(&self) -> usize {
        self.transcript
            .iter()
            .filter(|m| m.speaker == Speaker::Interviewer)
            .count()
    }

    fn push(&mut self, speaker: Speaker, text: String) {
        let at_secs = self.elapsed_secs();
        self.transcript.push(ChatMessage {
            speaker,
            text,
            at_secs,
        });
    }
}

//
// ─── STATE MACHINE ─────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WizardState {
    Setup(SetupDraft),
    Active(ActiveInterview),
    Summary(CompletedInterview),
}

impl WizardState {
    #[must_use]
    pub fn stage(&self) -> WizardStage {
        match self {
            Self::Setup(_) => WizardStage::Setup,
            Self::Active(_) => WizardStage::Active,
            Self::Summary(_) => WizardStage::Summary,
        }
    }
}

/// What a timer tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not active, or the tick came from a stale timer.
    Ignored,
    Running { remaining_secs: u32 },
    /// The countdown hit zero and the wizard moved to Summary.
    Expired,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewWizard {
    state: WizardState,
    clock: Clock,
    epoch: u64,
}

impl InterviewWizard {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            state: WizardState::Setup(SetupDraft::default()),
            clock,
            epoch: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    #[must_use]
    pub fn stage(&self) -> WizardStage {
        self.state.stage()
    }

    #[must_use]
    pub fn setup(&self) -> Option<&SetupDraft> {
        match &self.state {
            WizardState::Setup(draft) => Some(draft),
            _ => None,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveInterview> {
        match &self.state {
            WizardState::Active(active) => Some(active),
            _ => None,
        }
    }

    #[must_use]
    pub fn completed(&self) -> Option<&CompletedInterview> {
        match &self.state {
            WizardState::Summary(done) => Some(done),
            _ => None,
        }
    }

    /// Epoch of the running countdown, if any.
    #[must_use]
    pub fn timer_epoch(&self) -> Option<u64> {
        self.active().map(ActiveInterview::epoch)
    }

    fn wrong_stage(&self) -> WizardError {
        WizardError::WrongStage {
            actual: self.stage(),
        }
    }

    fn setup_mut(&mut self) -> Result<&mut SetupDraft, WizardError> {
        let actual = self.stage();
        match &mut self.state {
            WizardState::Setup(draft) => Ok(draft),
            _ => Err(WizardError::WrongStage { actual }),
        }
    }

    fn active_mut(&mut self) -> Result<&mut ActiveInterview, WizardError> {
        let actual = self.stage();
        match &mut self.state {
            WizardState::Active(active) => Ok(active),
            _ => Err(WizardError::WrongStage { actual }),
        }
    }

    // ── Setup ──────────────────────────────────────────────────────────────

    /// Pick the target employer. Clears overrides so defaults follow the new employer.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Setup.
    pub fn select_employer(&mut self, employer: Option<Employer>) -> Result<(), WizardError> {
        let draft = self.setup_mut()?;
        draft.employer = employer;
        draft.difficulty = None;
        draft.duration_minutes = None;
        draft.modality = None;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Setup.
    pub fn acknowledge_resume(&mut self, acknowledged: bool) -> Result<(), WizardError> {
        self.setup_mut()?.resume_acknowledged = acknowledged;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Setup.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<(), WizardError> {
        self.setup_mut()?.difficulty = Some(difficulty);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::InvalidDuration` outside the allowed range, or
    /// `WizardError::WrongStage` outside Setup.
    pub fn set_duration(&mut self, minutes: u32) -> Result<(), WizardError> {
        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&minutes) {
            return Err(WizardError::InvalidDuration);
        }
        self.setup_mut()?.duration_minutes = Some(minutes);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Setup.
    pub fn set_modality(&mut self, modality: Modality) -> Result<(), WizardError> {
        self.setup_mut()?.modality = Some(modality);
        Ok(())
    }

    /// Move from Setup to Active.
    ///
    /// A refused transition leaves the wizard untouched.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::MissingEmployer` / `ResumeNotAcknowledged` when the
    /// setup is incomplete, or `WizardError::WrongStage` outside Setup.
    pub fn advance(&mut self) -> Result<&ActiveInterview, WizardError> {
        let WizardState::Setup(draft) = &self.state else {
            return Err(self.wrong_stage());
        };
        let config = draft.config()?;

        self.epoch = self.epoch.wrapping_add(1);
        let media = if config.modality.needs_media() {
            MediaState::Pending
        } else {
            MediaState::NotRequired
        };
        let active = ActiveInterview {
            remaining_secs: config.duration_secs(),
            mic_on: config.mic_enabled,
            camera_on: config.camera_enabled,
            media,
            transcript: Vec::new(),
            started_at: self.clock.now(),
            epoch: self.epoch,
            config,
        };
        self.state = WizardState::Active(active);
        self.active().ok_or(WizardError::WrongStage {
            actual: WizardStage::Setup,
        })
    }

    // ── Active ─────────────────────────────────────────────────────────────

    /// Advance the countdown by one second.
    ///
    /// Reaching zero moves to Summary exactly once; later ticks are ignored.
    pub fn tick(&mut self, epoch: u64) -> TickOutcome {
        let Ok(active) = self.active_mut() else {
            return TickOutcome::Ignored;
        };
        if active.epoch != epoch {
            return TickOutcome::Ignored;
        }
        active.remaining_secs = active.remaining_secs.saturating_sub(1);
        if active.remaining_secs > 0 {
            return TickOutcome::Running {
                remaining_secs: active.remaining_secs,
            };
        }
        self.finish(EndReason::TimerExpired);
        TickOutcome::Expired
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Active.
    pub fn toggle_mic(&mut self) -> Result<bool, WizardError> {
        let active = self.active_mut()?;
        active.mic_on = !active.mic_on;
        Ok(active.mic_on)
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Active.
    pub fn toggle_camera(&mut self) -> Result<bool, WizardError> {
        let active = self.active_mut()?;
        active.camera_on = !active.camera_on;
        Ok(active.camera_on)
    }

    /// Record a candidate chat message.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::EmptyMessage` / `MessageTooLong` for bad input, or
    /// `WizardError::WrongStage` outside Active.
    pub fn send_message(&mut self, text: &str) -> Result<(), WizardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(WizardError::EmptyMessage);
        }
        if text.chars().count() > MAX_MESSAGE_CHARS {
            return Err(WizardError::MessageTooLong);
        }
        self.active_mut()?.push(Speaker::Candidate, text.to_string());
        Ok(())
    }

    /// Record an interviewer question.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Active.
    pub fn ask(&mut self, question: &str) -> Result<(), WizardError> {
        self.active_mut()?
            .push(Speaker::Interviewer, question.trim().to_string());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Active.
    pub fn media_granted(&mut self) -> Result<(), WizardError> {
        let active = self.active_mut()?;
        if active.media != MediaState::NotRequired {
            active.media = MediaState::Granted;
        }
        Ok(())
    }

    /// Record a failed acquisition. Devices are switched off until a retry succeeds.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Active.
    pub fn media_denied(&mut self, error: MediaError) -> Result<(), WizardError> {
        let active = self.active_mut()?;
        if active.media != MediaState::NotRequired {
            active.media = MediaState::Denied(error);
            active.mic_on = false;
            active.camera_on = false;
        }
        Ok(())
    }

    /// Put a denied acquisition back to pending. Returns whether a retry was queued.
    pub fn retry_media(&mut self) -> bool {
        let Ok(active) = self.active_mut() else {
            return false;
        };
        if !matches!(active.media, MediaState::Denied(_)) {
            return false;
        }
        active.media = MediaState::Pending;
        active.mic_on = active.config.mic_enabled;
        active.camera_on = active.config.camera_enabled;
        true
    }

    /// End the interview early.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Active.
    pub fn end(&mut self) -> Result<(), WizardError> {
        self.active_mut()?;
        self.finish(EndReason::UserEnded);
        Ok(())
    }

    fn finish(&mut self, reason: EndReason) {
        let WizardState::Active(active) = &self.state else {
            return;
        };
        let completed = CompletedInterview {
            elapsed_secs: active.elapsed_secs(),
            config: active.config.clone(),
            reason,
            transcript: active.transcript.clone(),
            started_at: active.started_at,
            completed_at: self.clock.now(),
        };
        self.state = WizardState::Summary(completed);
    }

    // ── Summary ────────────────────────────────────────────────────────────

    /// Start over with an empty setup.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::WrongStage` outside Summary.
    pub fn restart(&mut self) -> Result<(), WizardError> {
        if self.stage() != WizardStage::Summary {
            return Err(self.wrong_stage());
        }
        self.state = WizardState::Setup(SetupDraft::default());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_clock;

    fn employer(modality: Modality, minutes: u32) -> Employer {
        Employer {
            slug: "acme",
            name: "Acme",
            default_difficulty: Difficulty::Medium,
            default_duration_minutes: minutes,
            default_modality: modality,
        }
    }

    fn ready_wizard(modality: Modality) -> InterviewWizard {
        let mut wizard = InterviewWizard::new(fixed_clock());
        wizard.select_employer(Some(employer(modality, 5))).unwrap();
        wizard.acknowledge_resume(true).unwrap();
        wizard
    }

    #[test]
    fn advance_without_employer_stays_in_setup() {
        let mut wizard = InterviewWizard::new(fixed_clock());
        wizard.acknowledge_resume(true).unwrap();
        let before = wizard.clone();

        for _ in 0..3 {
            assert_eq!(wizard.advance().unwrap_err(), WizardError::MissingEmployer);
            assert_eq!(wizard, before);
        }
    }

    #[test]
    fn advance_requires_resume() {
        let mut wizard = InterviewWizard::new(fixed_clock());
        wizard
            .select_employer(Some(employer(Modality::Chat, 30)))
            .unwrap();
        assert_eq!(
            wizard.advance().unwrap_err(),
            WizardError::ResumeNotAcknowledged
        );
        assert_eq!(wizard.stage(), WizardStage::Setup);
    }

    #[test]
    fn advance_transitions_exactly_once() {
        let mut wizard = ready_wizard(Modality::Chat);
        let active = wizard.advance().unwrap();
        assert_eq!(active.remaining_secs(), 300);
        assert_eq!(wizard.stage(), WizardStage::Active);

        assert!(matches!(
            wizard.advance(),
            Err(WizardError::WrongStage {
                actual: WizardStage::Active
            })
        ));
        assert_eq!(wizard.timer_epoch(), Some(1));
    }

    #[test]
    fn defaults_follow_employer_until_overridden() {
        let mut wizard = InterviewWizard::new(fixed_clock());
        wizard
            .select_employer(Some(employer(Modality::Audio, 45)))
            .unwrap();
        wizard.set_duration(20).unwrap();
        let draft = wizard.setup().unwrap();
        assert_eq!(draft.duration_minutes(), Some(20));
        assert_eq!(draft.modality(), Some(Modality::Audio));

        wizard
            .select_employer(Some(employer(Modality::Video, 60)))
            .unwrap();
        assert_eq!(wizard.setup().unwrap().duration_minutes(), Some(60));
        assert_eq!(wizard.set_duration(1), Err(WizardError::InvalidDuration));
    }

    #[test]
    fn countdown_expires_once() {
        let mut wizard = ready_wizard(Modality::Chat);
        wizard.advance().unwrap();
        let epoch = wizard.timer_epoch().unwrap();

        let mut expirations = 0;
        for _ in 0..400 {
            if wizard.tick(epoch) == TickOutcome::Expired {
                expirations += 1;
            }
        }
        assert_eq!(expirations, 1);
        let done = wizard.completed().unwrap();
        assert_eq!(done.reason, EndReason::TimerExpired);
        assert_eq!(done.elapsed_secs, 300);
    }

    #[test]
    fn stale_epoch_ticks_are_ignored() {
        let mut wizard = ready_wizard(Modality::Chat);
        wizard.advance().unwrap();
        let first = wizard.timer_epoch().unwrap();
        wizard.end().unwrap();
        wizard.restart().unwrap();
        wizard
            .select_employer(Some(employer(Modality::Chat, 5)))
            .unwrap();
        wizard.acknowledge_resume(true).unwrap();
        wizard.advance().unwrap();

        assert_eq!(wizard.tick(first), TickOutcome::Ignored);
        assert_eq!(wizard.active().unwrap().remaining_secs(), 300);
        let current = wizard.timer_epoch().unwrap();
        assert_eq!(
            wizard.tick(current),
            TickOutcome::Running { remaining_secs: 299 }
        );
    }

    #[test]
    fn user_actions_do_not_change_stage() {
        let mut wizard = ready_wizard(Modality::Video);
        wizard.advance().unwrap();
        assert!(!wizard.toggle_mic().unwrap());
        assert!(!wizard.toggle_camera().unwrap());
        wizard.ask("Tell me about yourself.").unwrap();
        wizard.send_message("I build compilers.").unwrap();
        assert_eq!(wizard.send_message("   "), Err(WizardError::EmptyMessage));
        assert_eq!(wizard.stage(), WizardStage::Active);
        assert_eq!(wizard.active().unwrap().transcript().len(), 2);
        assert_eq!(wizard.active().unwrap().questions_asked(), 1);
    }

    #[test]
    fn media_denial_allows_manual_retry() {
        let mut wizard = ready_wizard(Modality::Video);
        wizard.advance().unwrap();
        assert_eq!(wizard.active().unwrap().media(), &MediaState::Pending);

        wizard.media_denied(MediaError::NotAllowed).unwrap();
        let active = wizard.active().unwrap();
        assert_eq!(active.media(), &MediaState::Denied(MediaError::NotAllowed));
        assert!(!active.mic_on());

        assert!(wizard.retry_media());
        assert!(!wizard.retry_media());
        wizard.media_granted().unwrap();
        assert_eq!(wizard.active().unwrap().media(), &MediaState::Granted);
    }

    #[test]
    fn chat_needs_no_media() {
        let mut wizard = ready_wizard(Modality::Chat);
        wizard.advance().unwrap();
        wizard.media_denied(MediaError::NotFound).unwrap();
        assert_eq!(wizard.active().unwrap().media(), &MediaState::NotRequired);
    }

    #[test]
    fn restart_clears_configuration() {
        let mut wizard = ready_wizard(Modality::Chat);
        assert!(wizard.restart().is_err());
        wizard.advance().unwrap();
        wizard.end().unwrap();
        assert_eq!(wizard.completed().unwrap().reason, EndReason::UserEnded);

        wizard.restart().unwrap();
        assert_eq!(wizard.setup(), Some(&SetupDraft::default()));
        assert_eq!(wizard.timer_epoch(), None);
    }
}
