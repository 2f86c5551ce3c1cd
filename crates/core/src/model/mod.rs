mod ids;
mod interview;
mod job;
mod preferences;
mod problem;
mod report;
mod session;

pub use ids::{JobId, ParseIdError, ProblemId, UserId};

pub use interview::{
    ChatMessage, CompletedInterview, Employer, EndReason, InterviewConfig, MediaError, Modality,
    Speaker,
};
pub use job::{CandidateJudgment, HiringDecision, JobCategory, JobIntake, JobPosting, Seniority};
pub use preferences::{CookieConsent, FontChoice};
pub use problem::{Attempt, Difficulty, Problem, ProblemHistory, ProblemStatus};
pub use report::{Report, ReportError, SkillScore};
pub use session::{Profile, SessionRecord, UserType};
