mod markdown_vm;
mod problem_vm;
mod report_vm;
mod time_fmt;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use problem_vm::{ProblemRowVm, difficulty_class, map_problem_rows, status_class};
pub use report_vm::{
    ReportVm, SkillRowVm, TranscriptLineVm, map_report, map_transcript, score_band,
};
pub use time_fmt::{format_clock, format_datetime};
