#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth;
pub mod catalog_service;
pub mod code_execution;
pub mod config;
pub mod contact;
pub mod data;
pub mod error;
pub mod intake;
pub mod question_bank;
pub mod report;
pub mod session_store;

pub use mockview_core::Clock;

pub use app_services::AppServices;
pub use auth::{AuthGrant, AuthProvider, AuthService, MockAuthProvider};
pub use catalog_service::{CatalogService, JOBS_PAGE_SIZE, PROBLEMS_PAGE_SIZE};
pub use code_execution::{CodeExecutionService, ExecutionOutcome, Language};
pub use config::ServicesConfig;
pub use contact::{ContactReceipt, ContactService};
pub use error::{
    AppServicesError, AuthError, CatalogError, CodeExecutionError, ContactError, ReportError,
    SessionStoreError,
};
pub use intake::IntakeService;
pub use question_bank::{QuestionBank, QuestionQueue};
pub use report::{MockReportProvider, ReportProvider};
pub use session_store::{SessionKey, SessionStore};
