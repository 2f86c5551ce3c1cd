//! Shared error types for the services crate.

use thiserror::Error;

use mockview_core::forms::FormErrors;
use mockview_core::model::ReportError as ReportBuildError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `SessionStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error("could not encode {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `AuthService` and auth providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Invalid(#[from] FormErrors),
    #[error("invalid email or password")]
    Rejected,
    #[error("an account with this email already exists")]
    AlreadyRegistered,
    #[error("you need to be signed in")]
    NotSignedIn,
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("problem {0} not found")]
    UnknownProblem(u64),
    #[error(transparent)]
    Store(#[from] SessionStoreError),
}

/// Errors emitted by `ContactService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContactError {
    #[error(transparent)]
    Invalid(#[from] FormErrors),
}

/// Errors emitted by report providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    #[error(transparent)]
    Build(#[from] ReportBuildError),
}

/// Errors emitted by `CodeExecutionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodeExecutionError {
    #[error("code execution is not configured")]
    Disabled,
    #[error("source code is empty")]
    EmptySource,
    #[error("code execution request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
