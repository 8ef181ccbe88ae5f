use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rejection reasons for form submissions. The UI maps all of these to a
/// silent no-op that leaves the typed input in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormError {
    #[error("name must not be empty")]
    EmptyName,
    #[error("persona must not be empty")]
    EmptyPersona,
    #[error("subject must not be empty")]
    EmptySubject,
}
