//! Form payload validation: trim, reject empties, emit owned payloads.
//!
//! Required fields that are empty after trimming make the submission a
//! rejected draft; the UI discards it silently and keeps the typed text so
//! the user can correct it. Accepted payloads carry the raw field text
//! (untrimmed), matching permissive form behavior. No uniqueness checks:
//! duplicate names and personas are allowed.

use shared::domain::Connection;
use shared::error::FormError;

/// Payload of a submitted connection form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDraft {
    pub name: String,
    pub persona: String,
}

impl ConnectionDraft {
    pub fn parse(name: &str, persona: &str) -> Result<Self, FormError> {
        if name.trim().is_empty() {
            return Err(FormError::EmptyName);
        }
        if persona.trim().is_empty() {
            return Err(FormError::EmptyPersona);
        }
        Ok(Self {
            name: name.to_string(),
            persona: persona.to_string(),
        })
    }

    /// Materializes the draft as a connection with a fresh id.
    pub fn into_connection(self) -> Connection {
        Connection::new(self.name, self.persona)
    }
}

/// Payload of a submitted subject form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectDraft {
    pub subject: String,
}

impl SubjectDraft {
    pub fn parse(subject: &str) -> Result<Self, FormError> {
        if subject.trim().is_empty() {
            return Err(FormError::EmptySubject);
        }
        Ok(Self {
            subject: subject.to_string(),
        })
    }
}
