//! Canned explanation generation.
//!
//! Stands in for a generative AI call; deliberately synchronous and
//! deterministic. A real service client would hang off the generate intent
//! in the controller without changing this contract.

use shared::domain::Connection;

/// Builds the personalized explanation for `subject` addressed to
/// `connection`. Embeds the name, subject, and persona verbatim; identical
/// inputs always produce identical output.
pub fn generate(subject: &str, connection: &Connection) -> String {
    format!(
        "Hey {}, Imagine explaining {} to a {}. Here's how I would do it...",
        connection.name, subject, connection.persona
    )
}
