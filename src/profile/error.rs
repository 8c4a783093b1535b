//! Errors reported by the profile service for write operations

use std::collections::HashMap;
use thiserror::Error;

/// Failure of a profile mutation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The service rejected one or more arguments, keyed by field name
    #[error("Invalid request: {}", describe_invalid_args(.0))]
    InvalidArgs(HashMap<String, String>),
    /// Any other failure (transport, auth, server error)
    #[error("{0}")]
    Generic(String),
}

impl MutationError {
    /// Convenience constructor for a single invalid field
    #[cfg(test)]
    pub fn invalid_arg(field: &str, message: &str) -> Self {
        MutationError::InvalidArgs(HashMap::from([(field.to_string(), message.to_string())]))
    }
}

fn describe_invalid_args(args: &HashMap<String, String>) -> String {
    let mut fields: Vec<_> = args
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect();
    fields.sort();
    fields.join(", ")
}

impl From<tonic::Status> for MutationError {
    fn from(status: tonic::Status) -> Self {
        let message = status.message();
        if message.is_empty() {
            MutationError::Generic(status.code().description().to_string())
        } else {
            MutationError::Generic(message.to_string())
        }
    }
}
