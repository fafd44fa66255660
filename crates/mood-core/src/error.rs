//! Error taxonomy. Nothing here is fatal: every variant degrades to a
//! locally-scoped UI state (import-form message, default substitution, or an
//! empty chart).

use thiserror::Error;

/// Errors raised while fetching or decoding a dataset.
///
/// Surfaced on the import form; the user recovers by retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    /// The HTTP fetch itself failed (network, CORS, non-2xx).
    #[error("there was a problem while fetching your data: {0}")]
    Fetch(String),

    /// The remote service rejected the download code.
    #[error("your data code was not recognised")]
    BadCode,

    /// The response body was not a valid export.
    #[error("your data could not be read: {0}")]
    Parse(String),
}

impl DataError {
    /// Message shown in the import form's error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Fetch(_) => {
                "There was a problem while fetching your data. Maybe try again?".into()
            }
            Self::BadCode => {
                "The service didn't recognise your data code. Please check it.".into()
            }
            Self::Parse(_) => "Sorry, something went wrong reading your data.".into(),
        }
    }
}

/// An unrecognised category or feeling value in a constraint set.
///
/// Recovered locally by substituting a documented default; never surfaced to
/// the user and never aborts the operation it occurred in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised {field} value: {value:?}")]
pub struct InvalidConstraint {
    pub field: &'static str,
    pub value: String,
}

impl InvalidConstraint {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_message_suggests_retry() {
        let err = DataError::Fetch("timeout".into());
        assert!(err.user_message().contains("try again"));
    }

    #[test]
    fn bad_code_message_mentions_the_code() {
        assert!(DataError::BadCode.user_message().contains("data code"));
    }
}
