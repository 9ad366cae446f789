//! Error types for the essentials data model

use thiserror::Error;

use crate::example::ExampleTopic;

/// Errors produced while resolving names against the static data tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// No example topic matches the given name
    #[error(
        "Unknown example topic: {0} (expected one of {})",
        ExampleTopic::ALL.map(|topic| topic.slug()).join(", ")
    )]
    UnknownTopic(String),
}
