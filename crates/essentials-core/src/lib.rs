//! Essentials Core Library
//!
//! Static data behind the core concepts page: the concept cards, the example
//! tabs and the page header. Everything here is `const` data compiled into the
//! binary; the UI crate only projects it onto components.

pub mod concept;
pub mod error;
pub mod example;

use serde::Serialize;

pub use concept::{titles_unique, ConceptItem, CORE_CONCEPTS};
pub use error::DataError;
pub use example::{ExampleEntry, ExampleTopic, EXAMPLES};

/// Text shown in the page header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeaderContent {
    pub title: &'static str,
    pub tagline: &'static str,
}

pub const HEADER: HeaderContent = HeaderContent {
    title: "Dioxus Essentials",
    tagline: "Fundamental Dioxus concepts you will need for almost any app you are going to build!",
};

/// Serialisable view of every static table, in render order
#[derive(Debug, Clone, Serialize)]
pub struct DataTable {
    pub header: HeaderContent,
    pub core_concepts: &'static [ConceptItem],
    pub examples: Vec<TopicExample>,
}

/// An example entry tagged with its topic
#[derive(Debug, Clone, Serialize)]
pub struct TopicExample {
    pub topic: ExampleTopic,
    #[serde(flatten)]
    pub entry: ExampleEntry,
}

impl DataTable {
    pub fn collect() -> Self {
        Self {
            header: HEADER,
            core_concepts: CORE_CONCEPTS,
            examples: ExampleTopic::ALL
                .into_iter()
                .map(|topic| TopicExample {
                    topic,
                    entry: *topic.entry(),
                })
                .collect(),
        }
    }
}
