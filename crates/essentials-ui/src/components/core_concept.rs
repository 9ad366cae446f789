//! Core Concept Components
//!
//! `CoreConcepts` projects a list of [`ConceptItem`] records onto cards, one
//! `CoreConcept` per record, in list order.

use dioxus::prelude::*;
use essentials_core::{ConceptItem, CORE_CONCEPTS};

use super::Section;

/// A single concept card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ul {
///         CoreConcept { concept: CORE_CONCEPTS[0] }
///     }
/// }
/// ```
#[component]
pub fn CoreConcept(concept: ConceptItem) -> Element {
    rsx! {
        li { class: "concept-card",
            if let Some(icon) = concept.icon {
                span { class: "concept-icon", "{icon}" }
            }
            h3 { "{concept.title}" }
            p { "{concept.description}" }
        }
    }
}

/// Properties for the CoreConcepts component
#[derive(Clone, PartialEq, Props)]
pub struct CoreConceptsProps {
    /// Records to render, defaults to the built-in table
    #[props(default = CORE_CONCEPTS)]
    pub concepts: &'static [ConceptItem],
}

/// The "Core Concepts" section
///
/// Titles are used as keys, so they must be unique within `concepts`.
#[component]
pub fn CoreConcepts(props: CoreConceptsProps) -> Element {
    tracing::trace!(count = props.concepts.len(), "rendering core concepts");

    rsx! {
        Section { title: "Core Concepts", id: "core-concepts",
            ul {
                for concept in props.concepts.iter().copied() {
                    CoreConcept { key: "{concept.title}", concept: concept }
                }
            }
        }
    }
}
