//! Core concept records and the static table rendered as concept cards.

use serde::Serialize;

/// A single core concept shown as one card on the page.
///
/// Records are `const` data: they are built once into the binary and never
/// mutated. `title` doubles as the rendering key, so it must be unique within
/// a list (see [`titles_unique`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConceptItem {
    pub title: &'static str,
    pub description: &'static str,
    /// Optional glyph rendered above the title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}

impl ConceptItem {
    /// Create a concept without an icon
    pub const fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            icon: None,
        }
    }

    /// Attach an icon glyph
    pub const fn with_icon(self, icon: &'static str) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }
}

/// The concepts listed in the "Core Concepts" section, in display order.
pub const CORE_CONCEPTS: &[ConceptItem] = &[
    ConceptItem::new(
        "Components",
        "The core UI building block - compose the user interface by combining multiple components.",
    )
    .with_icon("\u{25A7}"),
    ConceptItem::new(
        "RSX",
        "Describe the markup of a component with the rsx! macro, checked by the compiler like any other Rust code.",
    )
    .with_icon("\u{276E}\u{276F}"),
    ConceptItem::new(
        "Props",
        "Make components configurable (and therefore reusable) by passing input data to them.",
    )
    .with_icon("\u{2699}"),
    ConceptItem::new(
        "State",
        "Signals hold data that, when changed, cause the component to re-render and the UI to update.",
    )
    .with_icon("\u{25CE}"),
];

const _: () = assert!(
    titles_unique(CORE_CONCEPTS),
    "CORE_CONCEPTS titles must be unique"
);

/// Returns true when no two items share a title.
pub const fn titles_unique(items: &[ConceptItem]) -> bool {
    let mut i = 0;
    while i < items.len() {
        let mut j = i + 1;
        while j < items.len() {
            if str_eq(items[i].title, items[j].title) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
