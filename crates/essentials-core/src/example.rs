//! Example topics shown as tabs in the "Examples" section.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DataError;

/// One tab in the examples section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExampleTopic {
    Components,
    Rsx,
    Props,
    State,
}

impl ExampleTopic {
    /// All topics, in tab order
    pub const ALL: [ExampleTopic; 4] = [
        ExampleTopic::Components,
        ExampleTopic::Rsx,
        ExampleTopic::Props,
        ExampleTopic::State,
    ];

    /// Caption shown on the tab button
    pub fn label(&self) -> &'static str {
        match self {
            ExampleTopic::Components => "Components",
            ExampleTopic::Rsx => "RSX",
            ExampleTopic::Props => "Props",
            ExampleTopic::State => "State",
        }
    }

    /// Lower-case identifier used on the command line and in JSON
    pub fn slug(&self) -> &'static str {
        match self {
            ExampleTopic::Components => "components",
            ExampleTopic::Rsx => "rsx",
            ExampleTopic::Props => "props",
            ExampleTopic::State => "state",
        }
    }

    /// The example content for this topic
    pub fn entry(&self) -> &'static ExampleEntry {
        match self {
            ExampleTopic::Components => &COMPONENTS_EXAMPLE,
            ExampleTopic::Rsx => &RSX_EXAMPLE,
            ExampleTopic::Props => &PROPS_EXAMPLE,
            ExampleTopic::State => &STATE_EXAMPLE,
        }
    }
}

impl fmt::Display for ExampleTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for ExampleTopic {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        ExampleTopic::ALL
            .into_iter()
            .find(|topic| topic.slug().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DataError::UnknownTopic(s.to_string()))
    }
}

/// Title, explanation and code sample for one topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExampleEntry {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

const COMPONENTS_EXAMPLE: ExampleEntry = ExampleEntry {
    title: "Components",
    description: "Components are the building blocks of Dioxus apps. A component is a function annotated with #[component] that returns an Element.",
    code: r#"#[component]
fn Welcome() -> Element {
    rsx! {
        h2 { "Welcome!" }
        p { "Let us get started with Dioxus!" }
    }
}"#,
};

const RSX_EXAMPLE: ExampleEntry = ExampleEntry {
    title: "RSX",
    description: "RSX is a macro-based syntax for describing element trees. It is expanded and type-checked at compile time.",
    code: r#"rsx! {
    div {
        h1 { "Welcome {user_name}" }
        p { "Time to learn Dioxus!" }
    }
}"#,
};

const PROPS_EXAMPLE: ExampleEntry = ExampleEntry {
    title: "Props",
    description: "Components accept typed props. Props are plain Rust structs deriving Props, or function arguments on a #[component].",
    code: r#"#[component]
fn Welcome(name: String) -> Element {
    rsx! {
        h2 { "Hello {name}" }
    }
}"#,
};

const STATE_EXAMPLE: ExampleEntry = ExampleEntry {
    title: "State",
    description: "Signals hold component state. Writing to a signal re-renders every component that reads it.",
    code: r#"#[component]
fn Counter() -> Element {
    let mut count = use_signal(|| 0);

    rsx! {
        button { onclick: move |_| count += 1, "Increment" }
        p { "Counter: {count}" }
    }
}"#,
};

/// Example content, one entry per topic in `ExampleTopic::ALL` order.
pub static EXAMPLES: [ExampleEntry; 4] = [
    COMPONENTS_EXAMPLE,
    RSX_EXAMPLE,
    PROPS_EXAMPLE,
    STATE_EXAMPLE,
];
