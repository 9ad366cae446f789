use dioxus::prelude::*;
use essentials_ui::{CoreConcepts, Examples, Header};

use crate::context::initial_topic;

/// Root application component.
///
/// Header first, then the core concepts and examples inside `main`.
#[component]
pub fn App() -> Element {
    rsx! {
        Header {}
        main {
            CoreConcepts {}
            Examples { initial: initial_topic() }
        }
    }
}
