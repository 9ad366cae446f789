//! Section Component
//!
//! A titled container used to group page content.

use dioxus::prelude::*;

/// Renders `title` as a heading above arbitrary child content.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Section { title: "Core Concepts", id: "core-concepts",
///         ul { ... }
///     }
/// }
/// ```
#[component]
pub fn Section(title: String, id: String, children: Element) -> Element {
    rsx! {
        section { id: "{id}",
            h2 { "{title}" }
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::render_html;

    fn Wrapped() -> Element {
        rsx! {
            Section { title: "Examples", id: "examples",
                p { "child content" }
            }
        }
    }

    #[test]
    fn section_wraps_children_under_title() {
        let html = render_html(Wrapped, ());
        assert!(html.starts_with("<section"));
        assert!(html.contains(r#"id="examples""#));

        let heading = html.find("<h2>Examples</h2>").expect("heading rendered");
        let child = html.find("<p>child content</p>").expect("child rendered");
        assert!(heading < child);
    }
}
