//! Page building blocks.

mod core_concept;
mod examples;
mod header;
mod section;
mod tab_button;

pub use core_concept::*;
pub use examples::*;
pub use header::*;
pub use section::*;
pub use tab_button::*;

/// Render a root component to HTML for assertions.
#[cfg(test)]
pub(crate) fn render_html<P: Clone + 'static, M: 'static>(
    root: impl dioxus::prelude::ComponentFunction<P, M>,
    props: P,
) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
