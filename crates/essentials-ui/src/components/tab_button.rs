//! Tab Button Component
//!
//! One entry of a tab menu. The selected tab carries the `active` class.

use dioxus::prelude::*;

/// Properties for the TabButton component
#[derive(Clone, PartialEq, Props)]
pub struct TabButtonProps {
    /// Whether this tab is the current selection
    #[props(default = false)]
    pub selected: bool,
    /// Handler called when the tab is clicked
    pub on_select: EventHandler<()>,
    /// Tab caption
    pub children: Element,
}

#[component]
pub fn TabButton(props: TabButtonProps) -> Element {
    let on_select = props.on_select;

    rsx! {
        li {
            button {
                class: if props.selected { "active" },
                onclick: move |_| on_select.call(()),
                {props.children}
            }
        }
    }
}
