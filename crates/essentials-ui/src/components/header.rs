//! Page header.

use dioxus::prelude::*;
use essentials_core::{HeaderContent, HEADER};

#[component]
pub fn Header() -> Element {
    let HeaderContent { title, tagline } = HEADER;

    rsx! {
        header {
            h1 { "{title}" }
            p { "{tagline}" }
        }
    }
}
