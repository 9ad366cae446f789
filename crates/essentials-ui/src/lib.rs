//! Essentials UI Components
//!
//! Presentational Dioxus components for the core concepts page. Components
//! read the static tables from `essentials-core` and hold no state of their
//! own, apart from the selected tab in [`Examples`].

#![allow(non_snake_case)]

pub mod components;

pub use components::*;
