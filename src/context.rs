//! Process-wide settings read by the page.
//!
//! The desktop launcher takes a plain `fn() -> Element` root, so settings
//! parsed from the command line are stored here before launch.

use std::sync::OnceLock;

use essentials_core::ExampleTopic;

static INITIAL_TOPIC: OnceLock<ExampleTopic> = OnceLock::new();

/// Record the example topic to select on first render.
///
/// Only the first call has an effect.
pub fn set_initial_topic(topic: ExampleTopic) {
    if INITIAL_TOPIC.set(topic).is_err() {
        tracing::warn!(%topic, "initial topic already set, ignoring");
    }
}

/// Topic selected on first render, if one was given on the command line.
pub fn initial_topic() -> Option<ExampleTopic> {
    INITIAL_TOPIC.get().copied()
}
