//! Examples Component
//!
//! A tab menu over [`ExampleTopic::ALL`]. Selecting a tab shows that topic's
//! title, description and code sample; until then a placeholder is shown.

use dioxus::prelude::*;
use essentials_core::ExampleTopic;

use super::{Section, TabButton};

/// Properties for the Examples component
#[derive(Clone, PartialEq, Props)]
pub struct ExamplesProps {
    /// Topic selected on first render
    #[props(default)]
    pub initial: Option<ExampleTopic>,
}

#[component]
pub fn Examples(props: ExamplesProps) -> Element {
    let initial = props.initial;
    let mut selected = use_signal(move || initial);

    let content = match selected() {
        Some(topic) => {
            let entry = topic.entry();
            rsx! {
                div { id: "tab-content",
                    h3 { "{entry.title}" }
                    p { "{entry.description}" }
                    pre {
                        code { "{entry.code}" }
                    }
                }
            }
        }
        None => rsx! {
            p { "Please select a topic." }
        },
    };

    rsx! {
        Section { title: "Examples", id: "examples",
            menu {
                for topic in ExampleTopic::ALL {
                    {
                        let slug = topic.slug();
                        let label = topic.label();
                        let is_selected = selected() == Some(topic);
                        rsx! {
                            TabButton {
                                key: "{slug}",
                                selected: is_selected,
                                on_select: move |_| {
                                    tracing::debug!(%topic, "example topic selected");
                                    selected.set(Some(topic));
                                },
                                "{label}"
                            }
                        }
                    }
                }
            }
            {content}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;
    use std::rc::Rc;

    use dioxus_core::{ElementId, Mutation};
    use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};

    use super::*;
    use crate::components::render_html;

    fn render(initial: Option<ExampleTopic>) -> String {
        render_html(Examples, ExamplesProps { initial })
    }

    #[test]
    fn placeholder_without_selection() {
        let html = render(None);
        assert!(html.contains("<h2>Examples</h2>"));
        assert!(html.contains("<p>Please select a topic.</p>"));
        assert!(!html.contains(r#"id="tab-content""#));
        assert_eq!(html.matches(r#"class="active""#).count(), 0);
    }

    #[test]
    fn one_tab_per_topic_in_order() {
        let html = render(None);
        let positions: Vec<usize> = ExampleTopic::ALL
            .iter()
            .map(|t| html.find(&format!(">{}</button>", t.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(html.matches("<li>").count(), ExampleTopic::ALL.len());
    }

    #[test]
    fn selected_topic_shows_entry() {
        for topic in ExampleTopic::ALL {
            let entry = topic.entry();
            let html = render(Some(topic));

            assert!(html.contains(r#"id="tab-content""#));
            assert!(html.contains(&format!("<h3>{}</h3>", entry.title)));
            assert!(html.contains(&format!("<p>{}</p>", entry.description)));
            assert!(!html.contains("Please select a topic."));
            assert_eq!(html.matches(r#"class="active""#).count(), 1);
            assert!(html.contains(&format!(r#"<button class="active">{}</button>"#, topic.label())));
        }
    }

    #[test]
    fn unselected_tabs_carry_no_class() {
        let html = render(Some(ExampleTopic::Rsx));
        assert!(html.contains("<button>Components</button>"));
        assert!(html.contains("<button>State</button>"));
        assert!(!html.contains(r#"class="""#));
    }

    /// Element ids of the click listeners, in tab order.
    fn tab_click_targets(dom: &mut VirtualDom) -> Vec<ElementId> {
        dom.rebuild_to_vec()
            .edits
            .iter()
            .filter_map(|edit| match edit {
                Mutation::NewEventListener { name, id } if &**name == "click" => Some(*id),
                _ => None,
            })
            .collect()
    }

    fn click(dom: &mut VirtualDom, target: ElementId) {
        let data = PlatformEventData::new(Box::new(SerializedMouseData::default()));
        let event = Event::new(Rc::new(data) as Rc<dyn Any>, true);
        dom.runtime().handle_event("click", event, target);
        dom.process_events();
        dom.render_immediate_to_vec();
    }

    #[test]
    fn clicking_a_tab_replaces_the_selection() {
        dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));

        let mut dom = VirtualDom::new_with_props(
            Examples,
            ExamplesProps {
                initial: Some(ExampleTopic::Components),
            },
        );
        let targets = tab_click_targets(&mut dom);
        assert_eq!(targets.len(), ExampleTopic::ALL.len());

        let before = dioxus_ssr::render(&dom);
        assert!(before.contains(r#"<button class="active">Components</button>"#));

        let props_tab = ExampleTopic::ALL
            .iter()
            .position(|topic| *topic == ExampleTopic::Props)
            .unwrap();
        click(&mut dom, targets[props_tab]);

        let after = dioxus_ssr::render(&dom);
        let entry = ExampleTopic::Props.entry();
        assert_eq!(after.matches(r#"class="active""#).count(), 1);
        assert!(after.contains(r#"<button class="active">Props</button>"#));
        assert!(after.contains("<button>Components</button>"));
        assert!(after.contains(&format!("<h3>{}</h3>", entry.title)));
        assert!(after.contains(&format!("<p>{}</p>", entry.description)));
        assert!(!after.contains(ExampleTopic::Components.entry().description));
    }
}
