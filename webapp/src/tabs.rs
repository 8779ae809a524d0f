use dioxus::prelude::*;

use crate::reveal::Reveal;
use site::{
    config::AdvantageTab,
    tabs::{TabSet, panel_id},
};

#[derive(Clone, PartialEq, Props)]
pub struct AdvantageTabsProps {
    tabs: &'static [AdvantageTab],
}

#[component]
pub fn AdvantageTabs(props: AdvantageTabsProps) -> Element {
    let tabs = props.tabs;
    let mut tab_set = use_signal(|| TabSet::new(tabs.iter().map(|tab| tab.id.clone()).collect()));

    let Some(active) = tab_set() else {
        return rsx! {};
    };

    rsx! {
        div { class: "tab-buttons",
            for tab in tabs.iter() {
                button {
                    key: "{tab.id}",
                    class: if active.is_active(&tab.id) { "tab-btn active" } else { "tab-btn" },
                    "data-tab": "{tab.id}",
                    onclick: move |_| {
                        tab_set.with_mut(|set| {
                            if let Some(set) = set {
                                set.activate(&tab.id);
                            }
                        });
                    },
                    "{tab.label}"
                }
            }
        }

        for tab in tabs.iter() {
            div {
                key: "{tab.id}",
                id: panel_id(&tab.id),
                class: if active.is_active(&tab.id) { "tab-content active" } else { "tab-content" },
                div { class: "advantage-grid",
                    for (index, card) in tab.cards.iter().enumerate() {
                        Reveal { key: "{index}", class: "advantage-card",
                            h3 { "{card.title}" }
                            p { "{card.text}" }
                        }
                    }
                }
            }
        }
    }
}
