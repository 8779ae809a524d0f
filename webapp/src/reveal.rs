use std::{cell::Cell, rc::Rc};

use dioxus::prelude::*;

use crate::common::dom::{element_top, use_window_listener, viewport_height};
use site::reveal::RevealSet;

// RevealContext
//
// shared by every Reveal region on the page.  regions claim a slot as they
// mount; the root re-evaluates all claimed slots on each window scroll
#[derive(Clone)]
struct RevealContext {
    set: Signal<RevealSet>,
    slots: Rc<Cell<usize>>,
    margin: f64,
}

impl RevealContext {
    fn claim(&self) -> usize {
        let slot = self.slots.get();
        self.slots.set(slot + 1);
        slot
    }

    fn evaluate(&self) {
        let Some(viewport) = viewport_height() else {
            return;
        };

        let slots = self.slots.get();
        let tops: Vec<Option<f64>> = (0..slots).map(|slot| element_top(&reveal_id(slot))).collect();

        // only write when something flips, scroll fires far too often otherwise
        let mut next = self.set.peek().clone();
        next.ensure_len(slots);

        if next.evaluate(&tops, viewport, self.margin) {
            let mut set = self.set;
            set.set(next);
        }
    }
}

fn reveal_id(slot: usize) -> String {
    format!("reveal-{slot}")
}

// installs the reveal context for everything below the calling component and
// evaluates once right after the first render
pub fn use_reveal_root(margin: f64) {
    let ctx = use_context_provider(|| RevealContext {
        set: Signal::new(RevealSet::default()),
        slots: Rc::new(Cell::new(0)),
        margin,
    });

    let on_scroll = ctx.clone();
    use_window_listener("scroll", move |_| on_scroll.evaluate());

    use_effect(move || ctx.evaluate());
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    #[props(into)]
    class: String,
    children: Element,
}

#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let ctx = use_context::<RevealContext>();
    let slot = use_hook(|| ctx.claim());

    let revealed = ctx.set.read().is_revealed(slot);
    let class = if revealed {
        format!("{} reveal revealed", props.class)
    } else {
        format!("{} reveal", props.class)
    };

    rsx! {
        div { id: reveal_id(slot), class: "{class}", {props.children} }
    }
}
