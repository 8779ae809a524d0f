use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, HtmlElement, HtmlMediaElement, KeyboardEvent, ScrollBehavior, ScrollToOptions, Window};

use site::{lightbox::LightboxHost, nav::scroll_destination};

pub const HEADER_ID: &str = "site-header";
pub const LIGHTBOX_MEDIA_ID: &str = "lightbox-media";

fn window() -> Option<Window> {
    web_sys::window()
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

// use_window_listener
//
// attaches a handler to the window for the lifetime of the calling component.
// the handler may touch the component's signals: it is detached in use_drop,
// before those signals go away
pub fn use_window_listener(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) {
    let listener = use_hook(move || {
        let closure = Rc::new(Closure::<dyn FnMut(web_sys::Event)>::new(handler));

        match window() {
            Some(window) => {
                if let Err(err) = window
                    .add_event_listener_with_callback(event, (*closure).as_ref().unchecked_ref())
                {
                    warn!("failed to attach {event} listener: {err:?}");
                }
            }
            None => debug!("no window, {event} listener not attached"),
        }

        closure
    });

    use_drop(move || {
        if let Some(window) = window() {
            if let Err(err) = window
                .remove_event_listener_with_callback(event, (*listener).as_ref().unchecked_ref())
            {
                warn!("failed to detach {event} listener: {err:?}");
            }
        }
    });
}

pub fn key_name(event: &web_sys::Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn viewport_height() -> Option<f64> {
    window()?.inner_height().ok()?.as_f64()
}

// viewport-relative top edge of an element, if it is mounted
pub fn element_top(id: &str) -> Option<f64> {
    let element = document()?.get_element_by_id(id)?;
    Some(element.get_bounding_client_rect().top())
}

// an img's src property is the url resolved against the page, which is what
// two renderings of the same picture have in common
pub fn resolve_url(src: &str) -> String {
    let base = window().and_then(|w| w.location().href().ok());

    match base.map(|base| web_sys::Url::new_with_base(src, &base)) {
        Some(Ok(url)) => url.href(),
        _ => src.to_owned(),
    }
}

// native smooth scroll to an in-page anchor, leaving room for the fixed header
pub fn scroll_to_anchor(id: &str) {
    let (Some(window), Some(document)) = (window(), document()) else {
        return;
    };

    let Some(target) = document.get_element_by_id(id) else {
        debug!("anchor #{id} has no target");
        return;
    };

    let header_height = document
        .get_element_by_id(HEADER_ID)
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map_or(0.0, |header| f64::from(header.offset_height()));

    let top = scroll_destination(
        target.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        header_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn set_body_overflow(value: &str) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };

    if let Err(err) = body.style().set_property("overflow", value) {
        warn!("failed to set body overflow: {err:?}");
    }
}

// PageHost
//
// the lightbox's view of the page: the body's scroll and whatever video is
// mounted in the given media container
pub struct PageHost {
    media_container_id: &'static str,
}

impl PageHost {
    pub fn lightbox() -> Self {
        PageHost {
            media_container_id: LIGHTBOX_MEDIA_ID,
        }
    }
}

impl LightboxHost for PageHost {
    fn lock_scroll(&mut self) {
        set_body_overflow("hidden");
    }

    fn unlock_scroll(&mut self) {
        set_body_overflow("auto");
    }

    fn pause_video(&mut self) {
        let Some(document) = document() else {
            return;
        };

        let selector = format!("#{} video", self.media_container_id);
        let video = match document.query_selector(&selector) {
            Ok(Some(element)) => element.dyn_into::<HtmlMediaElement>().ok(),
            Ok(None) => None,
            Err(err) => {
                warn!("bad media selector {selector}: {err:?}");
                None
            }
        };

        if let Some(video) = video {
            if let Err(err) = video.pause() {
                warn!("failed to pause lightbox video: {err:?}");
            }
        }
    }
}
