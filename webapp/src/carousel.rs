use dioxus::prelude::*;
use gloo_timers::callback::Interval;
use tracing::debug;

use crate::common::dom::resolve_url;
use site::{
    carousel::{SlideCollection, SwipeAction},
    config::{ProductConfig, SliderConfig},
    registry::SlideRef,
};

// a click on one slide image, as the standalone modal needs it
#[derive(Clone, Debug, PartialEq)]
pub struct SlideClick {
    pub source: SlideRef,
    pub src: String,
}

#[derive(Clone, PartialEq, Props)]
pub struct ProductSliderProps {
    slider_index: usize,
    product: &'static ProductConfig,
    settings: &'static SliderConfig,
    on_image_click: EventHandler<SlideClick>,
}

// ProductSlider
//
// one independent carousel: its own index, its own autoplay timer.  the timer
// lives in a signal, so re-arming replaces (and thereby clears) the old one
#[component]
pub fn ProductSlider(props: ProductSliderProps) -> Element {
    let slider_index = props.slider_index;
    let product = props.product;
    let threshold = props.settings.swipe_threshold;
    let autoplay_ms = props.settings.autoplay_ms;
    let on_image_click = props.on_image_click;

    let mut slides = use_signal(|| SlideCollection::new(product.slides.len()));
    let mut autoplay = use_signal(|| None::<Interval>);
    let mut touch_start = use_signal(|| 0.0_f64);

    let mut arm = move || {
        autoplay.set(Some(Interval::new(autoplay_ms, move || {
            slides.with_mut(|s| {
                if let Some(s) = s {
                    s.next();
                }
            });
        })));
    };

    let mut disarm = move || autoplay.set(None);

    let mut step = move |f: fn(&mut SlideCollection) -> usize| {
        slides.with_mut(|s| {
            if let Some(s) = s {
                f(s);
            }
        });
    };

    use_hook(move || {
        if slides.peek().is_some() {
            arm();
        } else {
            debug!("slider {slider_index} has no slides, not starting autoplay");
        }
    });

    let Some(current) = slides() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "product-slider",
            onmouseenter: move |_| disarm(),
            onmouseleave: move |_| arm(),
            ontouchstart: move |evt: TouchEvent| {
                if let Some(point) = evt.touches_changed().first() {
                    touch_start.set(point.screen_coordinates().x);
                }
                disarm();
            },
            ontouchend: move |evt: TouchEvent| {
                if let Some(point) = evt.touches_changed().first() {
                    let end = point.screen_coordinates().x;
                    if let Some(action) = SwipeAction::classify(touch_start(), end, threshold) {
                        slides.with_mut(|s| {
                            if let Some(s) = s {
                                s.swipe(action);
                            }
                        });
                    }
                }
                arm();
            },

            div { class: "slides",
                for (index, slide) in product.slides.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if current.is_active(index) { "slide active" } else { "slide" },
                        img {
                            class: "product-image",
                            src: "{slide.src}",
                            alt: "{slide.alt}",
                            "loading": "lazy",
                            onclick: move |_| {
                                on_image_click
                                    .call(SlideClick {
                                        source: SlideRef {
                                            slider: slider_index,
                                            slide: index,
                                        },
                                        src: resolve_url(&slide.src),
                                    });
                            },
                        }
                    }
                }
            }

            button {
                class: "slider-prev",
                onclick: move |_| step(SlideCollection::prev),
                "‹"
            }
            button {
                class: "slider-next",
                onclick: move |_| step(SlideCollection::next),
                "›"
            }

            div { class: "slider-dots",
                for index in 0..current.count() {
                    div {
                        key: "{index}",
                        class: if current.is_active(index) { "slider-dot active" } else { "slider-dot" },
                        onclick: move |_| {
                            slides.with_mut(|s| {
                                if let Some(s) = s {
                                    s.go_to(index as isize);
                                }
                            });
                        },
                    }
                }
            }
        }
    }
}
