#![allow(non_snake_case)]
use std::sync::LazyLock;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::{Level, error, info};

use site::config::{SiteConfig, parse_config};

mod common;

mod carousel;
mod gallery;
mod modal;
mod reveal;
mod tabs;

mod nav;

mod home;
use home::{Home, PageNotFound};

// the page content and tuning knobs, compiled into the binary
const SITE_TOML: &str = include_str!("../site.toml");

static SITE: LazyLock<Result<SiteConfig, String>> =
    LazyLock::new(|| parse_config(SITE_TOML).map_err(|err| format!("{err:#}")));

pub fn site_config() -> Result<&'static SiteConfig, &'static str> {
    match &*SITE {
        Ok(config) => Ok(config),
        Err(err) => Err(err.as_str()),
    }
}

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    match site_config() {
        Ok(config) => info!("loaded site config for {}", config.title),
        Err(err) => error!("site config is unusable: {err}"),
    }

    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> {}
    }
}
