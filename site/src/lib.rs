// browser-independent state for the storefront page
//
// nothing in here touches the DOM; the webapp renders from these types and
// feeds events back into them
pub mod carousel;
pub mod config;
pub mod gallery;
pub mod lightbox;
pub mod nav;
pub mod registry;
pub mod reveal;
pub mod tabs;
